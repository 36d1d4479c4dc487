/// A rendered message ready for the mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// The two messages produced for every accepted submission: an
/// acknowledgement for the submitter and an alert for the operator inbox.
#[derive(Debug)]
pub struct NotificationPair {
    pub submitter: EmailMessage,
    pub operator: EmailMessage,
}
