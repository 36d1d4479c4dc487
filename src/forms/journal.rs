use serde::Deserialize;

use crate::forms::{FormPayload, FormSpec, StorageFailurePolicy};
use crate::models::email::{EmailMessage, NotificationPair};

pub static JOURNAL_FORM: FormSpec = FormSpec {
    kind: "journal",
    required: &["journalName", "title", "name", "email"],
    success_message: "Emails sent successfully!",
    failure_message: "Error sending email.",
    validation_message: "All fields are required.",
    record_collection: None,
    audit_collection: None,
    storage_failure: StorageFailurePolicy::Abort,
};

/// Journal article submission. Absent keys deserialize to empty strings so
/// a missing field and a blank field are rejected the same way.
#[derive(Debug, Deserialize)]
pub struct JournalSubmission {
    #[serde(rename = "journalName", default)]
    pub journal_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl FormPayload for JournalSubmission {
    fn spec(&self) -> &'static FormSpec {
        &JOURNAL_FORM
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("journalName", &self.journal_name),
            ("title", &self.title),
            ("name", &self.name),
            ("email", &self.email),
        ]
    }

    fn notifications(&self, operator: &str) -> NotificationPair {
        NotificationPair {
            submitter: EmailMessage {
                to: self.email.clone(),
                subject: "Thank You for Your Submission".to_string(),
                html_body: "<h2>Thank You for Your Submission!</h2>\
                     <p>We have received your journal submission. Our team will review it \
                     and get back to you shortly.</p>"
                    .to_string(),
            },
            operator: EmailMessage {
                to: operator.to_string(),
                subject: "New Journal Submission Received".to_string(),
                html_body: format!(
                    "<h2>New Journal Submission</h2>\
                     <p><strong>Journal Name:</strong> {}</p>\
                     <p><strong>Title:</strong> {}</p>\
                     <p><strong>Submitted by:</strong> {}</p>\
                     <p><strong>User Email:</strong> {}</p>\
                     <p>Please review this submission.</p>",
                    self.journal_name, self.title, self.name, self.email
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::missing_fields;
    use serde_json::json;

    #[test]
    fn absent_keys_deserialize_to_empty_fields() {
        let payload: JournalSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(
            missing_fields(&payload),
            vec!["journalName", "title", "name", "email"]
        );
    }

    #[test]
    fn complete_payload_passes_the_required_check() {
        let payload: JournalSubmission = serde_json::from_value(json!({
            "journalName": "AJET",
            "title": "T",
            "name": "N",
            "email": "n@x.com",
        }))
        .unwrap();
        assert!(missing_fields(&payload).is_empty());
    }

    #[test]
    fn operator_alert_lists_every_field() {
        let payload: JournalSubmission = serde_json::from_value(json!({
            "journalName": "AJET",
            "title": "Adaptive Learning",
            "name": "Ana",
            "email": "ana@x.com",
        }))
        .unwrap();

        let pair = payload.notifications("editor@aju.example");

        assert_eq!(pair.submitter.to, "ana@x.com");
        assert_eq!(pair.submitter.subject, "Thank You for Your Submission");

        assert_eq!(pair.operator.to, "editor@aju.example");
        assert_eq!(pair.operator.subject, "New Journal Submission Received");
        for value in ["AJET", "Adaptive Learning", "Ana", "ana@x.com"] {
            assert!(pair.operator.html_body.contains(value));
        }
    }
}
