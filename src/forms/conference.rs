use serde::Deserialize;

use crate::forms::{FormPayload, FormSpec, StorageFailurePolicy};
use crate::models::email::{EmailMessage, NotificationPair};

pub static CONFERENCE_FORM: FormSpec = FormSpec {
    kind: "conference",
    required: &["title", "organizer", "email"],
    success_message: "Emails sent successfully!",
    failure_message: "Error sending email.",
    validation_message: "Required fields are missing.",
    // Conference records are captured upstream; the audit trail is the only
    // write this kind performs server-side.
    record_collection: None,
    audit_collection: Some("conference_email_logs"),
    storage_failure: StorageFailurePolicy::Abort,
};

/// Conference submission. Only title, organizer and email gate acceptance;
/// the remaining fields are optional but rendered into the operator alert.
#[derive(Debug, Deserialize)]
pub struct ConferenceSubmission {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "contactPerson", default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub description: String,
}

impl FormPayload for ConferenceSubmission {
    fn spec(&self) -> &'static FormSpec {
        &CONFERENCE_FORM
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", &self.title),
            ("organizer", &self.organizer),
            ("venue", &self.venue),
            ("date", &self.date),
            ("contactPerson", &self.contact_person),
            ("email", &self.email),
            ("country", &self.country),
            ("language", &self.language),
            ("description", &self.description),
        ]
    }

    fn notifications(&self, operator: &str) -> NotificationPair {
        NotificationPair {
            submitter: EmailMessage {
                to: self.email.clone(),
                subject: "Thank You for Your Conference Submission".to_string(),
                html_body: "<h2>Thank You for Your Submission!</h2>\
                     <p>We have received your conference submission. Our team will review it \
                     and get back to you shortly.</p>"
                    .to_string(),
            },
            operator: EmailMessage {
                to: operator.to_string(),
                subject: "New Conference Submission Received".to_string(),
                html_body: format!(
                    "<h2>New Conference Submission</h2>\
                     <p><strong>Title:</strong> {}</p>\
                     <p><strong>Organizer:</strong> {}</p>\
                     <p><strong>Venue:</strong> {}</p>\
                     <p><strong>Date:</strong> {}</p>\
                     <p><strong>Contact Person:</strong> {}</p>\
                     <p><strong>Email:</strong> {}</p>\
                     <p><strong>Country:</strong> {}</p>\
                     <p><strong>Language:</strong> {}</p>\
                     <p><strong>Description:</strong> {}</p>\
                     <p>Please review this submission.</p>",
                    self.title,
                    self.organizer,
                    self.venue,
                    self.date,
                    self.contact_person,
                    self.email,
                    self.country,
                    self.language,
                    self.description
                ),
            },
        }
    }
}
