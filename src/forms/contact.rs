use serde::Deserialize;

use crate::forms::{FormPayload, FormSpec, StorageFailurePolicy};
use crate::models::email::{EmailMessage, NotificationPair};

pub static CONTACT_FORM: FormSpec = FormSpec {
    kind: "contact",
    required: &["name", "email", "subject", "message"],
    success_message: "Contact form submitted successfully!",
    failure_message: "Internal server error.",
    validation_message: "All fields are required.",
    record_collection: Some("contacts"),
    audit_collection: Some("contact_email_logs"),
    // A contact message that cannot be recorded is not acknowledged either.
    storage_failure: StorageFailurePolicy::Abort,
};

#[derive(Debug, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl FormPayload for ContactMessage {
    fn spec(&self) -> &'static FormSpec {
        &CONTACT_FORM
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }

    fn notifications(&self, operator: &str) -> NotificationPair {
        NotificationPair {
            submitter: EmailMessage {
                to: self.email.clone(),
                subject: "Thank You for Contacting Us".to_string(),
                html_body: "<h2>Thank You for Reaching Out!</h2>\
                     <p>We have received your message and will get back to you shortly.</p>"
                    .to_string(),
            },
            operator: EmailMessage {
                to: operator.to_string(),
                subject: "New Contact Form Message".to_string(),
                html_body: format!(
                    "<h2>New Contact Form Message</h2>\
                     <p><strong>Name:</strong> {}</p>\
                     <p><strong>Email:</strong> {}</p>\
                     <p><strong>Subject:</strong> {}</p>\
                     <p><strong>Message:</strong> {}</p>\
                     <p>Please follow up on this enquiry.</p>",
                    self.name, self.email, self.subject, self.message
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
    fn every_field_is_required() {
        let payload: ContactMessage = serde_json::from_value(json!({
            "name": "Ana",
            "email": "",
            "subject": "Hi",
        }))
        .unwrap();
        assert_eq!(missing_fields(&payload), vec!["email", "message"]);
    }

    #[test]
    fn operator_alert_carries_the_message_body() {
        let payload: ContactMessage = serde_json::from_value(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "subject": "Hi",
            "message": "Test",
        }))
        .unwrap();

        let pair = payload.notifications("editor@aju.example");

        assert_eq!(pair.submitter.to, "ana@x.com");
        assert_eq!(pair.operator.to, "editor@aju.example");
        assert_eq!(pair.operator.subject, "New Contact Form Message");
        assert!(pair.operator.html_body.contains("Test"));
        assert!(pair.operator.html_body.contains("ana@x.com"));
    }
}
