use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use chrono::Utc;
use log::{error, info, warn};
use serde_json::json;

use crate::db::DocumentStore;
use crate::errors::SubmissionError;
use crate::mail::Mailer;
use crate::models::email::NotificationPair;
use crate::models::response::StatusResponse;

pub mod conference;
pub mod contact;
pub mod journal;

/// What to do when writing the submission record fails before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFailurePolicy {
    /// Fail the whole submission without sending anything.
    Abort,
    /// Log the write failure and notify anyway.
    Proceed,
}

/// Everything that distinguishes one form kind from another: which fields
/// must be present, the response copy, and which collections (if any) the
/// kind writes to.
pub struct FormSpec {
    pub kind: &'static str,
    pub required: &'static [&'static str],
    pub success_message: &'static str,
    pub failure_message: &'static str,
    pub validation_message: &'static str,
    pub record_collection: Option<&'static str>,
    pub audit_collection: Option<&'static str>,
    pub storage_failure: StorageFailurePolicy,
}

/// A typed form body that can flow through the submission pipeline.
pub trait FormPayload {
    fn spec(&self) -> &'static FormSpec;

    /// Every field of the form, wire name first, in declaration order.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    /// Renders the acknowledgement and the operator alert. Only called on
    /// payloads that already passed the required-field check.
    fn notifications(&self, operator: &str) -> NotificationPair;
}

/// Shared collaborators, injected once at startup.
pub struct Dependencies {
    pub mailer: Arc<dyn Mailer>,
    pub store: Arc<dyn DocumentStore>,
    pub operator_address: String,
}

/// Uniform result of a submission: a status code and the kind's copy.
pub struct FormOutcome {
    status: StatusCode,
    body: StatusResponse,
}

impl FormOutcome {
    fn new(status: StatusCode, success: bool, message: &str) -> Self {
        Self {
            status,
            body: StatusResponse {
                success,
                message: message.to_string(),
            },
        }
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self.body)
    }
}

/// Names of the required fields that are absent or empty.
pub fn missing_fields<P: FormPayload>(payload: &P) -> Vec<&'static str> {
    let fields = payload.fields();
    payload
        .spec()
        .required
        .iter()
        .filter(|name| {
            fields
                .iter()
                .find(|(field, _)| field == *name)
                .map_or(true, |(_, value)| value.is_empty())
        })
        .copied()
        .collect()
}

fn validate<P: FormPayload>(payload: &P) -> Result<(), SubmissionError> {
    let missing = missing_fields(payload);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SubmissionError::ValidationError(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Runs one submission through the whole pipeline: validate, persist the
/// record where the kind asks for one, render the notification pair, send
/// both messages in order, append the audit entry. Validation failures
/// short-circuit before any external call.
pub async fn submit<P: FormPayload>(deps: &Dependencies, payload: &P) -> FormOutcome {
    let spec = payload.spec();

    if let Err(e) = validate(payload) {
        warn!("{} submission rejected: {}", spec.kind, e);
        return FormOutcome::new(StatusCode::BAD_REQUEST, false, spec.validation_message);
    }

    match process(deps, payload, spec).await {
        Ok(()) => {
            info!("{} submission processed", spec.kind);
            audit(deps, spec, None).await;
            FormOutcome::new(StatusCode::OK, true, spec.success_message)
        }
        Err(e) => {
            error!("{} submission failed: {}", spec.kind, e);
            audit(deps, spec, Some(&e)).await;
            FormOutcome::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                spec.failure_message,
            )
        }
    }
}

async fn process<P: FormPayload>(
    deps: &Dependencies,
    payload: &P,
    spec: &FormSpec,
) -> Result<(), SubmissionError> {
    if let Some(collection) = spec.record_collection {
        if let Err(e) = deps.store.add_record(collection, record_body(payload)).await {
            match spec.storage_failure {
                StorageFailurePolicy::Abort => return Err(e),
                StorageFailurePolicy::Proceed => {
                    warn!("{} record write failed, notifying anyway: {}", spec.kind, e)
                }
            }
        }
    }

    let pair = payload.notifications(&deps.operator_address);
    deps.mailer.send(&pair.submitter).await?;
    deps.mailer.send(&pair.operator).await?;

    Ok(())
}

/// The stored document: every payload field plus the server-side timestamp.
fn record_body<P: FormPayload>(payload: &P) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    for (name, value) in payload.fields() {
        body.insert(name.to_string(), serde_json::Value::String(value.to_string()));
    }
    body.insert("submitted_at".to_string(), json!(Utc::now()));
    serde_json::Value::Object(body)
}

/// Appends the dispatch outcome to the kind's audit collection. A failed
/// audit write is logged and never alters the outcome already computed.
async fn audit(deps: &Dependencies, spec: &FormSpec, failure: Option<&SubmissionError>) {
    let collection = match spec.audit_collection {
        Some(collection) => collection,
        None => return,
    };

    let entry = match failure {
        None => json!({
            "form": spec.kind,
            "status": "sent",
            "logged_at": Utc::now(),
        }),
        Some(e) => json!({
            "form": spec.kind,
            "status": "failed",
            "error": e.to_string(),
            "logged_at": Utc::now(),
        }),
    };

    if let Err(e) = deps.store.add_record(collection, entry).await {
        error!("Audit log write failed for {} form: {}", spec.kind, e);
    }
}
