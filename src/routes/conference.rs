use actix_web::{post, web, HttpResponse};

use crate::forms::conference::ConferenceSubmission;
use crate::forms::{self, Dependencies};

#[post("/conferenceemail")]
pub async fn conference_email_handler(
    deps: web::Data<Dependencies>,
    form: web::Json<ConferenceSubmission>,
) -> HttpResponse {
    forms::submit(deps.get_ref(), &form.into_inner())
        .await
        .into_response()
}
