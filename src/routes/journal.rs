use actix_web::{post, web, HttpResponse};

use crate::forms::journal::JournalSubmission;
use crate::forms::{self, Dependencies};

#[post("/send-email")]
pub async fn send_email_handler(
    deps: web::Data<Dependencies>,
    form: web::Json<JournalSubmission>,
) -> HttpResponse {
    forms::submit(deps.get_ref(), &form.into_inner())
        .await
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::harness;
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn blank_journal_name_is_rejected_with_no_sends() {
        let (log, deps) = harness();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(deps))
                .service(send_email_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/send-email")
            .set_json(json!({
                "journalName": "",
                "title": "T",
                "name": "N",
                "email": "e@x.com",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "All fields are required."})
        );
        assert!(log.sends().is_empty());
    }

    #[actix_web::test]
    async fn valid_submission_reports_success() {
        let (log, deps) = harness();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(deps))
                .service(send_email_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/send-email")
            .set_json(json!({
                "journalName": "AJET",
                "title": "Adaptive Learning",
                "name": "Ana",
                "email": "ana@x.com",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Emails sent successfully!"})
        );
        assert_eq!(log.sends().len(), 2);
    }
}
