use actix_web::{post, web, HttpResponse};

use crate::forms::contact::ContactMessage;
use crate::forms::{self, Dependencies};

#[post("/contact")]
pub async fn contact_handler(
    deps: web::Data<Dependencies>,
    form: web::Json<ContactMessage>,
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
    async fn valid_message_stores_one_record_and_sends_two_emails() {
        let (log, deps) = harness();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(deps))
                .service(contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_json(json!({
                "name": "Ana",
                "email": "ana@x.com",
                "subject": "Hi",
                "message": "Test",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Contact form submitted successfully!"})
        );
        assert_eq!(log.records("contacts").len(), 1);
        assert_eq!(log.sends().len(), 2);
    }

    #[actix_web::test]
    async fn missing_message_field_is_a_client_error() {
        let (log, deps) = harness();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(deps))
                .service(contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_json(json!({
                "name": "Ana",
                "email": "ana@x.com",
                "subject": "Hi",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "All fields are required."})
        );
        assert!(log.all().is_empty());
    }
}
