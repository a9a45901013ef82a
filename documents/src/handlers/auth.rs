use actix_web::{
    get, post,
    web::{self, Json},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use common::error::Result;

use crate::service::auth::{AuthService, Login, LoginResponse};

#[post("/api/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    Json(login): web::Json<Login>,
) -> Result<Json<LoginResponse>> {
    Ok(Json(auth.login(&login).await?))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

#[post("/api/reset-password")]
pub async fn reset_password(
    auth: web::Data<AuthService>,
    Json(data): web::Json<ResetRequest>,
) -> Result<HttpResponse> {
    auth.request_reset(&data.email).await?;
    Ok(HttpResponse::Ok().body("Se ha enviado un correo con el enlace de restablecimiento"))
}

#[get("/api/reset-password/{token}")]
pub async fn validate_reset(
    auth: web::Data<AuthService>,
    token: web::Path<String>,
) -> Result<HttpResponse> {
    if auth.validate_token(&token).await? {
        return Ok(HttpResponse::Ok().body("Token válido"));
    }
    Ok(HttpResponse::Unauthorized().body("Token inválido o expirado"))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewPassword {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[post("/api/new-password")]
pub async fn new_password(
    auth: web::Data<AuthService>,
    Json(data): web::Json<NewPassword>,
) -> Result<HttpResponse> {
    auth.reset_password(&data.token, &data.new_password).await?;
    Ok(HttpResponse::Ok().body("Contraseña actualizada"))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use actix_web::test::{self, init_service};
    use common::repository::test_repository::TestRepository;
    use mail::TestMailer;

    use crate::{
        create_app, create_test_app,
        repositories::{admin::AdminRepo, document::DocumentRepo, token::TokenRepo},
        service::auth::{Login, LoginResponse, RegisterAdmin},
    };

    use super::{NewPassword, ResetRequest};

    #[actix_web::test]
    async fn fresh_admin_logs_in_with_empty_documents() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/register/admins")
            .set_json(&RegisterAdmin {
                carrera: "CS".to_string(),
                admin: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(&Login {
                admin: "alice".to_string(),
                password: "p1".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let login: LoginResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(login.carrera, "CS");
        assert!(login.received_documents.is_empty());
        assert!(login.sent_documents.is_empty());
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let mut app = init_service(create_test_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/register/admins")
            .set_json(&RegisterAdmin {
                carrera: "CS".to_string(),
                admin: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(&Login {
                admin: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn reset_for_unknown_email_is_not_found() {
        let mailer = Arc::new(TestMailer::new());
        let token_repo = TokenRepo::new(TestRepository::new());
        let mut app = init_service(create_app(
            AdminRepo::new(TestRepository::new()),
            DocumentRepo::new(TestRepository::new()),
            token_repo.clone(),
            mailer.clone(),
            "target/test-files".to_string(),
        ))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reset-password")
            .set_json(&ResetRequest {
                email: "nadie@x.com".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 404);

        assert!(mailer.sent.lock().unwrap().is_empty());
        assert!(token_repo
            .delete_by_email("nadie@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[actix_web::test]
    async fn full_reset_flow_over_http() {
        let mailer = Arc::new(TestMailer::new());
        let mut app = init_service(create_app(
            AdminRepo::new(TestRepository::new()),
            DocumentRepo::new(TestRepository::new()),
            TokenRepo::new(TestRepository::new()),
            mailer.clone(),
            "target/test-files".to_string(),
        ))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/register/admins")
            .set_json(&RegisterAdmin {
                carrera: "CS".to_string(),
                admin: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/reset-password")
            .set_json(&ResetRequest {
                email: "a@x.com".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let token = {
            let sent = mailer.sent.lock().unwrap();
            assert_eq!(sent.len(), 1);
            let message = &sent[0].message;
            let start = message.rfind('/').unwrap() + 1;
            message[start..]
                .split_whitespace()
                .next()
                .unwrap()
                .to_string()
        };

        let req = test::TestRequest::get()
            .uri(&format!("/api/reset-password/{}", token))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::post()
            .uri("/api/new-password")
            .set_json(&NewPassword {
                token: token.clone(),
                new_password: "p2".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);

        // the consumed token is gone
        let req = test::TestRequest::get()
            .uri(&format!("/api/reset-password/{}", token))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(&Login {
                admin: "alice".to_string(),
                password: "p2".to_string(),
            })
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
