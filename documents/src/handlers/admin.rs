use actix_web::{
    get, post,
    web::{self, Json},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use common::{entities::admin::PublicAdmin, error::Result};

use crate::{
    repositories::admin::AdminRepo,
    service::auth::{AuthService, RegisterAdmin},
};

#[get("/api/admins")]
pub async fn get_admins(admins: web::Data<AdminRepo>) -> Result<Json<Vec<PublicAdmin>>> {
    let admins = admins.find_all().await?;
    Ok(Json(admins.into_iter().map(PublicAdmin::from).collect()))
}

#[post("/api/register/admins")]
pub async fn post_admin(
    auth: web::Data<AuthService>,
    Json(data): web::Json<RegisterAdmin>,
) -> Result<HttpResponse> {
    let admin = auth.register(data).await?;
    Ok(HttpResponse::Created().json(admin))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

#[post("/api/check-email")]
pub async fn check_email(
    auth: web::Data<AuthService>,
    Json(data): web::Json<CheckEmailRequest>,
) -> Result<HttpResponse> {
    if auth.is_email_available(&data.email).await? {
        return Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Email disponible"})));
    }
    Ok(HttpResponse::Conflict()
        .json(serde_json::json!({"message": "El email ya está registrado"})))
}
