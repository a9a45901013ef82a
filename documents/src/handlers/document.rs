use actix_multipart::Multipart;
use actix_web::{
    get, patch, post,
    web::{self, Json},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use common::{entities::document::Document, error::Result};

use crate::service::document::DocumentService;

#[post("/api/registrar")]
pub async fn register_document(
    service: web::Data<DocumentService>,
    payload: Multipart,
) -> Result<HttpResponse> {
    service.submit(payload).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({"message": "Documento enviado"})))
}

#[get("/api/documents")]
pub async fn get_documents(service: web::Data<DocumentService>) -> Result<Json<Vec<Document>>> {
    Ok(Json(service.list().await?))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchDocumentRequest {
    pub leido: bool,
}

#[patch("/api/documents/{id}")]
pub async fn patch_document(
    service: web::Data<DocumentService>,
    id: web::Path<String>,
    Json(data): web::Json<PatchDocumentRequest>,
) -> Result<Json<Document>> {
    Ok(Json(service.set_read(&id, data.leido).await?))
}
