use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// Reference to a stored upload, served back under /files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    pub filename: String,
    pub path: String,
}

/// A submitted document, tagged with sender (emisor) and receiver (receptor)
/// carreras. Field names follow the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: ObjectId,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub receptor: String,
    pub emisor: String,
    #[serde(rename = "motivoArchivo")]
    pub motivo_archivo: String,
    pub archivo: Option<FileRef>,
    #[serde(rename = "txtArchivo")]
    pub txt_archivo: Option<String>,
    pub leido: bool,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Entity for Document {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }
}
