use std::{fs::File, io::Write, path::Path};

use actix_multipart::Multipart;
use anyhow::anyhow;
use futures_util::StreamExt;
use mongodb::bson::oid::ObjectId;

use common::{
    entities::document::{Document, FileRef},
    error::{AddCode, Result},
};

use crate::repositories::document::DocumentRepo;

pub struct DocumentService {
    documents: DocumentRepo,
    files_dir: String,
}

impl DocumentService {
    pub fn new(documents: DocumentRepo, files_dir: String) -> Self {
        Self {
            documents,
            files_dir,
        }
    }

    pub async fn submit(&self, mut payload: Multipart) -> Result<Document> {
        let mut nombre = None;
        let mut apellido = None;
        let mut dni = None;
        let mut receptor = None;
        let mut emisor = None;
        let mut motivo_archivo = None;
        let mut txt_archivo = None;
        let mut archivo = None;

        while let Some(item) = payload.next().await {
            let mut field =
                item.map_err(|err| anyhow!("Error leyendo el formulario: {}", err).code(400))?;

            let content_disposition = field.content_disposition();
            let name = content_disposition.get_name().unwrap_or("").to_string();
            let filename = content_disposition
                .get_filename()
                .unwrap_or("")
                .to_string();

            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk
                    .map_err(|err| anyhow!("Error leyendo el formulario: {}", err).code(400))?;
                data.extend_from_slice(&chunk);
            }

            if name == "archivo" {
                // An empty file part means no attachment was selected.
                if !filename.is_empty() && !data.is_empty() {
                    archivo = Some(self.store_file(&filename, &data)?);
                }
                continue;
            }

            let value = String::from_utf8(data)
                .map_err(|_| anyhow!("Campo no válido: {}", name).code(400))?;

            match name.as_str() {
                "nombre" => nombre = Some(value),
                "apellido" => apellido = Some(value),
                "dni" => dni = Some(value),
                "receptor" => receptor = Some(value),
                "emisor" => emisor = Some(value),
                "motivoArchivo" => motivo_archivo = Some(value),
                "txtArchivo" => txt_archivo = Some(value),
                _ => {}
            }
        }

        let document = Document {
            id: ObjectId::new(),
            nombre: required(nombre, "nombre")?,
            apellido: required(apellido, "apellido")?,
            dni: required(dni, "dni")?,
            receptor: required(receptor, "receptor")?,
            emisor: required(emisor, "emisor")?,
            motivo_archivo: required(motivo_archivo, "motivoArchivo")?,
            archivo,
            txt_archivo,
            leido: false,
            created_at: chrono::Utc::now().timestamp(),
        };

        self.documents.create(&document).await?;
        Ok(document)
    }

    pub async fn list(&self) -> Result<Vec<Document>> {
        self.documents.find_all().await
    }

    pub async fn set_read(&self, id: &str, leido: bool) -> Result<Document> {
        let id = ObjectId::parse_str(id)
            .map_err(|_| anyhow!("Documento no encontrado").code(404))?;

        let Some(updated) = self.documents.set_leido(id, leido).await? else {
            return Err(anyhow!("Documento no encontrado").code(404));
        };
        Ok(updated)
    }

    /// Stored names are disambiguated by timestamp, keeping the original
    /// extension.
    fn store_file(&self, original: &str, data: &[u8]) -> Result<FileRef> {
        let ext = Path::new(original)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let filename = format!("{}{}", chrono::Utc::now().timestamp_millis(), ext);
        let path = format!("{}/{}", self.files_dir, filename);

        std::fs::create_dir_all(&self.files_dir)?;
        let mut file = File::create(&path)?;
        file.write_all(data)?;

        Ok(FileRef { filename, path })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("Falta el campo obligatorio: {}", name).code(400)),
    }
}
