use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, Bson};

use common::{
    entities::document::Document,
    error::Result,
    repository::{Repository, RepositoryObject},
};

#[derive(Clone)]
pub struct DocumentRepo(RepositoryObject<Document>);

impl DocumentRepo {
    pub fn new(repo: impl Repository<Document> + Send + Sync + 'static) -> Self {
        Self(Arc::new(repo))
    }

    pub async fn create(&self, document: &Document) -> Result<bool> {
        self.0.insert(document).await
    }

    pub async fn find_all(&self) -> Result<Vec<Document>> {
        self.0.find_all(0, u32::MAX).await
    }

    pub async fn find_by_receptor(&self, carrera: &str) -> Result<Vec<Document>> {
        self.0
            .find_many("receptor", &Bson::String(carrera.to_string()))
            .await
    }

    pub async fn find_by_emisor(&self, carrera: &str) -> Result<Vec<Document>> {
        self.0
            .find_many("emisor", &Bson::String(carrera.to_string()))
            .await
    }

    /// Single targeted update of the read flag, returning the updated
    /// document.
    pub async fn set_leido(&self, id: ObjectId, leido: bool) -> Result<Option<Document>> {
        self.0
            .update("id", &Bson::ObjectId(id), doc! {"leido": leido})
            .await
    }
}
