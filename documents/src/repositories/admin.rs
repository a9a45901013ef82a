use std::sync::Arc;

use mongodb::bson::{doc, Bson};

use common::{
    entities::admin::Admin,
    error::Result,
    repository::{Repository, RepositoryObject},
};

#[derive(Clone)]
pub struct AdminRepo(RepositoryObject<Admin>);

impl AdminRepo {
    pub fn new(repo: impl Repository<Admin> + Send + Sync + 'static) -> Self {
        Self(Arc::new(repo))
    }

    /// Returns false when the email is already registered. The check is
    /// application-level, not a unique index.
    pub async fn create(&self, admin: &Admin) -> Result<bool> {
        if self.find_by_email(&admin.email).await?.is_some() {
            return Ok(false);
        }
        self.0.insert(admin).await
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<Admin>> {
        self.0.find("admin", &Bson::String(login.to_string())).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.0.find("email", &Bson::String(email.to_string())).await
    }

    pub async fn find_all(&self) -> Result<Vec<Admin>> {
        self.0.find_all(0, u32::MAX).await
    }

    pub async fn set_password(
        &self,
        email: &str,
        password: String,
        salt: String,
    ) -> Result<Option<Admin>> {
        self.0
            .update(
                "email",
                &Bson::String(email.to_string()),
                doc! {"password": password, "salt": salt},
            )
            .await
    }
}
