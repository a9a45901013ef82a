use std::sync::Arc;

use mongodb::bson::Bson;

use common::{
    entities::reset_token::ResetToken,
    error::Result,
    repository::{Repository, RepositoryObject},
};

#[derive(Clone)]
pub struct TokenRepo(RepositoryObject<ResetToken>);

impl TokenRepo {
    pub fn new(repo: impl Repository<ResetToken> + Send + Sync + 'static) -> Self {
        Self(Arc::new(repo))
    }

    pub async fn create(&self, token: &ResetToken) -> Result<bool> {
        self.0.insert(token).await
    }

    pub async fn find(&self, token: &str) -> Result<Option<ResetToken>> {
        self.0.find("token", &Bson::String(token.to_string())).await
    }

    /// Removes and returns the token in one store call, so it can never be
    /// consumed twice.
    pub async fn consume(&self, token: &str) -> Result<Option<ResetToken>> {
        self.0
            .delete("token", &Bson::String(token.to_string()))
            .await
    }

    /// Drops the outstanding token for an email, if any. A new reset request
    /// supersedes the previous one.
    pub async fn delete_by_email(&self, email: &str) -> Result<Option<ResetToken>> {
        self.0
            .delete("email", &Bson::String(email.to_string()))
            .await
    }
}
