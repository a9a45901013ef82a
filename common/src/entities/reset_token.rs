use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// Single-use credential binding an email to a reset request.
///
/// Expiry is an explicit timestamp checked on every validation rather than a
/// store-side TTL sweep, so a token can never be read as valid after its
/// deadline. Lifecycle: created, then either consumed (deleted on password
/// change) or expired (deleted on first sighting past the deadline).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetToken {
    pub id: ObjectId,
    pub token: String,
    pub email: String,
    pub created: i64,
}

impl ResetToken {
    pub const TTL_SECONDS: i64 = 3600;

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.created + Self::TTL_SECONDS
    }
}

impl Entity for ResetToken {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }
}
