use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// One staff account, scoped to a single carrera. The stored password is
/// the hex sha256 of plaintext + salt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: ObjectId,
    pub carrera: String,
    pub admin: String,
    pub email: String,
    pub password: String,
    pub salt: String,
}

impl Entity for Admin {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }
}

/// Projection without credential material, safe to return over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicAdmin {
    pub id: ObjectId,
    pub carrera: String,
    pub admin: String,
    pub email: String,
}

impl From<Admin> for PublicAdmin {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            carrera: admin.carrera,
            admin: admin.admin,
            email: admin.email,
        }
    }
}
