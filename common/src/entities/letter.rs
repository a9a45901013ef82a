use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    pub id: ObjectId,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Entity for Letter {
    fn id(&self) -> ObjectId {
        self.id.clone()
    }
}
