use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::error;

use super::{Entity, Repository};

/// In-memory stand-in for `MongoRepository`, backed by a vector of bson
/// values.
pub struct TestRepository<T> {
    _t: std::marker::PhantomData<T>,
    pub db: Mutex<Vec<Bson>>,
}

impl<T> TestRepository<T> {
    pub fn new() -> Self {
        Self {
            _t: std::marker::PhantomData,
            db: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for TestRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for TestRepository<T>
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync,
{
    async fn insert(&self, item: &T) -> error::Result<bool> {
        let mut db = self.db.lock().unwrap();

        let contains = db
            .iter()
            .any(|x| x.as_document().unwrap().get_object_id("id").unwrap() == item.id());
        if !contains {
            db.push(bson::to_bson(&item).unwrap());
        }
        Ok(!contains)
    }

    async fn find(&self, field: &str, value: &Bson) -> error::Result<Option<T>> {
        let db = self.db.lock().unwrap();
        Ok(db
            .iter()
            .find(|x| x.as_document().unwrap().get(field) == Some(value))
            .cloned()
            .map(|x| bson::from_bson(x).unwrap()))
    }

    async fn delete(&self, field: &str, value: &Bson) -> error::Result<Option<T>> {
        let mut db = self.db.lock().unwrap();

        let pos = db
            .iter()
            .position(|x| x.as_document().unwrap().get(field) == Some(value));

        Ok(pos.map(|pos| bson::from_bson(db.remove(pos)).unwrap()))
    }

    async fn update(
        &self,
        field: &str,
        value: &Bson,
        update: Document,
    ) -> error::Result<Option<T>> {
        let mut db = self.db.lock().unwrap();

        let Some(entry) = db
            .iter_mut()
            .find(|x| x.as_document().unwrap().get(field) == Some(value))
        else {
            return Ok(None);
        };

        let doc = entry.as_document_mut().unwrap();
        for (key, val) in update {
            doc.insert(key, val);
        }

        Ok(Some(bson::from_bson(entry.clone()).unwrap()))
    }

    async fn find_many(&self, field: &str, value: &Bson) -> error::Result<Vec<T>> {
        let db = self.db.lock().unwrap();
        Ok(db
            .iter()
            .filter(|x| x.as_document().unwrap().get(field) == Some(value))
            .map(|x| bson::from_bson(x.clone()).unwrap())
            .collect())
    }

    async fn find_all(&self, skip: u32, limit: u32) -> error::Result<Vec<T>> {
        let db = self.db.lock().unwrap();
        Ok(db
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|x| bson::from_bson(x.clone()).unwrap())
            .collect())
    }
}
