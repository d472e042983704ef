use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::models::poll_models::Poll;
use crate::utils::error::AppResult;

const COLLECTION: &str = "polls";

/// Collection-scoped handle for polls. Handlers build one from the shared
/// state per request instead of reaching for the database directly.
pub struct PollStore {
    collection: Collection<Poll>,
}

impl PollStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Poll>(COLLECTION),
        }
    }

    pub async fn insert(&self, poll: &Poll) -> AppResult<()> {
        self.collection.insert_one(poll).await?;
        Ok(())
    }

    pub async fn find_all(&self) -> AppResult<Vec<Poll>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut polls = Vec::new();
        while let Some(poll) = cursor.try_next().await? {
            polls.push(poll);
        }

        Ok(polls)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Poll>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }
}
