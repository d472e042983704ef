use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::models::choice_models::Choice;
use crate::utils::error::AppResult;

const COLLECTION: &str = "choices";

/// Collection-scoped handle for vote choices.
pub struct ChoiceStore {
    collection: Collection<Choice>,
}

impl ChoiceStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Choice>(COLLECTION),
        }
    }

    pub async fn insert(&self, choice: &Choice) -> AppResult<()> {
        self.collection.insert_one(choice).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Choice>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_for_poll(&self, poll_id: ObjectId) -> AppResult<Vec<Choice>> {
        let mut cursor = self.collection.find(doc! { "pollId": poll_id }).await?;

        let mut choices = Vec::new();
        while let Some(choice) = cursor.try_next().await? {
            choices.push(choice);
        }

        Ok(choices)
    }

    /// Duplicate-title probe, scoped to one poll.
    pub async fn title_exists(&self, poll_id: ObjectId, title: &str) -> AppResult<bool> {
        let existing = self
            .collection
            .find_one(doc! { "pollId": poll_id, "title": title })
            .await?;

        Ok(existing.is_some())
    }

    /// Single conditional update issued to the store. Concurrent votes on the
    /// same choice serialize inside MongoDB instead of racing a
    /// read-modify-write in the handler. Returns false when the choice no
    /// longer matches.
    pub async fn increment_votes(&self, id: ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "votes": 1 } })
            .await?;

        Ok(result.matched_count > 0)
    }
}
