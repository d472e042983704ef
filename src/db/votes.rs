use mongodb::{Collection, Database};

use crate::models::vote_record_models::VoteRecord;
use crate::utils::error::AppResult;

const COLLECTION: &str = "votes";

/// Append-only audit trail of cast votes. The authoritative tally lives on
/// the choice document.
pub struct VoteStore {
    collection: Collection<VoteRecord>,
}

impl VoteStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<VoteRecord>(COLLECTION),
        }
    }

    pub async fn insert(&self, vote: &VoteRecord) -> AppResult<()> {
        self.collection.insert_one(vote).await?;
        Ok(())
    }
}
