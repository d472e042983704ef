use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VoteRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(rename = "choiceId")]
    pub choice_id: ObjectId,

    #[serde(rename = "castAt")]
    pub cast_at: DateTime<Utc>,
}
