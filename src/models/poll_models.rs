use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::expiry::ExpireAt;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(rename = "expireAt")]
    pub expire_at: ExpireAt,
}
