use serde::{Deserialize, Serialize};

use crate::models::choice_models::Choice;

#[derive(Deserialize, Debug)]
pub struct CreateChoiceRequest {
    pub title: Option<String>,
    #[serde(rename = "pollId")]
    pub poll_id: Option<String>,
}

/// Wire view of a choice. The stored vote count stays internal; only the
/// result endpoint reports tallies.
#[derive(Serialize, Debug)]
pub struct ChoiceResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "pollId")]
    pub poll_id: String,
}

impl From<&Choice> for ChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id.to_hex(),
            title: choice.title.clone(),
            poll_id: choice.poll_id.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn choice_listing_never_exposes_the_vote_count() {
        let choice = Choice {
            id: ObjectId::new(),
            title: "JavaScript".to_string(),
            poll_id: ObjectId::new(),
            votes: 487,
        };

        let value = serde_json::to_value(ChoiceResponse::from(&choice)).unwrap();

        assert!(value.get("votes").is_none());
        assert_eq!(value["title"], "JavaScript");
    }
}
