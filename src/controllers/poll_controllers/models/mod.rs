use serde::{Deserialize, Serialize};

use crate::models::choice_models::Choice;
use crate::utils::expiry::ExpireAt;

#[derive(Deserialize, Debug)]
pub struct CreatePollRequest {
    pub title: Option<String>,
    #[serde(rename = "expireAt")]
    pub expire_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PollResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "expireAt")]
    pub expire_at: ExpireAt,
}

#[derive(Serialize, Debug)]
pub struct PollResultResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "expireAt")]
    pub expire_at: ExpireAt,
    /// None until the poll has at least one choice.
    pub result: Option<WinningChoice>,
}

#[derive(Serialize, Debug)]
pub struct WinningChoice {
    pub title: String,
    pub votes: u32,
}

impl From<&Choice> for WinningChoice {
    fn from(choice: &Choice) -> Self {
        Self {
            title: choice.title.clone(),
            votes: choice.votes,
        }
    }
}
