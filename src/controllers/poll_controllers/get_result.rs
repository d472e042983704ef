use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::{PollResultResponse, WinningChoice};
use crate::db::{choices::ChoiceStore, polls::PollStore};
use crate::models::choice_models::Choice;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation;

pub async fn get_result(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResultResponse>> {
    let obj_id = validation::parse_object_id(&poll_id, "Poll")?;

    let poll = PollStore::new(&state.db)
        .find_by_id(obj_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let choices = ChoiceStore::new(&state.db).find_for_poll(poll.id).await?;

    let result = PollResultResponse {
        id: poll.id.to_hex(),
        title: poll.title,
        expire_at: poll.expire_at,
        result: select_winner(&choices).map(WinningChoice::from),
    };

    Ok(Json(result))
}

/// Highest vote count wins; equal counts fall back to the smallest id, which
/// for ObjectIds is the earliest-created choice. None when the poll has no
/// choices yet.
fn select_winner(choices: &[Choice]) -> Option<&Choice> {
    choices
        .iter()
        .min_by(|a, b| b.votes.cmp(&a.votes).then(a.id.cmp(&b.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn choice(seed: u8, title: &str, votes: u32) -> Choice {
        Choice {
            id: ObjectId::from_bytes([seed; 12]),
            title: title.to_string(),
            poll_id: ObjectId::from_bytes([0xaa; 12]),
            votes,
        }
    }

    #[test]
    fn picks_the_highest_voted_choice() {
        let choices = vec![
            choice(1, "A", 3),
            choice(2, "B", 7),
            choice(3, "C", 2),
        ];

        let winner = select_winner(&choices).unwrap();
        assert_eq!(winner.title, "B");
        assert_eq!(winner.votes, 7);
    }

    #[test]
    fn tie_goes_to_the_earliest_created_choice() {
        let choices = vec![
            choice(9, "late", 5),
            choice(1, "early", 5),
            choice(4, "middle", 5),
        ];

        assert_eq!(select_winner(&choices).unwrap().title, "early");
    }

    #[test]
    fn no_choices_means_no_winner() {
        assert!(select_winner(&[]).is_none());
    }

    #[test]
    fn storage_order_does_not_matter() {
        let mut choices = vec![
            choice(1, "A", 3),
            choice(2, "B", 7),
            choice(3, "C", 2),
        ];
        choices.reverse();

        assert_eq!(select_winner(&choices).unwrap().title, "B");
    }
}
