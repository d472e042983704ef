use axum::{extract::State, Json};

use crate::controllers::poll_controllers::models::PollResponse;
use crate::db::polls::PollStore;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_all_polls(State(state): State<AppState>) -> AppResult<Json<Vec<PollResponse>>> {
    let polls = PollStore::new(&state.db).find_all().await?;

    let poll_responses: Vec<PollResponse> = polls
        .into_iter()
        .map(|poll| PollResponse {
            id: poll.id.to_hex(),
            title: poll.title,
            expire_at: poll.expire_at,
        })
        .collect();

    Ok(Json(poll_responses))
}
