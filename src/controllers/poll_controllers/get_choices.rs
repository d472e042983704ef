use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::choice_controllers::models::ChoiceResponse;
use crate::db::{choices::ChoiceStore, polls::PollStore};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation;

pub async fn get_choices(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChoiceResponse>>> {
    let obj_id = validation::parse_object_id(&poll_id, "Poll")?;

    let poll = PollStore::new(&state.db)
        .find_by_id(obj_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let choices = ChoiceStore::new(&state.db).find_for_poll(poll.id).await?;

    // ChoiceResponse carries no vote count; tallies only surface in the
    // result view.
    Ok(Json(choices.iter().map(ChoiceResponse::from).collect()))
}
