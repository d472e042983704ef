use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::controllers::choice_controllers::models::{ChoiceResponse, CreateChoiceRequest};
use crate::db::{choices::ChoiceStore, polls::PollStore};
use crate::models::choice_models::Choice;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation;

pub async fn create_choice(
    State(state): State<AppState>,
    Json(payload): Json<CreateChoiceRequest>,
) -> AppResult<(StatusCode, Json<ChoiceResponse>)> {
    let poll_id_raw = validation::required_id(payload.poll_id.as_deref(), "pollId")?;
    let poll_obj_id = validation::parse_object_id(&poll_id_raw, "Poll")?;

    let poll = PollStore::new(&state.db)
        .find_by_id(poll_obj_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    if poll.expire_at.is_expired(Utc::now()) {
        return Err(AppError::Forbidden(
            "Poll is expired and no longer accepts choices".to_string(),
        ));
    }

    let title = validation::non_empty_title(payload.title.as_deref())?;

    let choice_store = ChoiceStore::new(&state.db);

    if choice_store.title_exists(poll.id, &title).await? {
        return Err(AppError::Conflict(
            "A choice with this title already exists for this poll".to_string(),
        ));
    }

    let new_choice = Choice {
        id: ObjectId::new(),
        title,
        poll_id: poll.id,
        votes: 0,
    };

    choice_store.insert(&new_choice).await?;

    Ok((StatusCode::CREATED, Json(ChoiceResponse::from(&new_choice))))
}
