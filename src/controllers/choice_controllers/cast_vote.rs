use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::db::{choices::ChoiceStore, polls::PollStore, votes::VoteStore};
use crate::models::vote_record_models::VoteRecord;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation;

pub async fn cast_vote(
    Path(choice_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    let choice_obj_id = validation::parse_object_id(&choice_id, "Choice")?;

    let choice_store = ChoiceStore::new(&state.db);

    let choice = choice_store
        .find_by_id(choice_obj_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Choice not found".to_string()))?;

    let poll = PollStore::new(&state.db)
        .find_by_id(choice.poll_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    if poll.expire_at.is_expired(Utc::now()) {
        return Err(AppError::Forbidden(
            "Poll is expired. Voting is not allowed".to_string(),
        ));
    }

    // The increment is a single $inc against the store, so concurrent votes
    // on the same choice all land.
    if !choice_store.increment_votes(choice.id).await? {
        return Err(AppError::NotFound("Choice not found".to_string()));
    }

    let vote = VoteRecord {
        id: ObjectId::new(),
        choice_id: choice.id,
        cast_at: Utc::now(),
    };

    VoteStore::new(&state.db).insert(&vote).await?;

    Ok(StatusCode::OK)
}
