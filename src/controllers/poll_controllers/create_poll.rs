use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::controllers::poll_controllers::models::{CreatePollRequest, PollResponse};
use crate::db::polls::PollStore;
use crate::models::poll_models::Poll;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::expiry::ExpireAt;
use crate::utils::validation;

pub async fn create_poll(
    State(state): State<AppState>,
    Json(payload): Json<CreatePollRequest>,
) -> AppResult<(StatusCode, Json<PollResponse>)> {
    let title = validation::non_empty_title(payload.title.as_deref())?;

    // An omitted or empty expireAt falls back to the default poll lifetime.
    let expire_at = match payload.expire_at.as_deref() {
        Some(raw) if !raw.is_empty() => ExpireAt::parse(raw)?,
        _ => ExpireAt::default_from(Utc::now()),
    };

    let new_poll = Poll {
        id: ObjectId::new(),
        title,
        expire_at,
    };

    PollStore::new(&state.db).insert(&new_poll).await?;

    let poll_res = PollResponse {
        id: new_poll.id.to_hex(),
        title: new_poll.title,
        expire_at: new_poll.expire_at,
    };

    Ok((StatusCode::CREATED, Json(poll_res)))
}
