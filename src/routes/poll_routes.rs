use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{create_poll, get_choices, get_result, polls};
use crate::state::AppState;

pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/poll", post(create_poll::create_poll).get(polls::get_all_polls))
        .route("/poll/:pollId/choice", get(get_choices::get_choices))
        .route("/poll/:pollId/result", get(get_result::get_result))
}
