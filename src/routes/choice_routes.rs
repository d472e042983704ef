use axum::{routing::post, Router};

use crate::controllers::choice_controllers::{cast_vote, create_choice};
use crate::state::AppState;

pub fn choice_routes() -> Router<AppState> {
    Router::new()
        .route("/choice", post(create_choice::create_choice))
        .route("/choice/:choiceId/vote", post(cast_vote::cast_vote))
}
