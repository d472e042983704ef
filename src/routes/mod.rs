pub mod choice_routes;
pub mod poll_routes;
