pub mod create_poll;
pub mod get_choices;
pub mod get_result;
pub mod models;
pub mod polls;
