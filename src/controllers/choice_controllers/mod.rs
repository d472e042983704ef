pub mod cast_vote;
pub mod create_choice;
pub mod models;
