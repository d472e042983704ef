pub mod choice_controllers;
pub mod poll_controllers;
