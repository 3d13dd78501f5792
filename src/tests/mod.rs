#![warn(clippy::all, clippy::pedantic)]

pub mod components_tests;
pub mod scheduler_tests;
