pub mod config;
pub mod rows;
pub mod view_state;
pub mod display;

pub mod app;
