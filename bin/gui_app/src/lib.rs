pub mod helpers;
pub mod navbar;
pub mod hero;
pub mod show_row;
pub mod footer;

pub mod app;
