pub mod app;
pub mod config;
pub mod logging;
pub mod seed;
pub mod state;
pub mod users;
