//! Backend for cheerboard, a small appreciation-board service. Boards are
//! created with a shareable join code and a secret view token; contributors
//! attach colored comments, and the view token renders the whole board.

pub mod api;
pub mod boards;
pub mod bootstrap;
pub mod config;
pub mod database;
pub mod telemetry;
pub mod utils;
