pub mod api;
pub mod args;
pub mod block_time;
pub mod checks;
pub mod config;
pub mod network;
pub mod suite;
