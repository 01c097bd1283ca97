pub mod app;
pub mod client;
pub mod codec;
pub mod config;
pub mod coordinator;
pub mod model;
