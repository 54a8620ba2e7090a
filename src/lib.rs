pub mod api;
pub mod config;
pub mod error;
pub mod graph;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod services;
pub mod storage;
pub mod telemetry;
pub mod validation;
