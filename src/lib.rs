pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod services;
