/// Authenticated SP-API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces of the resource clients
pub mod interfaces;
/// Background order fetch glue
pub mod jobs;
/// Retry helper for SP-API calls made by jobs
pub mod retry;
/// Resource clients
pub mod services;
/// Settings record of a seller account
pub mod settings;
