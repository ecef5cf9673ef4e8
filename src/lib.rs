pub mod api;
pub mod bangs;
pub mod config;
pub mod engine;
pub mod observability;
pub mod settings;
pub mod store;
