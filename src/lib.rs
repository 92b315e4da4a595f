pub mod config;
pub mod github;
pub mod http;
pub mod manifest;
pub mod sanitize;
pub mod sync;
