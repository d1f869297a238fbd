//! Gospel Daily - today's gospel reading, translated and cached
//!
//! Scrapes the daily reading page, optionally machine-translates it, keeps
//! the result in a time-boxed cache and serves it over HTTP and chat.

pub mod api;
pub mod bot;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod resolver;
pub mod service;
pub mod source;
pub mod translate;

pub use api::AppState;
pub use bot::ChatBot;
pub use config::Config;
pub use error::{FetchError, GospelError};
pub use models::{GospelContent, GospelRecord};
pub use resolver::GospelResolver;
pub use service::GospelService;
