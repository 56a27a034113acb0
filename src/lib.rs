//! Bookshelf Web
//!
//! A client-side book browser built with Leptos.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod theme;

pub use app::App;
pub use bootstrap::start;
pub use config::AppConfig;
pub use error::{Error, Result};
