//! Core library for the ClimaMate weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and response normalization
//! - Page state for the landing and home views (fetching, loading, notifications)
//! - Pure presentation helpers: suggestions, icons, greeting, trivia, rendering
//!
//! It is used by `climamate-cli`, but carries no terminal-specific code.

pub mod config;
pub mod error;
pub mod greeting;
pub mod icon;
pub mod model;
pub mod page;
pub mod provider;
pub mod render;
pub mod suggestion;
pub mod theme;
pub mod trivia;

pub use config::{ApiKey, Config};
pub use error::FetchError;
pub use model::{ForecastEntry, ForecastSnapshot, LocationQuery, WeatherSnapshot};
pub use page::{FetchOutcome, Fetched, Notification, NotificationLevel, Page, ViewKind};
pub use provider::{WeatherProvider, provider_from_config};
pub use theme::Appearance;
