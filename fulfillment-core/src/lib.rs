//! Core library for the weather intent fulfillment handler.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The intent event and dialog-action response wire types
//! - Abstraction over the weather provider, with the OpenWeather implementation
//! - The fulfillment handler itself
//!
//! It is used by `fulfillment-cli`, but can also be embedded in other
//! binaries or services hosting the bot webhook.

pub mod config;
pub mod event;
pub mod handler;
pub mod model;
pub mod provider;
pub mod response;

pub use config::Config;
pub use event::IntentEvent;
pub use handler::WeatherFulfillmentHandler;
pub use model::WeatherReading;
pub use provider::{ProviderError, WeatherProvider};
pub use response::{FulfillmentResponse, FulfillmentState};
