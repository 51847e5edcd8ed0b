//! Client-side convenience layer for the analytics engine.
//!
//! The engine does all numerical work behind one unary RPC. This crate
//! assembles the request messages, names the operation, ships the bytes and
//! unpacks the typed reply, surfacing engine failures as [`DqError`].

pub mod analytics;
pub mod client;
pub mod cmanalytics;
pub mod cranalytics;
pub mod data;
pub mod datetime;
pub mod error;
pub mod fianalytics;
pub mod fxanalytics;
pub mod irmarket;
pub mod market;
pub mod settings;
pub mod transport;

pub use client::AnalyticsClient;
pub use error::{DqError, Result};
pub use settings::EngineSettings;
pub use transport::{Engine, GrpcEngine};
