//! Core application logic for MoveMate
//!
//! This crate contains the shipment data model, the static sample dataset,
//! read-only repository queries, and the display fallbacks used when
//! optional shipment fields are absent.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod display;
pub mod models;
pub mod repository;
pub mod sample_data;

pub use config::{ConfigError, DisplayConfig};
pub use models::{Shipment, ShipmentCategory, ShipmentStatus, VehicleType};
pub use repository::{search, RepositoryError, ShipmentRepository, ShipmentSource, StatusGroup};

#[cfg(any(test, feature = "mock"))]
pub use repository::MockShipmentSource;
