//! Presentation model for MoveMate
//!
//! This crate turns view-state and shipment data into plain, serializable
//! models for the rendering host. Styling, layout and animation stay with
//! the host.
//!
//! # Modules
//!
//! - [`navigation`] - Bottom navigation bar and header
//! - [`history_tabs`] - Shipment history tabs with badge counts
//! - [`screens`] - Per-screen view models
//!
//! # Example
//!
//! ```rust
//! use app_core::{DisplayConfig, ShipmentRepository};
//! use app_state::{NavItem, ViewStateController};
//! use app_ui::{HeaderState, ScreenModel};
//! use std::sync::Arc;
//!
//! let controller = ViewStateController::new(Arc::new(ShipmentRepository::sample()));
//! controller.select_nav(NavItem::Shipment);
//!
//! let header = HeaderState::for_state(&controller.snapshot());
//! assert_eq!(header.title, "Shipment history");
//!
//! let model = ScreenModel::build(&controller, &DisplayConfig::default());
//! assert!(matches!(model, ScreenModel::ShipmentHistory(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod history_tabs;
pub mod navigation;
pub mod screens;

// Re-export commonly used types
pub use history_tabs::{history_tabs, HistoryTabBadge};

pub use navigation::{BottomNavItem, BottomNavigation, HeaderState, NavItemPresentation};

pub use screens::{
    CalculateModel, CategoryChip, ConfirmationModel, HistoryModel, ScreenModel,
    SearchResultItem, ShipmentCard, TrackingModel,
};
