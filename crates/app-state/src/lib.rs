//! Application state management for MoveMate
//!
//! This crate owns the view-state of the application: which screen is shown,
//! which bottom-navigation item and history tab are selected, the tracking
//! search, and the calculation form. All changes go through
//! [`controller::ViewStateController`], which notifies subscribers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calculate;
pub mod controller;
pub mod view_state;

pub use calculate::CalculationDraft;
pub use controller::{StateEvent, ViewStateController};
pub use view_state::{NavItem, Screen, StateError, Transition, ViewState};
