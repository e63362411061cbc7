//! MoveMate application core
//!
//! Wires the shipment repository, the view-state controller and the display
//! configuration into one [`MoveMateApp`] the rendering host drives.
//!
//! # Example
//!
//! ```rust
//! use movemate::MoveMateApp;
//! use app_state::{NavItem, Screen};
//!
//! let app = MoveMateApp::default();
//! app.controller().select_nav(NavItem::Calculate);
//! app.controller().request_calculate();
//! assert_eq!(app.controller().current_screen(), Screen::Confirmation);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::Context;
use app_core::{DisplayConfig, ShipmentRepository, ShipmentSource};
use app_state::{CalculationDraft, ViewState, ViewStateController};
use app_ui::{BottomNavigation, HeaderState, ScreenModel};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub use app_core;
pub use app_state;
pub use app_ui;

/// The application core: data, state and configuration
pub struct MoveMateApp {
    repository: ShipmentRepository,
    controller: Arc<ViewStateController>,
    config: DisplayConfig,
}

impl Default for MoveMateApp {
    fn default() -> Self {
        Self::with_repository(ShipmentRepository::sample(), DisplayConfig::default())
    }
}

impl MoveMateApp {
    /// Build the app over the sample dataset
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: DisplayConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid display configuration")?;
        Ok(Self::with_repository(ShipmentRepository::sample(), config))
    }

    /// Build the app from a JSON configuration document
    pub fn from_config_json(json: &str) -> anyhow::Result<Self> {
        let config = DisplayConfig::from_json(json).context("failed to load display configuration")?;
        Ok(Self::with_repository(ShipmentRepository::sample(), config))
    }

    /// Build the app over an explicit repository
    ///
    /// An out-of-range initial history tab falls back to the first tab.
    pub fn with_repository(repository: ShipmentRepository, config: DisplayConfig) -> Self {
        let initial_tab = config.initial_group().unwrap_or_default();
        let draft = repository
            .shipment_categories()
            .into_iter()
            .find(|c| c.preselected)
            .map(|c| CalculationDraft::with_category(c.name))
            .unwrap_or_default();
        let initial = ViewState::default()
            .with_history_tab(initial_tab)
            .with_calculation(draft);

        let controller = ViewStateController::with_state(Arc::new(repository.clone()), initial);

        tracing::info!(
            shipments = repository.shipments().len(),
            history_tab = %initial_tab,
            "MoveMate core initialized"
        );

        Self {
            repository,
            controller: Arc::new(controller),
            config,
        }
    }

    /// Read-only shipment data
    pub fn repository(&self) -> &ShipmentRepository {
        &self.repository
    }

    /// The view-state controller
    pub fn controller(&self) -> &Arc<ViewStateController> {
        &self.controller
    }

    /// Display configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Model of the current screen
    pub fn screen_model(&self) -> ScreenModel {
        ScreenModel::build(&self.controller, &self.config)
    }

    /// Header for the current state
    pub fn header(&self) -> HeaderState {
        HeaderState::for_state(&self.controller.snapshot())
    }

    /// Bottom navigation bar for the current state
    pub fn bottom_navigation(&self) -> BottomNavigation {
        BottomNavigation::for_state(&self.controller.snapshot())
    }
}

/// Install a `tracing` subscriber for the host process
///
/// Honours `RUST_LOG`, defaulting to `info`. Calling it more than once, or
/// after the host installed its own subscriber, is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
