//! Screen view models
//!
//! Everything a renderer needs to paint the current screen, with optional
//! fields already resolved to display strings.

use app_core::display::{amount_label, delivery_details, display_name, format_amount, route_summary};
use app_core::repository::filter_by_status_group;
use app_core::{DisplayConfig, Shipment, ShipmentSource, VehicleType};
use app_state::{CalculationDraft, Screen, ViewStateController};
use serde::{Deserialize, Serialize};

use crate::history_tabs::{history_tabs, HistoryTabBadge};

// =============================================================================
// Shipment Presentations
// =============================================================================

/// A shipment as shown on the history screen and tracking overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCard {
    /// Shipment id
    pub id: String,
    /// Title (name or fallback)
    pub title: String,
    /// Delivery blurb
    pub details: String,
    /// Tracking number
    pub tracking_number: String,
    /// Origin
    pub from: String,
    /// Destination
    pub to: String,
    /// Status label
    pub status_label: String,
    /// Status colour
    pub status_color: String,
    /// Formatted price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Display date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Estimated delivery window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

impl ShipmentCard {
    /// Resolve a shipment for display
    pub fn new(shipment: &Shipment, config: &DisplayConfig) -> Self {
        Self {
            id: shipment.id().to_string(),
            title: display_name(shipment, config).to_string(),
            details: delivery_details(shipment),
            tracking_number: shipment.tracking_number().to_string(),
            from: shipment.from().to_string(),
            to: shipment.to().to_string(),
            status_label: shipment.status().label().to_string(),
            status_color: shipment.status().color().to_string(),
            amount: amount_label(shipment, config),
            date: shipment.date().map(str::to_string),
            estimated_delivery: shipment.estimated_delivery().map(str::to_string),
        }
    }
}

/// A row of the tracking search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Shipment id
    pub id: String,
    /// Title (name or fallback)
    pub title: String,
    /// `#tracking • from → to`
    pub route: String,
}

impl SearchResultItem {
    /// Resolve a shipment for the result list
    pub fn new(shipment: &Shipment, config: &DisplayConfig) -> Self {
        Self {
            id: shipment.id().to_string(),
            title: display_name(shipment, config).to_string(),
            route: route_summary(shipment),
        }
    }
}

// =============================================================================
// Screen Models
// =============================================================================

/// Tracking screen contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum TrackingModel {
    /// Default content: the shipment in transit and vehicle choices
    Overview {
        /// Shipment currently tracked
        current: Option<ShipmentCard>,
        /// Vehicle types offered
        vehicle_types: Vec<VehicleType>,
    },
    /// Search mode, shown while the search field has focus
    Search {
        /// Search text
        query: String,
        /// Matching shipments
        results: Vec<SearchResultItem>,
        /// Recent queries, offered while the query is empty
        recent_searches: Vec<String>,
        /// Message shown when nothing matches
        empty_message: Option<String>,
    },
}

/// Shipment history screen contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryModel {
    /// Tab bar
    pub tabs: Vec<HistoryTabBadge>,
    /// Shipments of the selected tab
    pub shipments: Vec<ShipmentCard>,
}

/// A goods category chip on the calculation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChip {
    /// Category name
    pub name: String,
    /// Whether it is selected
    pub selected: bool,
}

/// Calculation screen contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateModel {
    /// Form contents
    pub draft: CalculationDraft,
    /// Category chips
    pub categories: Vec<CategoryChip>,
}

/// Confirmation screen contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationModel {
    /// Formatted estimated amount
    pub amount: String,
}

/// Model of whichever screen is current
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "model", rename_all = "kebab-case")]
pub enum ScreenModel {
    /// Tracking screen
    Tracking(TrackingModel),
    /// Shipment history screen
    ShipmentHistory(HistoryModel),
    /// Calculation screen
    Calculate(CalculateModel),
    /// Confirmation screen
    Confirmation(ConfirmationModel),
}

impl ScreenModel {
    /// Build the model for the controller's current screen
    ///
    /// All data comes from the controller's shipment source, so badge counts
    /// and listed shipments always describe the same collection.
    pub fn build(controller: &ViewStateController, config: &DisplayConfig) -> Self {
        let state = controller.snapshot();
        let source = controller.source();

        match state.screen {
            Screen::Tracking if state.search_focused => {
                let results: Vec<_> = controller
                    .search_results()
                    .iter()
                    .map(|s| SearchResultItem::new(s, config))
                    .collect();
                let empty_message = results
                    .is_empty()
                    .then(|| format!("No shipments found for \"{}\"", state.search_query));
                let recent_searches = if state.search_query.is_empty() {
                    source.recent_searches()
                } else {
                    Vec::new()
                };

                ScreenModel::Tracking(TrackingModel::Search {
                    query: state.search_query,
                    results,
                    recent_searches,
                    empty_message,
                })
            }
            Screen::Tracking => ScreenModel::Tracking(TrackingModel::Overview {
                current: source
                    .current_shipment()
                    .map(|s| ShipmentCard::new(&s, config)),
                vehicle_types: source.vehicle_types(),
            }),
            Screen::ShipmentHistory => {
                let all = source.all_shipments();

                ScreenModel::ShipmentHistory(HistoryModel {
                    tabs: history_tabs(&all, state.history_tab),
                    shipments: filter_by_status_group(&all, state.history_tab)
                        .iter()
                        .map(|s| ShipmentCard::new(s, config))
                        .collect(),
                })
            }
            Screen::Calculate => {
                let categories = source
                    .shipment_categories()
                    .into_iter()
                    .map(|c| CategoryChip {
                        selected: state.calculation.is_selected(&c.name),
                        name: c.name,
                    })
                    .collect();

                ScreenModel::Calculate(CalculateModel {
                    draft: state.calculation,
                    categories,
                })
            }
            Screen::Confirmation => ScreenModel::Confirmation(ConfirmationModel {
                amount: format_amount(config.estimated_amount, config),
            }),
        }
    }
}
