//! Shipment repository
//!
//! This module owns the canonical, read-only shipment collections and answers
//! queries over them: status-group filtering for the history tabs, exact
//! status counts for the tab badges, and case-insensitive text search.
//!
//! None of the queries mutate state or fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::models::{Shipment, ShipmentCategory, ShipmentStatus, VehicleType};
use crate::sample_data;

/// Errors produced when interpreting repository inputs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Tab index outside the fixed set of status groups
    #[error("Unknown status group index: {0}")]
    UnknownStatusGroup(usize),
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

// =============================================================================
// Status Groups
// =============================================================================

/// Filter applied by a shipment history tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusGroup {
    /// Every shipment
    #[default]
    All,
    /// Delivered shipments
    Completed,
    /// Shipments on their way
    InProgress,
    /// Pending shipments, including those still loading
    Pending,
}

impl StatusGroup {
    /// Number of history tabs
    pub const COUNT: usize = 4;

    /// Resolve a tab index to its group
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(StatusGroup::All),
            1 => Ok(StatusGroup::Completed),
            2 => Ok(StatusGroup::InProgress),
            3 => Ok(StatusGroup::Pending),
            other => Err(RepositoryError::UnknownStatusGroup(other)),
        }
    }

    /// Tab index of this group
    pub fn index(&self) -> usize {
        match self {
            StatusGroup::All => 0,
            StatusGroup::Completed => 1,
            StatusGroup::InProgress => 2,
            StatusGroup::Pending => 3,
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            StatusGroup::All => "All",
            StatusGroup::Completed => "Completed",
            StatusGroup::InProgress => "In progress",
            StatusGroup::Pending => "Pending",
        }
    }

    /// Whether a shipment with `status` belongs in this group
    pub fn matches(&self, status: ShipmentStatus) -> bool {
        match self {
            StatusGroup::All => true,
            StatusGroup::Completed => status == ShipmentStatus::Completed,
            StatusGroup::InProgress => status == ShipmentStatus::InProgress,
            StatusGroup::Pending => {
                matches!(status, ShipmentStatus::Pending | ShipmentStatus::Loading)
            }
        }
    }

    /// All groups in tab order
    pub fn all() -> [StatusGroup; Self::COUNT] {
        [
            StatusGroup::All,
            StatusGroup::Completed,
            StatusGroup::InProgress,
            StatusGroup::Pending,
        ]
    }
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for StatusGroup {
    type Error = RepositoryError;

    fn try_from(index: usize) -> Result<Self> {
        StatusGroup::from_index(index)
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Keep the shipments belonging to `group`, preserving order
pub fn filter_by_status_group(collection: &[Shipment], group: StatusGroup) -> Vec<Shipment> {
    collection
        .iter()
        .filter(|s| group.matches(s.status()))
        .cloned()
        .collect()
}

/// Number of shipments in `collection` with exactly `status`
///
/// Used for tab badges. Unlike [`StatusGroup::Pending`], counting `Pending`
/// does not include `Loading` shipments.
pub fn count_by_status(collection: &[Shipment], status: ShipmentStatus) -> usize {
    collection.iter().filter(|s| s.status() == status).count()
}

/// Case-insensitive substring search over name, tracking number, origin and
/// destination
///
/// An empty query returns `collection` unchanged. The query is used
/// verbatim; surrounding whitespace is significant.
///
/// # Example
///
/// ```rust
/// use app_core::{repository::search, sample_data};
///
/// let results = search(&sample_data::search_history(), "PARIS");
/// let ids: Vec<_> = results.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, ["1", "2", "3"]);
/// ```
pub fn search(collection: &[Shipment], query: &str) -> Vec<Shipment> {
    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(|s| s.matches_lowercase(&needle))
        .cloned()
        .collect()
}

// =============================================================================
// Shipment Source
// =============================================================================

/// Read-only source of shipment data
///
/// This is the seam the view-state controller depends on.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ShipmentSource: Send + Sync {
    /// Full shipment history in insertion order
    fn all_shipments(&self) -> Vec<Shipment>;

    /// Shipments searchable from the tracking screen
    fn searchable_shipments(&self) -> Vec<Shipment>;

    /// Vehicle types in display order
    fn vehicle_types(&self) -> Vec<VehicleType>;

    /// Categories for the calculation form
    fn shipment_categories(&self) -> Vec<ShipmentCategory>;

    /// Recent search queries, most recent first
    fn recent_searches(&self) -> Vec<String>;

    /// The shipment featured on the tracking screen
    fn current_shipment(&self) -> Option<Shipment>;
}

/// Static in-memory shipment repository
///
/// Collections are populated once at construction and never change.
/// Cloning is cheap; clones share the same data.
#[derive(Debug, Clone)]
pub struct ShipmentRepository {
    shipments: Arc<[Shipment]>,
    search_history: Arc<[Shipment]>,
    vehicle_types: Arc<[VehicleType]>,
    categories: Arc<[ShipmentCategory]>,
    recent_searches: Arc<[String]>,
}

impl Default for ShipmentRepository {
    fn default() -> Self {
        Self::sample()
    }
}

impl ShipmentRepository {
    /// Build a repository over explicit collections
    pub fn new(
        shipments: Vec<Shipment>,
        search_history: Vec<Shipment>,
        vehicle_types: Vec<VehicleType>,
        categories: Vec<ShipmentCategory>,
        recent_searches: Vec<String>,
    ) -> Self {
        tracing::debug!(
            shipments = shipments.len(),
            search_history = search_history.len(),
            "Shipment repository loaded"
        );
        Self {
            shipments: shipments.into(),
            search_history: search_history.into(),
            vehicle_types: vehicle_types.into(),
            categories: categories.into(),
            recent_searches: recent_searches.into(),
        }
    }

    /// Build the repository over the bundled sample dataset
    pub fn sample() -> Self {
        Self::new(
            sample_data::shipments(),
            sample_data::search_history(),
            sample_data::vehicle_types(),
            sample_data::shipment_categories(),
            sample_data::recent_searches(),
        )
    }

    /// Borrow the shipment history without cloning
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Borrow the searchable shipments without cloning
    pub fn search_history(&self) -> &[Shipment] {
        &self.search_history
    }

    /// Shipments matching a history tab, in insertion order
    pub fn filter_by_status_group(&self, group: StatusGroup) -> Vec<Shipment> {
        filter_by_status_group(&self.shipments, group)
    }

    /// Number of history shipments with exactly `status`; see [`count_by_status`]
    pub fn count_by_status(&self, status: ShipmentStatus) -> usize {
        count_by_status(&self.shipments, status)
    }

    /// Search an arbitrary collection; see [`search`]
    pub fn search(&self, collection: &[Shipment], query: &str) -> Vec<Shipment> {
        search(collection, query)
    }
}

impl ShipmentSource for ShipmentRepository {
    fn all_shipments(&self) -> Vec<Shipment> {
        self.shipments.to_vec()
    }

    fn searchable_shipments(&self) -> Vec<Shipment> {
        self.search_history.to_vec()
    }

    fn vehicle_types(&self) -> Vec<VehicleType> {
        self.vehicle_types.to_vec()
    }

    fn shipment_categories(&self) -> Vec<ShipmentCategory> {
        self.categories.to_vec()
    }

    fn recent_searches(&self) -> Vec<String> {
        self.recent_searches.to_vec()
    }

    fn current_shipment(&self) -> Option<Shipment> {
        self.shipments.first().cloned()
    }
}
