//! View-state controller
//!
//! The single owner of [`ViewState`]. Every user interaction is translated by
//! the host into one of the commands below; the controller applies it,
//! reports the outcome as a [`Transition`], and notifies subscribers when the
//! state actually changed.
//!
//! Data shown on screen is never cached here. [`ViewStateController::search_results`]
//! and [`ViewStateController::history_shipments`] recompute from the
//! current state and the injected [`ShipmentSource`] on every call.

use app_core::repository::filter_by_status_group;
use app_core::{search, Shipment, ShipmentSource, StatusGroup};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use crate::view_state::{NavItem, Screen, StateError, Transition, ViewState};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Events broadcast when part of the view-state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// A different screen is shown
    ScreenChanged(Screen),
    /// A different bottom navigation item is highlighted
    NavChanged(NavItem),
    /// A different history tab is selected
    HistoryTabChanged(StatusGroup),
    /// Search text or focus changed
    SearchChanged {
        /// Current search text
        query: String,
        /// Whether the search has focus
        focused: bool,
    },
    /// The calculation form changed
    CalculationChanged,
}

/// Owner of the application's view-state
///
/// # Example
///
/// ```rust
/// use app_core::ShipmentRepository;
/// use app_state::{NavItem, Screen, ViewStateController};
/// use std::sync::Arc;
///
/// let controller = ViewStateController::new(Arc::new(ShipmentRepository::sample()));
///
/// controller.select_nav(NavItem::Calculate);
/// controller.request_calculate();
/// assert_eq!(controller.current_screen(), Screen::Confirmation);
///
/// controller.back_to_home();
/// assert_eq!(controller.current_screen(), Screen::Tracking);
/// assert_eq!(controller.selected_nav_item(), NavItem::Home);
/// ```
pub struct ViewStateController {
    /// Data the derived views are computed from
    source: Arc<dyn ShipmentSource>,
    /// Current state
    state: RwLock<ViewState>,
    /// Latest snapshot for subscribers
    state_tx: watch::Sender<ViewState>,
    /// Fine-grained change events
    events_tx: broadcast::Sender<StateEvent>,
}

impl ViewStateController {
    /// Create a controller in the default state
    pub fn new(source: Arc<dyn ShipmentSource>) -> Self {
        Self::with_state(source, ViewState::default())
    }

    /// Create a controller starting from `initial`
    pub fn with_state(source: Arc<dyn ShipmentSource>, initial: ViewState) -> Self {
        let (state_tx, _) = watch::channel(initial.clone());
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            source,
            state: RwLock::new(initial),
            state_tx,
            events_tx,
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// Copy of the whole current state
    pub fn snapshot(&self) -> ViewState {
        self.state.read().clone()
    }

    /// Screen currently shown
    pub fn current_screen(&self) -> Screen {
        self.state.read().screen
    }

    /// Highlighted bottom navigation item
    pub fn selected_nav_item(&self) -> NavItem {
        self.state.read().nav_item
    }

    /// Selected history tab
    pub fn history_tab(&self) -> StatusGroup {
        self.state.read().history_tab
    }

    /// Tracking search text
    pub fn search_query(&self) -> String {
        self.state.read().search_query.clone()
    }

    /// Whether the tracking search has focus
    pub fn search_focused(&self) -> bool {
        self.state.read().search_focused
    }

    /// Whether the bottom navigation bar is shown
    pub fn bottom_nav_visible(&self) -> bool {
        self.state.read().bottom_nav_visible()
    }

    /// Searchable shipments matching the current search text
    pub fn search_results(&self) -> Vec<Shipment> {
        let query = self.search_query();
        search(&self.source.searchable_shipments(), &query)
    }

    /// History shipments matching the selected tab
    pub fn history_shipments(&self) -> Vec<Shipment> {
        let group = self.history_tab();
        filter_by_status_group(&self.source.all_shipments(), group)
    }

    /// Data source backing the derived views
    pub fn source(&self) -> &Arc<dyn ShipmentSource> {
        &self.source
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Receive the latest snapshot whenever the state changes
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Receive an event for every part of the state that changes
    pub fn subscribe_events(&self) -> broadcast::Receiver<StateEvent> {
        self.events_tx.subscribe()
    }

    // =========================================================================
    // Navigation commands
    // =========================================================================

    /// Select a bottom navigation item
    ///
    /// Shows the item's target screen and resets the tracking search.
    pub fn select_nav(&self, item: NavItem) -> Transition {
        self.apply("select_nav", |state| {
            state.nav_item = item;
            state.screen = item.target_screen();
            state.clear_search();
            Ok(())
        })
    }

    /// Submit the calculation form
    ///
    /// Only available on the calculate screen. The form is not validated.
    pub fn request_calculate(&self) -> Transition {
        self.apply("request_calculate", |state| {
            if state.screen != Screen::Calculate {
                return Err(StateError::InvalidTransition {
                    command: "request_calculate",
                    screen: state.screen,
                });
            }
            state.screen = Screen::Confirmation;
            Ok(())
        })
    }

    /// Return to the tracking screen with Home highlighted
    pub fn back_to_home(&self) -> Transition {
        self.apply("back_to_home", |state| {
            state.go_home();
            Ok(())
        })
    }

    /// Handle the back affordance
    ///
    /// Dismisses a focused search first; otherwise behaves like
    /// [`Self::back_to_home`].
    pub fn handle_back(&self) -> Transition {
        self.apply("handle_back", |state| {
            if state.search_focused {
                state.clear_search();
            } else {
                state.go_home();
            }
            Ok(())
        })
    }

    /// Select a shipment history tab by index
    pub fn select_history_tab(&self, index: usize) -> Transition {
        self.apply("select_history_tab", |state| {
            state.history_tab = StatusGroup::from_index(index)
                .map_err(|_| StateError::HistoryTabOutOfRange(index))?;
            Ok(())
        })
    }

    // =========================================================================
    // Search commands
    // =========================================================================

    /// Replace the search text verbatim
    pub fn set_search_query(&self, text: impl Into<String>) -> Transition {
        let text = text.into();
        self.apply("set_search_query", |state| {
            state.search_query = text;
            Ok(())
        })
    }

    /// Focus or unfocus the search field
    pub fn set_search_focused(&self, focused: bool) -> Transition {
        self.apply("set_search_focused", |state| {
            state.search_focused = focused;
            Ok(())
        })
    }

    // =========================================================================
    // Calculation form commands
    // =========================================================================

    /// Set the sender location text
    pub fn set_sender_location(&self, text: impl Into<String>) -> Transition {
        let text = text.into();
        self.apply("set_sender_location", |state| {
            state.calculation.sender_location = text;
            Ok(())
        })
    }

    /// Set the receiver location text
    pub fn set_receiver_location(&self, text: impl Into<String>) -> Transition {
        let text = text.into();
        self.apply("set_receiver_location", |state| {
            state.calculation.receiver_location = text;
            Ok(())
        })
    }

    /// Set the approximate weight text
    pub fn set_approx_weight(&self, text: impl Into<String>) -> Transition {
        let text = text.into();
        self.apply("set_approx_weight", |state| {
            state.calculation.approx_weight = text;
            Ok(())
        })
    }

    /// Set the packaging choice
    pub fn set_packaging(&self, packaging: impl Into<String>) -> Transition {
        let packaging = packaging.into();
        self.apply("set_packaging", |state| {
            state.calculation.packaging = packaging;
            Ok(())
        })
    }

    /// Select a goods category
    ///
    /// Selecting the current category again leaves the form unchanged.
    pub fn select_category(&self, name: &str) -> Transition {
        self.apply("select_category", |state| {
            state.calculation.select_category(name);
            Ok(())
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Run `update` against a working copy and commit it if it changed
    fn apply<F>(&self, command: &'static str, update: F) -> Transition
    where
        F: FnOnce(&mut ViewState) -> Result<(), StateError>,
    {
        let mut state = self.state.write();
        let mut next = state.clone();

        if let Err(err) = update(&mut next) {
            tracing::warn!(command, error = %err, "View-state command rejected");
            return Transition::Rejected(err);
        }

        if next == *state {
            return Transition::Unchanged;
        }

        tracing::debug!(command, screen = %next.screen, "View-state changed");

        // Publish under the write lock so subscribers observe commits in order
        let events = diff(&state, &next);
        *state = next.clone();
        self.state_tx.send_replace(next);
        for event in events {
            // No receivers is fine
            let _ = self.events_tx.send(event);
        }

        Transition::Changed
    }
}

/// Events describing how `before` became `after`
fn diff(before: &ViewState, after: &ViewState) -> Vec<StateEvent> {
    let mut events = Vec::new();

    if before.screen != after.screen {
        events.push(StateEvent::ScreenChanged(after.screen));
    }
    if before.nav_item != after.nav_item {
        events.push(StateEvent::NavChanged(after.nav_item));
    }
    if before.history_tab != after.history_tab {
        events.push(StateEvent::HistoryTabChanged(after.history_tab));
    }
    if before.search_query != after.search_query || before.search_focused != after.search_focused
    {
        events.push(StateEvent::SearchChanged {
            query: after.search_query.clone(),
            focused: after.search_focused,
        });
    }
    if before.calculation != after.calculation {
        events.push(StateEvent::CalculationChanged);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{sample_data, MockShipmentSource, ShipmentRepository, ShipmentStatus};

    fn controller() -> ViewStateController {
        ViewStateController::new(Arc::new(ShipmentRepository::sample()))
    }

    fn ids(shipments: &[Shipment]) -> Vec<String> {
        shipments.iter().map(|s| s.id().to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.current_screen(), Screen::Tracking);
        assert_eq!(c.selected_nav_item(), NavItem::Home);
        assert_eq!(c.history_tab(), StatusGroup::All);
        assert_eq!(c.search_query(), "");
        assert!(!c.search_focused());
        assert!(c.bottom_nav_visible());
    }

    #[test]
    fn test_select_nav_maps_screens() {
        let c = controller();

        assert!(c.select_nav(NavItem::Calculate).is_changed());
        assert_eq!(c.current_screen(), Screen::Calculate);

        c.select_nav(NavItem::Shipment);
        assert_eq!(c.current_screen(), Screen::ShipmentHistory);
        assert_eq!(c.selected_nav_item(), NavItem::Shipment);

        c.select_nav(NavItem::Profile);
        assert_eq!(c.current_screen(), Screen::Tracking);
        assert_eq!(c.selected_nav_item(), NavItem::Profile);

        c.select_nav(NavItem::Home);
        assert_eq!(c.current_screen(), Screen::Tracking);
        assert_eq!(c.selected_nav_item(), NavItem::Home);
    }

    #[test]
    fn test_select_nav_resets_search() {
        let c = controller();
        c.set_search_focused(true);
        c.set_search_query("paris");

        c.select_nav(NavItem::Shipment);
        assert_eq!(c.search_query(), "");
        assert!(!c.search_focused());
    }

    #[test]
    fn test_calculate_flow() {
        let c = controller();

        c.select_nav(NavItem::Calculate);
        assert_eq!(c.selected_nav_item(), NavItem::Calculate);

        assert_eq!(c.request_calculate(), Transition::Changed);
        assert_eq!(c.current_screen(), Screen::Confirmation);
        assert!(!c.bottom_nav_visible());

        assert_eq!(c.back_to_home(), Transition::Changed);
        assert_eq!(c.current_screen(), Screen::Tracking);
        assert_eq!(c.selected_nav_item(), NavItem::Home);
    }

    #[test]
    fn test_request_calculate_rejected_elsewhere() {
        let c = controller();
        let before = c.snapshot();

        let outcome = c.request_calculate();
        assert_eq!(
            outcome,
            Transition::Rejected(StateError::InvalidTransition {
                command: "request_calculate",
                screen: Screen::Tracking,
            })
        );
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_back_to_home_when_already_home() {
        let c = controller();
        assert_eq!(c.back_to_home(), Transition::Unchanged);
    }

    #[test]
    fn test_handle_back_clears_focused_search() {
        let c = controller();
        c.set_search_focused(true);
        c.set_search_query("abc");

        assert!(c.handle_back().is_changed());
        assert!(!c.search_focused());
        assert_eq!(c.search_query(), "");
        assert_eq!(c.current_screen(), Screen::Tracking);
    }

    #[test]
    fn test_handle_back_without_focus_goes_home() {
        let c = controller();
        c.select_nav(NavItem::Shipment);

        c.handle_back();
        assert_eq!(c.current_screen(), Screen::Tracking);
        assert_eq!(c.selected_nav_item(), NavItem::Home);
    }

    #[test]
    fn test_handle_back_keeps_unfocused_query() {
        let c = controller();
        c.set_search_query("left over");

        c.handle_back();
        assert_eq!(c.search_query(), "left over");
    }

    #[test]
    fn test_select_history_tab() {
        let c = controller();
        c.select_nav(NavItem::Shipment);

        assert!(c.select_history_tab(3).is_changed());
        assert_eq!(c.history_tab(), StatusGroup::Pending);
        assert_eq!(c.history_shipments().len(), 5);

        assert_eq!(c.select_history_tab(3), Transition::Unchanged);
    }

    #[test]
    fn test_select_history_tab_out_of_range() {
        let c = controller();
        c.select_history_tab(1);

        assert_eq!(
            c.select_history_tab(4),
            Transition::Rejected(StateError::HistoryTabOutOfRange(4))
        );
        assert_eq!(c.history_tab(), StatusGroup::Completed);
    }

    #[test]
    fn test_set_search_query_idempotent() {
        let c = controller();
        assert!(c.set_search_query("paris").is_changed());
        let after_first = c.snapshot();

        assert_eq!(c.set_search_query("paris"), Transition::Unchanged);
        assert_eq!(c.snapshot(), after_first);
    }

    #[test]
    fn test_search_query_stored_verbatim() {
        let c = controller();
        c.set_search_query("  Paris ");
        assert_eq!(c.search_query(), "  Paris ");
    }

    #[test]
    fn test_search_results_follow_query() {
        let c = controller();
        assert_eq!(c.search_results().len(), 5);

        c.set_search_query("Paris");
        assert_eq!(ids(&c.search_results()), ["1", "2", "3"]);

        c.set_search_query("macbook");
        assert_eq!(ids(&c.search_results()), ["1"]);
    }

    #[test]
    fn test_focus_hides_bottom_nav() {
        let c = controller();
        c.set_search_focused(true);
        assert!(!c.bottom_nav_visible());

        c.set_search_focused(false);
        assert!(c.bottom_nav_visible());
    }

    #[test]
    fn test_calculation_form_commands() {
        let c = controller();
        c.select_nav(NavItem::Calculate);

        c.set_sender_location("Lagos");
        c.set_receiver_location("Accra");
        c.set_approx_weight("12kg");
        c.set_packaging("Crate");
        c.select_category("Glass");

        let draft = c.snapshot().calculation;
        assert_eq!(draft.sender_location, "Lagos");
        assert_eq!(draft.receiver_location, "Accra");
        assert_eq!(draft.approx_weight, "12kg");
        assert_eq!(draft.packaging, "Crate");
        assert!(draft.is_selected("Glass"));

        assert!(c.request_calculate().is_changed());
    }

    #[test]
    fn test_select_category_is_select_only() {
        let c = controller();

        assert!(c.select_category("Food").is_changed());
        assert_eq!(c.select_category("Food"), Transition::Unchanged);
        assert!(c.snapshot().calculation.is_selected("Food"));

        assert!(c.select_category("Glass").is_changed());
        assert!(c.snapshot().calculation.is_selected("Glass"));
    }

    #[test]
    fn test_concurrent_commands_publish_latest_state() {
        let c = Arc::new(controller());
        let rx = c.subscribe();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let c = Arc::clone(&c);
                scope.spawn(move || {
                    for i in 0..200 {
                        c.set_search_query(format!("{worker}-{i}"));
                        c.set_search_focused(i % 2 == 0);
                    }
                });
            }
        });

        assert_eq!(*rx.borrow(), c.snapshot());
    }

    #[test]
    fn test_with_state_initial_tab() {
        let initial = ViewState::default().with_history_tab(StatusGroup::InProgress);
        let c = ViewStateController::with_state(Arc::new(ShipmentRepository::sample()), initial);

        assert_eq!(c.history_tab(), StatusGroup::InProgress);
        assert!(c
            .history_shipments()
            .iter()
            .all(|s| s.status() == ShipmentStatus::InProgress));
    }

    #[test]
    fn test_derived_views_query_source_each_time() {
        let mut mock = MockShipmentSource::new();
        mock.expect_searchable_shipments()
            .times(2)
            .returning(sample_data::search_history);
        mock.expect_all_shipments()
            .times(1)
            .returning(sample_data::shipments);

        let c = ViewStateController::new(Arc::new(mock));
        assert_eq!(c.search_results().len(), 5);

        c.set_search_query("dhaka");
        assert_eq!(ids(&c.search_results()), ["4"]);

        c.select_history_tab(1);
        assert_eq!(c.history_shipments().len(), 4);
    }

    #[tokio::test]
    async fn test_snapshot_subscription() {
        let c = controller();
        let mut rx = c.subscribe();
        assert_eq!(rx.borrow().screen, Screen::Tracking);

        c.select_nav(NavItem::Shipment);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().screen, Screen::ShipmentHistory);
    }

    #[tokio::test]
    async fn test_unchanged_commands_do_not_notify() {
        let c = controller();
        let rx = c.subscribe();

        c.back_to_home();
        c.request_calculate();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_events() {
        let c = controller();
        let mut rx = c.subscribe_events();

        c.select_nav(NavItem::Calculate);
        assert_eq!(rx.recv().await.unwrap(), StateEvent::ScreenChanged(Screen::Calculate));
        assert_eq!(rx.recv().await.unwrap(), StateEvent::NavChanged(NavItem::Calculate));

        c.select_category("Food");
        assert_eq!(rx.recv().await.unwrap(), StateEvent::CalculationChanged);

        c.set_search_query("x");
        assert_eq!(
            rx.recv().await.unwrap(),
            StateEvent::SearchChanged {
                query: "x".to_string(),
                focused: false,
            }
        );

        c.select_history_tab(2);
        assert_eq!(
            rx.recv().await.unwrap(),
            StateEvent::HistoryTabChanged(StatusGroup::InProgress)
        );
    }
}
