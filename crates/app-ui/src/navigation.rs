//! Navigation presentation for MoveMate
//!
//! This module turns the navigation part of the view-state into what the
//! renderer draws:
//! - Bottom navigation items with labels, icons and selection
//! - The persistent header (title, back button, search bar)

use app_state::{NavItem, Screen, ViewState};
use serde::{Deserialize, Serialize};

// =============================================================================
// Navigation Items
// =============================================================================

/// Presentation details of a bottom navigation item
pub trait NavItemPresentation {
    /// Label shown under the icon
    fn label(&self) -> &'static str;
    /// Icon resource key
    fn icon(&self) -> &'static str;
    /// Route name
    fn route(&self) -> &'static str;
}

impl NavItemPresentation for NavItem {
    fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Calculate => "Calculate",
            NavItem::Shipment => "Shipment",
            NavItem::Profile => "Profile",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Calculate => "calc",
            NavItem::Shipment => "clockcounterclockwise",
            NavItem::Profile => "user",
        }
    }

    fn route(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Calculate => "calculate",
            NavItem::Shipment => "shipment",
            NavItem::Profile => "profile",
        }
    }
}

/// One entry of the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomNavItem {
    /// The item
    pub item: NavItem,
    /// Label
    pub label: String,
    /// Icon resource key
    pub icon: String,
    /// Whether this item is highlighted
    pub selected: bool,
}

/// The bottom navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomNavigation {
    /// Whether the bar is shown at all
    pub visible: bool,
    /// Items in bar order
    pub items: Vec<BottomNavItem>,
}

impl BottomNavigation {
    /// Build the bar for the given state
    pub fn for_state(state: &ViewState) -> Self {
        let items = NavItem::all()
            .into_iter()
            .map(|item| BottomNavItem {
                item,
                label: item.label().to_string(),
                icon: item.icon().to_string(),
                selected: item == state.nav_item,
            })
            .collect();

        Self {
            visible: state.bottom_nav_visible(),
            items,
        }
    }

    /// The highlighted item, if any
    pub fn selected(&self) -> Option<NavItem> {
        self.items.iter().find(|i| i.selected).map(|i| i.item)
    }
}

// =============================================================================
// Header
// =============================================================================

/// Persistent header above every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderState {
    /// Title text
    pub title: String,
    /// Whether the back button is shown
    pub show_back_button: bool,
    /// Whether the tracking search bar is shown
    pub show_search_bar: bool,
}

impl HeaderState {
    /// Derive the header from the current screen and navigation item
    ///
    /// Selecting Profile shows the tracking screen under a Profile header
    /// with a back button and no search bar.
    pub fn for_state(state: &ViewState) -> Self {
        let title = match (state.screen, state.nav_item) {
            (Screen::Tracking, NavItem::Profile) => "Profile",
            (Screen::Tracking, _) => "Tracking",
            (Screen::ShipmentHistory, _) => "Shipment history",
            (Screen::Calculate, _) => "Calculate",
            (Screen::Confirmation, _) => "Confirmation",
        };
        let is_home = title == "Tracking";

        Self {
            title: title.to_string(),
            show_back_button: !is_home,
            show_search_bar: is_home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(screen: Screen, nav_item: NavItem) -> ViewState {
        ViewState {
            screen,
            nav_item,
            ..ViewState::default()
        }
    }

    #[test]
    fn test_nav_item_presentation() {
        let labels: Vec<_> = NavItem::all().iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["Home", "Calculate", "Shipment", "Profile"]);
        assert_eq!(NavItem::Shipment.icon(), "clockcounterclockwise");
        assert_eq!(NavItem::Calculate.route(), "calculate");
    }

    #[test]
    fn test_bottom_navigation_selection() {
        let nav = BottomNavigation::for_state(&state(Screen::Calculate, NavItem::Calculate));
        assert_eq!(nav.items.len(), 4);
        assert_eq!(nav.selected(), Some(NavItem::Calculate));
        assert_eq!(nav.items.iter().filter(|i| i.selected).count(), 1);
        assert!(!nav.visible);
    }

    #[test]
    fn test_bottom_navigation_hidden_while_searching() {
        let mut s = ViewState::default();
        assert!(BottomNavigation::for_state(&s).visible);

        s.search_focused = true;
        assert!(!BottomNavigation::for_state(&s).visible);
    }

    #[test]
    fn test_header_tracking() {
        let header = HeaderState::for_state(&ViewState::default());
        assert_eq!(header.title, "Tracking");
        assert!(!header.show_back_button);
        assert!(header.show_search_bar);
    }

    #[test]
    fn test_header_profile_fallback() {
        let header = HeaderState::for_state(&state(Screen::Tracking, NavItem::Profile));
        assert_eq!(header.title, "Profile");
        assert!(header.show_back_button);
        assert!(!header.show_search_bar);
    }

    #[test]
    fn test_header_other_screens() {
        let cases = [
            (Screen::ShipmentHistory, NavItem::Shipment, "Shipment history"),
            (Screen::Calculate, NavItem::Calculate, "Calculate"),
            (Screen::Confirmation, NavItem::Calculate, "Confirmation"),
        ];

        for (screen, item, title) in cases {
            let header = HeaderState::for_state(&state(screen, item));
            assert_eq!(header.title, title);
            assert!(header.show_back_button);
            assert!(!header.show_search_bar);
        }
    }

    #[test]
    fn test_header_serialization() {
        let header = HeaderState::for_state(&ViewState::default());
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["showSearchBar"], true);
        assert_eq!(json["showBackButton"], false);
    }
}
