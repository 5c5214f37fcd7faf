//! Settings menu descriptors

use crate::navigation::{routes, Navigator};
use serde::Serialize;

/// One row of the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub left_icon: &'static str,
    pub title: &'static str,
    pub right_icon: &'static str,
    pub route_name: &'static str,
}

const CHEVRON_RIGHT: &str = "arrow-chevron-right-outline";
const OPEN_SCREEN: &str = "open-screen-outline";

const PREFERENCES_SECTIONS: &[MenuItem] = &[
    MenuItem {
        left_icon: "arrow-swap-outline",
        title: "Switch Account",
        right_icon: CHEVRON_RIGHT,
        route_name: routes::SWITCH_ACCOUNT,
    },
    MenuItem {
        left_icon: "bell-outline",
        title: "Notification Preferences",
        right_icon: CHEVRON_RIGHT,
        route_name: routes::NOTIFICATION_PREFERENCES,
    },
];

const SUPPORT_SECTION: &[MenuItem] = &[MenuItem {
    left_icon: "chat-help-outline",
    title: "Chat with Us",
    right_icon: OPEN_SCREEN,
    route_name: routes::CHAT_WITH_US,
}];

pub fn preferences_sections() -> &'static [MenuItem] {
    PREFERENCES_SECTIONS
}

pub fn support_section() -> &'static [MenuItem] {
    SUPPORT_SECTION
}

/// Look an item up by route across every section
pub fn find_by_route(route: &str) -> Option<&'static MenuItem> {
    PREFERENCES_SECTIONS
        .iter()
        .chain(SUPPORT_SECTION)
        .find(|item| item.route_name == route)
}

/// Open the screen behind `item`
pub fn select(item: &MenuItem, navigator: &impl Navigator) {
    navigator.navigate_to(item.route_name);
}
