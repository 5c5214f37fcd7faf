//! Navigation collaborator boundary

use std::cell::RefCell;

/// Route names understood by the navigation stack
pub mod routes {
    pub const CONFIGURE_URL: &str = "ConfigureURL";
    pub const RESET_PASSWORD: &str = "ResetPassword";
    pub const SWITCH_ACCOUNT: &str = "SwitchAccount";
    pub const NOTIFICATION_PREFERENCES: &str = "NotificationPreferences";
    pub const CHAT_WITH_US: &str = "ChatWithUs";
}

/// Opaque navigation trigger; callers never inspect navigation state
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate_to(&self, route: &str);
}

/// Navigator that only records and logs the requested routes
#[derive(Debug, Default)]
pub struct TracingNavigator {
    history: RefCell<Vec<String>>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requested so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for TracingNavigator {
    fn navigate_to(&self, route: &str) {
        tracing::info!("Navigating to {route}");
        self.history.borrow_mut().push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_order() {
        let navigator = TracingNavigator::new();
        navigator.navigate_to(routes::CONFIGURE_URL);
        navigator.navigate_to(routes::RESET_PASSWORD);
        assert_eq!(
            navigator.history(),
            vec!["ConfigureURL".to_string(), "ResetPassword".to_string()]
        );
    }
}
