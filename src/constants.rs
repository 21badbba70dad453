//! Application-wide constants
//!
//! Every setting key, limit, and default value lives here so the schema table,
//! the typed config view, and the CLI agree on a single source of truth.

/// Config group the host runtime namespaces persisted values under
pub const CONFIG_GROUP: &str = "hydratereminder";

/// Stable setting keys (persisted by the host, never rename)
pub mod keys {
    pub const WELCOME_MESSAGE_ENABLED: &str = "hydrateReminderWelcomeMessageEnabled";
    pub const INTERVAL: &str = "hydrateReminderInterval";
    pub const CHAT_MESSAGE_ENABLED: &str = "hydrateReminderChatMessageEnabled";
    pub const CHAT_MESSAGE_TYPE: &str = "hydrateReminderChatMessageType";
    pub const COMPUTER_NOTIFICATION_ENABLED: &str = "hydrateReminderComputerNotificationEnabled";
    pub const ANIMATION_ENABLED: &str = "hydrateReminderAnimationEnabled";
    pub const OVERLAY_TIMER_ENABLED: &str = "hydrateReminderOverlayTimerEnabled";
    pub const OVERLAY_TIMER_TEXT_COLOR: &str = "hydrateReminderOverlayTimerTextColor";
    pub const OVERLAY_TIMER_IMAGE: &str = "hydrateReminderOverlayTimerImage";
    pub const PERSONALITY_TYPE: &str = "hydrateReminderPersonalityType";

    /// Key the animation toggle was stored under before it got its own.
    /// Shared with the welcome message toggle in 2.0.0 stores.
    pub const LEGACY_ANIMATION_ENABLED: &str = WELCOME_MESSAGE_ENABLED;
}

/// Reminder interval bounds
pub mod interval {
    /// Minimum settable number of minutes per interval
    pub const LIMIT_MIN: i32 = 1;

    /// Maximum settable number of minutes per interval
    pub const LIMIT_MAX: i32 = 90;

    /// Units suffix shown next to the interval field
    pub const UNITS: &str = " mins";
}

/// Default configuration values
/// Used when nothing is persisted or a persisted value fails validation
pub mod defaults {
    pub const WELCOME_MESSAGE_ENABLED: bool = true;

    /// Minutes between reminders
    pub const INTERVAL_MINUTES: i32 = 20;

    pub const CHAT_MESSAGE_ENABLED: bool = true;

    /// Off by default; tray notifications are opt-in
    pub const COMPUTER_NOTIFICATION_ENABLED: bool = false;

    pub const ANIMATION_ENABLED: bool = true;

    pub const OVERLAY_TIMER_ENABLED: bool = true;

    /// Opaque white (#AARRGGBB)
    pub const OVERLAY_TIMER_TEXT_COLOR: u32 = 0xFF_FF_FF_FF;
}

/// Section display metadata
pub mod sections {
    pub const NOTIFICATIONS_NAME: &str = "Notification Settings";
    pub const NOTIFICATIONS_DESCRIPTION: &str = "Settings for Hydrate Reminder Notifications";
    pub const NOTIFICATIONS_POSITION: i32 = 3;

    pub const OVERLAY_TIMER_NAME: &str = "Overlay Timer Settings";
    pub const OVERLAY_TIMER_DESCRIPTION: &str = "Settings for Hydrate Reminder Overlay Timer";
    pub const OVERLAY_TIMER_POSITION: i32 = 7;

    pub const ANIMATION_NAME: &str = "Animation Settings";
    pub const ANIMATION_DESCRIPTION: &str = "Settings for Hydrate Reminder Animations";
    pub const ANIMATION_POSITION: i32 = 7;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "hydrate-reminder";

    /// Value store filename
    pub const FILENAME: &str = "config.json";

    /// Overrides the store directory (used by tests and portable installs)
    pub const DIR_ENV_VAR: &str = "HYDRATE_REMINDER_CONFIG_DIR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_default_within_limits() {
        assert!(interval::LIMIT_MIN <= defaults::INTERVAL_MINUTES);
        assert!(defaults::INTERVAL_MINUTES <= interval::LIMIT_MAX);
    }

    #[test]
    fn test_interval_limits_are_ordered() {
        assert!(interval::LIMIT_MIN > 0);
        assert!(interval::LIMIT_MIN < interval::LIMIT_MAX);
    }

    #[test]
    fn test_legacy_animation_key_differs_from_current() {
        assert_ne!(keys::LEGACY_ANIMATION_ENABLED, keys::ANIMATION_ENABLED);
    }
}
