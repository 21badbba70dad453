//! Typed view of the Hydrate Reminder settings
//!
//! One accessor per setting, resolved once from a value store. Reminder logic
//! reads this instead of looking keys up by string.

use serde::Serialize;

use super::schema::{SettingKey, SettingValue, default_value};
use super::store::ConfigStore;
use crate::common::color::HexColor;
use crate::types::{ChatMessageType, PersonalityType, TimerImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrateReminderConfig {
    welcome_message_enabled: bool,
    interval_minutes: i32,
    chat_message_enabled: bool,
    chat_message_type: ChatMessageType,
    computer_notification_enabled: bool,
    animation_enabled: bool,
    overlay_timer_enabled: bool,
    overlay_timer_text_color: HexColor,
    overlay_timer_image: TimerImage,
    personality_type: PersonalityType,
}

impl HydrateReminderConfig {
    /// Resolve every setting from `store`, defaulting anything missing or invalid
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::resolve(|key| store.get(key))
    }

    fn resolve(lookup: impl Fn(SettingKey) -> SettingValue) -> Self {
        let lookup = &lookup;
        Self {
            welcome_message_enabled: typed(lookup, SettingKey::WelcomeMessageEnabled, SettingValue::as_bool),
            interval_minutes: typed(lookup, SettingKey::Interval, SettingValue::as_int),
            chat_message_enabled: typed(lookup, SettingKey::ChatMessageEnabled, SettingValue::as_bool),
            chat_message_type: typed(
                lookup,
                SettingKey::ChatMessageType,
                SettingValue::as_chat_message_type,
            ),
            computer_notification_enabled: typed(
                lookup,
                SettingKey::ComputerNotificationEnabled,
                SettingValue::as_bool,
            ),
            animation_enabled: typed(lookup, SettingKey::AnimationEnabled, SettingValue::as_bool),
            overlay_timer_enabled: typed(lookup, SettingKey::OverlayTimerEnabled, SettingValue::as_bool),
            overlay_timer_text_color: typed(
                lookup,
                SettingKey::OverlayTimerTextColor,
                SettingValue::as_color,
            ),
            overlay_timer_image: typed(lookup, SettingKey::OverlayTimerImage, SettingValue::as_timer_image),
            personality_type: typed(
                lookup,
                SettingKey::PersonalityType,
                SettingValue::as_personality_type,
            ),
        }
    }

    /// Whether the login welcome message is shown
    pub fn hydrate_reminder_welcome_message_enabled(&self) -> bool {
        self.welcome_message_enabled
    }

    /// Minutes between reminders, within the interval limits
    pub fn hydrate_reminder_interval(&self) -> i32 {
        self.interval_minutes
    }

    pub fn hydrate_reminder_chat_message_enabled(&self) -> bool {
        self.chat_message_enabled
    }

    pub fn hydrate_reminder_chat_message_type(&self) -> ChatMessageType {
        self.chat_message_type
    }

    pub fn hydrate_reminder_computer_notification_enabled(&self) -> bool {
        self.computer_notification_enabled
    }

    pub fn hydrate_animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn hydrate_reminder_overlay_timer_enabled(&self) -> bool {
        self.overlay_timer_enabled
    }

    pub fn hydrate_reminder_overlay_timer_text_color(&self) -> HexColor {
        self.overlay_timer_text_color
    }

    pub fn hydrate_reminder_overlay_timer_image(&self) -> TimerImage {
        self.overlay_timer_image
    }

    pub fn hydrate_reminder_personality_type(&self) -> PersonalityType {
        self.personality_type
    }
}

/// Typed payload of `lookup(key)`, or of the schema default when the lookup
/// answers with another kind
fn typed<T: Default>(
    lookup: &impl Fn(SettingKey) -> SettingValue,
    key: SettingKey,
    pick: fn(&SettingValue) -> Option<T>,
) -> T {
    pick(&lookup(key))
        .or_else(|| pick(&default_value(key)))
        .unwrap_or_default()
}

impl Default for HydrateReminderConfig {
    fn default() -> Self {
        Self::resolve(default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::keys;

    #[test]
    fn test_defaults() {
        let config = HydrateReminderConfig::default();

        assert!(config.hydrate_reminder_welcome_message_enabled());
        assert_eq!(config.hydrate_reminder_interval(), 20);
        assert!(config.hydrate_reminder_chat_message_enabled());
        assert_eq!(
            config.hydrate_reminder_chat_message_type(),
            ChatMessageType::GameMessage
        );
        assert!(!config.hydrate_reminder_computer_notification_enabled());
        assert!(config.hydrate_animation_enabled());
        assert!(config.hydrate_reminder_overlay_timer_enabled());
        assert_eq!(config.hydrate_reminder_overlay_timer_text_color(), HexColor::WHITE);
        assert_eq!(
            config.hydrate_reminder_overlay_timer_image(),
            TimerImage::CupOfWater
        );
        assert_eq!(
            config.hydrate_reminder_personality_type(),
            PersonalityType::Fun
        );
    }

    #[test]
    fn test_empty_store_matches_defaults() {
        let config = HydrateReminderConfig::from_store(&ConfigStore::default());
        assert_eq!(config, HydrateReminderConfig::default());
    }

    #[test]
    fn test_from_store_overrides() {
        let mut store = ConfigStore::default();
        store.set(keys::INTERVAL, "60").unwrap();
        store.set(keys::ANIMATION_ENABLED, "false").unwrap();
        store.set(keys::OVERLAY_TIMER_IMAGE, "WATERSKIN_IMAGE").unwrap();

        let config = HydrateReminderConfig::from_store(&store);
        assert_eq!(config.hydrate_reminder_interval(), 60);
        assert!(!config.hydrate_animation_enabled());
        // Independent of the animation toggle
        assert!(config.hydrate_reminder_welcome_message_enabled());
        assert_eq!(
            config.hydrate_reminder_overlay_timer_image(),
            TimerImage::Waterskin
        );
    }

    #[test]
    fn test_mistyped_lookup_uses_schema_default() {
        // Every key answers with the wrong kind
        let config = HydrateReminderConfig::resolve(|key| match key {
            SettingKey::Interval => SettingValue::Bool(false),
            _ => SettingValue::Int(7),
        });
        assert_eq!(config, HydrateReminderConfig::default());
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(HydrateReminderConfig::default()).unwrap();
        assert_eq!(json["intervalMinutes"], 20);
        assert_eq!(json["chatMessageType"], "GAMEMESSAGE");
        assert_eq!(json["overlayTimerTextColor"], "#FFFFFFFF");
    }
}
