//! Settings schema
//!
//! Static table of every user-adjustable option: key, display metadata,
//! section, default value and constraints. The host runtime renders it grouped
//! by section and ordered by position, and persists values by key.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::common::color::HexColor;
use crate::constants::{defaults, interval, keys, sections};
use crate::types::{ChatMessageType, Choice, PersonalityType, TimerImage};

/// Display grouping for related settings (no behavioral effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Notifications,
    OverlayTimer,
    Animation,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Notifications, Self::OverlayTimer, Self::Animation];

    pub fn name(self) -> &'static str {
        match self {
            Self::Notifications => sections::NOTIFICATIONS_NAME,
            Self::OverlayTimer => sections::OVERLAY_TIMER_NAME,
            Self::Animation => sections::ANIMATION_NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Notifications => sections::NOTIFICATIONS_DESCRIPTION,
            Self::OverlayTimer => sections::OVERLAY_TIMER_DESCRIPTION,
            Self::Animation => sections::ANIMATION_DESCRIPTION,
        }
    }

    pub fn position(self) -> i32 {
        match self {
            Self::Notifications => sections::NOTIFICATIONS_POSITION,
            Self::OverlayTimer => sections::OVERLAY_TIMER_POSITION,
            Self::Animation => sections::ANIMATION_POSITION,
        }
    }
}

/// Closed set of setting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    WelcomeMessageEnabled,
    Interval,
    ChatMessageEnabled,
    ChatMessageType,
    ComputerNotificationEnabled,
    AnimationEnabled,
    OverlayTimerEnabled,
    OverlayTimerTextColor,
    OverlayTimerImage,
    PersonalityType,
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        Self::WelcomeMessageEnabled,
        Self::Interval,
        Self::ChatMessageEnabled,
        Self::ChatMessageType,
        Self::ComputerNotificationEnabled,
        Self::AnimationEnabled,
        Self::OverlayTimerEnabled,
        Self::OverlayTimerTextColor,
        Self::OverlayTimerImage,
        Self::PersonalityType,
    ];

    /// Stable persisted key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WelcomeMessageEnabled => keys::WELCOME_MESSAGE_ENABLED,
            Self::Interval => keys::INTERVAL,
            Self::ChatMessageEnabled => keys::CHAT_MESSAGE_ENABLED,
            Self::ChatMessageType => keys::CHAT_MESSAGE_TYPE,
            Self::ComputerNotificationEnabled => keys::COMPUTER_NOTIFICATION_ENABLED,
            Self::AnimationEnabled => keys::ANIMATION_ENABLED,
            Self::OverlayTimerEnabled => keys::OVERLAY_TIMER_ENABLED,
            Self::OverlayTimerTextColor => keys::OVERLAY_TIMER_TEXT_COLOR,
            Self::OverlayTimerImage => keys::OVERLAY_TIMER_IMAGE,
            Self::PersonalityType => keys::PERSONALITY_TYPE,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Schema entry for this key
    pub fn setting(self) -> &'static Setting {
        // SETTINGS is declared in SettingKey::ALL order
        &SETTINGS[self as usize]
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type and constraints of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    /// Inclusive range, with an optional units suffix for display
    Int {
        min: i32,
        max: i32,
        units: Option<&'static str>,
    },
    /// Color picker with a transparency slider
    Color,
    ChatMessageType,
    TimerImage,
    PersonalityType,
}

impl SettingKind {
    /// Short name used in error messages
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int { .. } => "integer",
            Self::Color => "color",
            Self::ChatMessageType => "chat message type",
            Self::TimerImage => "timer image",
            Self::PersonalityType => "personality type",
        }
    }

    /// Persisted names accepted by enum-valued kinds
    pub fn variants(self) -> Option<Vec<&'static str>> {
        match self {
            Self::ChatMessageType => Some(ChatMessageType::persisted_names()),
            Self::TimerImage => Some(TimerImage::persisted_names()),
            Self::PersonalityType => Some(PersonalityType::persisted_names()),
            Self::Bool | Self::Int { .. } | Self::Color => None,
        }
    }
}

/// A typed setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Color(HexColor),
    ChatMessageType(ChatMessageType),
    TimerImage(TimerImage),
    PersonalityType(PersonalityType),
}

impl SettingValue {
    /// Text form written to the value store
    pub fn to_persisted(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Color(c) => c.to_string(),
            Self::ChatMessageType(t) => t.persisted_name().to_string(),
            Self::TimerImage(i) => i.persisted_name().to_string(),
            Self::PersonalityType(p) => p.persisted_name().to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Color(_) => "color",
            Self::ChatMessageType(_) => "chat message type",
            Self::TimerImage(_) => "timer image",
            Self::PersonalityType(_) => "personality type",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<HexColor> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_chat_message_type(&self) -> Option<ChatMessageType> {
        match self {
            Self::ChatMessageType(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_timer_image(&self) -> Option<TimerImage> {
        match self {
            Self::TimerImage(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_personality_type(&self) -> Option<PersonalityType> {
        match self {
            Self::PersonalityType(p) => Some(*p),
            _ => None,
        }
    }
}

/// Display form: enum labels, colors as hex
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Color(c) => write!(f, "{}", c),
            Self::ChatMessageType(t) => write!(f, "{}", t),
            Self::TimerImage(i) => write!(f, "{}", i),
            Self::PersonalityType(p) => write!(f, "{}", p),
        }
    }
}

/// One user-configurable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub key: SettingKey,
    pub label: &'static str,
    pub description: &'static str,
    /// Display order within its section (or among ungrouped settings)
    pub position: i32,
    pub section: Option<Section>,
    pub kind: SettingKind,
    pub default: SettingValue,
}

/// Every setting, in `SettingKey::ALL` order
pub static SETTINGS: [Setting; 10] = [
    Setting {
        key: SettingKey::WelcomeMessageEnabled,
        label: "Welcome message",
        description: "Sets whether or not the welcome message should be displayed",
        position: 1,
        section: None,
        kind: SettingKind::Bool,
        default: SettingValue::Bool(defaults::WELCOME_MESSAGE_ENABLED),
    },
    Setting {
        key: SettingKey::Interval,
        label: "Hydrate interval",
        description: "The time interval between each hydrate reminder",
        position: 2,
        section: None,
        kind: SettingKind::Int {
            min: interval::LIMIT_MIN,
            max: interval::LIMIT_MAX,
            units: Some(interval::UNITS),
        },
        default: SettingValue::Int(defaults::INTERVAL_MINUTES),
    },
    Setting {
        key: SettingKey::ChatMessageEnabled,
        label: "Chat notification",
        description: "Sets the hydrate reminder to be sent as a chat message",
        position: 3,
        section: Some(Section::Notifications),
        kind: SettingKind::Bool,
        default: SettingValue::Bool(defaults::CHAT_MESSAGE_ENABLED),
    },
    Setting {
        key: SettingKey::ChatMessageType,
        label: "Chat type",
        description: "Sets the type of chat message sent by hydrate reminder",
        position: 4,
        section: Some(Section::Notifications),
        kind: SettingKind::ChatMessageType,
        default: SettingValue::ChatMessageType(ChatMessageType::GameMessage),
    },
    Setting {
        key: SettingKey::ComputerNotificationEnabled,
        label: "Computer notification",
        description: "Sets the hydrate reminder to be sent as a computer notification",
        position: 5,
        section: Some(Section::Notifications),
        kind: SettingKind::Bool,
        default: SettingValue::Bool(defaults::COMPUTER_NOTIFICATION_ENABLED),
    },
    Setting {
        key: SettingKey::AnimationEnabled,
        label: "Hydrate animation",
        description: "Sets whether or not the hydrate animation should be displayed",
        position: 6,
        section: Some(Section::Animation),
        kind: SettingKind::Bool,
        default: SettingValue::Bool(defaults::ANIMATION_ENABLED),
    },
    Setting {
        key: SettingKey::OverlayTimerEnabled,
        label: "Timer Display",
        description: "Sets whether or not the overlay timer should be displayed",
        position: 8,
        section: Some(Section::OverlayTimer),
        kind: SettingKind::Bool,
        default: SettingValue::Bool(defaults::OVERLAY_TIMER_ENABLED),
    },
    Setting {
        key: SettingKey::OverlayTimerTextColor,
        label: "Text Color",
        description: "Sets the text color of the timer display",
        position: 9,
        section: Some(Section::OverlayTimer),
        kind: SettingKind::Color,
        default: SettingValue::Color(HexColor::from_argb32(defaults::OVERLAY_TIMER_TEXT_COLOR)),
    },
    Setting {
        key: SettingKey::OverlayTimerImage,
        label: "Timer Image",
        description: "Sets the background image of the timer display",
        position: 10,
        section: Some(Section::OverlayTimer),
        kind: SettingKind::TimerImage,
        default: SettingValue::TimerImage(TimerImage::CupOfWater),
    },
    Setting {
        key: SettingKey::PersonalityType,
        label: "Personality type",
        description: "Sets the type of personality by which different messages will be displayed when hydrating",
        position: 11,
        section: None,
        kind: SettingKind::PersonalityType,
        default: SettingValue::PersonalityType(PersonalityType::Fun),
    },
];

/// Compile-time default for a setting
pub fn default_value(key: SettingKey) -> SettingValue {
    key.setting().default
}

/// Sections in display order (position, then name for ties)
pub fn sections() -> Vec<Section> {
    let mut all = Section::ALL.to_vec();
    all.sort_by(|a, b| a.position().cmp(&b.position()).then(a.name().cmp(b.name())));
    all
}

/// Settings belonging to `section` (`None` = ungrouped), ordered by position
pub fn settings_in(section: Option<Section>) -> Vec<&'static Setting> {
    let mut matching: Vec<_> = SETTINGS.iter().filter(|s| s.section == section).collect();
    matching.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(a.key.as_str().cmp(b.key.as_str()))
    });
    matching
}

/// Keys that appear on more than one setting
pub fn duplicate_keys() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for setting in &SETTINGS {
        let key = setting.key.as_str();
        if !seen.insert(key) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_table_matches_key_order() {
        for (index, key) in SettingKey::ALL.into_iter().enumerate() {
            assert_eq!(SETTINGS[index].key, key);
            assert_eq!(key.setting().key, key);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        assert!(duplicate_keys().is_empty());
    }

    #[test]
    fn test_from_key_round_trip() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_key(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::from_key("hydrateAnimationEnabled"), None);
        assert_eq!(SettingKey::from_key(""), None);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_value(SettingKey::Interval), SettingValue::Int(20));
        assert_eq!(
            default_value(SettingKey::ChatMessageType),
            SettingValue::ChatMessageType(ChatMessageType::GameMessage)
        );
        assert_eq!(
            default_value(SettingKey::ComputerNotificationEnabled),
            SettingValue::Bool(false)
        );
        assert_eq!(
            default_value(SettingKey::OverlayTimerTextColor),
            SettingValue::Color(HexColor::WHITE)
        );
        assert_eq!(
            default_value(SettingKey::OverlayTimerImage),
            SettingValue::TimerImage(TimerImage::CupOfWater)
        );
        assert_eq!(
            default_value(SettingKey::PersonalityType),
            SettingValue::PersonalityType(PersonalityType::Fun)
        );
    }

    #[test]
    fn test_defaults_match_declared_kind() {
        for setting in &SETTINGS {
            assert_eq!(
                setting.kind.type_name(),
                setting.default.type_name(),
                "{} default has the wrong type",
                setting.key
            );
        }
    }

    #[test]
    fn test_section_order_breaks_ties_by_name() {
        let ordered = sections();
        assert_eq!(
            ordered,
            vec![Section::Notifications, Section::Animation, Section::OverlayTimer]
        );
    }

    #[test]
    fn test_settings_grouping() {
        let ungrouped: Vec<_> = settings_in(None).iter().map(|s| s.key).collect();
        assert_eq!(
            ungrouped,
            vec![
                SettingKey::WelcomeMessageEnabled,
                SettingKey::Interval,
                SettingKey::PersonalityType
            ]
        );

        let timer: Vec<_> = settings_in(Some(Section::OverlayTimer))
            .iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(
            timer,
            vec![
                SettingKey::OverlayTimerEnabled,
                SettingKey::OverlayTimerTextColor,
                SettingKey::OverlayTimerImage
            ]
        );

        let total: usize = sections()
            .into_iter()
            .map(|s| settings_in(Some(s)).len())
            .sum::<usize>()
            + settings_in(None).len();
        assert_eq!(total, SETTINGS.len());
    }

    #[test]
    fn test_persisted_text() {
        assert_eq!(SettingValue::Bool(true).to_persisted(), "true");
        assert_eq!(SettingValue::Int(45).to_persisted(), "45");
        assert_eq!(
            SettingValue::TimerImage(TimerImage::CupOfTea).to_persisted(),
            "CUP_OF_TEA_IMAGE"
        );
        assert_eq!(
            SettingValue::ChatMessageType(ChatMessageType::GameMessage).to_string(),
            "Game Message"
        );
    }

    #[test]
    fn test_enum_kinds_list_variants() {
        let variants = SettingKind::ChatMessageType.variants().unwrap();
        assert!(variants.contains(&"GAMEMESSAGE"));
        assert!(SettingKind::Bool.variants().is_none());
    }
}
