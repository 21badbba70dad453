//! Closed option sets offered by the settings UI
//!
//! Each option has two stable strings: the upper-case name the host persists
//! and the label users see. Neither may change without a migration.

pub mod chat_message;
pub mod personality;
pub mod timer_image;

pub use chat_message::ChatMessageType;
pub use personality::PersonalityType;
pub use timer_image::TimerImage;

/// A fixed set of named choices
pub trait Choice: Copy + Sized + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Human-readable label shown in the settings UI
    fn label(self) -> &'static str;

    /// Upper-case constant name written to the value store
    fn persisted_name(self) -> &'static str;

    /// Reverse lookup by persisted name or label, case-insensitive
    fn lookup(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|choice| {
            choice.persisted_name().eq_ignore_ascii_case(value)
                || choice.label().eq_ignore_ascii_case(value)
        })
    }

    /// Persisted names of every variant, for error messages
    fn persisted_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.persisted_name()).collect()
    }
}
