//! Chat channel a reminder is posted to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Choice;

/// Style of chat notification used for reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChatMessageType {
    #[default]
    #[serde(rename = "GAMEMESSAGE")]
    GameMessage,
    #[serde(rename = "BROADCASTMESSAGE")]
    Broadcast,
    #[serde(rename = "PUBLICCHAT")]
    PublicChat,
    #[serde(rename = "CLANCHAT")]
    ClanChat,
}

impl Choice for ChatMessageType {
    const ALL: &'static [Self] = &[
        Self::GameMessage,
        Self::Broadcast,
        Self::PublicChat,
        Self::ClanChat,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::GameMessage => "Game Message",
            Self::Broadcast => "Broadcast",
            Self::PublicChat => "Public Chat",
            Self::ClanChat => "Clan Chat",
        }
    }

    fn persisted_name(self) -> &'static str {
        match self {
            Self::GameMessage => "GAMEMESSAGE",
            Self::Broadcast => "BROADCASTMESSAGE",
            Self::PublicChat => "PUBLICCHAT",
            Self::ClanChat => "CLANCHAT",
        }
    }
}

impl fmt::Display for ChatMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChatMessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown chat message type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(ChatMessageType::GameMessage.to_string(), "Game Message");
    }

    #[test]
    fn test_label_round_trip() {
        for &variant in ChatMessageType::ALL {
            assert_eq!(variant.label().parse::<ChatMessageType>(), Ok(variant));
            assert_eq!(variant.persisted_name().parse::<ChatMessageType>(), Ok(variant));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            ChatMessageType::lookup("gamemessage"),
            Some(ChatMessageType::GameMessage)
        );
        assert_eq!(
            ChatMessageType::lookup(" public chat "),
            Some(ChatMessageType::PublicChat)
        );
        assert_eq!(ChatMessageType::lookup("WHISPER"), None);
    }

    #[test]
    fn test_serializes_as_persisted_name() {
        let json = serde_json::to_string(&ChatMessageType::GameMessage).unwrap();
        assert_eq!(json, "\"GAMEMESSAGE\"");

        let parsed: ChatMessageType = serde_json::from_str("\"CLANCHAT\"").unwrap();
        assert_eq!(parsed, ChatMessageType::ClanChat);
    }
}
