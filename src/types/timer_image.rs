//! Background images for the overlay timer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimerImage {
    #[default]
    #[serde(rename = "CUP_OF_WATER_IMAGE")]
    CupOfWater,
    #[serde(rename = "CUP_OF_TEA_IMAGE")]
    CupOfTea,
    #[serde(rename = "JUG_OF_WATER_IMAGE")]
    JugOfWater,
    #[serde(rename = "BUCKET_OF_WATER_IMAGE")]
    BucketOfWater,
    #[serde(rename = "WATERSKIN_IMAGE")]
    Waterskin,
}

impl TimerImage {
    /// Image resource bundled with the plugin
    pub fn resource_file(self) -> &'static str {
        match self {
            Self::CupOfWater => "cup_of_water.png",
            Self::CupOfTea => "cup_of_tea.png",
            Self::JugOfWater => "jug_of_water.png",
            Self::BucketOfWater => "bucket_of_water.png",
            Self::Waterskin => "waterskin.png",
        }
    }
}

impl Choice for TimerImage {
    const ALL: &'static [Self] = &[
        Self::CupOfWater,
        Self::CupOfTea,
        Self::JugOfWater,
        Self::BucketOfWater,
        Self::Waterskin,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::CupOfWater => "Cup of Water",
            Self::CupOfTea => "Cup of Tea",
            Self::JugOfWater => "Jug of Water",
            Self::BucketOfWater => "Bucket of Water",
            Self::Waterskin => "Waterskin",
        }
    }

    fn persisted_name(self) -> &'static str {
        match self {
            Self::CupOfWater => "CUP_OF_WATER_IMAGE",
            Self::CupOfTea => "CUP_OF_TEA_IMAGE",
            Self::JugOfWater => "JUG_OF_WATER_IMAGE",
            Self::BucketOfWater => "BUCKET_OF_WATER_IMAGE",
            Self::Waterskin => "WATERSKIN_IMAGE",
        }
    }
}

impl fmt::Display for TimerImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimerImage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown timer image: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_round_trip() {
        for &variant in TimerImage::ALL {
            assert_eq!(variant.label().parse::<TimerImage>(), Ok(variant));
        }
    }

    #[test]
    fn test_resource_files_are_distinct_pngs() {
        let files: HashSet<_> = TimerImage::ALL.iter().map(|i| i.resource_file()).collect();
        assert_eq!(files.len(), TimerImage::ALL.len());
        assert!(files.iter().all(|f| f.ends_with(".png")));
    }
}
