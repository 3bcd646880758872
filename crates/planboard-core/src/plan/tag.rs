//! Closed category sets for board items and calendar events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a board item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[default]
    Launch,
    Sales,
    Plan,
    Focus,
    Work,
}

impl Tag {
    pub const ALL: [Tag; 5] = [Tag::Launch, Tag::Sales, Tag::Plan, Tag::Focus, Tag::Work];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Launch => "Launch",
            Self::Sales => "Sales",
            Self::Plan => "Plan",
            Self::Focus => "Focus",
            Self::Work => "Work",
        }
    }

    /// Palette name used by renderers.
    pub fn color_name(&self) -> &'static str {
        match self {
            Self::Launch => "rose",
            Self::Sales => "sky",
            Self::Plan => "emerald",
            Self::Focus => "indigo",
            Self::Work => "amber",
        }
    }

    /// Single-character glyph for text rendering.
    pub fn glyph(&self) -> char {
        match self {
            Self::Launch => 'L',
            Self::Sales => 'S',
            Self::Plan => 'P',
            Self::Focus => 'F',
            Self::Work => 'W',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownTag(s.to_string()))
    }
}

/// Color of a calendar event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Red,
    #[default]
    Blue,
    Green,
    Purple,
    Amber,
}

impl EventColor {
    pub const ALL: [EventColor; 5] = [
        EventColor::Red,
        EventColor::Blue,
        EventColor::Green,
        EventColor::Purple,
        EventColor::Amber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Amber => "amber",
        }
    }

    /// Swatch hex shown in color pickers.
    pub fn swatch(&self) -> &'static str {
        match self {
            Self::Red => "#fda4af",
            Self::Blue => "#7dd3fc",
            Self::Green => "#6ee7b7",
            Self::Purple => "#a5b4fc",
            Self::Amber => "#fcd34d",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parses_case_insensitively() {
        assert_eq!("focus".parse::<Tag>(), Ok(Tag::Focus));
        assert_eq!("SALES".parse::<Tag>(), Ok(Tag::Sales));
        assert_eq!(
            "Marketing".parse::<Tag>(),
            Err(ValidationError::UnknownTag("Marketing".into()))
        );
    }

    #[test]
    fn tag_serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&Tag::Launch).unwrap(), "\"Launch\"");
        assert!(serde_json::from_str::<Tag>("\"launch\"").is_err());
    }

    #[test]
    fn color_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&EventColor::Purple).unwrap(), "\"purple\"");
        assert_eq!(
            serde_json::from_str::<EventColor>("\"amber\"").unwrap(),
            EventColor::Amber
        );
        assert!(serde_json::from_str::<EventColor>("\"teal\"").is_err());
    }

    #[test]
    fn defaults_match_new_record_defaults() {
        assert_eq!(Tag::default(), Tag::Launch);
        assert_eq!(EventColor::default(), EventColor::Blue);
    }

    #[test]
    fn style_tables_are_distinct() {
        let names: std::collections::HashSet<_> = Tag::ALL.iter().map(Tag::color_name).collect();
        assert_eq!(names.len(), Tag::ALL.len());
        let swatches: std::collections::HashSet<_> =
            EventColor::ALL.iter().map(EventColor::swatch).collect();
        assert_eq!(swatches.len(), EventColor::ALL.len());
    }
}
