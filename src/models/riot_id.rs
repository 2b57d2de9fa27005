//! Riot account identifiers (`GameName#TAG`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Riot ID split into its game name and tagline.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    /// Build a Riot ID from parts. Returns `None` if the game name is blank.
    pub fn new(game_name: &str, tag_line: &str, default_tag: &str) -> Option<Self> {
        let game_name = game_name.trim();
        if game_name.is_empty() {
            return None;
        }

        let tag_line = match tag_line.trim() {
            "" => default_tag,
            tag => tag,
        };

        Some(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }

    /// Parse `Name#TAG`. A missing tag falls back to `default_tag`.
    pub fn parse(raw: &str, default_tag: &str) -> Option<Self> {
        match raw.split_once('#') {
            Some((name, tag)) => Self::new(name, tag, default_tag),
            None => Self::new(raw, "", default_tag),
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

impl fmt::Debug for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RiotId({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_tag() {
        let id = RiotId::parse("Faker#KR1", "NA1").unwrap();
        assert_eq!(id.game_name, "Faker");
        assert_eq!(id.tag_line, "KR1");
    }

    #[test]
    fn test_parse_without_tag_uses_default() {
        let id = RiotId::parse("Doublelift", "NA1").unwrap();
        assert_eq!(id.tag_line, "NA1");
    }

    #[test]
    fn test_parse_empty_tag_uses_default() {
        let id = RiotId::parse("Doublelift#", "NA1").unwrap();
        assert_eq!(id.tag_line, "NA1");
    }

    #[test]
    fn test_parse_blank_name() {
        assert!(RiotId::parse("", "NA1").is_none());
        assert!(RiotId::parse("  #EUW", "NA1").is_none());
    }

    #[test]
    fn test_name_with_spaces_kept() {
        let id = RiotId::parse("Hide on bush#KR1", "NA1").unwrap();
        assert_eq!(id.game_name, "Hide on bush");
    }

    #[test]
    fn test_display() {
        let id = RiotId::new("Player", "EUW", "NA1").unwrap();
        assert_eq!(id.to_string(), "Player#EUW");
        assert_eq!(format!("{:?}", id), "RiotId(Player#EUW)");
    }
}
