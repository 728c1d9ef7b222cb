//! Poem style preset value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidStyleError;

/// All available poem styles
pub const ALL_STYLES: &[PoemStyle] = &[
    PoemStyle::FreeVerse,
    PoemStyle::Haiku,
    PoemStyle::Sonnet,
    PoemStyle::Limerick,
    PoemStyle::Ballad,
];

/// Style identifiers for poem generation presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoemStyle {
    #[default]
    FreeVerse,
    Haiku,
    Sonnet,
    Limerick,
    Ballad,
}

impl PoemStyle {
    /// Get the human-readable label for this style
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FreeVerse => "Free Verse",
            Self::Haiku => "Haiku",
            Self::Sonnet => "Sonnet",
            Self::Limerick => "Limerick",
            Self::Ballad => "Ballad",
        }
    }

    /// Get the style-specific prompt instructions
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::FreeVerse => "Write in free verse: no fixed meter or rhyme scheme, 8 to 16 lines, guided by the imagery of the photo.",
            Self::Haiku => "Write a single haiku: exactly three lines of 5, 7, and 5 syllables capturing one moment from the photo.",
            Self::Sonnet => "Write a sonnet: 14 lines of iambic pentameter with a volta, ending in a rhyming couplet.",
            Self::Limerick => "Write a limerick: five lines with an AABBA rhyme scheme and a playful tone.",
            Self::Ballad => "Write a ballad: four-line stanzas with an ABCB rhyme scheme telling a small story drawn from the photo.",
        }
    }

    /// Get the string identifier for this style
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FreeVerse => "free-verse",
            Self::Haiku => "haiku",
            Self::Sonnet => "sonnet",
            Self::Limerick => "limerick",
            Self::Ballad => "ballad",
        }
    }
}

impl FromStr for PoemStyle {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free-verse" | "free_verse" | "freeverse" => Ok(Self::FreeVerse),
            "haiku" => Ok(Self::Haiku),
            "sonnet" => Ok(Self::Sonnet),
            "limerick" => Ok(Self::Limerick),
            "ballad" => Ok(Self::Ballad),
            _ => Err(InvalidStyleError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for PoemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_styles() {
        assert_eq!("free-verse".parse::<PoemStyle>().unwrap(), PoemStyle::FreeVerse);
        assert_eq!("haiku".parse::<PoemStyle>().unwrap(), PoemStyle::Haiku);
        assert_eq!("sonnet".parse::<PoemStyle>().unwrap(), PoemStyle::Sonnet);
        assert_eq!("limerick".parse::<PoemStyle>().unwrap(), PoemStyle::Limerick);
        assert_eq!("ballad".parse::<PoemStyle>().unwrap(), PoemStyle::Ballad);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("HAIKU".parse::<PoemStyle>().unwrap(), PoemStyle::Haiku);
        assert_eq!("Sonnet".parse::<PoemStyle>().unwrap(), PoemStyle::Sonnet);
    }

    #[test]
    fn parse_free_verse_aliases() {
        assert_eq!("free_verse".parse::<PoemStyle>().unwrap(), PoemStyle::FreeVerse);
        assert_eq!("freeverse".parse::<PoemStyle>().unwrap(), PoemStyle::FreeVerse);
    }

    #[test]
    fn parse_with_whitespace() {
        assert_eq!("  haiku  ".parse::<PoemStyle>().unwrap(), PoemStyle::Haiku);
    }

    #[test]
    fn parse_invalid() {
        assert!("epic".parse::<PoemStyle>().is_err());
        assert!("".parse::<PoemStyle>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PoemStyle::FreeVerse.to_string(), "free-verse");
        assert_eq!(PoemStyle::Haiku.to_string(), "haiku");
    }

    #[test]
    fn labels() {
        assert_eq!(PoemStyle::FreeVerse.label(), "Free Verse");
        assert_eq!(PoemStyle::Limerick.label(), "Limerick");
    }

    #[test]
    fn guidance_not_empty() {
        for style in ALL_STYLES {
            assert!(!style.guidance().is_empty());
        }
    }

    #[test]
    fn all_styles_constant() {
        assert_eq!(ALL_STYLES.len(), 5);
    }

    #[test]
    fn default_is_free_verse() {
        assert_eq!(PoemStyle::default(), PoemStyle::FreeVerse);
    }
}
