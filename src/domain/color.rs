//! Journal color tags

use crate::error::{DaybookError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Named colors offered when creating a journal, as ARGB
pub const PALETTE: [(&str, u32); 7] = [
    ("sand", 0xFFE8D8B0),
    ("sage", 0xFFB5C9A8),
    ("sky", 0xFFA8C8E0),
    ("rose", 0xFFE8B4B8),
    ("lavender", 0xFFC9B8E0),
    ("peach", 0xFFF4C7A1),
    ("slate", 0xFF9AA5B1),
];

fn hex_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap())
}

/// 32-bit ARGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JournalColor(pub u32);

impl JournalColor {
    pub fn argb(self) -> u32 {
        self.0
    }

    /// Palette name for this color, if it is one of the palette entries
    pub fn palette_name(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(_, argb)| *argb == self.0)
            .map(|(name, _)| *name)
    }
}

impl Default for JournalColor {
    fn default() -> Self {
        JournalColor(PALETTE[0].1)
    }
}

impl FromStr for JournalColor {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();

        if let Some((_, argb)) = PALETTE.iter().find(|(name, _)| *name == normalized) {
            return Ok(JournalColor(*argb));
        }

        let captures = hex_regex()
            .captures(&normalized)
            .ok_or_else(|| DaybookError::InvalidColor(s.to_string()))?;
        let digits = &captures[1];
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| DaybookError::InvalidColor(s.to_string()))?;

        // #RRGGBB is fully opaque
        if digits.len() == 6 {
            Ok(JournalColor(0xFF00_0000 | value))
        } else {
            Ok(JournalColor(value))
        }
    }
}

impl fmt::Display for JournalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
