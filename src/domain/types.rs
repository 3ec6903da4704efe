// ==========================================
// Spool Winding Production System - Domain Types
// ==========================================
// Zones and shifts as entered on the daily form.
// Serialization format: plain variant names (stored as TEXT).
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Zone - winding department floor zone
// ==========================================
// Ord follows the floor layout order used on the form,
// which is also the report ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Red,
    Green,
    Blue,
    Yellow,
    Other,
}

impl Zone {
    /// All zones in form order
    pub const ALL: [Zone; 5] = [Zone::Red, Zone::Green, Zone::Blue, Zone::Yellow, Zone::Other];

    /// Database / display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Red => "Red",
            Zone::Green => "Green",
            Zone::Blue => "Blue",
            Zone::Yellow => "Yellow",
            Zone::Other => "Other",
        }
    }

    /// Parse from the stored representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Red" => Some(Zone::Red),
            "Green" => Some(Zone::Green),
            "Blue" => Some(Zone::Blue),
            "Yellow" => Some(Zone::Yellow),
            "Other" => Some(Zone::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Shift - working shift of the submission
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    A,
    B,
    C,
    General,
}

impl Shift {
    /// All shifts in form order
    pub const ALL: [Shift; 4] = [Shift::A, Shift::B, Shift::C, Shift::General];

    /// Database / display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
            Shift::C => "C",
            Shift::General => "General",
        }
    }

    /// Parse from the stored representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Shift::A),
            "B" => Some(Shift::B),
            "C" => Some(Shift::C),
            "General" => Some(Shift::General),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
