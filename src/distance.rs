use std::fmt;

use serde::{Serialize, Serializer};

use crate::trace::INFINITY_GLYPH;

/// A tentative or final shortest-path distance.
///
/// `Unreachable` orders after every finite distance, so the derived `Ord`
/// matches the usual "infinity is larger than everything" convention without
/// borrowing a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend this distance by one edge. Unreachable stays unreachable.
    pub fn plus(self, weight: u32) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight))),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str(INFINITY_GLYPH),
        }
    }
}

/// Finite distances serialize as numbers, unreachable ones as `"∞"`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_u64(*d),
            Distance::Unreachable => serializer.serialize_str(INFINITY_GLYPH),
        }
    }
}
