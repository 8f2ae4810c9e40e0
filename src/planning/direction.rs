//! Traversal orientation and the reversal heuristic.

use serde::{Deserialize, Serialize};

use super::line::Slope;

/// Signed traversal orientation.
///
/// Selects which side of a separating line counts as "forward".
/// `Negative` (-1) is the usual choice when the corridor runs toward +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum DirectionSign {
    Positive,
    #[default]
    Negative,
}

impl DirectionSign {
    /// Numeric value (+1 or -1)
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            DirectionSign::Positive => 1,
            DirectionSign::Negative => -1,
        }
    }

    /// The opposite orientation
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            DirectionSign::Positive => DirectionSign::Negative,
            DirectionSign::Negative => DirectionSign::Positive,
        }
    }
}

impl TryFrom<i8> for DirectionSign {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DirectionSign::Positive),
            -1 => Ok(DirectionSign::Negative),
            other => Err(format!("direction must be 1 or -1, got {}", other)),
        }
    }
}

impl From<DirectionSign> for i8 {
    fn from(direction: DirectionSign) -> Self {
        direction.value()
    }
}

impl std::fmt::Display for DirectionSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

/// Direction for the next step given the previous and new separating slopes.
///
/// Two consecutive separating lines with the same finite slope mean the
/// stepping failed to turn, so the orientation flips. Vertical lines never
/// trigger a flip.
pub fn next_direction(prev: Option<Slope>, new: Slope, current: DirectionSign) -> DirectionSign {
    match (prev, new) {
        (Some(Slope::Finite(p)), Slope::Finite(n)) if n - p == 0.0 => current.flipped(),
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(DirectionSign::Positive.flipped(), DirectionSign::Negative);
        assert_eq!(DirectionSign::Negative.flipped(), DirectionSign::Positive);
        assert_eq!(DirectionSign::default(), DirectionSign::Negative);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(DirectionSign::try_from(1), Ok(DirectionSign::Positive));
        assert_eq!(DirectionSign::try_from(-1), Ok(DirectionSign::Negative));
        assert!(DirectionSign::try_from(0).is_err());
        assert!(DirectionSign::try_from(2).is_err());
    }

    #[test]
    fn test_next_direction_equal_slopes_flip() {
        let dir = next_direction(
            Some(Slope::Finite(-1.0)),
            Slope::Finite(-1.0),
            DirectionSign::Negative,
        );
        assert_eq!(dir, DirectionSign::Positive);

        // Signed zeros compare equal
        let dir = next_direction(
            Some(Slope::Finite(0.0)),
            Slope::Finite(-0.0),
            DirectionSign::Positive,
        );
        assert_eq!(dir, DirectionSign::Negative);
    }

    #[test]
    fn test_next_direction_keeps_orientation() {
        let current = DirectionSign::Negative;
        assert_eq!(
            next_direction(Some(Slope::Finite(1.0)), Slope::Finite(-1.0), current),
            current
        );
        assert_eq!(next_direction(None, Slope::Finite(1.0), current), current);
        assert_eq!(
            next_direction(Some(Slope::Vertical), Slope::Vertical, current),
            current
        );
        assert_eq!(
            next_direction(Some(Slope::Finite(0.0)), Slope::Vertical, current),
            current
        );
    }
}
