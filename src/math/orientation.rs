use super::vector::{cross, dot};
use super::{Point2D, EPS};

/// Position of a point `c` relative to the directed segment `a → b`.
///
/// The integer codes match the classic five-way classification:
///
/// | code | variant | meaning |
/// |---|---|---|
/// | `+1` | `CounterClockwise` | `c` is left of `a → b` |
/// | `-1` | `Clockwise` | `c` is right of `a → b` |
/// | `+2` | `OnlineFront` | collinear, order `a, b, c` |
/// | `-2` | `OnlineBack` | collinear, order `c, a, b` |
/// | `0` | `OnSegment` | collinear, `c` between `a` and `b` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    OnlineFront,
    OnlineBack,
    OnSegment,
}

impl Orientation {
    /// Returns the integer code of this classification.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::CounterClockwise => 1,
            Self::Clockwise => -1,
            Self::OnlineFront => 2,
            Self::OnlineBack => -2,
            Self::OnSegment => 0,
        }
    }

    /// Converts an integer code back into a classification.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::CounterClockwise),
            -1 => Some(Self::Clockwise),
            2 => Some(Self::OnlineFront),
            -2 => Some(Self::OnlineBack),
            0 => Some(Self::OnSegment),
            _ => None,
        }
    }

    /// Returns `true` for the two strict turns.
    #[must_use]
    pub fn is_turn(self) -> bool {
        matches!(self, Self::CounterClockwise | Self::Clockwise)
    }

    /// Returns `true` for the three collinear cases.
    #[must_use]
    pub fn is_collinear(self) -> bool {
        !self.is_turn()
    }
}

/// Classifies `c` against the directed segment `a → b`.
#[must_use]
pub fn orientation(a: &Point2D, b: &Point2D, c: &Point2D) -> Orientation {
    let ab = b - a;
    let ac = c - a;
    let signed_area = cross(&ab, &ac);
    if signed_area > EPS {
        return Orientation::CounterClockwise;
    }
    if signed_area < -EPS {
        return Orientation::Clockwise;
    }
    if dot(&ab, &ac) < -EPS {
        return Orientation::OnlineBack;
    }
    if dot(&(a - b), &(c - b)) < -EPS {
        return Orientation::OnlineFront;
    }
    Orientation::OnSegment
}
