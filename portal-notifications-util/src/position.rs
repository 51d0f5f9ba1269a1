use portal_notifications_config::Anchor;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Screen anchor of a notification stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

/// Direction in which a stack grows away from its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDirection {
    /// First notification nearest the top edge, later ones below it
    TopDown,
    /// First notification nearest the bottom edge, later ones above it
    BottomUp,
}

impl Position {
    /// All anchors in screen order: top row left to right, then bottom row
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    pub const fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    pub const fn stack_direction(self) -> StackDirection {
        if self.is_top() {
            StackDirection::TopDown
        } else {
            StackDirection::BottomUp
        }
    }

    /// Column of the anchor on a 3-wide grid (0 = left, 2 = right)
    pub const fn column(self) -> usize {
        match self {
            Position::TopLeft | Position::BottomLeft => 0,
            Position::TopCenter | Position::BottomCenter => 1,
            Position::TopRight | Position::BottomRight => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

impl From<Anchor> for Position {
    fn from(anchor: Anchor) -> Self {
        match anchor {
            Anchor::TopLeft => Position::TopLeft,
            Anchor::TopCenter => Position::TopCenter,
            Anchor::TopRight => Position::TopRight,
            Anchor::BottomLeft => Position::BottomLeft,
            Anchor::BottomCenter => Position::BottomCenter,
            Anchor::BottomRight => Position::BottomRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_default_is_bottom_center() {
        assert_eq!(Position::default(), Position::BottomCenter);
        assert_eq!(Position::from(Anchor::default()), Position::BottomCenter);
    }

    #[test]
    fn test_stack_direction() {
        assert_eq!(Position::TopLeft.stack_direction(), StackDirection::TopDown);
        assert_eq!(Position::TopCenter.stack_direction(), StackDirection::TopDown);
        assert_eq!(Position::BottomRight.stack_direction(), StackDirection::BottomUp);
        assert_eq!(Position::BottomCenter.stack_direction(), StackDirection::BottomUp);
    }

    #[test]
    fn test_columns() {
        let columns: Vec<usize> = Position::ALL.iter().map(|p| p.column()).collect();
        assert_eq!(columns, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_parse_kebab_case() {
        assert_eq!("top-right".parse::<Position>(), Ok(Position::TopRight));
        assert_eq!("bottom-center".parse::<Position>(), Ok(Position::BottomCenter));
        assert!("middle".parse::<Position>().is_err());
        assert!("TopRight".parse::<Position>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for position in Position::ALL {
            let json = serde_json::to_string(&position).unwrap();
            assert_eq!(json, format!("\"{}\"", position));
            let back: Position = serde_json::from_str(&json).unwrap();
            assert_eq!(back, position);
        }
    }

    #[test]
    fn test_every_anchor_maps_to_distinct_position() {
        let anchors = [
            Anchor::TopLeft,
            Anchor::TopCenter,
            Anchor::TopRight,
            Anchor::BottomLeft,
            Anchor::BottomCenter,
            Anchor::BottomRight,
        ];
        let positions: Vec<Position> = anchors.into_iter().map(Position::from).collect();
        assert_eq!(positions, Position::ALL.to_vec());
    }
}
