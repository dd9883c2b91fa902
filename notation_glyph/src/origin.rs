// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor modes that align a glyph's logical origin with a caller's position.
//!
//! Every mode other than `Default` is measured against the glyph's
//! [`BoundingBox`], so it can only be resolved for metrics that carry one.

use core::fmt;
use core::str::FromStr;

use crate::metrics::BoundingBox;
use crate::Error;

/// The axis an origin mode applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right/center alignment.
    Horizontal,
    /// Top/bottom/center alignment.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Horizontal anchor mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HorizontalOrigin {
    /// No offset.
    #[default]
    Default,
    /// Anchor on the south-west corner's x.
    Left,
    /// Anchor one full width left of the south-west corner.
    Right,
    /// Anchor half a width left of the south-west corner.
    Center,
}

/// Vertical anchor mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalOrigin {
    /// No offset.
    #[default]
    Default,
    /// Anchor on the north-west corner's y.
    Top,
    /// Anchor on the south-west corner's y.
    Bottom,
    /// Anchor half a height below the south-west corner's y.
    Center,
}

impl HorizontalOrigin {
    /// The keyword this mode parses from.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// Resolve this mode into a pixel offset.
    ///
    /// Returns `None` when the mode needs a bounding box and `bounds` is absent.
    pub fn shift(self, bounds: Option<&BoundingBox>, width: f64) -> Option<f64> {
        let sw_x = || bounds.map(|bb| bb.south_west.x);
        match self {
            Self::Default => Some(0.0),
            Self::Left => sw_x(),
            Self::Right => sw_x().map(|x| x - width),
            Self::Center => sw_x().map(|x| x - width / 2.0),
        }
    }
}

impl VerticalOrigin {
    /// The keyword this mode parses from.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }

    /// Resolve this mode into a pixel offset.
    ///
    /// Returns `None` when the mode needs a bounding box and `bounds` is absent.
    pub fn shift(self, bounds: Option<&BoundingBox>, height: f64) -> Option<f64> {
        match self {
            Self::Default => Some(0.0),
            Self::Top => bounds.map(|bb| bb.north_west.y),
            Self::Bottom => bounds.map(|bb| bb.south_west.y),
            Self::Center => bounds.map(|bb| bb.south_west.y + height / 2.0),
        }
    }
}

impl FromStr for HorizontalOrigin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(Error::InvalidOrigin {
                axis: Axis::Horizontal,
                name: s.to_owned(),
            }),
        }
    }
}

impl FromStr for VerticalOrigin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "center" => Ok(Self::Center),
            _ => Err(Error::InvalidOrigin {
                axis: Axis::Vertical,
                name: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for HorizontalOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VerticalOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kurbo::Point;

    fn bounds() -> BoundingBox {
        BoundingBox {
            north_west: Point::new(2.0, -12.0),
            south_west: Point::new(2.0, 4.0),
            north_east: Point::new(18.0, -12.0),
            south_east: Point::new(18.0, 4.0),
        }
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(
            "center".parse::<HorizontalOrigin>(),
            Ok(HorizontalOrigin::Center)
        );
        assert_eq!("top".parse::<VerticalOrigin>(), Ok(VerticalOrigin::Top));
        for origin in [
            HorizontalOrigin::Default,
            HorizontalOrigin::Left,
            HorizontalOrigin::Right,
            HorizontalOrigin::Center,
        ] {
            assert_eq!(origin.as_str().parse::<HorizontalOrigin>(), Ok(origin));
        }
    }

    #[test]
    fn reject_unknown_keywords() {
        let err = "top".parse::<HorizontalOrigin>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOrigin {
                axis: Axis::Horizontal,
                name: "top".into()
            }
        );
        assert!("Left".parse::<HorizontalOrigin>().is_err());
        assert!("middle".parse::<VerticalOrigin>().is_err());
    }

    #[test]
    fn horizontal_shifts() {
        let bb = bounds();
        assert_eq!(HorizontalOrigin::Default.shift(Some(&bb), 16.0), Some(0.0));
        assert_eq!(HorizontalOrigin::Left.shift(Some(&bb), 16.0), Some(2.0));
        assert_eq!(HorizontalOrigin::Right.shift(Some(&bb), 16.0), Some(-14.0));
        assert_eq!(HorizontalOrigin::Center.shift(Some(&bb), 16.0), Some(-6.0));
    }

    #[test]
    fn vertical_shifts() {
        let bb = bounds();
        assert_eq!(VerticalOrigin::Default.shift(Some(&bb), 16.0), Some(0.0));
        assert_eq!(VerticalOrigin::Top.shift(Some(&bb), 16.0), Some(-12.0));
        assert_eq!(VerticalOrigin::Bottom.shift(Some(&bb), 16.0), Some(4.0));
        assert_eq!(VerticalOrigin::Center.shift(Some(&bb), 16.0), Some(12.0));
    }

    #[test]
    fn only_default_resolves_without_bounds() {
        assert_eq!(HorizontalOrigin::Default.shift(None, 16.0), Some(0.0));
        assert_eq!(VerticalOrigin::Default.shift(None, 16.0), Some(0.0));
        assert_eq!(HorizontalOrigin::Left.shift(None, 16.0), None);
        assert_eq!(VerticalOrigin::Center.shift(None, 16.0), None);
    }
}
