//! Quadrant and quadrant-bearing descriptions of a position

use std::fmt;

use serde::Serialize;

use crate::plane::coordinate::{normalize_angle, PolarCoordinate, RectangularCoordinate};
use crate::types::AngleUnit;

/// Compass quadrant of a rectangular position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Classifies a position; points on an axis belong to the quadrant on their positive side
    pub fn of(coord: &RectangularCoordinate) -> Self {
        match (coord.northing >= 0.0, coord.easting >= 0.0) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Quadrant::NorthEast => "NE",
            Quadrant::NorthWest => "NW",
            Quadrant::SouthWest => "SW",
            Quadrant::SouthEast => "SE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::NorthEast => "NE (First Quadrant)",
            Quadrant::NorthWest => "NW (Second Quadrant)",
            Quadrant::SouthWest => "SW (Third Quadrant)",
            Quadrant::SouthEast => "SE (Fourth Quadrant)",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bearing written as an acute angle off north or south, e.g. `S 30.00° E`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadrantBearing {
    /// `'N'` or `'S'`
    pub reference: char,
    /// Acute angle in degrees, `0..=90`
    pub degrees: f64,
    /// `'E'` or `'W'`
    pub toward: char,
}

impl QuadrantBearing {
    /// Builds the quadrant bearing for a whole-circle bearing in degrees
    pub fn from_degrees(angle: f64) -> Self {
        let bearing = normalize_angle(angle, AngleUnit::Degrees);

        let (reference, degrees, toward) = if bearing > 90.0 && bearing <= 180.0 {
            ('S', 180.0 - bearing, 'E')
        } else if bearing > 180.0 && bearing <= 270.0 {
            ('S', bearing - 180.0, 'W')
        } else if bearing > 270.0 {
            ('N', 360.0 - bearing, 'W')
        } else {
            ('N', bearing, 'E')
        };

        Self {
            reference,
            degrees,
            toward,
        }
    }

    /// Builds the quadrant bearing of a polar coordinate in any unit
    pub fn of(coord: &PolarCoordinate) -> Self {
        Self::from_degrees(coord.angle_degrees())
    }
}

impl fmt::Display for QuadrantBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}° {}", self.reference, self.degrees, self.toward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        assert_eq!(Quadrant::of(&RectangularCoordinate::new(1.0, 1.0)), Quadrant::NorthEast);
        assert_eq!(Quadrant::of(&RectangularCoordinate::new(1.0, -1.0)), Quadrant::NorthWest);
        assert_eq!(Quadrant::of(&RectangularCoordinate::new(-1.0, -1.0)), Quadrant::SouthWest);
        assert_eq!(Quadrant::of(&RectangularCoordinate::new(-1.0, 1.0)), Quadrant::SouthEast);
        assert_eq!(Quadrant::of(&RectangularCoordinate::origin()), Quadrant::NorthEast);
    }

    #[test]
    fn test_quadrant_label() {
        assert_eq!(Quadrant::SouthWest.to_string(), "SW (Third Quadrant)");
        assert_eq!(Quadrant::NorthWest.abbreviation(), "NW");
    }

    #[test]
    fn test_bearing_text() {
        assert_eq!(QuadrantBearing::from_degrees(45.0).to_string(), "N 45.00° E");
        assert_eq!(QuadrantBearing::from_degrees(150.0).to_string(), "S 30.00° E");
        assert_eq!(QuadrantBearing::from_degrees(200.0).to_string(), "S 20.00° W");
        assert_eq!(QuadrantBearing::from_degrees(315.0).to_string(), "N 45.00° W");
        assert_eq!(QuadrantBearing::from_degrees(-45.0).to_string(), "N 45.00° W");
    }

    #[test]
    fn test_bearing_boundaries() {
        assert_eq!(QuadrantBearing::from_degrees(90.0).to_string(), "N 90.00° E");
        assert_eq!(QuadrantBearing::from_degrees(180.0).to_string(), "S 0.00° E");
        assert_eq!(QuadrantBearing::from_degrees(270.0).to_string(), "S 90.00° W");
    }

    #[test]
    fn test_bearing_from_radians() {
        let coord = PolarCoordinate::new_unchecked(1.0, std::f64::consts::PI, AngleUnit::Radians);
        let bearing = QuadrantBearing::of(&coord);
        assert_eq!(bearing.reference, 'S');
        assert!(bearing.degrees.abs() < 1e-9);
    }
}
