use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;
use crate::types::{AngleUnit, Direction};

/// Reduces an angle into `[0, full_turn)` for the given unit
///
/// Uses the Euclidean remainder, so negative inputs wrap upward. A value
/// that rounds up to exactly one full turn folds back to zero.
pub fn normalize_angle(angle: f64, unit: AngleUnit) -> f64 {
    let full_turn = unit.full_turn();
    let reduced = angle.rem_euclid(full_turn);
    if reduced >= full_turn {
        0.0
    } else {
        reduced
    }
}

/// A position given as distance from the origin and a bearing
///
/// The bearing is measured clockwise from north. The value remembers the
/// unit its angle is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarCoordinate {
    distance: f64,
    angle: f64,
    unit: AngleUnit,
}

impl PolarCoordinate {
    /// Creates a polar coordinate with the angle in degrees
    ///
    /// Fails with [`CoordinateError::NegativeDistance`] if `distance` is negative or NaN.
    pub fn new(distance: f64, angle: f64) -> Result<Self, CoordinateError> {
        Self::with_unit(distance, angle, AngleUnit::Degrees)
    }

    /// Creates a validated polar coordinate with an explicit angle unit
    pub fn with_unit(distance: f64, angle: f64, unit: AngleUnit) -> Result<Self, CoordinateError> {
        if distance.is_nan() || distance < 0.0 {
            return Err(CoordinateError::NegativeDistance(distance));
        }

        Ok(Self::new_unchecked(distance, angle, unit))
    }

    /// Creates a polar coordinate without checking the distance
    pub fn new_unchecked(distance: f64, angle: f64, unit: AngleUnit) -> Self {
        Self {
            distance,
            angle,
            unit,
        }
    }

    /// Radial distance from the origin in meters
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Angle in this coordinate's own unit
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit of [`Self::angle`]
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Angle converted to radians
    pub fn angle_radians(&self) -> f64 {
        self.unit.to_radians(self.angle)
    }

    /// Angle converted to degrees
    pub fn angle_degrees(&self) -> f64 {
        self.unit.to_degrees(self.angle)
    }

    /// Returns a copy with the angle reduced into `[0, full_turn)`
    pub fn normalized(&self) -> Self {
        Self {
            angle: normalize_angle(self.angle, self.unit),
            ..*self
        }
    }

    /// Returns the same position with the angle expressed in `unit`
    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        if unit == self.unit {
            return *self;
        }

        Self {
            angle: unit.from_radians(self.angle_radians()),
            unit,
            ..*self
        }
    }
}

impl fmt::Display for PolarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {:.4} m, Angle: {:.4}{}",
            self.distance,
            self.angle,
            self.unit.symbol()
        )
    }
}

/// A position given as northing (Y) and easting (X) offsets in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangularCoordinate {
    pub northing: f64,
    pub easting: f64,
}

impl RectangularCoordinate {
    /// Creates a new rectangular coordinate
    pub fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// The origin of the local plane
    pub fn origin() -> Self {
        Self::default()
    }
}

impl fmt::Display for RectangularCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Northing: {:.4} m, Easting: {:.4} m",
            self.northing, self.easting
        )
    }
}

/// Either kind of coordinate, for collections gathered before a direction is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum Coordinate {
    Polar(PolarCoordinate),
    Rectangular(RectangularCoordinate),
}

impl Coordinate {
    /// The direction that converts this coordinate into the other system
    pub fn source_direction(&self) -> Direction {
        match self {
            Coordinate::Polar(_) => Direction::PolarToRect,
            Coordinate::Rectangular(_) => Direction::RectToPolar,
        }
    }

    pub fn as_polar(&self) -> Option<&PolarCoordinate> {
        match self {
            Coordinate::Polar(p) => Some(p),
            Coordinate::Rectangular(_) => None,
        }
    }

    pub fn as_rectangular(&self) -> Option<&RectangularCoordinate> {
        match self {
            Coordinate::Rectangular(r) => Some(r),
            Coordinate::Polar(_) => None,
        }
    }
}

impl From<PolarCoordinate> for Coordinate {
    fn from(coord: PolarCoordinate) -> Self {
        Coordinate::Polar(coord)
    }
}

impl From<RectangularCoordinate> for Coordinate {
    fn from(coord: RectangularCoordinate) -> Self {
        Coordinate::Rectangular(coord)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Polar(p) => fmt::Display::fmt(p, f),
            Coordinate::Rectangular(r) => fmt::Display::fmt(r, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_distance_rejected() {
        let result = PolarCoordinate::new(-1.0, 45.0);
        assert!(matches!(result, Err(CoordinateError::NegativeDistance(d)) if d == -1.0));
    }

    #[test]
    fn test_nan_distance_rejected() {
        assert!(PolarCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_zero_distance_accepted() {
        let coord = PolarCoordinate::new(0.0, 123.0).unwrap();
        assert_eq!(coord.distance(), 0.0);
        assert_eq!(coord.unit(), AngleUnit::Degrees);
    }

    #[test]
    fn test_unchecked_keeps_negative() {
        let coord = PolarCoordinate::new_unchecked(-5.0, 1.0, AngleUnit::Radians);
        assert_eq!(coord.distance(), -5.0);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(370.0, AngleUnit::Degrees), 10.0);
        assert_eq!(normalize_angle(-45.0, AngleUnit::Degrees), 315.0);
        assert_eq!(normalize_angle(360.0, AngleUnit::Degrees), 0.0);
        assert_eq!(normalize_angle(-1e-15, AngleUnit::Degrees), 0.0);
        let wrapped = normalize_angle(-std::f64::consts::FRAC_PI_2, AngleUnit::Radians);
        assert!((wrapped - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_to_unit() {
        let coord = PolarCoordinate::new(10.0, 180.0).unwrap();
        let radians = coord.to_unit(AngleUnit::Radians);
        assert!((radians.angle() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(radians.distance(), 10.0);
    }

    #[test]
    fn test_display_four_decimals() {
        let polar = PolarCoordinate::new(100.0, 45.0).unwrap();
        assert_eq!(polar.to_string(), "Distance: 100.0000 m, Angle: 45.0000°");

        let rect = RectangularCoordinate::new(70.71067, -3.5);
        assert_eq!(rect.to_string(), "Northing: 70.7107 m, Easting: -3.5000 m");

        let radians = PolarCoordinate::new_unchecked(1.0, 0.5, AngleUnit::Radians);
        assert_eq!(radians.to_string(), "Distance: 1.0000 m, Angle: 0.5000 rad");
    }

    #[test]
    fn test_coordinate_accessors() {
        let coord: Coordinate = RectangularCoordinate::new(1.0, 2.0).into();
        assert_eq!(coord.source_direction(), Direction::RectToPolar);
        assert!(coord.as_polar().is_none());
        assert_eq!(coord.as_rectangular().map(|r| r.easting), Some(2.0));
    }
}
