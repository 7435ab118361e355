use crate::config::ConversionProfile;
use crate::error::CoordinateError;
use crate::plane::coordinate::{normalize_angle, Coordinate, PolarCoordinate, RectangularCoordinate};
use crate::types::AngleUnit;

/// Converts a polar coordinate to northing/easting
///
/// The bearing is clockwise from north, so cosine feeds the northing and
/// sine feeds the easting.
pub fn polar_to_rect(coord: &PolarCoordinate) -> RectangularCoordinate {
    let (sin, cos) = coord.angle_radians().sin_cos();
    RectangularCoordinate::new(coord.distance() * cos, coord.distance() * sin)
}

/// Converts northing/easting to a polar coordinate in degrees, normalized to `[0, 360)`
pub fn rect_to_polar(coord: &RectangularCoordinate) -> PolarCoordinate {
    rect_to_polar_in(coord, AngleUnit::Degrees, true)
}

/// Converts northing/easting to a polar coordinate in the given unit
///
/// Note the `atan2(easting, northing)` argument order, which yields a
/// bearing rather than an angle from the positive X axis.
pub fn rect_to_polar_in(
    coord: &RectangularCoordinate,
    unit: AngleUnit,
    normalize: bool,
) -> PolarCoordinate {
    let distance = coord.northing.hypot(coord.easting);

    // atan2(±0, -0) is ±π; the origin has no bearing, report 0
    let raw = if distance == 0.0 {
        0.0
    } else {
        coord.easting.atan2(coord.northing)
    };

    let mut angle = unit.from_radians(raw);
    if normalize {
        angle = normalize_angle(angle, unit);
    }

    PolarCoordinate::new_unchecked(distance, angle, unit)
}

fn finite(field: &'static str, value: f64) -> Result<f64, CoordinateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordinateError::NonFinite { field, value })
    }
}

/// Applies a [`ConversionProfile`] to conversions in either direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    profile: ConversionProfile,
}

impl Converter {
    /// Creates a converter for the given profile
    pub fn new(profile: ConversionProfile) -> Self {
        Self { profile }
    }

    /// Returns the profile this converter applies
    pub fn profile(&self) -> ConversionProfile {
        self.profile
    }

    /// Builds a polar coordinate from raw input values in the profile's unit
    ///
    /// Both values must be finite. Validates the distance when the profile
    /// asks for it and normalizes the angle when the profile normalizes.
    pub fn polar(&self, distance: f64, angle: f64) -> Result<PolarCoordinate, CoordinateError> {
        let distance = finite("Distance", distance)?;
        let angle = finite("Angle", angle)?;
        let unit = self.profile.angle_unit;
        let coord = if self.profile.validate_nonnegative_distance {
            PolarCoordinate::with_unit(distance, angle, unit)?
        } else {
            PolarCoordinate::new_unchecked(distance, angle, unit)
        };

        Ok(if self.profile.normalize {
            coord.normalized()
        } else {
            coord
        })
    }

    /// Builds a rectangular coordinate from raw input values
    pub fn rect(&self, northing: f64, easting: f64) -> Result<RectangularCoordinate, CoordinateError> {
        Ok(RectangularCoordinate::new(
            finite("Northing", northing)?,
            finite("Easting", easting)?,
        ))
    }

    /// Converts a polar coordinate to rectangular
    ///
    /// Fails on non-finite components, or if the profile validates
    /// distances and this one is negative.
    pub fn polar_to_rect(&self, coord: &PolarCoordinate) -> Result<RectangularCoordinate, CoordinateError> {
        finite("Angle", coord.angle())?;
        if self.profile.validate_nonnegative_distance
            && (coord.distance().is_nan() || coord.distance() < 0.0)
        {
            return Err(CoordinateError::NegativeDistance(coord.distance()));
        }
        finite("Distance", coord.distance())?;

        Ok(polar_to_rect(coord))
    }

    /// Converts a rectangular coordinate to polar in the profile's unit
    pub fn rect_to_polar(&self, coord: &RectangularCoordinate) -> PolarCoordinate {
        rect_to_polar_in(coord, self.profile.angle_unit, self.profile.normalize)
    }

    /// Converts a coordinate into the other system
    pub fn convert(&self, coord: &Coordinate) -> Result<Coordinate, CoordinateError> {
        match coord {
            Coordinate::Polar(p) => self.polar_to_rect(p).map(Coordinate::Rectangular),
            Coordinate::Rectangular(r) => Ok(Coordinate::Polar(self.rect_to_polar(r))),
        }
    }

    /// Converts multiple polar coordinates, stopping at the first invalid one
    pub fn polar_to_rect_many(
        &self,
        coords: &[PolarCoordinate],
    ) -> Result<Vec<RectangularCoordinate>, CoordinateError> {
        coords.iter()
            .map(|coord| self.polar_to_rect(coord))
            .collect()
    }

    /// Converts multiple rectangular coordinates
    pub fn rect_to_polar_many(&self, coords: &[RectangularCoordinate]) -> Vec<PolarCoordinate> {
        coords.iter()
            .map(|coord| self.rect_to_polar(coord))
            .collect()
    }
}
