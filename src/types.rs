//! Core data types for bearing-convert

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit an angle value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Decimal degrees, 360 per turn
    #[default]
    Degrees,
    /// Radians, 2π per turn
    Radians,
}

impl AngleUnit {
    /// Returns the size of one full turn in this unit
    pub fn full_turn(&self) -> f64 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => TAU,
        }
    }

    /// Converts a value in this unit to radians
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }

    /// Converts a value in radians to this unit
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }

    /// Converts a value in this unit to degrees
    pub fn to_degrees(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => value.to_degrees(),
        }
    }

    /// Suffix used when rendering a value in this unit
    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "°",
            AngleUnit::Radians => " rad",
        }
    }

    /// Unit label used in table headers
    pub fn label(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "°",
            AngleUnit::Radians => "rad",
        }
    }

    /// Returns the name of this unit
    pub fn name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }
}

/// Which way a conversion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// (distance, angle) -> (northing, easting)
    PolarToRect,
    /// (northing, easting) -> (distance, angle)
    RectToPolar,
}

impl Direction {
    /// Returns the name of this direction
    pub fn name(&self) -> &'static str {
        match self {
            Direction::PolarToRect => "polar-to-rect",
            Direction::RectToPolar => "rect-to-polar",
        }
    }

    /// Labels of the two input fields, in input order
    pub fn input_fields(&self) -> (&'static str, &'static str) {
        match self {
            Direction::PolarToRect => ("Distance", "Angle"),
            Direction::RectToPolar => ("Northing", "Easting"),
        }
    }

    /// Suggested file name for exported results
    pub fn export_file_name(&self) -> &'static str {
        match self {
            Direction::PolarToRect => "polar_to_rect_results.csv",
            Direction::RectToPolar => "rect_to_polar_results.csv",
        }
    }

    /// Parses a user-facing direction name
    ///
    /// Accepts the kebab-case names as well as the short system names
    /// `polar` and `rect`/`rectangular` (naming the input system).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "polar-to-rect" | "polar_to_rect" | "polar" => Some(Direction::PolarToRect),
            "rect-to-polar" | "rect_to_polar" | "rect" | "rectangular" => {
                Some(Direction::RectToPolar)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
