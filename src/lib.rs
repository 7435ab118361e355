//! bearing-convert - polar/rectangular coordinate conversion for surveying
//!
//! Converts between polar coordinates (distance, whole-circle bearing
//! measured clockwise from north) and rectangular coordinates (northing,
//! easting) on a flat local plane, one value at a time or in batches.
//!
//! # Examples
//!
//! ## Single conversions
//!
//! ```
//! use bearing_convert::{polar_to_rect, rect_to_polar, PolarCoordinate, RectangularCoordinate};
//!
//! let rect = polar_to_rect(&PolarCoordinate::new(100.0, 90.0)?);
//! assert!((rect.easting - 100.0).abs() < 1e-9);
//!
//! let polar = rect_to_polar(&RectangularCoordinate::new(100.0, -100.0));
//! assert!((polar.angle() - 315.0).abs() < 1e-9);
//! # Ok::<(), bearing_convert::Error>(())
//! ```
//!
//! ## Batches
//!
//! ```
//! use bearing_convert::{BatchConverter, ConversionProfile, Direction};
//!
//! let converter = BatchConverter::new(Direction::PolarToRect, ConversionProfile::survey());
//! let report = converter.convert_text("100.0, 45.0\nbad, data\n200.0, 135.0");
//!
//! assert_eq!(report.successful(), 2);
//! assert_eq!(report.warnings[0].row, 2);
//!
//! let csv = bearing_convert::batch::to_csv_string(&report)?;
//! assert!(csv.starts_with("Row,Distance (m)"));
//! # Ok::<(), bearing_convert::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod plane;
pub mod batch;
pub mod interactive;
pub mod api;

pub use error::{CoordinateError, Error, Result};
pub use types::{AngleUnit, Direction};
pub use config::{ConversionProfile, ProfileName, ServerConfig};
pub use plane::{
    polar_to_rect, rect_to_polar, Converter, Coordinate, PolarCoordinate, Quadrant,
    QuadrantBearing, RectangularCoordinate,
};
pub use batch::{BatchConverter, BatchReport, ConvertedRow, LineError, LineErrorKind};
pub use interactive::{CollectedInput, PromptSession};
