//! Flat-plane coordinates and the conversions between them

pub mod bearing;
pub mod coordinate;
pub mod transformer;

pub use bearing::{Quadrant, QuadrantBearing};
pub use coordinate::{normalize_angle, Coordinate, PolarCoordinate, RectangularCoordinate};
pub use transformer::{polar_to_rect, rect_to_polar, rect_to_polar_in, Converter};
