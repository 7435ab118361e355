//! Line-oriented prompt session for entering coordinates by hand

use std::io::{BufRead, Write};

use crate::config::ConversionProfile;
use crate::error::{Error, Result};
use crate::plane::{Converter, Coordinate};
use crate::types::Direction;

/// Coordinates gathered from a prompt session
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedInput {
    pub direction: Direction,
    pub coordinates: Vec<Coordinate>,
}

/// Prompts for a coordinate system, a count, and then each coordinate's components
pub struct PromptSession<R, W> {
    input: R,
    output: W,
    converter: Converter,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W, profile: ConversionProfile) -> Self {
        Self {
            input,
            output,
            converter: Converter::new(profile),
        }
    }

    /// Runs the full prompt sequence
    ///
    /// Anything other than `polar` (in any case) selects rectangular input.
    pub fn collect(&mut self) -> Result<CollectedInput> {
        let system = self.ask("Enter input the coordinate system 'Rectangular | Polar': ")?;
        let direction = if system.trim().eq_ignore_ascii_case("polar") {
            Direction::PolarToRect
        } else {
            Direction::RectToPolar
        };

        let count = self.ask_count("Enter number of coordinates to insert: ")?;
        let mut coordinates = Vec::with_capacity(count);

        for index in 1..=count {
            let coord = match direction {
                Direction::PolarToRect => self.ask_polar(index)?,
                Direction::RectToPolar => self.ask_rect(index)?,
            };
            coordinates.push(coord);
        }

        Ok(CollectedInput {
            direction,
            coordinates,
        })
    }

    /// Gives back the output sink, e.g. to print results after collecting
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_polar(&mut self, index: usize) -> Result<Coordinate> {
        loop {
            let distance = self.ask_number(&format!("Distance ({}): ", index))?;
            let angle = self.ask_number(&format!("Angle ({}): ", index))?;

            match self.converter.polar(distance, angle) {
                Ok(coord) => return Ok(Coordinate::Polar(coord)),
                Err(e) => writeln!(self.output, "{}, try again", e)?,
            }
        }
    }

    fn ask_rect(&mut self, index: usize) -> Result<Coordinate> {
        let northing = self.ask_number(&format!("Northing ({}): ", index))?;
        let easting = self.ask_number(&format!("Easting ({}): ", index))?;
        Ok(Coordinate::Rectangular(self.converter.rect(northing, easting)?))
    }

    fn ask_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.output, "'{}' is not a number, try again", answer.trim())?,
            }
        }
    }

    fn ask_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(
                    self.output,
                    "'{}' is not a whole number, try again",
                    answer.trim()
                )?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidInput("unexpected end of input".to_string()));
        }
        Ok(line)
    }
}
