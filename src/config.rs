//! Conversion profiles and server settings

use std::env::var;
use std::fmt;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::AngleUnit;

/// Environment variable holding the API server bind address
pub const BIND_ADDR_VAR: &str = "BEARING_CONVERT_ADDR";

/// Environment variable holding the request body limit in bytes
pub const BODY_LIMIT_VAR: &str = "BEARING_CONVERT_BODY_LIMIT";

/// Environment variable naming the profile used when a request omits one
pub const PROFILE_VAR: &str = "BEARING_CONVERT_PROFILE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// How the conversion core interprets and post-processes angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionProfile {
    /// Unit of input angles and of computed angles
    pub angle_unit: AngleUnit,
    /// Reduce angles into `[0, full_turn)`
    pub normalize: bool,
    /// Reject negative polar distances
    pub validate_nonnegative_distance: bool,
}

impl ConversionProfile {
    /// Degrees, normalized bearings, validated distances
    pub const fn survey() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            normalize: true,
            validate_nonnegative_distance: true,
        }
    }

    /// Radians straight from `atan2`, no normalization and no distance check
    pub const fn legacy() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            normalize: false,
            validate_nonnegative_distance: false,
        }
    }

    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_nonnegative_distance = validate;
        self
    }
}

impl Default for ConversionProfile {
    fn default() -> Self {
        Self::survey()
    }
}

/// Named presets selectable from the command line and the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    #[default]
    Survey,
    Legacy,
}

impl ProfileName {
    pub fn profile(&self) -> ConversionProfile {
        match self {
            ProfileName::Survey => ConversionProfile::survey(),
            ProfileName::Legacy => ConversionProfile::legacy(),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "survey" => Some(ProfileName::Survey),
            "legacy" => Some(ProfileName::Legacy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProfileName::Survey => "survey",
            ProfileName::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for the HTTP API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
    pub default_profile: ProfileName,
}

impl ServerConfig {
    /// Reads settings from the environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::InvalidInput(format!("{}: {}", BIND_ADDR_VAR, e)))?;

        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|e| Error::InvalidInput(format!("{}: {}", BODY_LIMIT_VAR, e)))?,
            None => DEFAULT_BODY_LIMIT,
        };

        let default_profile = match lookup(PROFILE_VAR) {
            Some(value) => ProfileName::parse(&value).ok_or_else(|| {
                Error::InvalidInput(format!("{}: unknown profile '{}'", PROFILE_VAR, value))
            })?,
            None => ProfileName::default(),
        };

        Ok(Self {
            bind_addr,
            body_limit,
            default_profile,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit: DEFAULT_BODY_LIMIT,
            default_profile: ProfileName::default(),
        }
    }
}
