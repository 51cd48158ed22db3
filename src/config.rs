//! Rendering options for coordinate text output
//!
//! Options are read from TOML. The crate ships its defaults in
//! `coordinate_format.toml`, which is embedded at compile time and parsed
//! once on first use.

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::coordinate::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::errors::{CoordinateError, CoordinateResult};

lazy_static! {
    static ref DEFAULT_FORMAT: FormatOptions = {
        let content = include_str!("../coordinate_format.toml");
        FormatOptions::from_toml_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in format options: {}", e);
            FormatOptions::builtin()
        })
    };
}

/// How coordinates are rendered as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fractional digits for decimal degrees, seconds and decimal minutes
    pub precision: usize,
    /// Text placed between adjacent components, if any
    pub separator: Option<String>,
}

impl FormatOptions {
    /// Create options with the given precision and separator
    ///
    /// Precision above `MAX_PRECISION` is clamped to it. TOML input is
    /// stricter: `from_toml_str` rejects such values instead.
    pub fn new(precision: usize, separator: Option<&str>) -> Self {
        FormatOptions {
            precision: precision.min(MAX_PRECISION),
            separator: separator.map(str::to_string),
        }
    }

    /// Return a copy of these options using `separator` between components
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = Some(separator.to_string());
        self
    }

    /// Return a copy of these options rendering `precision` fractional
    /// digits, clamped to `MAX_PRECISION`
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// The shipped defaults
    pub fn defaults() -> &'static FormatOptions {
        &DEFAULT_FORMAT
    }

    fn builtin() -> Self {
        FormatOptions {
            precision: DEFAULT_PRECISION,
            separator: None,
        }
    }

    /// Parse options from a TOML document
    ///
    /// Keys are read from a `[format]` table. Missing keys keep the
    /// built-in defaults; an empty `separator` means no separator.
    ///
    /// # Arguments
    /// * `content` - TOML text
    ///
    /// # Returns
    /// The parsed options, or `CoordinateError::InvalidConfig`
    pub fn from_toml_str(content: &str) -> CoordinateResult<Self> {
        let toml_value: toml::Value = content.parse()?;
        let mut options = FormatOptions::builtin();

        let table = match toml_value.get("format") {
            Some(value) => value.as_table().ok_or_else(|| {
                CoordinateError::InvalidConfig("'format' must be a table".to_string())
            })?,
            None => {
                debug!("No [format] table found, using built-in format options");
                return Ok(options);
            },
        };

        if let Some(value) = table.get("precision") {
            let precision = value.as_integer().ok_or_else(|| {
                CoordinateError::InvalidConfig("'precision' must be an integer".to_string())
            })?;
            if precision < 0 || precision as usize > MAX_PRECISION {
                return Err(CoordinateError::InvalidConfig(format!(
                    "'precision' must be between 0 and {}, got {}",
                    MAX_PRECISION, precision
                )));
            }
            options.precision = precision as usize;
        }

        if let Some(value) = table.get("separator") {
            let separator = value.as_str().ok_or_else(|| {
                CoordinateError::InvalidConfig("'separator' must be a string".to_string())
            })?;
            options.separator = if separator.is_empty() {
                None
            } else {
                Some(separator.to_string())
            };
        }

        debug!("Loaded format options: {:?}", options);
        Ok(options)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        DEFAULT_FORMAT.clone()
    }
}
