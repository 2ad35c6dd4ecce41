//! Client configuration

use crate::error::ConfigError;
use chrono::FixedOffset;
use chrono::format::{Item, StrftimeItems};
use std::path::PathBuf;

/// `EnvFilter` directive used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str = "venue_table=info";

/// Default venues endpoint of the local backend
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/venues";

/// Id of the element the renderer mounts into
pub const DEFAULT_CONTAINER_ID: &str = "table-container";

/// Month/day/year with 12-hour clock, e.g. `6/1/2025, 8:00:00 PM`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time zone used to display event dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host's local zone
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Parse `Z`, `UTC`, `local`, or a `+hh:mm` / `-hhmm` / `+hh` offset
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("local") {
            return Some(Self::Local);
        }
        if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0).map(Self::Fixed);
        }

        let (sign, rest) = match raw.as_bytes().first()? {
            b'+' => (1, &raw[1..]),
            b'-' => (-1, &raw[1..]),
            _ => return None,
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let (hours, minutes) = match digits.len() {
            2 => (digits.parse::<i32>().ok()?, 0),
            4 => (
                digits[..2].parse::<i32>().ok()?,
                digits[2..].parse::<i32>().ok()?,
            ),
            _ => return None,
        };
        if minutes >= 60 {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).map(Self::Fixed)
    }
}

/// Configuration for one render pass
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the venues endpoint (e.g., "http://127.0.0.1:5000/api/venues")
    pub endpoint: String,

    /// Id of the container element
    pub container_id: String,

    /// Where the binary writes the rendered page; `-` means stdout
    pub output: PathBuf,

    /// strftime pattern for event dates
    pub date_format: String,

    /// Zone event dates are shown in
    pub display_zone: DisplayZone,

    /// Request timeout in seconds; `None` leaves it to the transport
    pub timeout: Option<u64>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Directory for daily rolling log files
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            output: PathBuf::from("venues.html"),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            display_zone: DisplayZone::Local,
            timeout: None,
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("VENUE_API_URL") {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::Missing("VENUE_API_URL"));
            }
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(id) = lookup("VENUE_CONTAINER_ID") {
            if id.trim().is_empty() {
                return Err(ConfigError::Missing("VENUE_CONTAINER_ID"));
            }
            config.container_id = id.trim().to_string();
        }
        if let Some(output) = lookup("VENUE_OUTPUT") {
            config.output = PathBuf::from(output);
        }
        if let Some(format) = lookup("VENUE_DATE_FORMAT") {
            if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::InvalidValue {
                    key: "VENUE_DATE_FORMAT",
                    value: format,
                });
            }
            config.date_format = format;
        }
        if let Some(zone) = lookup("VENUE_UTC_OFFSET") {
            config.display_zone =
                DisplayZone::parse(&zone).ok_or(ConfigError::InvalidValue {
                    key: "VENUE_UTC_OFFSET",
                    value: zone,
                })?;
        }
        if let Some(timeout) = lookup("VENUE_TIMEOUT_SECS") {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "VENUE_TIMEOUT_SECS",
                    value: timeout.clone(),
                })?;
            config.timeout = Some(secs);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }
        config.log_dir = lookup("LOG_DIR").map(PathBuf::from);

        Ok(config)
    }

    /// Set the container element id
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the event date format
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the display zone
    pub fn with_display_zone(mut self, zone: DisplayZone) -> Self {
        self.display_zone = zone;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create a network venue source from this configuration
    pub fn build_source(&self) -> crate::FetchResult<crate::http::NetworkVenueSource> {
        crate::http::NetworkVenueSource::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
