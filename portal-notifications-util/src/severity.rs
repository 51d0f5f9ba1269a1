use crate::Variant;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

/// Severity of a notification; drives the icon, accent color and preset defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    /// Informational notification (default)
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Auto-dismiss delay used by the categorized constructors, in milliseconds
    pub const fn default_duration_ms(self) -> u32 {
        match self {
            Severity::Error => 8000,
            Severity::Success => 4000,
            Severity::Warning => 6000,
            Severity::Info => 5000,
        }
    }

    pub const fn default_duration(self) -> Duration {
        Duration::from_millis(self.default_duration_ms() as u64)
    }

    /// Visual style used by the categorized constructors
    pub const fn default_variant(self) -> Variant {
        match self {
            Severity::Error | Severity::Success => Variant::Filled,
            Severity::Warning => Variant::Outlined,
            Severity::Info => Variant::Standard,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification type: {}", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
