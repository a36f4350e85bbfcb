//! Operator-selected filter over platform and application sources.

use std::str::FromStr;

use crate::error::Error;

/// Which class of sources a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Platform components only (non-GUID source ids).
    Platform,
    /// Application sources only, named or not.
    Applications,
    /// Everything.
    #[default]
    All,
}

impl Scope {
    /// Normalize and validate a user-supplied scope.
    ///
    /// Matching is case-insensitive. The empty string is accepted and means
    /// no restriction, i.e. [`Scope::All`].
    pub fn parse(value: &str) -> Result<Self, Error> {
        match value.to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "platform" => Ok(Self::Platform),
            "applications" => Ok(Self::Applications),
            _ => Err(Error::Usage(
                "Scope must be 'platform', 'applications' or 'all'.".to_string(),
            )),
        }
    }

    /// Whether application rows (named or GUID-shaped) are emitted.
    pub fn includes_applications(self) -> bool {
        matches!(self, Self::Applications | Self::All)
    }

    /// Whether platform rows are emitted.
    pub fn includes_platform(self) -> bool {
        matches!(self, Self::Platform | Self::All)
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform => write!(f, "platform"),
            Self::Applications => write!(f, "applications"),
            Self::All => write!(f, "all"),
        }
    }
}
