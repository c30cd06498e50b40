//! Component kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MiniError;

/// Category of a registrable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Smallest unit of work: takes input data and produces a result.
    Job,
    /// Orchestrates one or more jobs.
    Feature,
    /// A bounded context grouping jobs and features.
    Service,
    /// Business rules shared across services.
    Domain,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComponentKind; 4] = [Self::Job, Self::Feature, Self::Service, Self::Domain];

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Job => "job",
            Self::Feature => "feature",
            Self::Service => "service",
            Self::Domain => "domain",
        }
    }

    /// Suffix appended to generated type names (`SendEmail` -> `SendEmailJob`).
    pub fn type_suffix(&self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Feature => "Feature",
            Self::Service => "Service",
            Self::Domain => "Domain",
        }
    }

    /// Directory holding components of this kind (`jobs`, `features`, ...).
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Job => "jobs",
            Self::Feature => "features",
            Self::Service => "services",
            Self::Domain => "domains",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = MiniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "job" => Ok(Self::Job),
            "feature" => Ok(Self::Feature),
            "service" => Ok(Self::Service),
            "domain" => Ok(Self::Domain),
            _ => Err(MiniError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Feature".parse::<ComponentKind>().unwrap(), ComponentKind::Feature);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "controller".parse::<ComponentKind>().unwrap_err();
        assert!(matches!(err, MiniError::UnknownKind(ref s) if s == "controller"));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ComponentKind::Domain).unwrap();
        assert_eq!(json, "\"domain\"");
    }
}
