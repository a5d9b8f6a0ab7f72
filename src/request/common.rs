//! Common types used across multiple endpoints
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting frequency of a statistics series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One observation per business day
    Daily,
    /// One observation per calendar month
    Monthly,
    /// One observation per calendar quarter
    Quarterly,
    /// One observation per calendar year
    Annual,
}

impl FromStr for Frequency {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annual" => Ok(Frequency::Annual),
            _ => Err(crate::error::Error::Custom(format!("Invalid frequency: {s}"))),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Annual => write!(f, "annual"),
        }
    }
}
