//! Marketplace verticals and account kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The vertical a dealer operates in. One storefront per (dealer, sector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Cars,
    Realestate,
}

impl Sector {
    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Cars => "cars",
            Sector::Realestate => "realestate",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cars" => Ok(Sector::Cars),
            "realestate" => Ok(Sector::Realestate),
            other => Err(CoreError::Validation(format!(
                "Unknown sector '{other}'. Must be one of: [\"cars\", \"realestate\"]"
            ))),
        }
    }
}

impl TryFrom<String> for Sector {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Whether the dealer registered as a person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Individual,
    Company,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Individual => "individual",
            AccountType::Company => "company",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(AccountType::Individual),
            "company" => Ok(AccountType::Company),
            other => Err(CoreError::Validation(format!(
                "Unknown account type '{other}'. Must be one of: [\"individual\", \"company\"]"
            ))),
        }
    }
}

impl TryFrom<String> for AccountType {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
