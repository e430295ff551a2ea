//! Premium membership tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MembershipLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MembershipLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipLevel::Bronze => "Bronze",
            MembershipLevel::Silver => "Silver",
            MembershipLevel::Gold => "Gold",
            MembershipLevel::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MembershipLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bronze" => Ok(MembershipLevel::Bronze),
            "silver" => Ok(MembershipLevel::Silver),
            "gold" => Ok(MembershipLevel::Gold),
            "platinum" => Ok(MembershipLevel::Platinum),
            _ => Err(DomainError::parse(format!(
                "Unknown membership level: '{}'. Valid values: bronze, silver, gold, platinum",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Gold".parse::<MembershipLevel>().unwrap(), MembershipLevel::Gold);
        assert_eq!("PLATINUM".parse::<MembershipLevel>().unwrap(), MembershipLevel::Platinum);
        assert!("diamond".parse::<MembershipLevel>().is_err());
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(MembershipLevel::Bronze < MembershipLevel::Gold);
        assert!(MembershipLevel::Platinum > MembershipLevel::Silver);
    }
}
