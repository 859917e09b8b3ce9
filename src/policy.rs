//! Named bargaining-power presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BargainError;

/// Identifier of a labour-protection scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyId {
    Market,
    Moderate,
    Strong,
    Strongest,
}

impl PolicyId {
    /// Wire identifier of the preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyId::Market => "market",
            PolicyId::Moderate => "moderate",
            PolicyId::Strong => "strong",
            PolicyId::Strongest => "strongest",
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyId {
    type Err = BargainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POLICIES
            .iter()
            .map(|policy| policy.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BargainError::UnknownPolicy { id: s.to_string() })
    }
}

/// A bargaining-power preset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Policy {
    pub id: PolicyId,
    /// Human-readable scenario name.
    pub label: &'static str,
    /// Employer's exponent in the Nash product; the worker gets `1 - beta`.
    pub beta: f64,
}

/// Presets ordered from weakest to strongest worker protection.
pub static POLICIES: [Policy; 4] = [
    Policy {
        id: PolicyId::Market,
        label: "Standard protection (market-led)",
        beta: 0.48,
    },
    Policy {
        id: PolicyId::Moderate,
        label: "Moderate protection (worker-leaning)",
        beta: 0.42,
    },
    Policy {
        id: PolicyId::Strong,
        label: "Strong protection (collective bargaining)",
        beta: 0.35,
    },
    Policy {
        id: PolicyId::Strongest,
        label: "Strongest protection (strong unions, strict regulation)",
        beta: 0.28,
    },
];

/// Preset used when an identifier is not recognised.
pub const DEFAULT_POLICY: PolicyId = PolicyId::Strong;

impl Policy {
    fn find(id: PolicyId) -> Option<&'static Policy> {
        POLICIES.iter().find(|policy| policy.id == id)
    }

    /// Returns the preset for `id`, or the [`DEFAULT_POLICY`] preset if the table lacks it.
    pub fn get(id: PolicyId) -> &'static Policy {
        Self::find(id)
            .or_else(|| Self::find(DEFAULT_POLICY))
            .expect("policy table holds the default preset")
    }

    /// Looks a preset up by its wire identifier, falling back to [`DEFAULT_POLICY`].
    pub fn resolve(identifier: &str) -> &'static Policy {
        match identifier.parse::<PolicyId>() {
            Ok(id) => Self::get(id),
            Err(_) => {
                log::debug!("unknown policy `{identifier}`, using `{DEFAULT_POLICY}`");
                Self::get(DEFAULT_POLICY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_weaken_employer_power_in_order() {
        let betas: Vec<f64> = POLICIES.iter().map(|p| p.beta).collect();
        assert_eq!(betas, vec![0.48, 0.42, 0.35, 0.28]);
        assert!(betas.iter().all(|b| *b > 0.0 && *b < 1.0));
    }

    #[test]
    fn every_identifier_has_its_own_preset() {
        for id in [
            PolicyId::Market,
            PolicyId::Moderate,
            PolicyId::Strong,
            PolicyId::Strongest,
        ] {
            assert_eq!(Policy::get(id).id, id);
        }
        assert_eq!(Policy::get(DEFAULT_POLICY).id, DEFAULT_POLICY);
        assert_eq!(Policy::resolve("?").id, DEFAULT_POLICY);
    }

    #[test]
    fn unknown_identifier_falls_back_to_strong() {
        assert_eq!(Policy::resolve("laissez-faire").id, PolicyId::Strong);
        assert_eq!(Policy::resolve("market").beta, 0.48);
    }

    #[test]
    fn strict_parse_reports_unknown() {
        assert_eq!("strongest".parse::<PolicyId>(), Ok(PolicyId::Strongest));
        assert!(matches!(
            "none".parse::<PolicyId>(),
            Err(BargainError::UnknownPolicy { .. })
        ));
    }
}
