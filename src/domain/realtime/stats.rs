//! Network statistics snapshot and its one-line rendering

use std::fmt;

use serde::{Deserialize, Serialize};

/// Networks with a dedicated stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Sui,
    Walrus,
}

impl Network {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sui => "Sui",
            Self::Walrus => "Walrus",
        }
    }

    /// Symbol used when rendering stake amounts
    pub fn token_symbol(&self) -> &'static str {
        match self {
            Self::Sui => "SUI",
            Self::Walrus => "WAL",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fields extracted from a stats endpoint. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub active_validators: Option<u64>,
    pub total_stake: Option<f64>,
    pub active_nodes: Option<u64>,
    pub tps: Option<f64>,
}

impl NetworkStats {
    pub fn is_empty(&self) -> bool {
        self.active_validators.is_none()
            && self.total_stake.is_none()
            && self.active_nodes.is_none()
            && self.tps.is_none()
    }

    /// Render the fields that are present, e.g.
    /// `Walrus network stats: Active Validators: 25 | Total Stake: 1,000,000 WAL`.
    /// Returns `None` when no field is present.
    pub fn summary(&self, network: Network) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(validators) = self.active_validators {
            parts.push(format!("Active Validators: {}", validators));
        }

        if let Some(stake) = self.total_stake {
            parts.push(format!(
                "Total Stake: {} {}",
                format_thousands(stake.max(0.0).trunc() as u64),
                network.token_symbol()
            ));
        }

        if let Some(nodes) = self.active_nodes {
            parts.push(format!("Active Nodes: {}", nodes));
        }

        if let Some(tps) = self.tps {
            parts.push(format!("Current TPS: {}", tps));
        }

        if parts.is_empty() {
            return None;
        }

        Some(format!(
            "{} network stats: {}",
            network.display_name(),
            parts.join(" | ")
        ))
    }
}

/// Format an integer with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
