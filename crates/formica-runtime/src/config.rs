//! Update-rule configuration: raw parameters and their validated form.
//!
//! Raw parameters come from a TOML document (or are built in code) and
//! are validated exactly once. A rejected configuration is fatal: it is
//! logged at error level and handed back to the host to abort setup.

use formica_core::error::ConfigError;
use formica_core::types::DepositRule;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

pub const P_DECAY_RATE: &str = "decay_rate";
pub const P_DEPOSIT_RULE: &str = "deposit_rule";
pub const P_Q: &str = "q";

/// `Q` used by `AntCycle` when none is configured.
pub const DEFAULT_Q: f64 = 1.0;

/// Unvalidated update-rule parameters, as a configuration source supplies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRuleParams {
    #[serde(default)]
    pub decay_rate: Option<f64>,
    #[serde(default)]
    pub deposit_rule: Option<String>,
    #[serde(default)]
    pub q: Option<f64>,
    /// Table the parameters were read from, used to name them in errors.
    #[serde(skip)]
    pub base: Option<String>,
}

impl UpdateRuleParams {
    pub fn new(decay_rate: f64, deposit_rule: impl Into<String>) -> Self {
        Self {
            decay_rate: Some(decay_rate),
            deposit_rule: Some(deposit_rule.into()),
            q: None,
            base: None,
        }
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Parse parameters from TOML.
    ///
    /// With a `base` like `"colony.update_rule"` the parameters are read from
    /// that (dotted) table; without one, from the top level.
    pub fn from_toml_str(content: &str, base: Option<&str>) -> Result<Self, ConfigError> {
        let root = content
            .parse::<toml::Table>()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut table = root;
        if let Some(base) = base {
            for segment in base.split('.') {
                table = match table.remove(segment) {
                    Some(toml::Value::Table(inner)) => inner,
                    Some(_) => {
                        return Err(ConfigError::Parse(format!(
                            "'{}' is not a table",
                            base
                        )))
                    }
                    None => toml::Table::new(),
                };
            }
        }

        let params = toml::Value::Table(table)
            .try_into::<UpdateRuleParams>()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(match base {
            Some(base) => params.with_base(base),
            None => params,
        })
    }

    /// Read and parse a TOML parameter file.
    pub fn load(path: &Path, base: Option<&str>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content, base)
    }

    /// Fully qualified name of a parameter, for error messages.
    pub fn parameter(&self, key: &str) -> String {
        match &self.base {
            Some(base) => format!("{}.{}", base, key),
            None => key.to_string(),
        }
    }
}

/// Validated Ant System configuration. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AntSystemConfig {
    decay_rate: f64,
    deposit_rule: DepositRule,
    q: Option<f64>,
}

impl AntSystemConfig {
    /// Build a configuration from typed values, with the same checks as
    /// [`AntSystemConfig::from_params`].
    pub fn new(
        decay_rate: f64,
        deposit_rule: DepositRule,
        q: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let params = UpdateRuleParams {
            decay_rate: Some(decay_rate),
            deposit_rule: Some(deposit_rule.name().to_string()),
            q,
            base: None,
        };
        Self::from_params(&params)
    }

    /// Validate raw parameters.
    ///
    /// `Q` is only checked (and defaulted) for `AntCycle`. The other rules
    /// take whatever `Q` was supplied, if any.
    pub fn from_params(params: &UpdateRuleParams) -> Result<Self, ConfigError> {
        Self::validate(params).map_err(|err| {
            error!(%err, "fatal: rejecting ant system configuration");
            err
        })
    }

    fn validate(params: &UpdateRuleParams) -> Result<Self, ConfigError> {
        let decay_rate = params
            .decay_rate
            .ok_or_else(|| ConfigError::MissingParameter {
                parameter: params.parameter(P_DECAY_RATE),
            })?;
        if !decay_rate.is_finite() || !(0.0..1.0).contains(&decay_rate) {
            return Err(ConfigError::InvalidDecayRate {
                parameter: params.parameter(P_DECAY_RATE),
                value: decay_rate,
            });
        }

        let deposit_rule = params
            .deposit_rule
            .as_deref()
            .and_then(|name| name.parse::<DepositRule>().ok())
            .ok_or_else(|| ConfigError::UnknownDepositRule {
                parameter: params.parameter(P_DEPOSIT_RULE),
                value: params.deposit_rule.clone(),
            })?;

        let q = match deposit_rule {
            DepositRule::AntCycle => {
                let q = params.q.unwrap_or(DEFAULT_Q);
                if !q.is_finite() || q <= 0.0 {
                    return Err(ConfigError::InvalidQ {
                        parameter: params.parameter(P_Q),
                        value: q,
                    });
                }
                Some(q)
            }
            DepositRule::AntDensity | DepositRule::AntQuantity => params.q,
        };

        let config = Self {
            decay_rate,
            deposit_rule,
            q,
        };
        debug_assert!(config.is_consistent());
        info!(
            decay_rate,
            deposit_rule = %deposit_rule,
            q = ?q,
            "ant system configuration accepted"
        );
        Ok(config)
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    pub fn deposit_rule(&self) -> DepositRule {
        self.deposit_rule
    }

    pub fn q(&self) -> Option<f64> {
        self.q
    }

    /// Fraction of old pheromone kept on a touched edge: `1 - decay_rate`.
    pub fn retention(&self) -> f64 {
        1.0 - self.decay_rate
    }

    /// Representation invariant: decay rate finite and in `[0, 1)`, and a
    /// positive finite `Q` under `AntCycle`.
    pub fn is_consistent(&self) -> bool {
        let decay_ok = self.decay_rate.is_finite() && (0.0..1.0).contains(&self.decay_rate);
        let q_ok = match self.deposit_rule {
            DepositRule::AntCycle => self.q.is_some_and(|q| q.is_finite() && q > 0.0),
            DepositRule::AntDensity | DepositRule::AntQuantity => true,
        };
        decay_ok && q_ok
    }
}
