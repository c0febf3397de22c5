//! Configuration types for penalty calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the penalty policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// ISO 4217 currency code for all amounts (e.g., "PHP").
    pub currency: String,
}

/// How penalties from the two attendance sources are combined.
///
/// Dual-session and class-schedule accounting are independent; the same day
/// can be penalized by both paths. Making the combination mode an explicit
/// configuration value keeps that policy visible rather than implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCombination {
    /// Sum both sources with no cross-source deduplication.
    Additive,
}

/// Penalty rates and calculation defaults from rates.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyRates {
    /// Late-arrival penalty per whole minute, in pesos.
    pub late_rate_per_minute: Decimal,
    /// Penalty per absence, in pesos.
    pub absence_penalty: Decimal,
    /// Length of the default rolling window when no period is given, in days.
    pub rolling_window_days: i64,
    /// How the two attendance sources are combined.
    pub source_combination: SourceCombination,
}

/// The complete penalty policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PenaltyPolicy {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Penalty rates and calculation defaults.
    pub rates: PenaltyRates,
}

impl PenaltyPolicy {
    /// Creates a new PenaltyPolicy from its component parts.
    pub fn new(metadata: PolicyMetadata, rates: PenaltyRates) -> Self {
        Self { metadata, rates }
    }
}
