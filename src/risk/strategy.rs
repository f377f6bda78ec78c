use super::{RiskExposure, RiskTier};
use crate::formatting::round_to;

/// Scoring applied to an aggregated exposure.
pub trait RiskStrategy: Send + Sync {
    fn box_clone(&self) -> Box<dyn RiskStrategy>;
    fn name(&self) -> &'static str;
    fn score(&self, exposure: &RiskExposure) -> f64;

    /// Discrete classification, for strategies that have one.
    fn tier(&self, _exposure: &RiskExposure) -> Option<RiskTier> {
        None
    }
}

impl Clone for Box<dyn RiskStrategy> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Total loss as a percentage of EBITDA, one decimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EbitdaShareStrategy;

impl RiskStrategy for EbitdaShareStrategy {
    fn box_clone(&self) -> Box<dyn RiskStrategy> {
        Box::new(*self)
    }

    fn name(&self) -> &'static str {
        "ebitda-share"
    }

    fn score(&self, exposure: &RiskExposure) -> f64 {
        if exposure.ebitda_value > 0.0 {
            round_to(exposure.total_risk() / exposure.ebitda_value * 100.0, 1)
        } else {
            0.0
        }
    }
}

/// Fixed points per module that contributed a loss.
#[derive(Debug, Clone, Copy)]
pub struct ModuleCountStrategy {
    pub points_per_module: f64,
}

impl Default for ModuleCountStrategy {
    fn default() -> Self {
        Self {
            points_per_module: 20.0,
        }
    }
}

impl RiskStrategy for ModuleCountStrategy {
    fn box_clone(&self) -> Box<dyn RiskStrategy> {
        Box::new(*self)
    }

    fn name(&self) -> &'static str {
        "module-count"
    }

    fn score(&self, exposure: &RiskExposure) -> f64 {
        exposure.contributing_modules() as f64 * self.points_per_module
    }

    fn tier(&self, exposure: &RiskExposure) -> Option<RiskTier> {
        Some(RiskTier::from_score(self.score(exposure)))
    }
}
