//! Commission rates and technology charges

use serde::{Deserialize, Serialize};

use crate::strategy::{CommissionStructure, TechnologyFlags};

/// Agency commission rates by structure, as a fraction of written premium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRates {
    pub independent: f64,
    pub captive: f64,
    pub hybrid: f64,
}

impl CommissionRates {
    /// Commission rate for the given structure
    pub fn rate(&self, structure: CommissionStructure) -> f64 {
        match structure {
            CommissionStructure::Independent => self.independent,
            CommissionStructure::Captive => self.captive,
            CommissionStructure::Hybrid => self.hybrid,
        }
    }
}

/// Flat monthly charges per enabled technology/service flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyCosts {
    pub eo_automation: f64,
    pub renewal_program: f64,
    pub cross_sell_program: f64,
    pub concierge_service: f64,
    pub client_newsletter: f64,
}

impl TechnologyCosts {
    /// Total monthly technology cost for the enabled flags
    pub fn monthly_total(&self, flags: &TechnologyFlags) -> f64 {
        let mut total = 0.0;
        if flags.eo_automation {
            total += self.eo_automation;
        }
        if flags.renewal_program {
            total += self.renewal_program;
        }
        if flags.cross_sell_program {
            total += self.cross_sell_program;
        }
        if flags.concierge_service {
            total += self.concierge_service;
        }
        if flags.client_newsletter {
            total += self.client_newsletter;
        }
        total
    }
}

/// Financial assumption tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAssumptions {
    pub commission: CommissionRates,
    pub technology: TechnologyCosts,
}

impl FinancialAssumptions {
    /// Default rates and charges from the industry reference tables
    pub fn default_industry() -> Self {
        Self {
            commission: CommissionRates {
                independent: 0.12,
                captive: 0.08,
                hybrid: 0.10,
            },
            technology: TechnologyCosts {
                eo_automation: 150.0,
                renewal_program: 200.0,
                cross_sell_program: 125.0,
                concierge_service: 300.0,
                client_newsletter: 50.0,
            },
        }
    }
}
