//! Static industry benchmark thresholds and classification tables
//!
//! Pure data plus first-match-wins lookups evaluated on descending
//! thresholds. No learned or adaptive component.

use serde::{Deserialize, Serialize};

/// Rule-of-20 composite health rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleOf20Rating {
    TopPerformer,
    Healthy,
    NeedsImprovement,
    AtRisk,
}

impl RuleOf20Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOf20Rating::TopPerformer => "Top Performer",
            RuleOf20Rating::Healthy => "Healthy",
            RuleOf20Rating::NeedsImprovement => "Needs Improvement",
            RuleOf20Rating::AtRisk => "At Risk",
        }
    }
}

/// EBITDA margin band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EbitdaStatus {
    Excellent,
    Target,
    Acceptable,
    BelowTarget,
}

impl EbitdaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EbitdaStatus::Excellent => "Excellent",
            EbitdaStatus::Target => "Target",
            EbitdaStatus::Acceptable => "Acceptable",
            EbitdaStatus::BelowTarget => "Below Target",
        }
    }
}

/// LTV:CAC band
///
/// The under-invested band sits numerically above "Great": a ratio that is
/// too high is itself flagged as overly conservative spend, not celebrated.
/// The ordering is preserved from the published benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LtvCacStatus {
    UnderInvested,
    Great,
    Good,
    NeedsImprovement,
}

impl LtvCacStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LtvCacStatus::UnderInvested => "Under-invested",
            LtvCacStatus::Great => "Great",
            LtvCacStatus::Good => "Good",
            LtvCacStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Revenue-per-employee band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueEfficiency {
    Excellent,
    Good,
    Acceptable,
    BelowTarget,
}

impl RevenueEfficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueEfficiency::Excellent => "Excellent",
            RevenueEfficiency::Good => "Good",
            RevenueEfficiency::Acceptable => "Acceptable",
            RevenueEfficiency::BelowTarget => "Below Target",
        }
    }
}

/// Bundling tier by policies-per-customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundlingTier {
    Optimal,
    Bundled,
    Monoline,
}

impl BundlingTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundlingTier::Optimal => "Optimal",
            BundlingTier::Bundled => "Bundled",
            BundlingTier::Monoline => "Monoline",
        }
    }
}

/// Static reference thresholds for agency health classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkTable {
    /// Rule-of-20 score thresholds: top performer / healthy / needs improvement
    pub rule_of_20: [f64; 3],

    /// EBITDA margin thresholds (fractions): excellent / target / acceptable
    pub ebitda_margin: [f64; 3],

    /// LTV:CAC thresholds: under-invested / great / good
    pub ltv_cac: [f64; 3],

    /// Annual revenue per employee thresholds: excellent / good / acceptable
    pub revenue_per_employee: [f64; 3],

    /// Policies-per-customer thresholds: optimal / bundled
    pub policies_per_customer: [f64; 2],

    /// Target service-staff-per-producer ratio
    pub staffing_ratio_target: f64,

    /// Healthy marketing spend as a fraction of annual revenue (min, max)
    pub marketing_spend_range: (f64, f64),

    /// Healthy technology spend as a fraction of annual revenue (min, max)
    pub tech_spend_range: (f64, f64),
}

impl BenchmarkTable {
    /// Published industry thresholds
    pub fn default_industry() -> Self {
        Self {
            rule_of_20: [25.0, 20.0, 15.0],
            ebitda_margin: [0.30, 0.25, 0.20],
            ltv_cac: [5.0, 4.0, 3.0],
            revenue_per_employee: [300_000.0, 200_000.0, 150_000.0],
            policies_per_customer: [1.8, 1.5],
            staffing_ratio_target: 1.5,
            marketing_spend_range: (0.05, 0.15),
            tech_spend_range: (0.01, 0.05),
        }
    }

    /// Classify a Rule-of-20 score
    pub fn classify_rule_of_20(&self, score: f64) -> RuleOf20Rating {
        if score >= self.rule_of_20[0] {
            RuleOf20Rating::TopPerformer
        } else if score >= self.rule_of_20[1] {
            RuleOf20Rating::Healthy
        } else if score >= self.rule_of_20[2] {
            RuleOf20Rating::NeedsImprovement
        } else {
            RuleOf20Rating::AtRisk
        }
    }

    /// Classify an EBITDA margin (fraction, not percent)
    pub fn classify_ebitda(&self, margin: f64) -> EbitdaStatus {
        if margin >= self.ebitda_margin[0] {
            EbitdaStatus::Excellent
        } else if margin >= self.ebitda_margin[1] {
            EbitdaStatus::Target
        } else if margin >= self.ebitda_margin[2] {
            EbitdaStatus::Acceptable
        } else {
            EbitdaStatus::BelowTarget
        }
    }

    /// Classify an LTV:CAC ratio
    pub fn classify_ltv_cac(&self, ratio: f64) -> LtvCacStatus {
        if ratio >= self.ltv_cac[0] {
            LtvCacStatus::UnderInvested
        } else if ratio >= self.ltv_cac[1] {
            LtvCacStatus::Great
        } else if ratio >= self.ltv_cac[2] {
            LtvCacStatus::Good
        } else {
            LtvCacStatus::NeedsImprovement
        }
    }

    /// Classify annual revenue per employee
    pub fn classify_revenue_per_employee(&self, revenue: f64) -> RevenueEfficiency {
        if revenue >= self.revenue_per_employee[0] {
            RevenueEfficiency::Excellent
        } else if revenue >= self.revenue_per_employee[1] {
            RevenueEfficiency::Good
        } else if revenue >= self.revenue_per_employee[2] {
            RevenueEfficiency::Acceptable
        } else {
            RevenueEfficiency::BelowTarget
        }
    }

    /// Classify a bundling ratio
    pub fn classify_bundling(&self, policies_per_customer: f64) -> BundlingTier {
        if policies_per_customer >= self.policies_per_customer[0] {
            BundlingTier::Optimal
        } else if policies_per_customer >= self.policies_per_customer[1] {
            BundlingTier::Bundled
        } else {
            BundlingTier::Monoline
        }
    }
}
