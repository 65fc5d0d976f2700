//! Channel funnel model
//!
//! Converts per-channel marketing spend into leads and then into new
//! customers using fixed cost-per-lead and conversion-rate coefficients.
//! Pure functions of their inputs; the caller validates that no channel
//! carries a non-positive cost per lead.

use serde::{Deserialize, Serialize};

use crate::strategy::{Channel, MarketingSpend};

/// Funnel coefficients for a single channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FunnelCoefficients {
    /// Dollars of spend required to generate one lead (must be > 0)
    pub cost_per_lead: f64,

    /// Fraction of leads that convert into customers
    pub conversion_rate: f64,
}

/// Fixed per-channel funnel coefficients, not user-editable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCoefficients {
    pub referral: FunnelCoefficients,
    pub digital: FunnelCoefficients,
    pub traditional: FunnelCoefficients,
    pub partnerships: FunnelCoefficients,
}

/// Derived per-channel funnel output, recomputed each run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChannelMetrics {
    pub channel: Channel,
    pub spend: f64,
    pub leads: f64,
    pub converted_customers: f64,
}

impl ChannelCoefficients {
    /// Default coefficients from the industry reference tables
    pub fn default_industry() -> Self {
        Self {
            referral: FunnelCoefficients {
                cost_per_lead: 50.0,
                conversion_rate: 0.60,
            },
            digital: FunnelCoefficients {
                cost_per_lead: 85.0,
                conversion_rate: 0.12,
            },
            traditional: FunnelCoefficients {
                cost_per_lead: 120.0,
                conversion_rate: 0.08,
            },
            partnerships: FunnelCoefficients {
                cost_per_lead: 60.0,
                conversion_rate: 0.35,
            },
        }
    }

    /// Coefficients for a single channel
    pub fn get(&self, channel: Channel) -> FunnelCoefficients {
        match channel {
            Channel::Referral => self.referral,
            Channel::Digital => self.digital,
            Channel::Traditional => self.traditional,
            Channel::Partnerships => self.partnerships,
        }
    }

    /// Funnel output for one channel at a given monthly spend
    pub fn metrics(&self, channel: Channel, spend: f64) -> ChannelMetrics {
        let coeff = self.get(channel);
        let leads = spend / coeff.cost_per_lead;
        ChannelMetrics {
            channel,
            spend,
            leads,
            converted_customers: leads * coeff.conversion_rate,
        }
    }

    /// Funnel output for every channel at the configured spend
    pub fn all_metrics(&self, spend: &MarketingSpend) -> Vec<ChannelMetrics> {
        Channel::ALL
            .iter()
            .map(|&c| self.metrics(c, spend.get(c)))
            .collect()
    }

    /// Total new customers per month across all channels, before any
    /// scenario multiplier or ramp scaling
    pub fn total_converted(&self, spend: &MarketingSpend) -> f64 {
        Channel::ALL
            .iter()
            .map(|&c| self.metrics(c, spend.get(c)).converted_customers)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zero_spend() -> MarketingSpend {
        MarketingSpend {
            referral: 0.0,
            digital: 0.0,
            traditional: 0.0,
            partnerships: 0.0,
        }
    }

    #[test]
    fn test_referral_funnel() {
        let coeffs = ChannelCoefficients::default_industry();
        // $500 at $50/lead and 60% conversion = 10 leads, 6 customers
        let m = coeffs.metrics(Channel::Referral, 500.0);
        assert_relative_eq!(m.leads, 10.0);
        assert_relative_eq!(m.converted_customers, 6.0);
    }

    #[test]
    fn test_zero_spend_converts_nobody() {
        let coeffs = ChannelCoefficients::default_industry();
        assert_relative_eq!(coeffs.total_converted(&zero_spend()), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_channels() {
        let coeffs = ChannelCoefficients::default_industry();
        let spend = MarketingSpend {
            referral: 500.0,
            digital: 850.0,
            traditional: 0.0,
            partnerships: 600.0,
        };
        // 6.0 + (10 * 0.12) + 0 + (10 * 0.35)
        assert_relative_eq!(coeffs.total_converted(&spend), 6.0 + 1.2 + 3.5);

        let per_channel: f64 = coeffs
            .all_metrics(&spend)
            .iter()
            .map(|m| m.converted_customers)
            .sum();
        assert_relative_eq!(per_channel, coeffs.total_converted(&spend));
    }
}
