//! Threshold bands used for coloring and bucketing.
//!
//! The table and the chart both classify through [`Thresholds`], so a
//! product's color and its chart bucket can never disagree.

use rust_decimal::Decimal;

/// Boundaries for price and availability tiers.
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// Prices strictly above this are [`PriceTier::High`].
    pub price_high: Decimal,
    /// Availability below this is [`AvailabilityTier::Critical`].
    pub availability_critical: f32,
    /// Availability below this (and not critical) is [`AvailabilityTier::Warning`].
    pub availability_warning: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            price_high: Decimal::from(500),
            availability_critical: 0.25,
            availability_warning: 0.5,
        }
    }
}

impl Thresholds {
    pub fn price_tier(&self, price: Decimal) -> PriceTier {
        if price > self.price_high {
            PriceTier::High
        } else {
            PriceTier::Low
        }
    }

    pub fn availability_tier(&self, availability: f32) -> AvailabilityTier {
        if availability < self.availability_critical {
            AvailabilityTier::Critical
        } else if availability < self.availability_warning {
            AvailabilityTier::Warning
        } else {
            AvailabilityTier::Ok
        }
    }
}

/// Price band of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Low,
    High,
}

/// Availability band of a product, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AvailabilityTier {
    Critical,
    Warning,
    Ok,
}

impl AvailabilityTier {
    /// All tiers in chart order.
    pub const ALL: [AvailabilityTier; 3] = [
        AvailabilityTier::Critical,
        AvailabilityTier::Warning,
        AvailabilityTier::Ok,
    ];

    /// Label of the chart bucket this tier feeds.
    pub fn bucket_label(&self) -> &'static str {
        match self {
            AvailabilityTier::Critical => "Low",
            AvailabilityTier::Warning => "Medium",
            AvailabilityTier::Ok => "OK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_500_is_low() {
        let t = Thresholds::default();
        assert_eq!(t.price_tier(Decimal::from(500)), PriceTier::Low);
        assert_eq!(t.price_tier(Decimal::new(50_001, 2)), PriceTier::High);
        assert_eq!(t.price_tier(Decimal::ONE), PriceTier::Low);
        assert_eq!(t.price_tier(Decimal::from(1000)), PriceTier::High);
    }

    #[test]
    fn test_availability_boundaries() {
        let t = Thresholds::default();
        assert_eq!(t.availability_tier(0.0), AvailabilityTier::Critical);
        assert_eq!(t.availability_tier(0.249), AvailabilityTier::Critical);
        assert_eq!(t.availability_tier(0.25), AvailabilityTier::Warning);
        assert_eq!(t.availability_tier(0.499), AvailabilityTier::Warning);
        assert_eq!(t.availability_tier(0.5), AvailabilityTier::Ok);
        assert_eq!(t.availability_tier(1.0), AvailabilityTier::Ok);
    }

    #[test]
    fn test_availability_tiers_have_no_gap() {
        let t = Thresholds::default();
        for i in 0..=1000 {
            let a = i as f32 / 1000.0;
            let tier = t.availability_tier(a);
            let expected = if a < 0.25 {
                AvailabilityTier::Critical
            } else if a < 0.5 {
                AvailabilityTier::Warning
            } else {
                AvailabilityTier::Ok
            };
            assert_eq!(tier, expected, "availability {}", a);
        }
    }

    #[test]
    fn test_bucket_labels() {
        let labels: Vec<&str> = AvailabilityTier::ALL.iter().map(|t| t.bucket_label()).collect();
        assert_eq!(labels, vec!["Low", "Medium", "OK"]);
    }
}
