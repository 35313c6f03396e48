//! Availability bucket counts and percentage shares for the chart.

use super::product::Product;
use super::tier::{AvailabilityTier, Thresholds};

/// Number of products in each availability bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub ok: usize,
}

impl AvailabilityBreakdown {
    /// Count products per bucket using the same thresholds as the table.
    pub fn from_products(products: &[Product], thresholds: &Thresholds) -> Self {
        let mut breakdown = Self::default();
        for product in products {
            match thresholds.availability_tier(product.availability()) {
                AvailabilityTier::Critical => breakdown.low += 1,
                AvailabilityTier::Warning => breakdown.medium += 1,
                AvailabilityTier::Ok => breakdown.ok += 1,
            }
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.ok
    }

    pub fn count(&self, tier: AvailabilityTier) -> usize {
        match tier {
            AvailabilityTier::Critical => self.low,
            AvailabilityTier::Warning => self.medium,
            AvailabilityTier::Ok => self.ok,
        }
    }

    /// Share of the bucket as a percentage of all products.
    ///
    /// Returns 0.0 for every bucket when there are no products.
    pub fn percentage(&self, tier: AvailabilityTier) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / total as f64 * 100.0
    }
}
