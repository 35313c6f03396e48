//! Synthetic product generation.
//!
//! Values come from a seeded [`StdRng`], so a run can be replayed by passing
//! the same seed again.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::product::{Product, ProductBuilder};
use crate::error::Result;

/// Commerce-style product nouns.
const PRODUCT_NAMES: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// Price range in cents, both ends inclusive (1.00 to 1000.00).
const PRICE_CENTS_MIN: i64 = 100;
const PRICE_CENTS_MAX: i64 = 100_000;

/// Produces [`Product`] values from a seeded random source.
#[derive(Debug, Clone)]
pub struct ProductGenerator {
    seed: u64,
    rng: StdRng,
}

impl ProductGenerator {
    /// Create a generator with an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` products. A count of zero yields an empty list.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Product>> {
        tracing::debug!(count, seed = self.seed, "generating products");
        (0..count).map(|_| self.next_product()).collect()
    }

    fn next_product(&mut self) -> Result<Product> {
        let name = PRODUCT_NAMES.choose(&mut self.rng).copied().unwrap_or("Product");
        let cents = self.rng.gen_range(PRICE_CENTS_MIN..=PRICE_CENTS_MAX);
        let availability: f32 = self.rng.gen();

        ProductBuilder::new()
            .name(name)
            .price(Decimal::new(cents, 2))
            .availability(availability)
            .build()
    }
}

/// Derive a seed from the wall clock.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
