//! Product data: generation, classification and aggregation.
//!
//! ## Submodules
//!
//! - [`product`]: The immutable [`Product`] record and its [`ProductBuilder`]
//! - [`generator`]: Seeded synthetic data via [`ProductGenerator`]
//! - [`tier`]: Price and availability bands ([`Thresholds`])
//! - [`breakdown`]: Availability bucket percentages for the chart
//!
//! ## Data Flow
//!
//! ```text
//! ProductGenerator::generate()
//!        │
//!        ▼
//!   Vec<Product> ──▶ Thresholds::{price_tier, availability_tier} (table colors)
//!        │
//!        └──▶ AvailabilityBreakdown::from_products() (chart buckets)
//! ```

pub mod breakdown;
pub mod generator;
pub mod product;
pub mod tier;

pub use breakdown::AvailabilityBreakdown;
pub use generator::{time_seed, ProductGenerator};
pub use product::{Product, ProductBuilder};
pub use tier::{AvailabilityTier, PriceTier, Thresholds};
