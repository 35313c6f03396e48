//! The product record and its builder.

use rust_decimal::Decimal;

use crate::error::{Result, ShowcaseError};

/// A synthetic product record.
///
/// Fields are fixed at construction; use [`ProductBuilder`] when values
/// are produced one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Decimal,
    availability: f32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, availability: f32) -> Self {
        Self {
            name: name.into(),
            price,
            availability,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn availability(&self) -> f32 {
        self.availability
    }
}

/// Mutable staging area for a [`Product`].
///
/// Every field must be set before [`ProductBuilder::build`] succeeds.
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    price: Option<Decimal>,
    availability: Option<f32>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn availability(mut self, availability: f32) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Freeze the builder into an immutable [`Product`].
    pub fn build(self) -> Result<Product> {
        Ok(Product {
            name: self.name.ok_or(ShowcaseError::MissingField("name"))?,
            price: self.price.ok_or(ShowcaseError::MissingField("price"))?,
            availability: self
                .availability
                .ok_or(ShowcaseError::MissingField("availability"))?,
        })
    }
}
