//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers, text values and numeric constraints are enforced at the
//! boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size labels accepted for clothing products.
pub const SIZE_LABELS: [&str; 8] = ["S", "M", "L", "XL", "42", "44", "46", "48"];

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Identifier of a stored product.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Rejects zero and negative identifiers.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value <= 0 {
            return Err(TypeConstraintError::NonPositiveId("product id"));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, trimmed product name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "product name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Finite, non-negative price.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct ProductPrice(f64);

impl ProductPrice {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() {
            return Err(TypeConstraintError::InvalidValue(
                "price must be a finite number".to_string(),
            ));
        }
        if value < 0.0 {
            return Err(TypeConstraintError::NegativeNumber("price"));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Closed set of product categories offered by the shop.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Pantalones,
    Remeras,
    Buzos,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pantalones, Category::Remeras, Category::Buzos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pantalones => "Pantalones",
            Category::Remeras => "Remeras",
            Category::Buzos => "Buzos",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Pantalones" => Ok(Category::Pantalones),
            "Remeras" => Ok(Category::Remeras),
            "Buzos" => Ok(Category::Buzos),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

/// Size label restricted to the fixed vocabulary in [`SIZE_LABELS`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SizeLabel(String);

impl SizeLabel {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "size")?;
        if !SIZE_LABELS.contains(&trimmed.as_str()) {
            return Err(TypeConstraintError::InvalidValue(format!(
                "unknown size label: {trimmed}"
            )));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SizeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative stock quantity for one size of one product.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StockQuantity(i32);

impl StockQuantity {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            return Err(TypeConstraintError::NegativeNumber("stock"));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_non_positive() {
        assert!(ProductId::new(0).is_err());
        assert!(ProductId::new(-3).is_err());
        assert_eq!(ProductId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn product_name_trims_and_rejects_empty() {
        assert_eq!(ProductName::new("  Jean  ").unwrap().as_str(), "Jean");
        assert!(ProductName::new("   ").is_err());
    }

    #[test]
    fn price_rejects_negative_and_non_finite() {
        assert!(ProductPrice::new(-0.01).is_err());
        assert!(ProductPrice::new(f64::NAN).is_err());
        assert_eq!(ProductPrice::new(49.99).unwrap().get(), 49.99);
    }

    #[test]
    fn category_round_trips_known_values() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
        }
        assert!(Category::try_from("Zapatos").is_err());
    }

    #[test]
    fn size_label_enforces_vocabulary() {
        assert_eq!(SizeLabel::new("42").unwrap().as_str(), "42");
        assert_eq!(SizeLabel::new(" XL ").unwrap().as_str(), "XL");
        assert!(SizeLabel::new("XXL").is_err());
    }

    #[test]
    fn stock_rejects_negative() {
        assert!(StockQuantity::new(-1).is_err());
        assert_eq!(StockQuantity::new(0).unwrap().get(), 0);
    }
}
