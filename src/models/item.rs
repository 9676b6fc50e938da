use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

/// Items with fewer units than this on hand are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// A stocked product as the inventory service reports it.
///
/// Prices travel as JSON numbers on the wire (the backend stores them as
/// doubles), hence the float codec on `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Item {
    pub fn stock_level(&self) -> StockLevel {
        match self.quantity {
            0 => StockLevel::Out,
            q if q < LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::InStock,
        }
    }
}

/// Display classification of an item's quantity on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    InStock,
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Out => write!(f, "out of stock"),
            StockLevel::Low => write!(f, "low stock"),
            StockLevel::InStock => write!(f, "in stock"),
        }
    }
}

/// Body of `POST /items`. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl NewItem {
    /// Form-level checks, applied before any request is issued: a non-blank
    /// name, and no negative quantity or price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if self.quantity < 0 || self.price < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Body of `POST /items/{id}/adjust`: a signed, relative change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuantityAdjustment {
    pub delta: i32,
}
