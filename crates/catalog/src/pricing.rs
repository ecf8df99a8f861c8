use serde::Serialize;

use crate::models::{Book, Money};

/// Savings shown next to a discounted book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discount {
    pub savings: Money,
    /// Whole percent off the original price, rounded half up
    pub percent: u8,
}

impl Discount {
    /// `None` when the book has no original price or sells at it.
    pub fn of(book: &Book) -> Option<Self> {
        let original = book.original_price?;
        let savings = original.saturating_sub(book.price);
        if savings == Money::ZERO {
            return None;
        }

        let original = original.cents();
        let percent = (savings.cents() * 200 + original) / (original * 2);
        Some(Self {
            savings,
            percent: percent.min(100) as u8,
        })
    }
}
