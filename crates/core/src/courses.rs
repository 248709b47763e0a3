//! Courses

use rusty_money::{Money, iso::Currency};

/// A priced course that coupons can discount.
#[derive(Debug, Clone, PartialEq)]
pub struct Course<'a> {
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> Course<'a> {
    /// Create a new course.
    pub fn new(name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Returns the display name of the course
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the course
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
