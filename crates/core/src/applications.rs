//! Coupon Applications
//!
//! The outcome of redeeming a coupon code against a course.

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::discounts::DiscountError;

/// Why a coupon application ended the way it did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplicationReason {
    /// No coupon is registered under the code.
    NotFound,

    /// The coupon's percentage discount is above 100%.
    PercentTooLarge,

    /// The coupon carries no usable discount.
    NoDiscount,

    /// The coupon's fixed discount is in a different currency to the course.
    CurrencyMismatch,

    /// The discount met or exceeded the course price, so the course is free.
    DiscountCoversPrice,
}

impl ApplicationReason {
    /// Human-readable description of the reason.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationReason::NotFound => "Coupon not found",
            ApplicationReason::PercentTooLarge => {
                "Percent discount must be less than or equal to 100%"
            }
            ApplicationReason::NoDiscount => "No valid discount on coupon",
            ApplicationReason::CurrencyMismatch => {
                "Coupon currency does not match course currency"
            }
            ApplicationReason::DiscountCoversPrice => "Discount met or exceeded course price",
        }
    }
}

impl fmt::Display for ApplicationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DiscountError> for ApplicationReason {
    fn from(error: &DiscountError) -> Self {
        match error {
            DiscountError::PercentTooLarge => ApplicationReason::PercentTooLarge,
            DiscountError::CurrencyMismatch { .. } => ApplicationReason::CurrencyMismatch,
            DiscountError::NoDiscount
            | DiscountError::PercentConversion
            | DiscountError::Money(_) => ApplicationReason::NoDiscount,
        }
    }
}

/// The result of applying a coupon code to a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponApplication<'a> {
    code: String,
    applied: bool,
    reason: Option<ApplicationReason>,
    final_price: Money<'a, Currency>,
}

impl<'a> CouponApplication<'a> {
    /// The coupon was applied, leaving `final_price` to pay.
    pub fn applied(code: impl Into<String>, final_price: Money<'a, Currency>) -> Self {
        Self {
            code: code.into(),
            applied: true,
            reason: None,
            final_price,
        }
    }

    /// The coupon was applied and covered the whole price.
    pub fn covered(code: impl Into<String>, currency: &'a Currency) -> Self {
        Self {
            code: code.into(),
            applied: true,
            reason: Some(ApplicationReason::DiscountCoversPrice),
            final_price: Money::from_minor(0, currency),
        }
    }

    /// The coupon was not applied; the original price stands.
    pub fn rejected(
        code: impl Into<String>,
        reason: ApplicationReason,
        original_price: Money<'a, Currency>,
    ) -> Self {
        Self {
            code: code.into(),
            applied: false,
            reason: Some(reason),
            final_price: original_price,
        }
    }

    /// Returns the code that was redeemed
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns whether the coupon was applied
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Returns the reason, if any
    pub fn reason(&self) -> Option<ApplicationReason> {
        self.reason
    }

    /// Returns the price left to pay
    pub fn final_price(&self) -> &Money<'a, Currency> {
        &self.final_price
    }

    /// A message restating the outcome.
    pub fn message(&self) -> String {
        match (self.applied, self.reason) {
            (true, Some(reason)) => format!(
                "Coupon {} applied: {reason}, final price is {}",
                self.code, self.final_price
            ),
            (true, None) => format!(
                "Coupon {} applied, final price is {}",
                self.code, self.final_price
            ),
            (false, Some(reason)) => format!(
                "Coupon {} not applied: {reason}, price remains {}",
                self.code, self.final_price
            ),
            (false, None) => format!(
                "Coupon {} not applied, price remains {}",
                self.code, self.final_price
            ),
        }
    }
}
