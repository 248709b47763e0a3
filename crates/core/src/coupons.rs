//! Coupons
//!
//! A coupon is a code paired with at most one discount rule.

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::Currency};

/// The discount rule carried by a coupon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CouponDiscount<'a> {
    /// Subtract a fixed amount from the course price (e.g., "£5 off")
    Fixed(Money<'a, Currency>),

    /// Subtract a percentage of the course price (e.g., "10% off")
    Percent(Percentage),

    /// The coupon carries no usable discount.
    None,
}

/// A coupon that can be redeemed against a course.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon<'a> {
    code: String,
    discount: CouponDiscount<'a>,
}

impl<'a> Coupon<'a> {
    /// Create a coupon from optional fixed and percentage amounts.
    ///
    /// A fixed amount wins when both are given. Neither given yields
    /// [`CouponDiscount::None`]; the coupon is only rejected when applied.
    pub fn new(
        code: impl Into<String>,
        fixed: Option<Money<'a, Currency>>,
        percent: Option<Percentage>,
    ) -> Self {
        let discount = match (fixed, percent) {
            (Some(amount), _) => CouponDiscount::Fixed(amount),
            (None, Some(percent)) => CouponDiscount::Percent(percent),
            (None, None) => CouponDiscount::None,
        };

        Self::with_discount(code, discount)
    }

    /// Create a coupon with the given discount rule.
    pub fn with_discount(code: impl Into<String>, discount: CouponDiscount<'a>) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// Create a fixed amount coupon.
    pub fn fixed(code: impl Into<String>, amount: Money<'a, Currency>) -> Self {
        Self::with_discount(code, CouponDiscount::Fixed(amount))
    }

    /// Create a percentage coupon.
    pub fn percent(code: impl Into<String>, percent: Percentage) -> Self {
        Self::with_discount(code, CouponDiscount::Percent(percent))
    }

    /// Create a coupon without any discount.
    pub fn without_discount(code: impl Into<String>) -> Self {
        Self::with_discount(code, CouponDiscount::None)
    }

    /// Returns the coupon code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the discount rule
    pub fn discount(&self) -> &CouponDiscount<'a> {
        &self.discount
    }
}
