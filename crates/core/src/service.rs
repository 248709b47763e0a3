//! Coupon Service
//!
//! Holds registered coupons and resolves coupon codes against courses.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, trace};

use crate::{
    applications::{ApplicationReason, CouponApplication},
    coupons::Coupon,
    courses::Course,
    discounts::{DiscountError, discount_amount, discounted_price},
};

/// An ordered, append-only collection of coupons.
#[derive(Debug, Clone, Default)]
pub struct CouponService<'a> {
    coupons: Vec<Coupon<'a>>,
}

impl<'a> CouponService<'a> {
    /// Create an empty coupon service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a coupon. Duplicate codes are kept; lookups return the first.
    pub fn add_coupon(&mut self, coupon: Coupon<'a>) {
        self.coupons.push(coupon);
    }

    /// Returns the registered coupons, in insertion order
    pub fn coupons(&self) -> &[Coupon<'a>] {
        &self.coupons
    }

    /// Returns the number of registered coupons
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Returns true if no coupons are registered
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    /// Find the first coupon whose code exactly matches `code`.
    pub fn find_coupon_by_code(&self, code: &str) -> Option<&Coupon<'a>> {
        let found = self.coupons.iter().find(|coupon| coupon.code() == code);

        trace!(code, found = found.is_some(), "coupon lookup");

        found
    }

    /// Resolve the discount a coupon gives on a course.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the coupon's discount is unusable for
    /// this course; see [`discount_amount`].
    pub fn calculate_discount_amount(
        &self,
        course: &Course<'a>,
        coupon: &Coupon<'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        discount_amount(coupon.discount(), course.price())
    }

    /// Apply a coupon code to a course.
    ///
    /// Never fails: unknown codes and invalid coupons are reported through
    /// the returned [`CouponApplication`]. A discount that meets or exceeds
    /// the course price is applied and leaves nothing to pay.
    pub fn apply_coupon(&self, course: &Course<'a>, code: &str) -> CouponApplication<'a> {
        let price = *course.price();

        let Some(coupon) = self.find_coupon_by_code(code) else {
            debug!(code, course = course.name(), "coupon not found");

            return CouponApplication::rejected(code, ApplicationReason::NotFound, price);
        };

        let application = match self
            .calculate_discount_amount(course, coupon)
            .and_then(|discount| Self::settle(code, &price, &discount))
        {
            Ok(application) => application,
            Err(error) => {
                debug!(code, course = course.name(), %error, "coupon rejected");

                CouponApplication::rejected(code, ApplicationReason::from(&error), price)
            }
        };

        debug!(
            code,
            course = course.name(),
            applied = application.is_applied(),
            final_price = application.final_price().to_minor_units(),
            "coupon resolved"
        );

        application
    }

    fn settle(
        code: &str,
        price: &Money<'a, Currency>,
        discount: &Money<'a, Currency>,
    ) -> Result<CouponApplication<'a>, DiscountError> {
        if discount.to_minor_units() >= price.to_minor_units() {
            return Ok(CouponApplication::covered(code, price.currency()));
        }

        Ok(CouponApplication::applied(
            code,
            discounted_price(price, discount)?,
        ))
    }
}

impl<'a> FromIterator<Coupon<'a>> for CouponService<'a> {
    fn from_iter<I: IntoIterator<Item = Coupon<'a>>>(iter: I) -> Self {
        Self {
            coupons: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Coupon<'a>> for CouponService<'a> {
    fn extend<I: IntoIterator<Item = Coupon<'a>>>(&mut self, iter: I) {
        self.coupons.extend(iter);
    }
}
