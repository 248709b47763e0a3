//! Coupons prelude.
//!
//! Convenience exports for common library consumers.

pub use decimal_percentage::Percentage;

pub use crate::{
    applications::{ApplicationReason, CouponApplication},
    coupons::{Coupon, CouponDiscount},
    courses::Course,
    discounts::DiscountError,
    fixtures::{CouponsFixture, FixtureError},
    service::CouponService,
};
