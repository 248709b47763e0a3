//! Coupons
//!
//! Course pricing with fixed-amount and percentage coupon discounts.

pub mod applications;
pub mod coupons;
pub mod courses;
pub mod discounts;
pub mod fixtures;
pub mod prelude;
pub mod service;
