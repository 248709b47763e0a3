//! Coupon Applications

pub(crate) mod handlers;
pub(crate) mod responses;
