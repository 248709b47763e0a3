//! Coupon Application Handlers

pub(crate) mod create;
pub(crate) mod demo;
