//! Coupons Config

use std::path::PathBuf;

use clap::Args;

/// Coupon seeding settings.
#[derive(Debug, Args)]
pub struct CouponsConfig {
    /// YAML fixture holding the demo course and coupons
    #[arg(
        long,
        env = "COUPONS_FIXTURE",
        default_value = "./fixtures/coupons/demo.yml"
    )]
    pub fixture: PathBuf,

    /// Coupon code applied by the demo endpoint
    #[arg(long, env = "COUPONS_DEMO_CODE", default_value = "10PERCENT")]
    pub demo_code: String,
}
