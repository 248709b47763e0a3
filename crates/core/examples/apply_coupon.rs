//! Apply Coupon Example
//!
//! Loads the demo course, registers a 10% coupon and a 111% coupon against
//! it, then prints the outcome of applying each.
//!
//! Run with: `cargo run -p coupons --example apply_coupon`

use anyhow::Result;

use coupons::prelude::*;

/// Apply Coupon Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let fixture = CouponsFixture::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../fixtures/coupons/demo.yml"
    ))?;
    let course = fixture.course();

    let mut service = CouponService::new();

    service.add_coupon(Coupon::new("10PERCENT", None, Some(Percentage::from(0.1))));
    service.add_coupon(Coupon::new("TOOMUCH", None, Some(Percentage::from(1.11))));

    for code in ["10PERCENT", "TOOMUCH", "MISSING"] {
        let application = service.apply_coupon(course, code);

        println!("{}", application.message());
    }

    println!("{:#?}", service.coupons());

    Ok(())
}
