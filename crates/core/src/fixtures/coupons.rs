//! Coupon and Course Fixtures

use serde::Deserialize;

use crate::{
    coupons::Coupon,
    courses::Course,
    fixtures::{
        FixtureError,
        prices::{parse_money, parse_percentage},
    },
};

/// Course Fixture
#[derive(Debug, Deserialize)]
pub struct CourseFixture {
    /// Course name
    pub name: String,

    /// Course price (e.g., "50.00 GBP")
    pub price: String,
}

impl TryFrom<CourseFixture> for Course<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CourseFixture) -> Result<Self, Self::Error> {
        Ok(Course::new(fixture.name, parse_money(&fixture.price)?))
    }
}

/// Coupon Fixture
///
/// Both discounts are optional; `amount` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Coupon code
    pub code: String,

    /// Fixed discount (e.g., "5.00 GBP")
    #[serde(default)]
    pub amount: Option<String>,

    /// Percentage discount (e.g., "10%" or "0.10")
    #[serde(default)]
    pub percent: Option<String>,
}

impl TryFrom<CouponFixture> for Coupon<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CouponFixture) -> Result<Self, Self::Error> {
        let amount = fixture.amount.as_deref().map(parse_money).transpose()?;
        let percent = fixture
            .percent
            .as_deref()
            .map(parse_percentage)
            .transpose()?;

        Ok(Coupon::new(fixture.code, amount, percent))
    }
}
