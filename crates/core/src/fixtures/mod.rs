//! Fixtures
//!
//! Seed a course and a set of coupons from YAML.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{coupons::Coupon, courses::Course, service::CouponService};

pub mod coupons;
pub mod prices;

use self::coupons::{CouponFixture, CourseFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Raw YAML document shape.
#[derive(Debug, Deserialize)]
struct CouponsDocument {
    course: CourseFixture,

    #[serde(default)]
    coupons: Vec<CouponFixture>,
}

/// A course and the coupons registered against it.
#[derive(Debug, Clone)]
pub struct CouponsFixture {
    course: Course<'static>,
    coupons: Vec<Coupon<'static>>,
}

impl CouponsFixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any price
    /// or percentage in it is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a fixture from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, or if any price or
    /// percentage in it is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let document: CouponsDocument = serde_norway::from_str(contents)?;

        let course = Course::try_from(document.course)?;
        let coupons = document
            .coupons
            .into_iter()
            .map(Coupon::try_from)
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(Self { course, coupons })
    }

    /// Returns the course
    pub fn course(&self) -> &Course<'static> {
        &self.course
    }

    /// Returns the coupons, in file order
    pub fn coupons(&self) -> &[Coupon<'static>] {
        &self.coupons
    }

    /// Build a coupon service seeded with every coupon in the fixture.
    pub fn service(&self) -> CouponService<'static> {
        self.coupons.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::coupons::CouponDiscount;

    use super::*;

    const DEMO: &str = r#"
course:
  name: Testing-smartdev
  price: "50.00 GBP"
coupons:
  - code: 10PERCENT
    percent: "10%"
  - code: FIVER
    amount: "5.00 GBP"
  - code: EMPTY
"#;

    #[test]
    fn from_yaml_loads_course_and_coupons() -> TestResult {
        let fixture = CouponsFixture::from_yaml(DEMO)?;

        assert_eq!(fixture.course().name(), "Testing-smartdev");
        assert_eq!(fixture.course().price(), &Money::from_minor(5000, GBP));

        let discounts: Vec<&CouponDiscount<'_>> =
            fixture.coupons().iter().map(Coupon::discount).collect();

        assert_eq!(
            discounts,
            [
                &CouponDiscount::Percent(Percentage::from(0.1)),
                &CouponDiscount::Fixed(Money::from_minor(500, GBP)),
                &CouponDiscount::None,
            ]
        );

        Ok(())
    }

    #[test]
    fn service_contains_fixture_coupons() -> TestResult {
        let fixture = CouponsFixture::from_yaml(DEMO)?;
        let service = fixture.service();

        assert_eq!(service.len(), 3);
        assert!(service.find_coupon_by_code("FIVER").is_some());

        Ok(())
    }

    #[test]
    fn coupons_default_to_empty() -> TestResult {
        let fixture = CouponsFixture::from_yaml("course:\n  name: Bare\n  price: \"1.00 USD\"\n")?;

        assert!(fixture.coupons().is_empty());

        Ok(())
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let result = CouponsFixture::from_yaml("course: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn invalid_course_price_is_reported() {
        let result = CouponsFixture::from_yaml("course:\n  name: Bad\n  price: \"50GBP\"\n");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }
}
