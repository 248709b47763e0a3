//! State

use std::sync::Arc;

use coupons::prelude::{Course, CouponService, CouponsFixture};

/// Shared, read-only request state.
///
/// Seeded once at startup; handlers never register coupons.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) service: CouponService<'static>,
    pub(crate) course: Course<'static>,
    pub(crate) demo_code: String,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        service: CouponService<'static>,
        course: Course<'static>,
        demo_code: impl Into<String>,
    ) -> Self {
        Self {
            service,
            course,
            demo_code: demo_code.into(),
        }
    }

    #[must_use]
    pub(crate) fn from_fixture(fixture: &CouponsFixture, demo_code: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(
            fixture.service(),
            fixture.course().clone(),
            demo_code,
        ))
    }
}
