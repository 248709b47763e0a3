//! Test helpers.

use std::sync::Arc;

use coupons::prelude::*;
use rusty_money::{Money, iso::GBP};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

/// Course priced at 5000 GBP minor units, with a coupon for each outcome.
pub(crate) fn demo_state(demo_code: &str) -> Arc<State> {
    let course = Course::new("Testing", Money::from_minor(5000, GBP));

    let service = [
        Coupon::percent("10PERCENT", Percentage::from(0.1)),
        Coupon::fixed("FIVER", Money::from_minor(500, GBP)),
        Coupon::percent("TOOMUCH", Percentage::from(1.11)),
        Coupon::without_discount("EMPTY"),
    ]
    .into_iter()
    .collect();

    Arc::new(State::new(service, course, demo_code))
}

pub(crate) fn state_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
