//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, DomainCondition},
    fixtures::{CartFixture, FixtureError},
    items::{CartItem, InvalidPlanError, bill_period, item_for_plan, plan_item},
    plans::{Plan, PlanGroup, Term, get_plan, get_term_duration, registered_plans},
    rules::{
        DomainPriceRule, domain_price_rule, is_domain_being_used_for_plan, is_next_domain_free,
    },
};
