//! Tally
//!
//! Tally is a stateless cart-pricing rules library: given a shopping cart
//! snapshot and a candidate domain or plan, it derives billing periods,
//! renewal state, free-domain eligibility and the price classification of a
//! domain.

pub mod cart;
pub mod fixtures;
pub mod items;
pub mod plans;
pub mod prelude;
pub mod rules;
