//! Cart items

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plans::{self, Plan};

/// Error returned when a plan slug has no purchasable cart representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid plan product slug: {slug:?}")]
pub struct InvalidPlanError {
    /// The offending slug, if the item carried one.
    pub slug: Option<String>,
}

/// One purchasable entry in a cart snapshot: a plan, a domain product, or a
/// candidate item the backend has priced but not yet added.
///
/// Fields the backend omits deserialize to their defaults, so a bare
/// `{ "product_slug": "personal-bundle" }` is a valid item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product slug; absent on placeholder suggestions.
    #[serde(default)]
    pub product_slug: Option<String>,

    /// Renewal interval in days. Negative values are backend sentinels and
    /// are carried through untouched.
    #[serde(default)]
    pub bill_period: Option<i32>,

    /// Whether this line registers a domain.
    #[serde(default)]
    pub is_domain_registration: bool,

    /// Product metadata; the domain name for domain products.
    #[serde(default)]
    pub meta: Option<String>,

    /// Display cost from the backend. The literal `"Free"` marks a
    /// no-charge item.
    #[serde(default)]
    pub cost: Option<String>,
}

impl CartItem {
    /// Create the cart item for a plan slug.
    #[must_use]
    pub fn plan(slug: impl Into<String>) -> Self {
        CartItem {
            product_slug: Some(slug.into()),
            ..CartItem::default()
        }
    }

    /// Create a domain-registration item for the given domain name.
    #[must_use]
    pub fn domain_registration(domain: impl Into<String>) -> Self {
        CartItem {
            is_domain_registration: true,
            meta: Some(domain.into()),
            ..CartItem::default()
        }
    }

    /// Set the display cost.
    #[must_use]
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    /// Set an explicit billing period, in days.
    #[must_use]
    pub fn with_bill_period(mut self, days: i32) -> Self {
        self.bill_period = Some(days);
        self
    }

    /// Look up this item's slug in the plan registry.
    #[must_use]
    pub fn registered_plan(&self) -> Option<&'static Plan> {
        self.product_slug.as_deref().and_then(plans::get_plan)
    }
}

/// Build the cart item representing a plan slug.
///
/// Free-group plans have no cart representation, so `None` is returned for
/// them. Any other slug yields an item stub carrying that slug.
#[must_use]
pub fn plan_item(slug: &str) -> Option<CartItem> {
    match plans::get_plan(slug) {
        Some(plan) if !plan.group().is_paid() => None,
        _ => Some(CartItem::plan(slug)),
    }
}

/// Build the cart item for the plan named by an existing item, covering every
/// registered paid slug (desktop or Jetpack, any term).
///
/// # Errors
///
/// Returns an [`InvalidPlanError`] for free-group slugs and for slugs missing
/// from the registry; neither has a purchasable cart representation.
pub fn item_for_plan(item: &CartItem) -> Result<CartItem, InvalidPlanError> {
    let invalid = || InvalidPlanError {
        slug: item.product_slug.clone(),
    };

    let slug = item.product_slug.as_deref().ok_or_else(invalid)?;
    let plan = plans::get_plan(slug).ok_or_else(invalid)?;

    if plan.group().is_paid() {
        Ok(CartItem::plan(slug))
    } else {
        Err(invalid())
    }
}

/// Resolve the billing period of a cart item, in days.
///
/// An explicit `bill_period` wins, sentinels included; otherwise the period
/// is derived from the plan registry via the item's slug. `None` when neither
/// source knows the item.
#[must_use]
pub fn bill_period(item: &CartItem) -> Option<i32> {
    if let Some(days) = item.bill_period {
        return Some(days);
    }

    item.registered_plan().map(Plan::bill_period)
}
