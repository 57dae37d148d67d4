//! Carts

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    items::{self, CartItem},
    plans::PlanGroup,
};

/// Condition attached to a free-domain offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainCondition {
    /// Only `.blog` domains qualify.
    Blog,
}

/// A shopping cart snapshot.
///
/// Carts are value objects: every transform returns a new `Cart` and leaves
/// the source untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, in insertion order.
    #[serde(default)]
    pub products: Vec<CartItem>,

    /// Whether the backend offers the next domain at no charge.
    #[serde(default)]
    pub next_domain_is_free: bool,

    /// Condition restricting the free-domain offer. The wire sends `""`
    /// when there is none.
    #[serde(default, deserialize_with = "condition_from_wire")]
    pub next_domain_condition: Option<DomainCondition>,
}

fn condition_from_wire<'de, D>(deserializer: D) -> Result<Option<DomainCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some("blog") => Ok(Some(DomainCondition::Blog)),
        Some(other) => Err(serde::de::Error::unknown_variant(other, &["blog"])),
    }
}

impl Cart {
    /// Create a cart holding the given line items.
    #[must_use]
    pub fn with_products(products: impl Into<Vec<CartItem>>) -> Self {
        Cart {
            products: products.into(),
            ..Cart::default()
        }
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.products.iter()
    }

    /// Number of line items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Return a new cart with the first item equal to `old` removed and
    /// `new` appended at the tail.
    ///
    /// The relative order of every other item is preserved. When `old` is
    /// absent, `new` is still appended, so the item count is preserved or
    /// grows by one; nothing is ever dropped without a matching insertion.
    #[must_use]
    pub fn replace_item(&self, old: &CartItem, new: CartItem) -> Self {
        let mut products = self.products.clone();

        if let Some(index) = products.iter().position(|item| item == old) {
            products.remove(index);
        }

        products.push(new);

        Cart {
            products,
            ..self.clone()
        }
    }

    /// Line items whose slug names a registered plan.
    pub fn plan_items(&self) -> impl Iterator<Item = &CartItem> {
        self.products
            .iter()
            .filter(|item| item.registered_plan().is_some())
    }

    /// Domain-registration line items.
    pub fn domain_registrations(&self) -> impl Iterator<Item = &CartItem> {
        self.products
            .iter()
            .filter(|item| item.is_domain_registration)
    }

    /// Whether the cart holds a plan.
    #[must_use]
    pub fn has_plan(&self) -> bool {
        self.plan_items().next().is_some()
    }

    /// Whether the cart holds a Blogger-tier plan.
    #[must_use]
    pub fn has_blogger_plan(&self) -> bool {
        self.plan_items()
            .filter_map(CartItem::registered_plan)
            .any(|plan| plan.group() == PlanGroup::Blogger)
    }

    /// Whether some line item renews, i.e. resolves to a positive billing
    /// period either explicitly or through the plan registry.
    #[must_use]
    pub fn has_renewable_subscription(&self) -> bool {
        self.products
            .iter()
            .any(|item| items::bill_period(item).is_some_and(|days| days > 0))
    }
}
