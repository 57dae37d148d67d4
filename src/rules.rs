//! Domain pricing rules
//!
//! Classifiers deciding how a candidate domain is priced against the current
//! cart: bundled with a plan, covered by a free-domain offer, or charged.

use crate::{
    cart::{Cart, DomainCondition},
    items::CartItem,
};

/// Cost string the backend uses for no-charge items.
const FREE_COST: &str = "Free";

fn is_blog_domain(domain: &str) -> bool {
    domain.ends_with(".blog")
}

/// Price classification for a candidate domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPriceRule {
    /// The domain itself costs nothing.
    FreeDomain,

    /// The domain is covered at no extra charge by a plan in the cart.
    FreeWithPlan,

    /// The domain is charged at its listed price.
    Price,
}

/// Whether `domain` is the domain bundled with the cart's plan.
///
/// True iff the cart holds a domain-registration item for `domain` alongside
/// a plan that bundles it: Blogger-tier plans bundle `.blog` domains only,
/// every other paid plan bundles any domain. An absent cart or domain is
/// never bundled.
#[must_use]
pub fn is_domain_being_used_for_plan(cart: Option<&Cart>, domain: Option<&str>) -> bool {
    let (Some(cart), Some(domain)) = (cart, domain) else {
        return false;
    };

    let registered = cart
        .domain_registrations()
        .any(|item| item.meta.as_deref() == Some(domain));

    if !registered || !cart.has_plan() {
        return false;
    }

    if cart.has_blogger_plan() {
        is_blog_domain(domain)
    } else {
        true
    }
}

/// Whether the cart's next-domain-is-free offer covers `domain`.
///
/// False for an absent cart or an unset offer. An unconditional offer covers
/// any domain; a [`DomainCondition::Blog`] offer covers only `.blog` domains,
/// so it never matches when no domain is supplied.
#[must_use]
pub fn is_next_domain_free(cart: Option<&Cart>, domain: Option<&str>) -> bool {
    let Some(cart) = cart else {
        return false;
    };

    if !cart.next_domain_is_free {
        return false;
    }

    match cart.next_domain_condition {
        None => true,
        Some(DomainCondition::Blog) => domain.is_some_and(is_blog_domain),
    }
}

/// Classify how a candidate domain item would be priced against the cart.
///
/// A candidate without a product slug, or whose cost is the backend's
/// `"Free"` literal, is free outright. A candidate whose domain is bundled
/// with the cart's plan or covered by its free-domain offer is free with the
/// plan. Everything else is charged at its listed price.
#[must_use]
pub fn domain_price_rule(cart: Option<&Cart>, candidate: &CartItem) -> DomainPriceRule {
    if candidate.product_slug.is_none() || candidate.cost.as_deref() == Some(FREE_COST) {
        return DomainPriceRule::FreeDomain;
    }

    let domain = candidate.meta.as_deref();

    if is_domain_being_used_for_plan(cart, domain) || is_next_domain_free(cart, domain) {
        return DomainPriceRule::FreeWithPlan;
    }

    DomainPriceRule::Price
}

#[cfg(test)]
mod tests {
    use crate::plans::{
        PLAN_BLOGGER, PLAN_BLOGGER_2_YEARS, PLAN_PREMIUM, PlanGroup, registered_plans,
    };

    use super::*;

    fn cart_with_domain(plan_slug: &str, domain: &str) -> Cart {
        Cart::with_products([
            CartItem::plan(plan_slug),
            CartItem::domain_registration(domain),
        ])
    }

    fn free_domain_cart(condition: Option<DomainCondition>) -> Cart {
        Cart {
            next_domain_is_free: true,
            next_domain_condition: condition,
            ..Cart::default()
        }
    }

    #[test]
    fn bundled_domain_requires_cart_and_domain() {
        let cart = cart_with_domain(PLAN_PREMIUM, "domain.com");

        assert!(!is_domain_being_used_for_plan(None, Some("domain.com")));
        assert!(!is_domain_being_used_for_plan(Some(&cart), None));
    }

    #[test]
    fn bundled_domain_requires_a_matching_registration() {
        let cart = cart_with_domain(PLAN_PREMIUM, "domain.com");

        assert!(is_domain_being_used_for_plan(Some(&cart), Some("domain.com")));
        assert!(!is_domain_being_used_for_plan(
            Some(&cart),
            Some("anotherdomain.com")
        ));
    }

    #[test]
    fn bundled_domain_requires_a_plan_in_the_cart() {
        let cart = Cart::with_products([CartItem::domain_registration("domain.com")]);

        assert!(!is_domain_being_used_for_plan(Some(&cart), Some("domain.com")));
    }

    #[test]
    fn paid_plans_bundle_com_and_blog_domains() {
        let paid = registered_plans()
            .iter()
            .filter(|plan| plan.group().is_paid() && plan.group() != PlanGroup::Blogger);

        for plan in paid {
            for domain in ["domain.com", "domain.blog"] {
                let cart = cart_with_domain(plan.slug(), domain);

                assert!(
                    is_domain_being_used_for_plan(Some(&cart), Some(domain)),
                    "{} should bundle {domain}",
                    plan.slug()
                );
            }
        }
    }

    #[test]
    fn blogger_plans_bundle_only_blog_domains() {
        for slug in [PLAN_BLOGGER, PLAN_BLOGGER_2_YEARS] {
            let com_cart = cart_with_domain(slug, "domain.com");
            let blog_cart = cart_with_domain(slug, "domain.blog");

            assert!(!is_domain_being_used_for_plan(
                Some(&com_cart),
                Some("domain.com")
            ));
            assert!(is_domain_being_used_for_plan(
                Some(&blog_cart),
                Some("domain.blog")
            ));
        }
    }

    #[test]
    fn unconditional_offer_covers_any_domain() {
        let cart = free_domain_cart(None);

        assert!(is_next_domain_free(Some(&cart), None));
        assert!(is_next_domain_free(Some(&cart), Some("domain.com")));
    }

    #[test]
    fn blog_conditioned_offer_covers_only_blog_domains() {
        let cart = free_domain_cart(Some(DomainCondition::Blog));

        assert!(!is_next_domain_free(Some(&cart), None));
        assert!(!is_next_domain_free(Some(&cart), Some("domain.com")));
        assert!(is_next_domain_free(Some(&cart), Some("domain.blog")));
    }

    #[test]
    fn unset_offer_and_absent_cart_are_never_free() {
        let cart = Cart::default();

        assert!(!is_next_domain_free(Some(&cart), Some("domain.com")));
        assert!(!is_next_domain_free(None, None));
    }

    #[test]
    fn price_rule_is_free_domain_without_a_slug() {
        let candidate = CartItem::default().with_cost("14");

        assert_eq!(
            domain_price_rule(None, &candidate),
            DomainPriceRule::FreeDomain
        );
    }

    #[test]
    fn price_rule_is_free_domain_for_free_cost() {
        let candidate = CartItem::plan("hi").with_cost("Free");

        assert_eq!(
            domain_price_rule(None, &candidate),
            DomainPriceRule::FreeDomain
        );
    }

    #[test]
    fn price_rule_is_free_with_plan_for_a_bundled_domain() {
        let cart = cart_with_domain(PLAN_PREMIUM, "domain.com");
        let candidate = CartItem {
            product_slug: Some("domain_reg".to_owned()),
            meta: Some("domain.com".to_owned()),
            cost: Some("14".to_owned()),
            ..CartItem::default()
        };

        assert_eq!(
            domain_price_rule(Some(&cart), &candidate),
            DomainPriceRule::FreeWithPlan
        );
    }

    #[test]
    fn price_rule_is_free_with_plan_under_a_free_domain_offer() {
        let cart = free_domain_cart(Some(DomainCondition::Blog));
        let candidate = CartItem {
            product_slug: Some("dotblog_domain".to_owned()),
            meta: Some("domain.blog".to_owned()),
            cost: Some("14".to_owned()),
            ..CartItem::default()
        };

        assert_eq!(
            domain_price_rule(Some(&cart), &candidate),
            DomainPriceRule::FreeWithPlan
        );
    }

    #[test]
    fn price_rule_falls_back_to_listed_price() {
        let candidate = CartItem {
            product_slug: Some("domain_reg".to_owned()),
            meta: Some("domain.com".to_owned()),
            cost: Some("14".to_owned()),
            ..CartItem::default()
        };

        assert_eq!(
            domain_price_rule(None, &candidate),
            DomainPriceRule::Price
        );
        assert_eq!(
            domain_price_rule(Some(&Cart::default()), &candidate),
            DomainPriceRule::Price
        );
    }
}
