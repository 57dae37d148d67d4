//! Plans
//!
//! Static registry of the subscription plans a cart item's `product_slug`
//! can refer to, keyed by slug.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Free plan.
pub const PLAN_FREE: &str = "free_plan";

/// Blogger plan, annual term.
pub const PLAN_BLOGGER: &str = "blogger-bundle";

/// Blogger plan, two-year term.
pub const PLAN_BLOGGER_2_YEARS: &str = "blogger-bundle-2y";

/// Personal plan, annual term.
pub const PLAN_PERSONAL: &str = "personal-bundle";

/// Personal plan, two-year term.
pub const PLAN_PERSONAL_2_YEARS: &str = "personal-bundle-2y";

/// Premium plan, annual term.
pub const PLAN_PREMIUM: &str = "value_bundle";

/// Premium plan, two-year term.
pub const PLAN_PREMIUM_2_YEARS: &str = "value_bundle-2y";

/// Business plan, annual term.
pub const PLAN_BUSINESS: &str = "business-bundle";

/// Business plan, two-year term.
pub const PLAN_BUSINESS_2_YEARS: &str = "business-bundle-2y";

/// Jetpack free plan.
pub const PLAN_JETPACK_FREE: &str = "jetpack_free";

/// Jetpack Personal plan, annual term.
pub const PLAN_JETPACK_PERSONAL: &str = "jetpack_personal";

/// Jetpack Personal plan, monthly term.
pub const PLAN_JETPACK_PERSONAL_MONTHLY: &str = "jetpack_personal_monthly";

/// Jetpack Premium plan, annual term.
pub const PLAN_JETPACK_PREMIUM: &str = "jetpack_premium";

/// Jetpack Premium plan, monthly term.
pub const PLAN_JETPACK_PREMIUM_MONTHLY: &str = "jetpack_premium_monthly";

/// Jetpack Business plan, annual term.
pub const PLAN_JETPACK_BUSINESS: &str = "jetpack_business";

/// Jetpack Business plan, monthly term.
pub const PLAN_JETPACK_BUSINESS_MONTHLY: &str = "jetpack_business_monthly";

/// Billing term of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Renews every month.
    Monthly,

    /// Renews every year.
    Annually,

    /// Renews every two years.
    Biennially,
}

impl Term {
    /// Length of the term's billing period, in days.
    #[must_use]
    pub fn duration_days(self) -> i32 {
        match self {
            Term::Monthly => 31,
            Term::Annually => 365,
            Term::Biennially => 730,
        }
    }
}

/// Tier family a plan belongs to, independent of billing term and of
/// whether it is a Jetpack variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanGroup {
    /// Free tier; has no purchasable cart representation.
    Free,

    /// Blogger tier; bundles `.blog` domains only.
    Blogger,

    /// Personal tier.
    Personal,

    /// Premium tier.
    Premium,

    /// Business tier.
    Business,
}

impl PlanGroup {
    /// Whether plans in this group can be purchased.
    #[must_use]
    pub fn is_paid(self) -> bool {
        !matches!(self, PlanGroup::Free)
    }
}

/// A registered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    slug: &'static str,
    group: PlanGroup,
    term: Term,
}

impl Plan {
    /// Product slug identifying this plan on cart items.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    /// Tier family of this plan.
    #[must_use]
    pub fn group(&self) -> PlanGroup {
        self.group
    }

    /// Billing term of this plan.
    #[must_use]
    pub fn term(&self) -> Term {
        self.term
    }

    /// Billing period of this plan, in days.
    #[must_use]
    pub fn bill_period(&self) -> i32 {
        self.term.duration_days()
    }
}

static PLANS: &[Plan] = &[
    Plan {
        slug: PLAN_FREE,
        group: PlanGroup::Free,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_BLOGGER,
        group: PlanGroup::Blogger,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_BLOGGER_2_YEARS,
        group: PlanGroup::Blogger,
        term: Term::Biennially,
    },
    Plan {
        slug: PLAN_PERSONAL,
        group: PlanGroup::Personal,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_PERSONAL_2_YEARS,
        group: PlanGroup::Personal,
        term: Term::Biennially,
    },
    Plan {
        slug: PLAN_PREMIUM,
        group: PlanGroup::Premium,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_PREMIUM_2_YEARS,
        group: PlanGroup::Premium,
        term: Term::Biennially,
    },
    Plan {
        slug: PLAN_BUSINESS,
        group: PlanGroup::Business,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_BUSINESS_2_YEARS,
        group: PlanGroup::Business,
        term: Term::Biennially,
    },
    Plan {
        slug: PLAN_JETPACK_FREE,
        group: PlanGroup::Free,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_JETPACK_PERSONAL,
        group: PlanGroup::Personal,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_JETPACK_PERSONAL_MONTHLY,
        group: PlanGroup::Personal,
        term: Term::Monthly,
    },
    Plan {
        slug: PLAN_JETPACK_PREMIUM,
        group: PlanGroup::Premium,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_JETPACK_PREMIUM_MONTHLY,
        group: PlanGroup::Premium,
        term: Term::Monthly,
    },
    Plan {
        slug: PLAN_JETPACK_BUSINESS,
        group: PlanGroup::Business,
        term: Term::Annually,
    },
    Plan {
        slug: PLAN_JETPACK_BUSINESS_MONTHLY,
        group: PlanGroup::Business,
        term: Term::Monthly,
    },
];

static PLANS_BY_SLUG: LazyLock<FxHashMap<&'static str, &'static Plan>> =
    LazyLock::new(|| PLANS.iter().map(|plan| (plan.slug, plan)).collect());

/// Look up a plan by its product slug.
#[must_use]
pub fn get_plan(slug: &str) -> Option<&'static Plan> {
    PLANS_BY_SLUG.get(slug).copied()
}

/// All registered plans, in registry order.
#[must_use]
pub fn registered_plans() -> &'static [Plan] {
    PLANS
}

/// Length of a term's billing period, in days.
#[must_use]
pub fn get_term_duration(term: Term) -> i32 {
    term.duration_days()
}
