use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    #[default]
    Premium,
    Enterprise,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Premium => "premium",
            PlanId::Enterprise => "enterprise",
        }
    }

    pub fn plan(&self) -> &'static MembershipPlan {
        // PLANS holds one entry per id.
        PLANS
            .iter()
            .find(|p| p.id == *self)
            .unwrap_or(&PLANS[1])
    }
}

impl FromStr for PlanId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PlanId::Basic),
            "premium" => Ok(PlanId::Premium),
            "enterprise" => Ok(PlanId::Enterprise),
            other => Err(format!("Unknown plan: {}", other)),
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MembershipPlan {
    pub id: PlanId,
    pub name: &'static str,
    /// Whole dollars per month.
    pub monthly_price: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: &[MembershipPlan] = &[
    MembershipPlan {
        id: PlanId::Basic,
        name: "Basic",
        monthly_price: 29,
        features: &[
            "Unlimited consultations",
            "24/7 chat support",
            "Basic health records",
            "Prescription management",
        ],
        popular: false,
    },
    MembershipPlan {
        id: PlanId::Premium,
        name: "Premium",
        monthly_price: 49,
        features: &[
            "Everything in Basic",
            "Priority appointments",
            "Advanced health records",
            "Family coverage (up to 4)",
            "SOS emergency feature",
            "Discounts on lab tests",
        ],
        popular: true,
    },
    MembershipPlan {
        id: PlanId::Enterprise,
        name: "Enterprise",
        monthly_price: 99,
        features: &[
            "Everything in Premium",
            "Unlimited family members",
            "Personal health advisor",
            "Annual health checkups",
            "Home visit consultations",
            "VIP support",
        ],
        popular: false,
    },
];

const TAX_RATE_PERCENT: u64 = 10;

/// Checkout totals in cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub plan: PlanId,
    pub subtotal_cents: u64,
    pub tax_cents: u64,
    pub total_cents: u64,
}

impl CheckoutSummary {
    pub fn for_plan(plan: PlanId) -> Self {
        let subtotal_cents = plan.plan().monthly_price as u64 * 100;
        let tax_cents = subtotal_cents * TAX_RATE_PERCENT / 100;
        Self {
            plan,
            subtotal_cents,
            tax_cents,
            total_cents: subtotal_cents + tax_cents,
        }
    }

    /// "$29"
    pub fn format_whole(dollars: u32) -> String {
        format!("${}", dollars)
    }

    /// "$53.90"
    pub fn format_money(cents: u64) -> String {
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

/// Card details as typed. Never stored or sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentForm {
    pub fn is_complete(&self) -> bool {
        [&self.card_name, &self.card_number, &self.expiry, &self.cvv]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// The signed-in member's current subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MembershipStatus {
    pub plan: PlanId,
    pub status: &'static str,
    pub renewal_date: &'static str,
    pub member_since: &'static str,
    pub benefits: &'static [&'static str],
}

pub const CURRENT_MEMBERSHIP: MembershipStatus = MembershipStatus {
    plan: PlanId::Premium,
    status: "Active",
    renewal_date: "2024-03-15",
    member_since: "2023-03-15",
    benefits: &[
        "Unlimited consultations",
        "Priority appointments",
        "24/7 chat support",
        "SOS emergency feature",
        "Family coverage (up to 4)",
        "Discounts on lab tests",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentRecord {
    pub date: &'static str,
    pub amount_cents: u64,
    pub status: &'static str,
}

/// Newest first.
pub const PAYMENT_HISTORY: &[PaymentRecord] = &[
    PaymentRecord { date: "2024-02-15", amount_cents: 4900, status: "Paid" },
    PaymentRecord { date: "2024-01-15", amount_cents: 4900, status: "Paid" },
    PaymentRecord { date: "2023-12-15", amount_cents: 4900, status: "Paid" },
];
