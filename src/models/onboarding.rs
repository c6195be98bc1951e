use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OnboardingPage {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ONBOARDING_PAGES: &[OnboardingPage] = &[
    OnboardingPage {
        icon: "📅",
        title: "Book Appointments",
        description: "Schedule appointments with qualified doctors at your convenience",
    },
    OnboardingPage {
        icon: "🚑",
        title: "24/7 Support",
        description: "Get medical assistance anytime, anywhere with our SOS feature",
    },
    OnboardingPage {
        icon: "📄",
        title: "Health Records",
        description: "Keep track of your medical history and prescriptions",
    },
];

/// Page cursor over `ONBOARDING_PAGES`. Always points at a real page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingPager {
    current: usize,
}

impl OnboardingPager {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page(&self) -> &'static OnboardingPage {
        &ONBOARDING_PAGES[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= ONBOARDING_PAGES.len()
    }

    /// Stays on the last page.
    pub fn next(self) -> Self {
        if self.is_last() {
            self
        } else {
            Self {
                current: self.current + 1,
            }
        }
    }

    /// Jump from the dot indicator; out-of-range indices clamp to the last page.
    pub fn go_to(self, index: usize) -> Self {
        Self {
            current: index.min(ONBOARDING_PAGES.len() - 1),
        }
    }
}
