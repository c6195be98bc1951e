//! Mock data invariants and the small amount of logic around them.

use ascendimed_frontend::models::{
    can_send, unread_count, AccountForm, AppointmentRequest, ChatPeer, ChatThread,
    CheckoutSummary, NotificationKind, OnboardingPager, PaymentForm, PlanId, SettingsItem,
    SosState, ToggleKey, ToggleState, CURRENT_MEMBERSHIP, DOCTORS, NOTIFICATIONS,
    ONBOARDING_PAGES, PAYMENT_HISTORY, PLANS, SETTINGS_GROUPS, SOS_INFO, TIME_SLOTS,
};
use ascendimed_frontend::navigation::Route;
use ascendimed_frontend::screens::{MENU_ITEMS, QUICK_ACTIONS};
use ascendimed_frontend::theme::{tint, AppColors, TINT};
use pretty_assertions::assert_eq;

#[test]
fn checkout_adds_ten_percent_tax() {
    let premium = CheckoutSummary::for_plan(PlanId::Premium);
    assert_eq!(premium.subtotal_cents, 4900);
    assert_eq!(premium.tax_cents, 490);
    assert_eq!(premium.total_cents, 5390);
    assert_eq!(CheckoutSummary::format_money(premium.total_cents), "$53.90");

    let basic = CheckoutSummary::for_plan(PlanId::Basic);
    assert_eq!(CheckoutSummary::format_money(basic.tax_cents), "$2.90");
    assert_eq!(CheckoutSummary::format_money(basic.total_cents), "$31.90");

    let enterprise = CheckoutSummary::for_plan(PlanId::Enterprise);
    assert_eq!(CheckoutSummary::format_money(enterprise.total_cents), "$108.90");
}

#[test]
fn plan_ids_round_trip_through_text() {
    for plan in PLANS {
        assert_eq!(plan.id.as_str().parse::<PlanId>(), Ok(plan.id));
        assert_eq!(plan.id.plan().name, plan.name);
    }
    assert!("gold".parse::<PlanId>().is_err());
    assert_eq!(PlanId::default(), PlanId::Premium);
    assert_eq!(serde_json::to_string(&PlanId::Enterprise).unwrap(), "\"enterprise\"");
}

#[test]
fn exactly_one_popular_plan() {
    let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].id, PlanId::Premium);
}

#[test]
fn appointment_needs_doctor_date_and_time() {
    let mut request = AppointmentRequest::default();
    assert!(!request.is_complete());
    request.doctor_id = Some(DOCTORS[1].id.to_string());
    request.date = Some("Tomorrow".to_string());
    assert!(!request.is_complete());
    request.time = Some(TIME_SLOTS[0].to_string());
    assert!(request.is_complete());
    assert_eq!(request.doctor().map(|d| d.name), Some("Dr. Michael Chen"));
}

#[test]
fn unknown_doctor_id_resolves_to_none() {
    let request = AppointmentRequest {
        doctor_id: Some("42".to_string()),
        ..Default::default()
    };
    assert_eq!(request.doctor(), None);
}

#[test]
fn payment_form_requires_every_field() {
    let mut form = PaymentForm {
        card_name: "John Doe".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry: "12/30".to_string(),
        cvv: "   ".to_string(),
    };
    assert!(!form.is_complete());
    form.cvv = "123".to_string();
    assert!(form.is_complete());
}

#[test]
fn two_notifications_start_unread() {
    assert_eq!(unread_count(NOTIFICATIONS), 2);
    let mut all_read = NOTIFICATIONS.to_vec();
    all_read.iter_mut().for_each(|n| n.read = true);
    assert_eq!(unread_count(&all_read), 0);
}

#[test]
fn notification_kinds_map_to_theme_colors() {
    assert_eq!(NotificationKind::Appointment.color(), AppColors::PRIMARY);
    assert_eq!(NotificationKind::Payment.color(), AppColors::SUCCESS);
    assert_eq!(NotificationKind::Other.color(), AppColors::TEXT_SECONDARY);
    let kind: NotificationKind = serde_json::from_str("\"reminder\"").unwrap();
    assert_eq!(kind, NotificationKind::Other);
}

#[test]
fn toggles_default_and_flip() {
    let state = ToggleState::default();
    assert!(state.get(ToggleKey::Push));
    assert!(state.get(ToggleKey::Email));
    assert!(!state.get(ToggleKey::Sms));

    let flipped = state.toggled(ToggleKey::Sms);
    assert!(flipped.get(ToggleKey::Sms));
    assert_eq!(flipped.toggled(ToggleKey::Sms), state);
}

#[test]
fn settings_has_one_toggle_per_key() {
    let keys: Vec<ToggleKey> = SETTINGS_GROUPS
        .iter()
        .flat_map(|g| g.items.iter())
        .filter_map(|item| match item {
            SettingsItem::Toggle { key, .. } => Some(*key),
            SettingsItem::Action { .. } => None,
        })
        .collect();
    assert_eq!(keys, vec![ToggleKey::Push, ToggleKey::Email, ToggleKey::Sms]);
}

#[test]
fn tinted_icon_backgrounds_are_valid_rgba() {
    for color in QUICK_ACTIONS
        .iter()
        .map(|a| a.color)
        .chain(MENU_ITEMS.iter().map(|m| m.color))
    {
        let bg = tint(color, TINT);
        assert!(bg.starts_with("rgba("), "{bg}");
        assert!(bg.ends_with(", 0.12)"), "{bg}");
        assert!(!bg.contains("NaN"), "{bg}");
    }
}

#[test]
fn chat_send_appends_trimmed_user_message() {
    let mut thread = ChatThread::with_doctor();
    let before = thread.messages.len();
    let sent = thread.send("  Is ibuprofen ok?\n", "10:40 AM").cloned();
    let sent = sent.expect("non-blank input is sent");
    assert_eq!(sent.text, "Is ibuprofen ok?");
    assert!(sent.is_user);
    assert_eq!(sent.time, "10:40 AM");
    assert_eq!(sent.id, 4);
    assert_eq!(thread.messages.len(), before + 1);
    assert_eq!(thread.messages.last(), Some(&sent));
}

#[test]
fn chat_send_ignores_blank_input() {
    let mut thread = ChatThread::with_driver();
    let before = thread.clone();
    assert!(thread.send("", "2:50 PM").is_none());
    assert!(thread.send("   \t\n", "2:50 PM").is_none());
    assert_eq!(thread, before);
    assert!(!can_send(" "));
    assert!(can_send(" ok "));
}

#[test]
fn chat_threads_start_with_their_peer() {
    let doctor = ChatThread::with_doctor();
    assert_eq!(doctor.peer, ChatPeer::Doctor);
    assert_eq!(doctor.messages.len(), 3);
    assert!(!doctor.messages[0].is_user);

    let driver = ChatThread::with_driver();
    assert_eq!(driver.peer.name(), "Ambulance Driver");
    assert_eq!(driver.messages.len(), 2);
}

#[test]
fn sos_toggle_and_cancel() {
    let idle = SosState::default();
    assert!(!idle.active);
    assert_eq!(idle.button_label(), "Tap for SOS");

    let active = idle.toggled();
    assert!(active.active);
    assert_eq!(active.status_text(), "Emergency services notified");
    assert_eq!(active.toggled(), idle);
    assert_eq!(active.cancelled(), idle);
    assert_eq!(idle.cancelled(), idle);
    assert_eq!(SOS_INFO.len(), 3);
}

#[test]
fn onboarding_pager_stops_on_last_page() {
    let pager = OnboardingPager::default();
    assert_eq!(pager.current(), 0);
    assert_eq!(pager.page().title, "Book Appointments");
    assert!(!pager.is_last());

    let last = pager.next().next();
    assert!(last.is_last());
    assert_eq!(last.current(), ONBOARDING_PAGES.len() - 1);
    assert_eq!(last.next(), last);
    assert_eq!(pager.go_to(99), last);
    assert_eq!(last.go_to(1).page().title, "24/7 Support");
}

#[test]
fn account_form_needs_every_field_and_matching_passwords() {
    let mut form = AccountForm {
        full_name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        phone: "+1 234 567 8900".into(),
        password: "hunter22".into(),
        confirm_password: "hunter22".into(),
    };
    assert!(form.can_submit());

    form.confirm_password = "hunter23".into();
    assert!(form.is_complete());
    assert!(!form.can_submit());

    form.confirm_password = form.password.clone();
    form.phone = "  ".into();
    assert!(!form.is_complete());
    assert!(!AccountForm::default().can_submit());
}

#[test]
fn membership_status_matches_billed_plan() {
    let price = CURRENT_MEMBERSHIP.plan.plan().monthly_price as u64 * 100;
    assert!(PAYMENT_HISTORY.iter().all(|p| p.amount_cents == price));
    assert_eq!(CheckoutSummary::format_money(PAYMENT_HISTORY[0].amount_cents), "$49.00");
    assert!(PAYMENT_HISTORY.windows(2).all(|w| w[0].date > w[1].date));
}

#[test]
fn every_quick_action_opens_a_screen() {
    let routes: Vec<Route> = QUICK_ACTIONS.iter().map(|a| a.route).collect();
    assert_eq!(
        routes,
        vec![Route::BookAppointment, Route::Chat, Route::LiveSos, Route::MyMembership]
    );
    let membership = MENU_ITEMS.iter().find(|m| m.title == "My Membership");
    assert_eq!(membership.and_then(|m| m.route), Some(Route::MyMembership));
}
