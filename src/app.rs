use dioxus::prelude::*;
use crate::config::AppConfig;
use crate::navigation::{NavStack, Route};
use crate::models::ChatPeer;
use crate::screens::{
    BookAppointmentScreen, ChatScreen, CreateAccountScreen, HomeScreen, LandingScreen,
    LiveSosScreen, MembershipCheckoutScreen, MembershipScreen, MyMembershipScreen,
    NotificationScreen, OnboardingScreen, ProfileScreen, SettingsScreen,
};
use crate::theme::AppColors;
use crate::widgets::TabBar;

#[component]
pub fn App() -> Element {
    let initial = use_hook(|| AppConfig::global().initial_route);
    let mut nav = use_signal(|| NavStack::new(initial));
    let route = nav.read().current();

    let current_screen = match route {
        Route::Landing => rsx! {
            LandingScreen { on_navigate: move |r| nav.write().navigate(r) }
        },
        Route::Onboarding => rsx! {
            OnboardingScreen { on_navigate: move |r| nav.write().navigate(r) }
        },
        Route::CreateAccount => rsx! {
            CreateAccountScreen { on_navigate: move |r| nav.write().navigate(r) }
        },
        Route::Home => rsx! {
            HomeScreen { on_navigate: move |r| nav.write().navigate(r) }
        },
        Route::Profile => rsx! {
            ProfileScreen {
                on_navigate: move |r| nav.write().navigate(r),
                on_logout: move |_| nav.write().reset(Route::Landing),
            }
        },
        Route::Notifications => rsx! {
            NotificationScreen { on_back: move |_| { nav.write().back(); } }
        },
        Route::BookAppointment => rsx! {
            BookAppointmentScreen { on_back: move |_| { nav.write().back(); } }
        },
        Route::Membership => rsx! {
            MembershipScreen {
                on_navigate: move |r| nav.write().navigate(r),
                on_back: move |_| { nav.write().back(); },
            }
        },
        Route::MembershipCheckout(plan) => rsx! {
            MembershipCheckoutScreen {
                plan,
                on_navigate: move |r| nav.write().navigate(r),
                on_back: move |_| { nav.write().back(); },
            }
        },
        Route::MyMembership => rsx! {
            MyMembershipScreen {
                on_navigate: move |r| nav.write().navigate(r),
                on_back: move |_| { nav.write().back(); },
            }
        },
        Route::Chat => {
            let chat_key = "chat-doctor";
            rsx! {
            ChatScreen { key: "{chat_key}", peer: ChatPeer::Doctor, on_back: move |_| { nav.write().back(); } }
            }
        }
        Route::ChatWithDriver => {
            let chat_key = "chat-driver";
            rsx! {
            ChatScreen { key: "{chat_key}", peer: ChatPeer::Driver, on_back: move |_| { nav.write().back(); } }
            }
        }
        Route::LiveSos => rsx! {
            LiveSosScreen {
                on_navigate: move |r| nav.write().navigate(r),
                on_back: move |_| { nav.write().back(); },
            }
        },
        Route::Settings => rsx! {
            SettingsScreen { on_back: move |_| { nav.write().back(); } }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; background: {AppColors::SURFACE_LIGHT}; min-height: 100vh;",
            div { style: "max-width: 480px; margin: 0 auto; background: {AppColors::BACKGROUND}; min-height: 100vh;",
                {current_screen}
                if route.is_tab() {
                    TabBar { active: route, on_select: move |r| nav.write().switch_tab(r) }
                }
            }
        }
    }
}
