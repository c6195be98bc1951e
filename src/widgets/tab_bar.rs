use dioxus::prelude::*;
use crate::navigation::Route;
use crate::theme::{typography, AppColors};

/// Bottom tabs for the main section.
#[component]
pub fn TabBar(active: Route, on_select: EventHandler<Route>) -> Element {
    let caption = typography::CAPTION.css();
    rsx! {
        nav {
            style: "position: sticky; bottom: 0; display: flex; height: 60px; padding: 5px 0; border-top: 1px solid {AppColors::BORDER}; background: {AppColors::BACKGROUND};",
            for tab in Route::TABS {
                button {
                    key: "{tab.title()}",
                    onclick: move |_| on_select.call(tab),
                    style: "flex: 1; background: none; border: none; cursor: pointer; {caption} color: {tab_color(tab, active)};",
                    div { style: "font-size: 22px;", "{tab_icon(tab)}" }
                    "{tab.title()}"
                }
            }
        }
    }
}

fn tab_color(tab: Route, active: Route) -> &'static str {
    if tab == active { AppColors::PRIMARY } else { AppColors::TEXT_SECONDARY }
}

fn tab_icon(tab: Route) -> &'static str {
    match tab {
        Route::Profile => "👤",
        _ => "🏠",
    }
}
