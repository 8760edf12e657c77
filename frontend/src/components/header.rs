use leptos::*;

use crate::config::{species_page_url, APP_NAME};
use crate::services::open_in_new_tab;
use crate::types::ServiceStatus;

#[component]
pub fn Header(status: ReadSignal<ServiceStatus>) -> impl IntoView {
    let on_species_click = move |_| {
        log::info!("🐟 Opening species prediction page");
        open_in_new_tab(species_page_url());
    };

    view! {
        <header class="appbar">
            <div class="header-left">
                <span class="title">{APP_NAME}</span>
            </div>
            <div class="header-right">
                <span
                    class=move || format!("status-dot {}", status.get().css_class())
                    title=move || status.get().label()
                ></span>
                <button class="appbar-button" on:click=on_species_click>
                    "Predict Fish Species"
                </button>
                <div class="avatar">"🐠"</div>
            </div>
        </header>
    }
}
