use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, Event, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::events::NOTIFICATION_EVENT;
use crate::{styles, Route};

const THEME_KEY: &str = "theme";
const NOTIFICATION_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn stored_dark_mode() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .map_or(true, |theme| theme == "dark")
}

fn handle_theme_toggle(dark_mode: bool) {
    let theme = if dark_mode { "dark" } else { "light" };
    if let Some(html) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        html.set_class_name(theme);
    }
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(stored_dark_mode);
    let notification = use_state(|| None::<String>);
    // latest toast owns the hide timer; replacing it cancels the previous one
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let notification = notification.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event: &Event| {
                    let Some(message) = event
                        .dyn_ref::<CustomEvent>()
                        .and_then(|e| e.detail().as_string())
                    else {
                        return;
                    };
                    notification.set(Some(message));

                    let notification = notification.clone();
                    *hide_timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_MS, move || {
                        notification.set(None);
                    }));
                })
            });
            move || drop(listener)
        });
    }

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let new_mode = !*dark_mode;
            handle_theme_toggle(new_mode);
            dark_mode.set(new_mode);
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };

    html! {
        <div class={if *dark_mode { "dark h-full bg-gray-900" } else { "h-full bg-gray-50" }}>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Spin"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Wheel"}</Link<Route>>
                            <Link<Route> to={Route::Stats} classes={styles::NAV_LINK}>{"Stats"}</Link<Route>>
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON}>{theme_icon}</button>
                        </div>
                    </div>
                </div>
            </nav>
            if let Some(message) = (*notification).clone() {
                <div class={styles::TOAST}>
                    <svg class="h-5 w-5 text-green-400 mr-2" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd" />
                    </svg>
                    <div>{message}</div>
                </div>
            }
            <main class="pt-16">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="h-16 flex items-center justify-center">
                    <span class={styles::TEXT_SMALL}>{"Spin the wheel. Trust the wheel."}</span>
                </div>
            </footer>
        </div>
    }
}
