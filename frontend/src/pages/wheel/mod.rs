mod wheel_canvas;
mod wheel_utils;

use shared::clock::SystemClock;
use shared::scheduler::SpinDriver;
use shared::selector::OsRngSelector;
use shared::{options_from_labels, SpinResult, WheelConfig, WheelEngine, WheelError, WheelEvent, WheelOption};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::base::Base;
use crate::events::{dispatch_notification, dispatch_tick};
use crate::models::update_progress;
use crate::scheduler::RafScheduler;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{parse_labels, ResultDisplay, SpinButton};

type Driver = SpinDriver<RafScheduler, OsRngSelector, SystemClock>;

const DEFAULT_LABELS: [&str; 6] = ["Pizza", "Tacos", "Sushi", "Burgers", "Curry", "Salad"];

fn labels_text(options: &[WheelOption]) -> String {
    options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>().join("\n")
}

fn record_result(result: &SpinResult) {
    let outcome = update_progress(|store| store.record_spin(result));
    for achievement in &outcome.unlocked_achievements {
        dispatch_notification(&format!("🏆 Achievement unlocked: {}", achievement.name));
    }
}

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let engine = use_mut_ref(|| {
        WheelEngine::new(options_from_labels(DEFAULT_LABELS), WheelConfig::default())
    });
    let driver = use_mut_ref(|| None::<Driver>);

    let options = use_state(|| options_from_labels(DEFAULT_LABELS));
    let labels_input = use_state(|| DEFAULT_LABELS.join("\n"));
    let rotation = use_state(|| 0.0);
    let is_spinning = use_state(|| false);
    let last_result = use_state(|| None::<SpinResult>);
    let show_result = use_state(|| false);
    let elimination = use_state(|| false);
    let error_message = use_state(String::new);

    // One driver per mounted page; dropping it on unmount cancels any frame in flight.
    {
        let engine = engine.clone();
        let driver = driver.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let last_result = last_result.clone();
        let show_result = show_result.clone();
        use_effect_with((), move |_| {
            let listener = move |event: WheelEvent| match event {
                WheelEvent::Tick(tick) => dispatch_tick(tick.segment_index),
                WheelEvent::Settled(result) => {
                    log::info!("wheel settled on '{}'", result.winner_label);
                    record_result(&result);
                    is_spinning.set(false);
                    show_result.set(true);
                    last_result.set(Some(result));
                }
            };
            let new_driver =
                SpinDriver::new(engine, RafScheduler, listener).on_frame(move |r| rotation.set(r));
            *driver.borrow_mut() = Some(new_driver);

            move || {
                let stale = driver.borrow_mut().take();
                drop(stale);
            }
        });
    }

    let on_spin = {
        let driver = driver.clone();
        let is_spinning = is_spinning.clone();
        let show_result = show_result.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let outcome = driver.borrow().as_ref().map(|d| d.spin());
            match outcome {
                Some(Ok(plan)) => {
                    log::debug!(
                        "spinning from {:.1}° to {:.1}° over {}ms",
                        plan.start_rotation, plan.target_rotation, plan.duration_ms
                    );
                    error_message.set(String::new());
                    show_result.set(false);
                    is_spinning.set(true);
                }
                Some(Err(WheelError::AlreadySpinning)) | None => {}
                Some(Err(e)) => error_message.set(e.to_string()),
            }
        })
    };

    let on_labels_input = {
        let labels_input = labels_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                labels_input.set(area.value());
            }
        })
    };

    let on_apply = {
        let engine = engine.clone();
        let options = options.clone();
        let labels_input = labels_input.clone();
        let last_result = last_result.clone();
        let show_result = show_result.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let labels = match parse_labels(&labels_input) {
                Ok(labels) => labels,
                Err(message) => {
                    error_message.set(message);
                    return;
                }
            };
            let new_options = options_from_labels(&labels);
            let applied = engine.borrow_mut().set_options(new_options.clone());
            match applied {
                Ok(()) => {
                    update_progress(|store| store.record_wheel_created());
                    options.set(new_options);
                    last_result.set(None);
                    show_result.set(false);
                    error_message.set(String::new());
                }
                Err(e) => error_message.set(e.to_string()),
            }
        })
    };

    let on_toggle_elimination = {
        let engine = engine.clone();
        let elimination = elimination.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                engine.borrow_mut().set_elimination_mode(input.checked());
                elimination.set(input.checked());
            }
        })
    };

    let on_eliminate = {
        let engine = engine.clone();
        let options = options.clone();
        let labels_input = labels_input.clone();
        let show_result = show_result.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let outcome = engine.borrow_mut().eliminate_winner();
            match outcome {
                Ok(remaining) => {
                    labels_input.set(labels_text(&remaining));
                    options.set(remaining);
                    show_result.set(false);
                }
                Err(e) => log::debug!("elimination skipped: {}", e),
            }
        })
    };

    let on_share = {
        let last_result = last_result.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(result) = (*last_result).as_ref() {
                update_progress(|store| store.record_share());
                dispatch_notification(&format!("Shared: {}", result.winner_label));
            }
        })
    };

    let can_eliminate = *elimination && *show_result && !*is_spinning && options.len() > 1;

    html! {
        <Base>
            <div class={styles::PAGE}>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class={classes!(styles::CARD, "lg:col-span-2", "flex", "flex-col", "items-center")}>
                        <h1 class={styles::TEXT_H1}>{"Spin the Wheel"}</h1>
                        <div class="mt-6">
                            <WheelCanvas
                                options={(*options).clone()}
                                rotation={*rotation}
                                is_spinning={*is_spinning}
                            />
                        </div>
                        <div class="mt-6 w-full max-w-xs">
                            <SpinButton
                                is_spinning={*is_spinning}
                                disabled={options.is_empty()}
                                onclick={on_spin}
                            />
                        </div>
                        <ResultDisplay result={(*last_result).clone()} show_result={*show_result} />
                        if *show_result {
                            <div class="flex gap-3">
                                if can_eliminate {
                                    <button onclick={on_eliminate} class={styles::BUTTON_DANGER}>{"Remove winner"}</button>
                                }
                                <button onclick={on_share} class={styles::BUTTON_SECONDARY}>{"Share"}</button>
                            </div>
                        }
                        if !error_message.is_empty() {
                            <div class={classes!(styles::ALERT_ERROR, "mt-4", "w-full")}>{(*error_message).clone()}</div>
                        }
                    </div>
                    <div class={styles::CARD}>
                        <h2 class={styles::TEXT_H3}>{"Options"}</h2>
                        <p class={styles::TEXT_HINT}>{"One option per line."}</p>
                        <textarea
                            class={styles::OPTIONS_INPUT}
                            value={(*labels_input).clone()}
                            oninput={on_labels_input}
                            disabled={*is_spinning}
                        />
                        <label class="mt-4 flex items-center gap-2">
                            <input
                                type="checkbox"
                                checked={*elimination}
                                onchange={on_toggle_elimination}
                            />
                            <span class={styles::TEXT_LABEL}>{"Elimination mode"}</span>
                        </label>
                        <button
                            onclick={on_apply}
                            disabled={*is_spinning}
                            class={classes!(styles::BUTTON_PRIMARY, "mt-4", "w-full")}
                        >
                            {"Update wheel"}
                        </button>
                        <p class={classes!(styles::TEXT_SMALL, "mt-2")}>
                            {format!("{} options on the wheel", options.len())}
                        </p>
                    </div>
                </div>
            </div>
        </Base>
    }
}
