use gloo_events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::events::PROGRESS_UPDATE_EVENT;
use crate::models::ProgressSnapshot;

/// Snapshot of stored progress, reloaded whenever a `wheelProgressUpdate` fires.
#[hook]
pub fn use_progress() -> UseStateHandle<ProgressSnapshot> {
    let snapshot = use_state(ProgressSnapshot::load);

    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, PROGRESS_UPDATE_EVENT, move |_| {
                    snapshot.set(ProgressSnapshot::load());
                })
            });
            move || drop(listener)
        });
    }

    snapshot
}
