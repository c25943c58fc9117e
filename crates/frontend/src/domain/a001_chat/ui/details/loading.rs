use crate::shared::format::format_elapsed;
use contracts::domain::a001_chat::labels;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// "Thinking" bubble with animated dots and a live elapsed-seconds counter.
///
/// The counter's interval is owned by the component and cleared when it
/// unmounts, so the timer never outlives the indicator.
#[component]
pub fn LoadingIndicator(
    /// Counter period in milliseconds
    tick_ms: u32,
) -> impl IntoView {
    let elapsed = RwSignal::new(0u32);

    let interval = StoredValue::new_local(Interval::new(tick_ms, move || {
        elapsed.update(|s| *s += 1);
    }));
    on_cleanup(move || interval.dispose());

    view! {
        <div class="loading-message" id="loading-indicator">
            <span>{labels::THINKING}</span>
            <div class="loading-dots">
                <span></span>
                <span></span>
                <span></span>
            </div>
            <span
                id="loading-timer"
                style="margin-left: 8px; color: #888; font-size: 12px;"
            >
                {move || format_elapsed(elapsed.get())}
            </span>
        </div>
    }
}
