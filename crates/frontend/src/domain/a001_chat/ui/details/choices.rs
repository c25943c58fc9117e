use contracts::domain::a001_chat::labels;
use leptos::prelude::*;

/// Quick-reply buttons offered with a reply. Picking one hands its label to
/// `on_pick`, which sends it as the next message.
#[component]
#[allow(non_snake_case)]
pub fn ChoiceRow(options: Vec<String>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="message assistant">
            <div>{labels::CHOICES_TITLE}</div>
            <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;">
                {options
                    .into_iter()
                    .map(|option| {
                        let label = option.clone();
                        view! {
                            <button
                                type="button"
                                class="chat-option"
                                style="padding: 6px 12px; border-radius: 999px; border: 1px solid #d6dbe6; background: #ffffff; cursor: pointer;"
                                on:click=move |_| on_pick.run(option.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
