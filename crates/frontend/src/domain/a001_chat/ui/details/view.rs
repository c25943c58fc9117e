//! Chat Client - View Component

use super::choices::ChoiceRow;
use super::file_tray::FileTray;
use super::loading::LoadingIndicator;
use super::model::post_chat;
use super::output_preview::OutputPreview;
use super::view_model::{release_staged, staged_from_list, ChatVm};
use contracts::domain::a001_chat::aggregate::SendOutcome;
use contracts::domain::a001_chat::conversation::{EntryBody, LogEntry};
use contracts::domain::a001_chat::labels;
use contracts::shared::config::ChatConfig;
use leptos::prelude::*;
use thaw::*;

fn entry_view(entry: LogEntry, on_pick: Callback<String>) -> AnyView {
    let class = format!("message {}", entry.role.as_str());
    match entry.body {
        EntryBody::Text(text) => view! { <div class=class>{text}</div> }.into_any(),
        EntryBody::Reply { text, outputs } => view! {
            <div class=class>
                {text}
                {outputs
                    .into_iter()
                    .map(|file| view! { <OutputPreview file=file /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        EntryBody::Choices(options) => view! { <ChoiceRow options=options on_pick=on_pick /> }.into_any(),
    }
}

/// The chat page: conversation log, staged files and the composer.
///
/// All state lives in the component's own [`ChatVm`]; the configuration is
/// injected by the caller.
#[component]
#[allow(non_snake_case)]
pub fn ChatClient(config: ChatConfig) -> impl IntoView {
    let vm = ChatVm::new(config.output_rules());
    let is_sending = vm.is_sending();
    let endpoint = StoredValue::new(config.api.chat_endpoint.clone());
    let tick_ms = config.ui.loading_tick_ms;

    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the newest entry (or the loading indicator) in view.
    Effect::new(move |_| {
        vm.conversation.with(|c| (c.entries().len(), c.is_sending()));
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Send message handler - using Callback so option buttons can reuse it
    let handle_send = Callback::new(move |_: ()| {
        let raw = vm.draft.get_untracked();
        let mut outbound = None;
        vm.conversation.update(|c| outbound = c.begin_send(&raw));
        let Some(outbound) = outbound else {
            return;
        };
        vm.draft.set(String::new());

        let endpoint = endpoint.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let files: Vec<web_sys::File> =
                outbound.files.iter().map(|h| h.file.clone()).collect();

            let outcome = match post_chat(&endpoint, &outbound.text, &files).await {
                Ok(outcome) => outcome,
                Err(e) => SendOutcome::failed(e.to_string()),
            };
            let replied = matches!(outcome, SendOutcome::Replied(_));

            let mut released = Vec::new();
            vm.conversation.update(|c| released = c.settle(outcome));

            if replied {
                release_staged(released);
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_value("");
                }
            }
        });
    });

    let handle_pick = Callback::new(move |choice: String| {
        vm.draft.set(choice);
        handle_send.run(());
    });

    let handle_files_changed = move |_| {
        let Some(input) = file_input_ref.get_untracked() else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let picked = staged_from_list(&list);
        let mut replaced = None;
        vm.conversation.update(|c| replaced = c.stage_files(picked));
        if let Some(previous) = replaced {
            release_staged(previous);
        }
    };

    view! {
        <div class="chat-app" style="height: 100%; display: flex; flex-direction: column; padding: 20px;">
            // Messages area
            <div
                id="messages"
                class="messages"
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px;"
            >
                <For
                    each=move || vm.conversation.with(|c| c.entries().to_vec())
                    key=|entry| entry.id
                    children=move |entry: LogEntry| entry_view(entry, handle_pick)
                />
                <Show when=move || is_sending.get()>
                    <LoadingIndicator tick_ms=tick_ms />
                </Show>
            </div>

            // Input area
            <div style="display: flex; flex-direction: column; gap: 8px;">
                <FileTray vm=vm />

                <Flex style="gap: 8px; align-items: flex-end;">
                    <input
                        type="file"
                        id="fileInput"
                        multiple=true
                        style="display: none;"
                        node_ref=file_input_ref
                        on:change=handle_files_changed
                    />

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            if let Some(input) = file_input_ref.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        {labels::ATTACH}
                    </Button>

                    <div style="flex: 1;">
                        <Textarea
                            value=vm.draft
                            placeholder=labels::INPUT_PLACEHOLDER
                            attr:id="textInput"
                            attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() && !ev.is_composing() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_sending
                        attr:id="sendBtn"
                        on_click=move |_| handle_send.run(())
                    >
                        {move || if is_sending.get() { labels::SENDING } else { labels::SEND }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
