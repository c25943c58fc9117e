use super::model::fetch_output_text;
use contracts::domain::a001_chat::labels;
use contracts::domain::a001_chat::output_file::{OutputFile, OutputText};
use leptos::prelude::*;

/// One output file of a reply.
///
/// Each text-type output fetches its own body in a detached task that writes
/// only to this component's signal; outputs of the same reply never wait on
/// each other.
#[component]
#[allow(non_snake_case)]
pub fn OutputPreview(file: OutputFile) -> impl IntoView {
    let href = file.href();
    let preview = RwSignal::new(OutputText::Loading);

    if file.is_text {
        let href = href.clone();
        Effect::new(move |_| {
            let href = href.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_output_text(&href).await;
                let _ = preview.try_set(OutputText::from_fetch(&href, result));
            });
        });
    }

    let image = file.is_image.then(|| {
        view! {
            <img
                src=href.clone()
                alt=file.path.clone()
                style="max-width: 100%; border-radius: 8px; margin-top: 8px;"
            />
        }
    });

    let text = file.is_text.then(|| {
        move || match preview.get() {
            OutputText::Loading => ().into_any(),
            OutputText::Loaded(body) => view! {
                <pre style="white-space: pre-wrap; background: #f7f7f7; padding: 8px; border-radius: 8px; margin-top: 8px;">
                    {body}
                </pre>
            }
            .into_any(),
            OutputText::Unavailable => view! {
                <div style="margin-top: 8px;">{labels::OUTPUT_TEXT_UNAVAILABLE}</div>
            }
            .into_any(),
        }
    });

    view! {
        <div class="output-file">
            {image}
            {text}
            <a
                href=href
                target="_blank"
                style="display: block; margin-top: 8px; color: #007bff;"
            >
                {file.link_label()}
            </a>
        </div>
    }
}
