use super::view_model::ChatVm;
use crate::shared::format::format_file_chip;
use leptos::prelude::*;

/// Chips and thumbnails for the currently staged files.
#[component]
#[allow(non_snake_case)]
pub fn FileTray(vm: ChatVm) -> impl IntoView {
    let chips = Memo::new(move |_| {
        vm.conversation.with(|c| {
            c.staged()
                .iter()
                .map(|f| format_file_chip(&f.name, f.size))
                .collect::<Vec<_>>()
        })
    });

    let previews = Memo::new(move |_| {
        vm.conversation.with(|c| {
            c.staged()
                .iter()
                .filter(|f| f.is_image())
                .filter_map(|f| f.handle.preview_url.clone().map(|url| (f.name.clone(), url)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="file-list" id="fileList">
            {move || {
                chips
                    .get()
                    .into_iter()
                    .map(|chip| view! { <div class="file-chip">{chip}</div> })
                    .collect_view()
            }}
        </div>
        <div class="image-preview" id="imagePreview">
            {move || {
                previews
                    .get()
                    .into_iter()
                    .map(|(name, url)| view! { <img alt=name src=url /> })
                    .collect_view()
            }}
        </div>
    }
}
