//! Chat Client - View Model

use contracts::domain::a001_chat::conversation::{Conversation, StagedFile};
use contracts::domain::a001_chat::output_file::OutputRules;
use leptos::prelude::*;
use web_sys::{File, FileList, Url};

/// Browser side of a staged file: the picked `File` plus the object URL
/// backing its thumbnail, if it is an image.
#[derive(Debug, Clone)]
pub struct StagedHandle {
    pub file: File,
    pub preview_url: Option<String>,
}

impl StagedHandle {
    fn release(self) {
        if let Some(url) = self.preview_url {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    /// Whole conversation state; local storage because `File` is not `Send`.
    pub conversation: RwSignal<Conversation<StagedHandle>, LocalStorage>,
    pub draft: RwSignal<String>,
}

impl ChatVm {
    pub fn new(rules: OutputRules) -> Self {
        Self {
            conversation: RwSignal::new_local(Conversation::new(rules)),
            draft: RwSignal::new(String::new()),
        }
    }

    pub fn is_sending(&self) -> Signal<bool> {
        let conversation = self.conversation;
        Signal::derive(move || conversation.with(|c| c.is_sending()))
    }
}

/// Turn a picker selection into staged files, creating thumbnails for images.
pub fn staged_from_list(list: &FileList) -> Vec<StagedFile<StagedHandle>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let mime_type = file.type_();
            let preview_url = if mime_type.starts_with("image/") {
                Url::create_object_url_with_blob(&file)
                    .map_err(|e| log::warn!("Failed to create preview for {}: {:?}", file.name(), e))
                    .ok()
            } else {
                None
            };
            StagedFile {
                name: file.name(),
                size: file.size() as u64,
                mime_type,
                handle: StagedHandle { file, preview_url },
            }
        })
        .collect()
}

/// Drop files that are no longer staged, revoking their thumbnails.
pub fn release_staged(files: Vec<StagedFile<StagedHandle>>) {
    for staged in files {
        staged.handle.release();
    }
}
