//! Chat Client UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: transport (POST /api/chat, output text fetch)
//! - view_model.rs: ChatVm with signals and staged file handles
//! - view.rs: Main component ChatClient
//! - loading.rs: loading indicator with elapsed-seconds counter
//! - output_preview.rs: per-output-file link/image/text preview
//! - choices.rs: quick-reply option buttons
//! - file_tray.rs: staged file chips and image thumbnails

mod choices;
mod file_tray;
mod loading;
mod model;
mod output_preview;
mod view;
mod view_model;

pub use choices::ChoiceRow;
pub use file_tray::FileTray;
pub use loading::LoadingIndicator;
pub use model::ChatTransportError;
pub use output_preview::OutputPreview;
pub use view::ChatClient;
pub use view_model::{ChatVm, StagedHandle};
