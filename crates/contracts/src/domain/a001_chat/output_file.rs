use serde::{Deserialize, Serialize};

use super::labels;

/// Suffix lists deciding how an output file is previewed.
///
/// Matching is a case-sensitive suffix test against the path as the
/// server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRules {
    pub image_extensions: Vec<String>,
    pub text_extensions: Vec<String>,
}

impl Default for OutputRules {
    fn default() -> Self {
        Self {
            image_extensions: vec![".png".into(), ".jpg".into(), ".jpeg".into()],
            text_extensions: vec![".md".into(), ".txt".into()],
        }
    }
}

impl OutputRules {
    pub fn classify(&self, path: &str) -> OutputFile {
        OutputFile {
            path: path.to_string(),
            is_image: self.image_extensions.iter().any(|ext| path.ends_with(ext.as_str())),
            is_text: self.text_extensions.iter().any(|ext| path.ends_with(ext.as_str())),
        }
    }
}

/// One file produced by the server for a reply.
///
/// Every output file gets a link; images additionally get an inline
/// preview and text files get their body fetched and shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Root-relative path as returned by the server.
    pub path: String,
    pub is_image: bool,
    pub is_text: bool,
}

impl OutputFile {
    /// Absolute path on the serving origin.
    pub fn href(&self) -> String {
        format!("/{}", self.path.trim_start_matches('/'))
    }

    pub fn link_label(&self) -> String {
        format!("{}{}", labels::OUTPUT_LINK_PREFIX, self.path)
    }
}

/// Display state of a text-type output's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputText {
    Loading,
    Loaded(String),
    /// The fetch failed; the fixed note replaces the body.
    Unavailable,
}

impl OutputText {
    /// Interpret a settled follow-up GET. A non-2xx status counts as a
    /// failure just like a transport error.
    pub fn from_fetch<E: std::fmt::Display>(path: &str, result: Result<(u16, String), E>) -> Self {
        match result {
            Ok((status, body)) if (200..300).contains(&status) => OutputText::Loaded(body),
            Ok((status, _)) => {
                log::warn!("Failed to load output {}: HTTP {}", path, status);
                OutputText::Unavailable
            }
            Err(e) => {
                log::warn!("Failed to load output {}: {}", path, e);
                OutputText::Unavailable
            }
        }
    }
}
