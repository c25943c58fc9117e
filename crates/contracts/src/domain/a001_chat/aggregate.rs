use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::labels;

/// Multipart field carrying the message text.
pub const MESSAGE_FIELD: &str = "message";
/// Multipart field repeated once per attached file.
pub const FILES_FIELD: &str = "files";

/// ID записи в журнале разговора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatEntryId(pub Uuid);

impl ChatEntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Роль записи в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Successful `/api/chat` payload.
///
/// Every field is optional on the wire; anything else the server sends
/// (e.g. `bus_state`) is ignored. A `null` file list counts as empty and
/// an `options` value that is not an array is dropped, so neither can
/// hide the reply text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output_files: Vec<String>,
    #[serde(default, deserialize_with = "array_or_none")]
    pub options: Option<Vec<String>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn array_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
    ))
}

impl ChatReply {
    /// Reply text with surrounding whitespace removed; empty when absent.
    pub fn trimmed_reply(&self) -> &str {
        self.reply.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Non-2xx `/api/chat` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ChatErrorBody {
    /// Server-supplied message, or the generic fallback when it is missing,
    /// null or an empty string.
    pub fn message(&self) -> String {
        match &self.error {
            None | Some(Value::Null) => labels::REQUEST_FAILED.to_string(),
            Some(Value::String(s)) if s.is_empty() => labels::REQUEST_FAILED.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// How one send settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// 2xx with a decodable body.
    Replied(ChatReply),
    /// Non-2xx with a decodable error body.
    Rejected { message: String },
    /// Transport failure or an undecodable body.
    Failed { message: String },
}

impl SendOutcome {
    /// Interpret a settled response from its status flag and raw body.
    pub fn from_response(ok: bool, body: &str) -> Self {
        if ok {
            match serde_json::from_str::<ChatReply>(body) {
                Ok(reply) => SendOutcome::Replied(reply),
                Err(e) => SendOutcome::Failed {
                    message: e.to_string(),
                },
            }
        } else {
            match serde_json::from_str::<ChatErrorBody>(body) {
                Ok(err) => SendOutcome::Rejected {
                    message: err.message(),
                },
                Err(e) => SendOutcome::Failed {
                    message: e.to_string(),
                },
            }
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SendOutcome::Failed {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SendOutcome::Replied(_) => "replied",
            SendOutcome::Rejected { .. } => "rejected",
            SendOutcome::Failed { .. } => "failed",
        }
    }
}
