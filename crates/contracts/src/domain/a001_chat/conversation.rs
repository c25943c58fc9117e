//! Conversation log and the per-send state machine.
//!
//! `Conversation` is the whole client-side state of the chat page: the
//! append-only log, the staged file selection and the in-flight flag. It is
//! generic over the file handle so the browser can stage `web_sys::File`s
//! while tests stage plain values.
//!
//! Per send: `Idle -> Sending -> Idle`, with exactly one settle call closing
//! every `begin_send` that returned a message.

use super::aggregate::{ChatEntryId, ChatReply, ChatRole, SendOutcome};
use super::labels;
use super::output_file::{OutputFile, OutputRules};

/// A file picked by the user and held until the next successful send.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile<H> {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub handle: H,
}

impl<H> StagedFile<H> {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Содержимое записи журнала
#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    /// Plain text bubble (user turns and error notes).
    Text(String),
    /// Assistant reply; `text` is `None` when only files came back.
    Reply {
        text: Option<String>,
        outputs: Vec<OutputFile>,
    },
    /// Quick-reply buttons offered by the assistant.
    Choices(Vec<String>),
}

/// Запись журнала разговора
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: ChatEntryId,
    pub role: ChatRole,
    pub body: EntryBody,
}

impl LogEntry {
    fn new(role: ChatRole, body: EntryBody) -> Self {
        Self {
            id: ChatEntryId::new_v4(),
            role,
            body,
        }
    }

    pub fn text(role: ChatRole, text: impl Into<String>) -> Self {
        Self::new(role, EntryBody::Text(text.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPhase {
    Idle,
    Sending,
}

/// What a started send must transmit.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage<H> {
    /// Trimmed message text, possibly empty.
    pub text: String,
    pub files: Vec<H>,
}

#[derive(Debug, Clone)]
pub struct Conversation<H> {
    entries: Vec<LogEntry>,
    staged: Vec<StagedFile<H>>,
    phase: SendPhase,
    rules: OutputRules,
}

impl<H> Default for Conversation<H> {
    fn default() -> Self {
        Self::new(OutputRules::default())
    }
}

impl<H> Conversation<H> {
    pub fn new(rules: OutputRules) -> Self {
        Self {
            entries: Vec::new(),
            staged: Vec::new(),
            phase: SendPhase::Idle,
            rules,
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn staged(&self) -> &[StagedFile<H>] {
        &self.staged
    }

    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    /// True while a request is outstanding; drives the loading indicator
    /// and the disabled send control.
    pub fn is_sending(&self) -> bool {
        self.phase == SendPhase::Sending
    }

    /// Replace the staged set with a fresh picker selection.
    ///
    /// An empty pick is ignored and leaves the current set untouched.
    /// Otherwise the previous set is handed back so its resources can be
    /// released.
    pub fn stage_files(&mut self, files: Vec<StagedFile<H>>) -> Option<Vec<StagedFile<H>>> {
        if files.is_empty() {
            return None;
        }
        log::debug!("staging {} file(s)", files.len());
        Some(std::mem::replace(&mut self.staged, files))
    }

    /// Start a send for the given raw input.
    ///
    /// Returns `None` without touching the log when there is nothing to send
    /// or a send is already in flight.
    pub fn begin_send(&mut self, raw_text: &str) -> Option<OutboundMessage<H>>
    where
        H: Clone,
    {
        if self.is_sending() {
            log::debug!("send ignored: request already in flight");
            return None;
        }
        let text = raw_text.trim();
        if text.is_empty() && self.staged.is_empty() {
            return None;
        }

        let shown = if text.is_empty() {
            labels::FILES_ONLY_PLACEHOLDER
        } else {
            text
        };
        self.entries.push(LogEntry::text(ChatRole::User, shown));
        self.phase = SendPhase::Sending;

        log::info!(
            "sending message: {} chars, {} file(s)",
            text.chars().count(),
            self.staged.len()
        );
        Some(OutboundMessage {
            text: text.to_string(),
            files: self.staged.iter().map(|f| f.handle.clone()).collect(),
        })
    }

    /// Close the current send with its outcome.
    ///
    /// The conversation is back to `Idle` before anything is rendered. Files
    /// are released only after a reply; on failure they stay staged for a
    /// retry. Returns the released files.
    pub fn settle(&mut self, outcome: SendOutcome) -> Vec<StagedFile<H>> {
        self.phase = SendPhase::Idle;
        log::info!("send settled: {}", outcome.kind());

        match outcome {
            SendOutcome::Replied(reply) => {
                self.push_reply(reply);
                std::mem::take(&mut self.staged)
            }
            SendOutcome::Rejected { message } => {
                self.entries.push(LogEntry::text(
                    ChatRole::Assistant,
                    labels::error_message(&message),
                ));
                Vec::new()
            }
            SendOutcome::Failed { message } => {
                log::warn!("chat request failed: {}", message);
                self.entries.push(LogEntry::text(
                    ChatRole::Assistant,
                    labels::network_error_message(&message),
                ));
                Vec::new()
            }
        }
    }

    fn push_reply(&mut self, reply: ChatReply) {
        let text = reply.trimmed_reply();
        let outputs: Vec<OutputFile> = reply
            .output_files
            .iter()
            .map(|path| self.rules.classify(path))
            .collect();

        // An empty reply without files is a valid, silent response.
        if !text.is_empty() || !outputs.is_empty() {
            let text = (!text.is_empty()).then(|| text.to_string());
            self.entries.push(LogEntry::new(
                ChatRole::Assistant,
                EntryBody::Reply { text, outputs },
            ));
        }

        if let Some(options) = reply.options.filter(|o| !o.is_empty()) {
            self.entries
                .push(LogEntry::new(ChatRole::Assistant, EntryBody::Choices(options)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> StagedFile<u32> {
        StagedFile {
            name: name.to_string(),
            size: 2048,
            mime_type: mime.to_string(),
            handle: 7,
        }
    }

    fn replied(body: &str) -> SendOutcome {
        SendOutcome::from_response(true, body)
    }

    #[test]
    fn test_empty_send_is_noop() {
        let mut conv = Conversation::<u32>::default();
        assert!(conv.begin_send("   \n ").is_none());
        assert!(conv.entries().is_empty());
        assert!(!conv.is_sending());
    }

    #[test]
    fn test_text_send_appends_trimmed_user_entry() {
        let mut conv = Conversation::<u32>::default();
        let out = conv.begin_send("  hello world \n").expect("send starts");
        assert_eq!(out.text, "hello world");
        assert!(out.files.is_empty());
        assert_eq!(conv.entries().len(), 1);
        assert_eq!(conv.entries()[0].role, ChatRole::User);
        assert_eq!(
            conv.entries()[0].body,
            EntryBody::Text("hello world".to_string())
        );
        assert!(conv.is_sending());
    }

    #[test]
    fn test_files_only_send_uses_placeholder() {
        let mut conv = Conversation::default();
        conv.stage_files(vec![file("a.png", "image/png")]);
        let out = conv.begin_send("").expect("send starts");
        assert_eq!(out.text, "");
        assert_eq!(out.files, vec![7]);
        assert_eq!(
            conv.entries()[0].body,
            EntryBody::Text("[发送了文件]".to_string())
        );
    }

    #[test]
    fn test_second_send_refused_while_in_flight() {
        let mut conv = Conversation::<u32>::default();
        assert!(conv.begin_send("one").is_some());
        assert!(conv.begin_send("two").is_none());
        assert_eq!(conv.entries().len(), 1);
    }

    #[test]
    fn test_every_settle_path_returns_to_idle() {
        for outcome in [
            replied(r#"{"reply":"ok"}"#),
            SendOutcome::from_response(false, r#"{"error":"x"}"#),
            SendOutcome::failed("Failed to fetch"),
        ] {
            let mut conv = Conversation::<u32>::default();
            conv.begin_send("hi");
            assert_eq!(conv.phase(), SendPhase::Sending);
            conv.settle(outcome);
            assert_eq!(conv.phase(), SendPhase::Idle);
        }
    }

    #[test]
    fn test_empty_reply_without_files_is_silent() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("hi");
        conv.settle(replied(r#"{"reply":"   ","output_files":[]}"#));
        assert_eq!(conv.entries().len(), 1);

        conv.begin_send("again");
        conv.settle(replied("{}"));
        assert_eq!(conv.entries().len(), 2);
        assert!(conv.entries().iter().all(|e| e.role == ChatRole::User));
    }

    #[test]
    fn test_files_without_text_still_render_reply() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("plot it");
        conv.settle(replied(r#"{"reply":"","output_files":["out/plot.png"]}"#));

        let last = conv.entries().last().expect("reply entry");
        assert_eq!(last.role, ChatRole::Assistant);
        match &last.body {
            EntryBody::Reply { text, outputs } => {
                assert!(text.is_none());
                assert_eq!(outputs.len(), 1);
                assert!(outputs[0].is_image);
                assert_eq!(outputs[0].href(), "/out/plot.png");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_reply_classifies_each_output() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("go");
        conv.settle(replied(
            r#"{"reply":" done ","output_files":["out/report.md","out/plot.jpg","out/raw.bin"]}"#,
        ));
        match &conv.entries()[1].body {
            EntryBody::Reply { text, outputs } => {
                assert_eq!(text.as_deref(), Some("done"));
                let kinds: Vec<(bool, bool)> =
                    outputs.iter().map(|o| (o.is_image, o.is_text)).collect();
                assert_eq!(kinds, vec![(false, true), (true, false), (false, false)]);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_options_follow_reply() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("which?");
        conv.settle(replied(r#"{"reply":"pick one","options":["A","B"]}"#));

        assert_eq!(conv.entries().len(), 3);
        assert_eq!(
            conv.entries()[2].body,
            EntryBody::Choices(vec!["A".to_string(), "B".to_string()])
        );

        // Picking an option is an ordinary send of its label.
        let out = conv.begin_send("B").expect("option send starts");
        assert_eq!(out.text, "B");
    }

    #[test]
    fn test_empty_options_render_nothing() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("hi");
        conv.settle(replied(r#"{"reply":"","options":[]}"#));
        assert_eq!(conv.entries().len(), 1);
    }

    #[test]
    fn test_success_releases_staged_files() {
        let mut conv = Conversation::default();
        conv.stage_files(vec![file("a.txt", "text/plain"), file("b.png", "image/png")]);
        conv.begin_send("with files");
        let released = conv.settle(replied(r#"{"reply":"ok"}"#));
        assert_eq!(released.len(), 2);
        assert!(conv.staged().is_empty());
    }

    #[test]
    fn test_failures_keep_staged_files() {
        let mut conv = Conversation::default();
        conv.stage_files(vec![file("a.txt", "text/plain")]);

        conv.begin_send("x");
        let released = conv.settle(SendOutcome::from_response(false, r#"{"error":"bad file"}"#));
        assert!(released.is_empty());
        assert_eq!(conv.staged().len(), 1);
        assert_eq!(
            conv.entries().last().map(|e| e.body.clone()),
            Some(EntryBody::Text("错误: bad file".to_string()))
        );

        conv.begin_send("x");
        conv.settle(SendOutcome::failed("Failed to fetch"));
        assert_eq!(conv.staged().len(), 1);
        assert_eq!(
            conv.entries().last().map(|e| e.body.clone()),
            Some(EntryBody::Text("网络错误: Failed to fetch".to_string()))
        );
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("x");
        conv.settle(SendOutcome::from_response(false, r#"{"detail":"nope"}"#));
        assert_eq!(
            conv.entries().last().map(|e| e.body.clone()),
            Some(EntryBody::Text("错误: 请求失败".to_string()))
        );
    }

    #[test]
    fn test_stage_replaces_without_merge() {
        let mut conv = Conversation::default();
        assert_eq!(conv.stage_files(vec![file("a.txt", "text/plain")]), Some(Vec::new()));
        let previous = conv
            .stage_files(vec![file("b.png", "image/png"), file("c.png", "image/png")])
            .expect("non-empty pick replaces");
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].name, "a.txt");
        let names: Vec<&str> = conv.staged().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "c.png"]);
    }

    #[test]
    fn test_empty_pick_keeps_current_selection() {
        let mut conv = Conversation::default();
        conv.stage_files(vec![file("a.txt", "text/plain")]);
        assert!(conv.stage_files(Vec::new()).is_none());
        assert_eq!(conv.staged().len(), 1);
    }

    #[test]
    fn test_is_image_uses_mime_prefix() {
        assert!(file("x", "image/webp").is_image());
        assert!(!file("x.png", "application/octet-stream").is_image());
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut conv = Conversation::<u32>::default();
        conv.begin_send("a");
        conv.settle(replied(r#"{"reply":"b","options":["c"]}"#));
        let ids: std::collections::HashSet<_> = conv.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), conv.entries().len());
    }
}
