//! Chat turn contracts
//!
//! - aggregate.rs: wire DTOs for `/api/chat` and reply decoding
//! - output_file.rs: classification of server-produced output files
//! - conversation.rs: conversation log and send state machine
//! - labels.rs: user-visible strings

pub mod aggregate;
pub mod conversation;
pub mod labels;
pub mod output_file;
