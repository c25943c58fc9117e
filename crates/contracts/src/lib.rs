//! Shared chat contracts: wire types, conversation state and configuration.
//!
//! Nothing in this crate touches the browser, so the behaviour the chat page
//! depends on is tested natively here.

pub mod domain;
pub mod shared;
