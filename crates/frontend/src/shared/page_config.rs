//! Reads the optional chat config override embedded in the host page.
//!
//! ```html
//! <script id="chat-config" type="application/toml">
//! [api]
//! chat_endpoint = "/api/chat"
//! </script>
//! ```

pub const CONFIG_ELEMENT_ID: &str = "chat-config";

pub fn page_config_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
