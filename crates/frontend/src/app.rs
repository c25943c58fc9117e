use crate::domain::a001_chat::ui::details::ChatClient;
use crate::shared::page_config::page_config_override;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config(page_config_override().as_deref()) {
        Ok(config) => view! { <ChatClient config=config /> }.into_any(),
        Err(e) => {
            log::error!("Failed to load chat config: {}", e);
            view! { <div class="chat-fatal">{format!("配置错误: {}", e)}</div> }.into_any()
        }
    }
}
