//! User-visible strings of the chat page.

/// Shown as the user entry when only files were sent.
pub const FILES_ONLY_PLACEHOLDER: &str = "[发送了文件]";
/// Generic fallback when a failed response names no error.
pub const REQUEST_FAILED: &str = "请求失败";
pub const ERROR_PREFIX: &str = "错误: ";
pub const NETWORK_ERROR_PREFIX: &str = "网络错误: ";
pub const OUTPUT_LINK_PREFIX: &str = "查看输出: ";
pub const OUTPUT_TEXT_UNAVAILABLE: &str = "无法加载输出原文。";
pub const CHOICES_TITLE: &str = "请选择：";
pub const THINKING: &str = "正在思考";
pub const INPUT_PLACEHOLDER: &str = "输入消息，Enter 发送，Shift+Enter 换行";
pub const SEND: &str = "发送";
pub const SENDING: &str = "发送中...";
pub const ATTACH: &str = "添加文件";

pub fn error_message(message: &str) -> String {
    format!("{}{}", ERROR_PREFIX, message)
}

pub fn network_error_message(message: &str) -> String {
    format!("{}{}", NETWORK_ERROR_PREFIX, message)
}
