pub mod api_utils;
pub mod format;
pub mod page_config;
