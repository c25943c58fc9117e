//! Форматирование значений для отображения в чате

/// Размер файла в килобайтах, округлённый до целого
///
/// # Примеры
///
/// ```
/// # use frontend::shared::format::format_size_kb;
/// assert_eq!(format_size_kb(1536), "2 KB");
/// ```
pub fn format_size_kb(bytes: u64) -> String {
    let kb = (bytes as f64 / 1024.0).round() as u64;
    format!("{} KB", kb)
}

/// Подпись файла в списке вложений: `name (N KB)`
pub fn format_file_chip(name: &str, bytes: u64) -> String {
    format!("{} ({})", name, format_size_kb(bytes))
}

/// Elapsed seconds shown next to the loading indicator.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}s", seconds)
}
