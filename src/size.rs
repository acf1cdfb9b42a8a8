//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count using 1024-based steps, e.g. `2048.0` -> `"2.00 KB"`.
///
/// Values too large for `TB` stay in `TB` (`1024.00 TB` and up).
pub fn format_size(bytes: f64) -> String {
    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
