//! Human-readable byte sizes.

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const STEP: f64 = 1024.0;

/// Format a byte count using 1024-based units.
///
/// Counts below 1 KB print as whole bytes (`"512 B"`). Larger counts print
/// with one decimal place (`"1.0 KB"`, `"82.4 GB"`).
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while unit < UNITS.len() - 1 && round_tenth(value) >= STEP {
        value /= STEP;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
