//! Rounding and number formatting for display values.

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Format a number compactly: millions as `"1.2M"`, thousands as `"3.4K"`,
/// smaller values with at most `decimals` fraction digits and no trailing zeros.
pub fn compact_number(num: f64, decimals: usize) -> String {
    if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        let s = format!("{:.*}", decimals, num);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }
}
