//! SI-prefixed number formatting for axis labels.

const PREFIXES: [&str; 11] = ["a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T"];
/// Index of the empty prefix in `PREFIXES`.
const UNITY: i32 = 6;

#[inline]
fn int_digits(x: f64) -> usize {
    let a = x.abs();
    if a < 1.0 {
        1
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let d = a.log10().floor() as usize;
        d + 1
    }
}

#[inline]
fn round_to(x: f64, decimals: usize) -> f64 {
    let k = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (x * k).round() / k
}

/// Format `value` with an SI prefix and roughly `max_digits` significant digits.
///
/// 4.7e-12 with one digit becomes "5p"; 23.4 with four becomes "23.40".
/// Non-finite values render as "-".
#[must_use]
pub fn format_si(value: f64, max_digits: usize) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let digits = max_digits.max(1);

    #[allow(clippy::cast_possible_truncation)]
    let mut exp = ((value.abs().log10() / 3.0).floor() as i32).clamp(-UNITY, 4);
    let mut scaled = value / 1000_f64.powi(exp);
    let mut decimals = digits.saturating_sub(int_digits(scaled));

    // 999.96 -> "1000.0" reads worse than "1.000k"
    if round_to(scaled, decimals).abs() >= 1000.0 && exp < 4 {
        exp += 1;
        scaled = value / 1000_f64.powi(exp);
        decimals = digits.saturating_sub(int_digits(scaled));
    }

    #[allow(clippy::cast_sign_loss)]
    let prefix = PREFIXES[(exp + UNITY) as usize];
    format!("{scaled:.decimals$}{prefix}")
}
