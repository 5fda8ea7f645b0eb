pub const RUBLE_SIGN: &str = "₽";

/// ru-RU digit group separator (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Format kopecks as a ruble price: `250000` -> `"2 500 ₽"`.
pub fn format_price(minor_units: i64) -> String {
    format!("{} {}", format_rubles(minor_units), RUBLE_SIGN)
}

/// `minor_units / 100` in ru-RU number style: grouped thousands, comma
/// decimal separator, no trailing zero kopecks.
pub fn format_rubles(minor_units: i64) -> String {
    let abs = minor_units.unsigned_abs();
    let mut out = group_thousands(abs / 100);

    let kopecks = abs % 100;
    if kopecks != 0 {
        out.push(',');
        out.push_str(format!("{:02}", kopecks).trim_end_matches('0'));
    }
    if minor_units < 0 {
        out.insert(0, '-');
    }
    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
