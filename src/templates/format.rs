// templates/format.rs

/// `2850000.0` → `$2,850,000`. Cents are rounded away.
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Stat counts: whole numbers without decimals, otherwise up to two places.
pub fn count(value: f64) -> String {
    if value.fract() == 0.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}", group_thousands(value.abs() as u64));
    }

    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn percent(value: f64) -> String {
    format!("{}%", count(value))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
