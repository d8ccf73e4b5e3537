//! Number formatting and rounding for display values.

/// Values at or above this magnitude are printed without fraction digits.
const MAX_EXACT_CENTS: f64 = 1e15;

/// Format a number the en-US way with at most two fraction digits.
///
/// ```
/// use tabsight::format_number;
///
/// assert_eq!(format_number(1234567.891), "1,234,567.89");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(1000.0), "1,000");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let magnitude = value.abs();
    let (whole, cents) = if magnitude < MAX_EXACT_CENTS {
        let scaled = decimal_cents(magnitude);
        ((scaled / 100).to_string(), scaled % 100)
    } else {
        (format!("{:.0}", magnitude.round()), 0)
    };

    if whole == "0" && cents == 0 {
        return "0".to_string();
    }

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    match cents {
        0 => {}
        c if c % 10 == 0 => out.push_str(&format!(".{}", c / 10)),
        c => out.push_str(&format!(".{:02}", c)),
    }
    out
}

/// Round a non-negative number to whole cents on its shortest decimal form.
///
/// Halves round up on the printed digits rather than the binary value, so
/// `1.005` gives 101 even though the nearest double sits just below it.
fn decimal_cents(magnitude: f64) -> u64 {
    let printed = magnitude.to_string();
    let (whole, fraction) = printed.split_once('.').unwrap_or((&printed, ""));

    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let whole: u64 = whole.parse().unwrap_or(0);
    whole * 100 + tenths * 10 + hundredths + u64::from(round_up)
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to two decimal places, with halves going toward positive infinity.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Render an absolute percentage change.
///
/// Small changes keep two decimals so they do not collapse to "0".
pub fn format_change(percent: f64) -> String {
    let percent = percent.abs();
    if percent < 0.5 {
        format!("{:.2}", percent)
    } else {
        format!("{}", percent.round())
    }
}
