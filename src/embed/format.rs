//! Value and label formatting for embed bodies

/// Formats a number with `,` digit grouping.
///
/// Whole values render as integers ("8,888,888"); fractional values keep
/// their fraction with only the integer part grouped ("1,234.5").
/// Non-finite values fall back to their plain display form.
pub fn group_digits(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Uppercases the first letter and lowercases the rest
/// ("runecrafting" to "Runecrafting", "EHP" to "Ehp").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Turns an underscore slug into display form
/// ("theatre_of_blood" to "Theatre of blood").
pub fn humanize(name: &str) -> String {
    capitalize(&name.replace('_', " "))
}
