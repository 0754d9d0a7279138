use crate::domain::model::Unknown;

/// Checks whether a value is defined.
///
/// Returns `false` for an absent value and for an explicit `null`; every
/// other value, including `0`, `""`, `false` and `[]`, is defined.
pub fn is_defined(value: Option<&Unknown>) -> bool {
    !matches!(value, None | Some(Unknown::Null))
}

/// Renders a dynamic value the way a template literal would.
///
/// Strings are emitted raw (no quotes), integral numbers without a fraction,
/// arrays are comma-joined with `null` elements rendered empty, and objects
/// collapse to `[object Object]`.
pub fn stringify(value: &Unknown) -> String {
    match value {
        Unknown::Null => "null".to_string(),
        Unknown::Bool(b) => b.to_string(),
        Unknown::String(s) => s.clone(),
        Unknown::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) => format_number(f),
                None => n.to_string(),
            }
        }
        Unknown::Array(items) => items
            .iter()
            .map(|item| match item {
                Unknown::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Unknown::Object(_) => "[object Object]".to_string(),
    }
}

/// Formats a finite number with shortest round-trip digits, switching to
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
fn format_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let scientific = format!("{:e}", f);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
