//! Human-readable dumps of vectors and matrices.
//!
//! The renderers only see a shape and an entry accessor, so anything exposing
//! `rows`, `cols` and `get` can be printed the same way.

use crate::config::{Notation, RenderConfig};

/// Width of the horizontal rules framing a matrix dump.
const RULE_WIDTH: usize = 117;

/// Format a single entry according to `config`, without padding.
pub fn format_entry(value: f64, config: &RenderConfig) -> String {
    match config.notation {
        Notation::General => format_general(value, config.precision),
        Notation::Fixed => format!("{:.*}", config.precision, value),
        Notation::Scientific => {
            if !value.is_finite() {
                return format!("{}", value);
            }
            let scientific = format!("{:.*e}", config.precision, value);
            match scientific.split_once('e') {
                Some((mantissa, exponent)) => {
                    with_exponent(mantissa, exponent.parse().unwrap_or(0))
                }
                None => scientific,
            }
        }
    }
}

/// Join a mantissa and exponent the way `printf` does: `1.5e+03`, `2e-05`.
fn with_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// `%g`-style formatting: `precision` significant digits, scientific notation
/// only for very small or very large magnitudes, trailing zeros removed.
fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    // Exponent after rounding to `precision` digits, so 9.99996 rolls over to 1e1.
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        with_exponent(trim_fraction(mantissa), exponent)
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Render a `rows x cols` grid whose entries are read through `entry`.
pub fn render_grid<F>(rows: usize, cols: usize, entry: F, config: &RenderConfig) -> String
where
    F: Fn(usize, usize) -> f64,
{
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    if config.show_header {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Dimension: Rows: {} \t Cols: {} \n", rows, cols));
        out.push_str("Matrix: \n");
    }
    for i in 0..rows {
        // every entry, the last one included, is followed by a space
        for j in 0..cols {
            out.push_str(&format!(
                "{:>width$} ",
                format_entry(entry(i, j), config),
                width = config.width
            ));
        }
        out.push('\n');
    }
    if config.show_header {
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

/// Render a sequence as `[a, b, c]`, formatting each entry with `format`.
pub fn render_list<I, F>(values: I, format: F) -> String
where
    I: IntoIterator<Item = f64>,
    F: Fn(f64) -> String,
{
    let entries = values.into_iter().map(format).collect::<Vec<_>>();
    format!("[{}]", entries.join(", "))
}
