//! Printing sequences the way a default-configured C++ output stream would:
//! every element followed by one space, then a newline.

use crate::Result;
use serde::Serialize;
use std::io::Write;

/// Significant digits used for floating point, matching a stream's default precision.
pub const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, clap::ValueEnum)]
pub enum OutputFormat {
    /// Space separated, one sequence per line.
    #[default]
    #[display("plain")]
    Plain,
    /// One JSON array per line.
    #[display("json")]
    Json,
}

pub trait Render {
    fn render(&self) -> String;
}

macro_rules! render_with_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_with_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String, str);

impl Render for bool {
    fn render(&self) -> String {
        if *self { "1" } else { "0" }.to_string()
    }
}

impl Render for f64 {
    fn render(&self) -> String {
        format_general(*self, DEFAULT_PRECISION)
    }
}

impl Render for f32 {
    fn render(&self) -> String {
        format_general(f64::from(*self), DEFAULT_PRECISION)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Formats `value` in `%g` style with `precision` significant digits.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`; trailing zeros are dropped in both forms.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // The exponent must come from the value rounded to `precision` digits.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
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

pub fn render_line<T: Render>(items: &[T]) -> String {
    let mut line = String::new();
    for item in items {
        line.push_str(&item.render());
        line.push(' ');
    }
    line.push('\n');
    line
}

pub fn print_vec<W, T>(out: &mut W, items: &[T], format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Render + Serialize,
{
    match format {
        OutputFormat::Plain => out.write_all(render_line(items).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
