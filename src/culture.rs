//! Culture used to turn scalar values into element text.
//!
//! A [`Culture`] is an immutable value handed to each encode call through
//! [`EncodeOptions`](crate::encoder::EncodeOptions), so concurrent callers can
//! format numbers differently without sharing state. The default is the
//! invariant culture: `.` as decimal separator, `-` as negative sign and no
//! digit grouping.

use crate::element::Scalar;
use crate::error::EncodeError;
use time::format_description::well_known::Rfc3339;

/// Floats whose decimal exponent reaches this value are written in
/// scientific notation, as are non-zero floats below `1e-4`.
const SCIENTIFIC_EXPONENT: i32 = 15;
const SMALLEST_FIXED_EXPONENT: i32 = -4;

/// Number formatting rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    decimal_separator: char,
    negative_sign: String,
    nan_symbol: String,
    positive_infinity_symbol: String,
    negative_infinity_symbol: String,
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Culture {
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            decimal_separator: '.',
            negative_sign: "-".to_string(),
            nan_symbol: "NaN".to_string(),
            positive_infinity_symbol: "Infinity".to_string(),
            negative_infinity_symbol: "-Infinity".to_string(),
        }
    }

    /// Creates a culture that differs from the invariant one in its name and
    /// decimal separator
    pub fn new(name: impl Into<String>, decimal_separator: char) -> Self {
        Self {
            name: name.into(),
            decimal_separator,
            ..Self::invariant()
        }
    }

    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self.negative_infinity_symbol =
            format!("{}{}", self.negative_sign, self.positive_infinity_symbol);
        self
    }

    pub fn with_nan_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.nan_symbol = symbol.into();
        self
    }

    pub fn with_infinity_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.positive_infinity_symbol = symbol.into();
        self.negative_infinity_symbol =
            format!("{}{}", self.negative_sign, self.positive_infinity_symbol);
        self
    }

    /// Empty for the invariant culture
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn is_invariant(&self) -> bool {
        *self == Self::invariant()
    }

    /// Renders a scalar as element text under this culture
    pub fn format_scalar(&self, scalar: &Scalar) -> Result<String, EncodeError> {
        let text = match scalar {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => self.localize_sign(n.to_string()),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => self.format_float(*n),
            Scalar::Char(c) => c.to_string(),
            Scalar::Str(s) => s.clone(),
            Scalar::DateTime(dt) => dt.format(&Rfc3339)?,
            Scalar::Opaque(value) => value.to_string(),
        };
        Ok(text)
    }

    fn format_float(&self, value: f64) -> String {
        if value.is_nan() {
            return self.nan_symbol.clone();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() {
                self.positive_infinity_symbol.clone()
            } else {
                self.negative_infinity_symbol.clone()
            };
        }
        // -0.0 is written as 0
        if value == 0.0 {
            return "0".to_string();
        }

        let text = scientific_or_fixed(value);
        let text = if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        };
        self.localize_sign(text)
    }

    fn localize_sign(&self, text: String) -> String {
        match text.strip_prefix('-') {
            Some(digits) if self.negative_sign != "-" => format!("{}{digits}", self.negative_sign),
            _ => text,
        }
    }
}

/// Shortest round-trip digits, switching to `1.5E+20` / `1E-07` notation
/// outside the fixed-point range
fn scientific_or_fixed(value: f64) -> String {
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (SMALLEST_FIXED_EXPONENT..SCIENTIFIC_EXPONENT).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{:02}", exponent.abs())
    }
}
