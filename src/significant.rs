//! asymmetric-error significant module.

use std::fmt;
use tracing::trace;

/// A number rounded for display.
///
/// `decimals` is the decimal position of the last reported digit: `2` for
/// `"0.14"`, `0` for `"14"`, `-2` for `"1400"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rounded {
    text: String,
    decimals: i32,
    raw: f64,
}

impl Rounded {
    /// Canonical decimal text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decimal position of the last reported digit.
    pub fn decimals(&self) -> i32 {
        self.decimals
    }

    /// Numeric value of the rounded text.
    pub fn value(&self) -> f64 {
        self.text.parse::<f64>().unwrap_or(self.raw)
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Largest number of significant figures an `f64` can meaningfully report.
pub const MAX_SIGFIGS: usize = 17;

/// Rounds `value` to `sigfigs` significant figures in plain decimal form.
///
/// Trailing zeros that carry precision are kept (`0.10`), and digits left of
/// the decimal point beyond the requested figures become zeros (`1200`).
/// Zero is reported with `sigfigs - 1` decimals. `sigfigs` is clamped to
/// `1..=MAX_SIGFIGS`.
///
/// Rounding works on the shortest decimal text of `value` and sends ties
/// away from zero, so `0.35` becomes `0.4`.
///
/// # Examples
/// ```
/// use asymmetric_error::significant::round_sigfigs;
/// assert_eq!(round_sigfigs(1.41421356, 2).as_str(), "1.4");
/// assert_eq!(round_sigfigs(0.0123, 2).as_str(), "0.012");
/// assert_eq!(round_sigfigs(1234.5, 2).as_str(), "1200");
/// assert_eq!(round_sigfigs(0.1, 3).as_str(), "0.100");
/// assert_eq!(round_sigfigs(0.35, 1).as_str(), "0.4");
/// ```
pub fn round_sigfigs(value: f64, sigfigs: usize) -> Rounded {
    let sigfigs = sigfigs.clamp(1, MAX_SIGFIGS);
    if value == 0.0 || !value.is_finite() {
        let decimals = sigfigs - 1;
        return Rounded {
            text: plain(format!("{0:.1$}", value, decimals)),
            decimals: decimals as i32,
            raw: value,
        };
    }

    let digits = Digits::of(value);
    let mut decimals = (sigfigs - 1) as i32 - digits.exponent;
    let mut kept = digits.round_at(decimals);
    // a carry such as 9.96 -> 10.0 adds a figure; drop one place
    if kept.len() > sigfigs {
        decimals -= 1;
        kept = digits.round_at(decimals);
    }

    Rounded {
        text: render(value < 0.0, &kept, decimals),
        decimals,
        raw: value,
    }
}

/// Rounds `value` to the decimal position of the last digit of `uncertainty`.
///
/// The result is always plain decimal, never scientific notation, and ties
/// are broken the same way as in [`round_sigfigs`].
///
/// # Examples
/// ```
/// use asymmetric_error::significant::{round_sigfigs, round_to_uncertainty};
/// let err = round_sigfigs(0.0123, 2);
/// assert_eq!(round_to_uncertainty(3.14159, &err).as_str(), "3.142");
/// let err = round_sigfigs(1234.0, 2);
/// assert_eq!(round_to_uncertainty(45678.9, &err).as_str(), "45700");
/// ```
pub fn round_to_uncertainty(value: f64, uncertainty: &Rounded) -> Rounded {
    let decimals = uncertainty.decimals;
    let text = if value == 0.0 || !value.is_finite() {
        plain(format!("{0:.1$}", value, decimals.max(0) as usize))
    } else {
        let kept = Digits::of(value).round_at(decimals);
        render(value < 0.0, &kept, decimals)
    };
    Rounded {
        text,
        decimals,
        raw: value,
    }
}

/// Shortest decimal digits of a non-zero finite magnitude.
///
/// Digit `i` has place value `10^(exponent - i)`.
struct Digits {
    digits: Vec<u8>,
    exponent: i32,
}

impl Digits {
    fn of(value: f64) -> Self {
        let sci = format!("{:e}", value.abs());
        let (mantissa, exponent) = match sci.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (sci.as_str(), 0),
        };
        Digits {
            digits: mantissa
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
            exponent,
        }
    }

    /// Integer count of `10^-decimals` units, half away from zero.
    fn round_at(&self, decimals: i32) -> Vec<u8> {
        let keep = self.exponent + decimals + 1;
        if keep < 0 {
            return Vec::new();
        }
        let keep = keep as usize;
        let mut kept: Vec<u8> = (0..keep)
            .map(|i| self.digits.get(i).copied().unwrap_or(0))
            .collect();
        if self.digits.get(keep).map_or(false, |&d| d >= 5) {
            let mut i = kept.len();
            loop {
                if i == 0 {
                    kept.insert(0, 1);
                    break;
                }
                i -= 1;
                if kept[i] == 9 {
                    kept[i] = 0;
                } else {
                    kept[i] += 1;
                    break;
                }
            }
        }
        kept
    }
}

/// Writes `kept` units of `10^-decimals` as plain decimal text.
fn render(negative: bool, kept: &[u8], decimals: i32) -> String {
    let mut digits: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    if digits.is_empty() {
        digits.push('0');
    }
    let body = if decimals <= 0 {
        if digits.bytes().all(|b| b == b'0') {
            "0".to_string()
        } else {
            format!("{}{}", digits, "0".repeat((-decimals) as usize))
        }
    } else {
        let places = decimals as usize;
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }
        let (int, frac) = digits.split_at(digits.len() - places);
        format!("{}.{}", int, frac)
    };
    if negative {
        plain(format!("-{}", body))
    } else {
        body
    }
}

/// Picks the rounded value that reports fewer digits.
///
/// Precision is judged by the length of the canonical text: for equal
/// significant figures, the longer string carries more decimal places.
/// Ties go to `lower`. A leading sign counts toward the length.
pub fn less_precise<'a>(lower: &'a Rounded, upper: &'a Rounded) -> &'a Rounded {
    let pick = if upper.text.len() < lower.text.len() {
        upper
    } else {
        lower
    };
    trace!(
        "precision of {} vs {}: rounding to {}",
        lower,
        upper,
        pick
    );
    pick
}

/// Drops the sign from a negative zero such as `-0.00`.
fn plain(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}
