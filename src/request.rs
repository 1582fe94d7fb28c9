//! asymmetric-error request module.

use crate::error::{Error, Result};
use crate::significant::MAX_SIGFIGS;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Measure of the center of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    /// Arithmetic mean.
    Mean,
    /// Middle order statistic.
    Median,
}

impl FromStr for Center {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(Center::Mean),
            "median" => Ok(Center::Median),
            _ => Err(Error::UnknownCenter(s.to_string())),
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Center::Mean => write!(f, "mean"),
            Center::Median => write!(f, "median"),
        }
    }
}

/// Measure of the spread of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// Population standard deviation, symmetric.
    StdDev,
    /// Distances from the center to two percentiles.
    ConfidenceInterval,
}

impl FromStr for Spread {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stddev" => Ok(Spread::StdDev),
            "ci" => Ok(Spread::ConfidenceInterval),
            _ => Err(Error::UnknownSpread(s.to_string())),
        }
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Spread::StdDev => write!(f, "stddev"),
            Spread::ConfidenceInterval => write!(f, "ci"),
        }
    }
}

/// Unvalidated summary arguments.
///
/// `center` and `spread` stay textual so that callers can pass user input
/// straight through; they are parsed during [`SummaryOptions::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Significant figures of the spread, `1..=17`.
    pub sigfig: i64,
    /// `"mean"` or `"median"`, any case.
    pub center: String,
    /// `"stddev"` or `"ci"`, any case.
    pub spread: String,
    /// Lower and upper percentiles, required when `spread` is `"ci"`.
    pub ci: Option<(f64, f64)>,
    /// Render text instead of returning numbers.
    pub print_out: bool,
    /// LaTeX markup, only used with `print_out`.
    pub latex: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            sigfig: 2,
            center: "mean".to_string(),
            spread: "stddev".to_string(),
            ci: None,
            print_out: true,
            latex: false,
        }
    }
}

impl SummaryOptions {
    /// Checks the arguments and produces a normalized request.
    ///
    /// Percentile bounds outside `[0, 100]` are clamped on a copy; the
    /// options themselves are left unchanged.
    pub fn validate(&self) -> Result<SummaryRequest> {
        if self.sigfig < 1 {
            return Err(Error::InvalidSigfig(self.sigfig));
        }
        if self.sigfig > MAX_SIGFIGS as i64 {
            return Err(Error::SigfigTooLarge(self.sigfig));
        }
        let center = self.center.parse::<Center>()?;
        let spread = self.spread.parse::<Spread>()?;

        let ci = match spread {
            Spread::StdDev => None,
            Spread::ConfidenceInterval => Some(clamp_ci(self.ci.ok_or(Error::MissingCi)?)?),
        };

        Ok(SummaryRequest {
            sigfig: self.sigfig as usize,
            center,
            spread,
            ci,
            print_out: self.print_out,
            latex: self.latex,
        })
    }
}

/// Clamps percentile bounds into `[0, 100]` and checks their order.
fn clamp_ci((lower, upper): (f64, f64)) -> Result<(f64, f64)> {
    let mut clamped = (lower, upper);
    if clamped.0 < 0.0 {
        clamped.0 = 0.0;
    }
    if clamped.1 > 100.0 {
        clamped.1 = 100.0;
    }
    if clamped != (lower, upper) {
        warn!(
            "confidence interval ({}, {}) clamped to ({}, {})",
            lower, upper, clamped.0, clamped.1
        );
    }
    // NaN bounds are unordered and fail here too
    if clamped.0.partial_cmp(&clamped.1) != Some(Ordering::Less) {
        return Err(Error::CiOrder(clamped.0, clamped.1));
    }
    Ok(clamped)
}

/// Validated summary configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Significant figures of the spread.
    pub sigfig: usize,
    /// Center metric.
    pub center: Center,
    /// Spread metric.
    pub spread: Spread,
    /// Clamped percentile bounds, present iff `spread` is a confidence interval.
    pub ci: Option<(f64, f64)>,
    /// Render text instead of returning numbers.
    pub print_out: bool,
    /// LaTeX markup for rendered text.
    pub latex: bool,
}
