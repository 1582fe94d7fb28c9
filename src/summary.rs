//! asymmetric-error summary module.
//!
//! Validate, compute center and spread, round, then render.

use crate::distribution::Distribution;
use crate::error::Result;
use crate::request::{Center, Spread, SummaryOptions, SummaryRequest};
use crate::significant::{self, Rounded};
use std::fmt;
use tracing::debug;

/// Outcome of [`summarize`].
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResult {
    /// Rendered `value +/- spread` text.
    Text(String),
    /// Rounded center followed by the lower and upper spread.
    Values(f64, f64, f64),
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SummaryResult::Text(text) => f.write_str(text),
            SummaryResult::Values(value, lower, upper) => {
                write!(f, "{} {} {}", value, lower, upper)
            }
        }
    }
}

/// Summarizes `distribution` as a center value with error bars.
///
/// Both spreads are rounded to `sigfig` significant figures, and the center
/// keeps only as many decimals as the less precise spread reports.
///
/// # Examples
/// ```
/// use asymmetric_error::{summarize, Distribution, SummaryOptions, SummaryResult};
/// let d = Distribution::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let text = summarize(&d, &SummaryOptions::default()).unwrap();
/// assert_eq!(text, SummaryResult::Text("3.0 +/- 1.4".to_string()));
/// ```
pub fn summarize(distribution: &Distribution, options: &SummaryOptions) -> Result<SummaryResult> {
    let request = options.validate()?;
    Ok(summarize_request(distribution, &request))
}

/// Same as [`summarize`] for raw samples.
pub fn summarize_values(values: &[f64], options: &SummaryOptions) -> Result<SummaryResult> {
    let distribution = Distribution::from_values(values)?;
    summarize(&distribution, options)
}

/// Runs an already validated request.
pub fn summarize_request(distribution: &Distribution, request: &SummaryRequest) -> SummaryResult {
    let (center, lower, upper) = center_and_spread(distribution, request);
    debug!(
        "{} = {}, spread ({}, {}) over {} samples",
        request.center,
        center,
        lower,
        upper,
        distribution.len()
    );

    let rounded = Reconciled::new(center, lower, upper, request.sigfig);
    debug!(
        "rounded to {} significant figures: {} -{} +{}",
        request.sigfig, rounded.value, rounded.lower, rounded.upper
    );

    if request.print_out {
        SummaryResult::Text(rounded.render(request.latex))
    } else {
        SummaryResult::Values(
            rounded.value.value(),
            rounded.lower.value(),
            rounded.upper.value(),
        )
    }
}

/// Raw center and non-negative `(lower, upper)` distances.
fn center_and_spread(distribution: &Distribution, request: &SummaryRequest) -> (f64, f64, f64) {
    let center = match request.center {
        Center::Mean => distribution.mean(),
        Center::Median => distribution.median(),
    };
    match (request.spread, request.ci) {
        (Spread::ConfidenceInterval, Some((lo, hi))) => {
            let lower = (center - distribution.percentile(lo)).abs();
            let upper = (center - distribution.percentile(hi)).abs();
            (center, lower, upper)
        }
        _ => {
            let sd = distribution.population_std_dev();
            (center, sd, sd)
        }
    }
}

/// Center and spreads after rounding.
#[derive(Debug, Clone, PartialEq)]
struct Reconciled {
    value: Rounded,
    lower: Rounded,
    upper: Rounded,
}

impl Reconciled {
    fn new(center: f64, lower: f64, upper: f64, sigfig: usize) -> Self {
        let lower = significant::round_sigfigs(lower, sigfig);
        let upper = significant::round_sigfigs(upper, sigfig);
        let value = significant::round_to_uncertainty(center, significant::less_precise(&lower, &upper));
        Reconciled {
            value,
            lower,
            upper,
        }
    }

    fn symmetric(&self) -> bool {
        self.lower.as_str() == self.upper.as_str()
    }

    fn render(&self, latex: bool) -> String {
        match (self.symmetric(), latex) {
            (true, false) => format!("{} +/- {}", self.value, self.lower),
            (true, true) => format!(" ${}\\pm{}$", self.value, self.lower),
            (false, false) => format!("{} +{}/-{}", self.value, self.upper, self.lower),
            (false, true) => format!(
                " ${}^{{+{}}}_{{-{}}}$",
                self.value, self.upper, self.lower
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ONE_TO_FIVE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    fn raw() -> SummaryOptions {
        SummaryOptions {
            print_out: false,
            ..SummaryOptions::default()
        }
    }

    fn ci(lower: f64, upper: f64) -> SummaryOptions {
        SummaryOptions {
            spread: "ci".to_string(),
            ci: Some((lower, upper)),
            ..SummaryOptions::default()
        }
    }

    fn text(values: &[f64], options: &SummaryOptions) -> String {
        match summarize_values(values, options).unwrap() {
            SummaryResult::Text(t) => t,
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_mean_stddev_values() {
        let result = summarize_values(&ONE_TO_FIVE, &raw()).unwrap();
        assert_eq!(result, SummaryResult::Values(3.0, 1.4, 1.4));
    }

    #[test]
    fn test_mean_stddev_text() {
        assert_eq!(text(&ONE_TO_FIVE, &SummaryOptions::default()), "3.0 +/- 1.4");
    }

    #[test]
    fn test_stddev_latex() {
        let opts = SummaryOptions {
            latex: true,
            ..SummaryOptions::default()
        };
        assert_eq!(text(&ONE_TO_FIVE, &opts), " $3.0\\pm1.4$");
    }

    #[test]
    fn test_latex_ignored_without_print_out() {
        let opts = SummaryOptions {
            latex: true,
            ..raw()
        };
        let result = summarize_values(&ONE_TO_FIVE, &opts).unwrap();
        assert_eq!(result, SummaryResult::Values(3.0, 1.4, 1.4));
    }

    #[test]
    fn test_more_sigfigs() {
        let opts = SummaryOptions {
            sigfig: 4,
            ..SummaryOptions::default()
        };
        assert_eq!(text(&ONE_TO_FIVE, &opts), "3.000 +/- 1.414");
    }

    #[test]
    fn test_large_spread_rounds_center_to_hundreds() {
        let values = [1000.0, 1100.0, 1234.0, 1300.0, 1500.0];
        let opts = SummaryOptions {
            sigfig: 1,
            ..SummaryOptions::default()
        };
        // mean 1226.8, population stddev ~ 171.8
        assert_eq!(text(&values, &opts), "1200 +/- 200");
    }

    #[test]
    fn test_huge_center_has_no_digits_below_spread() {
        assert_eq!(
            text(&[1.0e22, 1.5e22], &SummaryOptions::default()),
            "12500000000000000000000 +/- 2500000000000000000000"
        );
    }

    #[test]
    fn test_center_and_spread_share_tie_rule() {
        let opts = SummaryOptions {
            sigfig: 1,
            ..SummaryOptions::default()
        };
        // center and spread are both exactly 25
        assert_eq!(text(&[0.0, 50.0], &opts), "30 +/- 30");
        // both 0.35, rounded from its decimal text
        assert_eq!(text(&[0.0, 0.7], &opts), "0.4 +/- 0.4");
    }

    #[test]
    fn test_constant_distribution() {
        assert_eq!(text(&[2.5, 2.5, 2.5], &SummaryOptions::default()), "2.5 +/- 0.0");
    }

    #[test]
    fn test_median_center() {
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        let opts = SummaryOptions {
            center: "Median".to_string(),
            ..raw()
        };
        match summarize_values(&values, &opts).unwrap() {
            SummaryResult::Values(value, lower, upper) => {
                assert_eq!(value, 3.0);
                assert_eq!(lower, upper);
            }
            other => panic!("expected values, got {:?}", other),
        }
    }

    #[test]
    fn test_asymmetric_ci() {
        // mean 3, p16 = 1.64, p84 = 4.36: equal after rounding
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(text(&values, &ci(16.0, 84.0)), "3.0 +/- 1.4");
        let skewed = [1.0, 1.0, 1.0, 2.0, 10.0];
        // mean 3, p10 = 1, p90 = 6.8
        assert_eq!(text(&skewed, &ci(10.0, 90.0)), "3.0 +3.8/-2.0");
    }

    #[test]
    fn test_asymmetric_latex() {
        let skewed = [1.0, 1.0, 1.0, 2.0, 10.0];
        let opts = SummaryOptions {
            latex: true,
            ..ci(10.0, 90.0)
        };
        assert_eq!(text(&skewed, &opts), " $3.0^{+3.8}_{-2.0}$");
    }

    #[test]
    fn test_center_follows_less_precise_spread() {
        // median 0.5, p25 = 0.49, p75 = 0.62 -> spreads "0.010" and "0.12"
        let values = [0.45, 0.49, 0.5, 0.62, 0.9];
        let opts = SummaryOptions {
            center: "median".to_string(),
            ..ci(25.0, 75.0)
        };
        assert_eq!(text(&values, &opts), "0.50 +0.12/-0.010");
    }

    #[test]
    fn test_ci_full_range_clamped() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // clamped to (0, 100): min and max
        assert_eq!(text(&values, &ci(-20.0, 150.0)), "3.0 +/- 2.0");
    }

    #[test]
    fn test_errors_raised_before_computation() {
        let err = summarize_values(&[], &SummaryOptions::default()).unwrap_err();
        assert_eq!(err, Error::EmptyDistribution);

        let err = summarize_values(&ONE_TO_FIVE, &ci(50.0, 50.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let opts = SummaryOptions {
            sigfig: 0,
            ..SummaryOptions::default()
        };
        let err = summarize_values(&ONE_TO_FIVE, &opts).unwrap_err();
        assert!(err.to_string().contains("(0)"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SummaryResult::Values(3.0, 1.4, 1.5).to_string(), "3 1.4 1.5");
        assert_eq!(SummaryResult::Text("1 +/- 2".into()).to_string(), "1 +/- 2");
    }

    /// Box-Muller draws from N(mean, sd).
    fn normal_sample(n: usize, mean: f64, sd: f64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(7);
        (0..n)
            .map(|_| {
                let u1: f64 = 1.0 - rng.gen::<f64>();
                let u2: f64 = rng.gen::<f64>();
                mean + sd * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
            })
            .collect()
    }

    #[test]
    fn test_ci_approximates_stddev_on_normal_sample() {
        let values = normal_sample(20_000, 10.0, 2.0);
        let opts = SummaryOptions {
            sigfig: 3,
            print_out: false,
            ..ci(15.865, 84.135)
        };
        match summarize_values(&values, &opts).unwrap() {
            SummaryResult::Values(value, lower, upper) => {
                assert!((value - 10.0).abs() < 0.1, "center {}", value);
                assert!((lower - 2.0).abs() < 0.1, "lower {}", lower);
                assert!((upper - 2.0).abs() < 0.1, "upper {}", upper);
            }
            other => panic!("expected values, got {:?}", other),
        }
    }
}
