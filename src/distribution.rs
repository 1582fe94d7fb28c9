//! asymmetric-error distribution module.
//!
//! A [`Distribution`] is a non-empty set of finite samples. The reductions
//! below assume those guarantees and therefore never fail.
//!
//! - **Mean**: Kahan compensated summation.
//! - **Population standard deviation**: Welford's online update, `n` denominator.
//! - **Percentile**: R-7 linear interpolation between order statistics.

use crate::error::{Error, Result};

/// Validated, sorted copy of the caller's samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    sorted: Vec<f64>,
}

impl Distribution {
    /// Builds a distribution from numeric samples.
    ///
    /// Fails with a `Type` error on NaN or infinity and with a `Value`
    /// error when `values` is empty. The input slice is left untouched.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if let Some(&bad) = values.iter().find(|x| !x.is_finite()) {
            return Err(Error::NonFinite(bad));
        }
        if values.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Ok(Distribution { sorted })
    }

    /// Parses textual samples, e.g. command line tokens.
    ///
    /// # Examples
    /// ```
    /// use asymmetric_error::Distribution;
    /// let d = Distribution::parse(&["1", "2.5", "-3e1"]).unwrap();
    /// assert_eq!(d.len(), 3);
    /// assert!(Distribution::parse(&["1", "two"]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let values = tokens
            .iter()
            .map(|t| {
                let t = t.as_ref().trim();
                t.parse::<f64>()
                    .map_err(|_| Error::InvalidValue(t.to_string()))
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::from_values(&values)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Samples in non-decreasing order.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Arithmetic mean using Kahan compensated summation.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0;
        let mut c = 0.0;
        for &x in &self.sorted {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }
        sum / self.sorted.len() as f64
    }

    /// Middle element, or the average of the two middle elements.
    pub fn median(&self) -> f64 {
        let n = self.sorted.len();
        if n % 2 == 1 {
            self.sorted[n / 2]
        } else {
            (self.sorted[n / 2 - 1] + self.sorted[n / 2]) / 2.0
        }
    }

    /// Population standard deviation (normalized by `n`).
    pub fn population_std_dev(&self) -> f64 {
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for (i, &x) in self.sorted.iter().enumerate() {
            let delta = x - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (x - mean);
        }
        (m2 / self.sorted.len() as f64).sqrt()
    }

    /// Value at percentile `q` in `[0, 100]`, R-7 interpolation.
    ///
    /// `q` outside the range is clamped to the nearest end.
    pub fn percentile(&self, q: f64) -> f64 {
        let n = self.sorted.len();
        if n == 1 {
            return self.sorted[0];
        }
        let p = (q / 100.0).max(0.0).min(1.0);
        let h = (n - 1) as f64 * p;
        let j = h.floor() as usize;
        let g = h - h.floor();
        if j + 1 >= n {
            self.sorted[n - 1]
        } else {
            (1.0 - g) * self.sorted[j] + g * self.sorted[j + 1]
        }
    }
}
