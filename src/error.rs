//! asymmetric-error error definitions.

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The distribution could not be interpreted as numbers.
    Type,
    /// An argument has an unacceptable value.
    Value,
}

/// Error definitions
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A sample token is not a number.
    #[error("did not recognize distribution value ({0}) as a number")]
    InvalidValue(String),
    /// A sample is NaN or infinite.
    #[error("distribution contains a non-finite value ({0})")]
    NonFinite(f64),
    /// No samples at all.
    #[error("distribution is empty")]
    EmptyDistribution,
    /// Fewer than one significant figure requested.
    #[error("sigfig ({0}) cannot be less than 1")]
    InvalidSigfig(i64),
    /// More figures than an `f64` carries.
    #[error("sigfig ({0}) cannot exceed {}", crate::significant::MAX_SIGFIGS)]
    SigfigTooLarge(i64),
    /// Center name is neither mean nor median.
    #[error("center metric ({0}) not understood")]
    UnknownCenter(String),
    /// Spread name is neither stddev nor ci.
    #[error("spread metric ({0}) not understood")]
    UnknownSpread(String),
    /// `ci` spread requested without percentile bounds.
    #[error("confidence intervals not provided")]
    MissingCi,
    /// Lower bound not strictly below the upper one after clamping.
    #[error("lower CI value must be listed first ({0} >= {1})")]
    CiOrder(f64, f64),
}

impl Error {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidValue(_) | Error::NonFinite(_) => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
