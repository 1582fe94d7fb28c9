//! asymmetric-error library.
//!
//! Summarizes a distribution as a center value with (possibly asymmetric)
//! error bars, reporting the center only to the precision its spread
//! justifies.
//!
//! ```
//! use asymmetric_error::{summarize_values, SummaryOptions};
//! let options = SummaryOptions {
//!     spread: "ci".to_string(),
//!     ci: Some((10.0, 90.0)),
//!     ..SummaryOptions::default()
//! };
//! let text = summarize_values(&[1.0, 1.0, 1.0, 2.0, 10.0], &options).unwrap();
//! assert_eq!(text.to_string(), "3.0 +3.8/-2.0");
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod distribution;
pub mod error;
pub mod request;
pub mod significant;
pub mod summary;

pub use distribution::Distribution;
pub use error::{Error, ErrorKind, Result};
pub use request::{Center, Spread, SummaryOptions, SummaryRequest};
pub use summary::{summarize, summarize_request, summarize_values, SummaryResult};
