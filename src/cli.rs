//! asymmetric-error command line interface definition.

use asymmetric_error::SummaryOptions;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(about = "Summarize a distribution as a value with significant-figure error bars")]
pub struct Application {
    #[structopt(
        short,
        long,
        help = "Significant figures of the spread",
        default_value = "2",
        allow_hyphen_values = true
    )]
    pub sigfig: i64,

    #[structopt(short, long, help = "Center metric: mean or median", default_value = "mean")]
    pub center: String,

    #[structopt(
        short = "p",
        long,
        help = "Spread metric: stddev or ci",
        default_value = "stddev"
    )]
    pub spread: String,

    #[structopt(
        long,
        help = "Lower and upper percentiles for the ci spread",
        number_of_values = 2,
        value_names = &["LOWER", "UPPER"],
        allow_hyphen_values = true
    )]
    pub ci: Option<Vec<f64>>,

    #[structopt(short, long, help = "Print the rounded numbers instead of text")]
    pub raw: bool,

    #[structopt(short, long, help = "Format the text with LaTeX markup")]
    pub latex: bool,

    #[structopt(
        help = "Samples; read from stdin when omitted",
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,
}

impl Application {
    /// Summary arguments described by the command line.
    pub fn options(&self) -> SummaryOptions {
        SummaryOptions {
            sigfig: self.sigfig,
            center: self.center.clone(),
            spread: self.spread.clone(),
            ci: self.ci.as_ref().and_then(|ci| match ci.as_slice() {
                [lower, upper] => Some((*lower, *upper)),
                _ => None,
            }),
            print_out: !self.raw,
            latex: self.latex,
        }
    }
}

/// Constructs an instance of the Application.
pub fn application() -> Application {
    Application::from_args()
}
