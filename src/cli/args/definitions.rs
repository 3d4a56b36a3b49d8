use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use searchship::filters::{Disability, FilterState, Gender, GradeLevel};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `searchship` binary.
#[derive(Parser, Debug)]
#[command(
    name = "searchship",
    version,
    long_version = long_version(),
    about = "Search scholarships by applicant profile from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SEARCHSHIP_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        help = "Override the search service endpoint (default: configured endpoint)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "TERM",
        help = "Override the base query term sent with every search (default: scholarships)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long,
        value_name = "SECS",
        help = "Timeout for each search request in seconds (default: 60)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long = "stage-interval",
        value_name = "SECS",
        help = "Seconds between loading stage messages (default: 9)"
    )]
    pub(crate) stage_interval: Option<u64>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long,
        value_name = "GPA",
        help = "Filter: applicant GPA, e.g. 3.5 (default: unset)"
    )]
    pub(crate) gpa: Option<String>,
    #[arg(
        long = "field",
        value_name = "TEXT",
        help = "Filter: field of study (default: unset)"
    )]
    pub(crate) field_of_study: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Filter: ethnicity (default: unset)"
    )]
    pub(crate) ethnicity: Option<String>,
    #[arg(
        long,
        value_enum,
        help = "Filter: gender (default: unset)"
    )]
    pub(crate) gender: Option<Gender>,
    #[arg(
        long,
        value_enum,
        help = "Filter: disability status (default: unset)"
    )]
    pub(crate) disability: Option<Disability>,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Filter: location, state or country (default: unset)"
    )]
    pub(crate) location: Option<String>,
    #[arg(
        long = "grade-level",
        value_enum,
        help = "Filter: grade level (default: unset)"
    )]
    pub(crate) grade_level: Option<GradeLevel>,
    #[arg(
        long = "financial-need",
        help = "Filter: only scholarships considering financial need (default: disabled)"
    )]
    pub(crate) financial_need: bool,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Filter: extracurricular activities (default: unset)"
    )]
    pub(crate) extracurricular: Option<String>,
    #[arg(
        long,
        help = "Run a single search and print the results instead of opening the UI (default: disabled)"
    )]
    pub(crate) once: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

impl CliArgs {
    /// Assemble the initial filter values from the filter flags.
    pub(crate) fn filter_state(&self) -> FilterState {
        FilterState {
            gpa: self.gpa.clone().unwrap_or_default(),
            field_of_study: self.field_of_study.clone().unwrap_or_default(),
            ethnicity: self.ethnicity.clone().unwrap_or_default(),
            gender: self.gender,
            disability: self.disability,
            location: self.location.clone().unwrap_or_default(),
            grade_level: self.grade_level,
            financial_need: self.financial_need,
            extracurricular: self.extracurricular.clone().unwrap_or_default(),
        }
    }
}
