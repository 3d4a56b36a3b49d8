mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{
    print_outcome_json, print_outcome_plain, print_results_json, print_results_plain,
};
