mod definitions;
mod options;
mod styles;

use clap::Parser;
pub(crate) use definitions::CliArgs;
pub(crate) use options::OutputFormat;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use searchship::filters::Gender;

    use super::{CliArgs, OutputFormat};

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let parsed = CliArgs::parse_from(["searchship"]);
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(!parsed.once);
        assert!(parsed.filter_state().is_empty());
    }

    #[test]
    fn filter_flags_populate_the_filter_state() {
        let parsed = CliArgs::parse_from([
            "searchship",
            "--gpa",
            "3.5",
            "--gender",
            "female",
            "--financial-need",
        ]);

        let filters = parsed.filter_state();
        assert_eq!(filters.gpa, "3.5");
        assert_eq!(filters.gender, Some(Gender::Female));
        assert!(filters.financial_need);
        assert!(filters.location.is_empty());
    }

    #[test]
    fn grade_level_uses_kebab_case_values() {
        let parsed = CliArgs::parse_from(["searchship", "--grade-level", "high-school"]);
        let entries = parsed.filter_state().entries();
        assert!(entries.contains(&("gradeLevel", "high-school".to_string())));
    }
}
