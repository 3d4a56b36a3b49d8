mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_outcome_json, print_outcome_plain, print_results_json, print_results_plain};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SEARCHSHIP_LOG", "warn"))
        .init();

    let cli = parse_cli();

    if cli.list_themes {
        for name in searchship::ui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = SearchWorkflow::from_config(resolved);

    if cli.once {
        let results = workflow.run_once()?;
        match cli.output {
            OutputFormat::Plain => print_results_plain(&results),
            OutputFormat::Json => print_results_json(&results)?,
        }
        return Ok(());
    }

    let outcome = workflow.run_interactive()?;
    match cli.output {
        OutputFormat::Plain => print_outcome_plain(&outcome),
        OutputFormat::Json => print_outcome_json(&outcome)?,
    }

    Ok(())
}
