use anyhow::Result;
use serde_json::json;

use searchship::types::{Scholarship, SearchOutcome};

/// Print a plain-text representation of the interactive session outcome.
pub(crate) fn print_outcome_plain(outcome: &SearchOutcome) {
    if !outcome.accepted {
        println!("Search cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(scholarship) => print_scholarship_plain(scholarship),
        None => println!("No selection"),
    }
}

/// Format the interactive session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": outcome.selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the interactive session outcome.
pub(crate) fn print_outcome_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

/// Print a one-shot result list as text.
pub(crate) fn print_results_plain(scholarships: &[Scholarship]) {
    println!("{} scholarships found", scholarships.len());
    for scholarship in scholarships {
        println!();
        print_scholarship_plain(scholarship);
    }
}

/// Format a one-shot result list as a JSON string.
pub(crate) fn format_results_json(scholarships: &[Scholarship]) -> Result<String> {
    let payload = json!({
        "count": scholarships.len(),
        "scholarships": scholarships,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of a one-shot result list.
pub(crate) fn print_results_json(scholarships: &[Scholarship]) -> Result<()> {
    println!("{}", format_results_json(scholarships)?);
    Ok(())
}

fn print_scholarship_plain(scholarship: &Scholarship) {
    println!("{}", scholarship.name);
    println!("  {}", scholarship.description);
    if let Some(deadline) = scholarship.deadline() {
        println!("  Deadline: {deadline}");
    }
    if let Some(link) = scholarship.link() {
        println!("  Apply: {link}");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample() -> Scholarship {
        Scholarship {
            name: "STEM Grant".into(),
            description: "For engineering students".into(),
            application_deadline: Some("2025-06-01".into()),
            application_link: None,
        }
    }

    #[test]
    fn json_outcome_includes_the_selection() {
        let outcome = SearchOutcome {
            accepted: true,
            query: "scholarships".into(),
            selection: Some(sample()),
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["selection"]["name"], "STEM Grant");
        assert_eq!(value["selection"]["application_link"], Value::Null);
    }

    #[test]
    fn json_outcome_for_cancelled_session_has_no_selection() {
        let outcome = SearchOutcome {
            accepted: false,
            query: "scholarships".into(),
            selection: None,
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], false);
        assert_eq!(value["selection"], Value::Null);
    }

    #[test]
    fn json_results_carry_the_count() {
        let json = format_results_json(&[sample()]).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["count"], 1);
        assert_eq!(value["scholarships"][0]["application_deadline"], "2025-06-01");
    }
}
