use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Endpoint: {}", config.endpoint);
    println!("  Query term: {}", config.query_term);
    println!("  Request timeout: {}s", config.timeout.as_secs());
    println!("  Stage interval: {}s", config.stage_interval.as_secs());
    println!("  Stage messages: {}", config.stage_messages.len());
    println!(
        "  UI theme: {}",
        config.theme.as_deref().unwrap_or("(use the default)")
    );

    let applied = config.filters.applied();
    if applied.is_empty() {
        println!("  Filters: (none)");
    } else {
        println!("  Filters:");
        for (field, value) in applied {
            println!("    {}: {value}", field.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use searchship::filters::FilterState;

    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let mut filters = FilterState::new();
        filters.gpa = "3.5".into();

        let config = ResolvedConfig {
            endpoint: "https://search.example".into(),
            query_term: "scholarships".into(),
            timeout: Duration::from_secs(60),
            stage_messages: vec!["Searching...".into()],
            stage_interval: Duration::from_secs(9),
            theme: Some("slate".into()),
            filters,
        };

        print_summary(&config);
    }
}
