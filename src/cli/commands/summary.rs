use crate::cli::commands::load_inputs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_by_driver;
use crate::core::summary::DriverReport;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

/// Handle the `summary` command: counters and tour breakdown on the console.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        files,
        driver,
        week_rule,
    } = cmd
    {
        let rule = week_rule.unwrap_or(cfg.week_rule);
        let entries = filter_by_driver(load_inputs(files, cfg, rule).into_entries(), driver);

        if entries.is_empty() {
            warning(format!("No entries found for driver '{}'.", driver.trim()));
            return Ok(());
        }

        let report = DriverReport::new(driver.trim(), &entries);
        header(format!("Zusammenfassung: {}", report.driver));
        print!("{}", render(&report));
    }

    Ok(())
}

fn render(report: &DriverReport) -> String {
    let mut counters = Table::with_headers(&["", "Anzahl"]);
    for (label, count) in report.summary.rows() {
        counters.add_row(vec![label.to_string(), count.to_string()]);
    }

    let mut tours = Table::with_headers(&["Tour", "Anzahl"]);
    for (tour, count) in &report.tours {
        tours.add_row(vec![tour.clone(), count.to_string()]);
    }

    format!("{}\n{}", counters.render(), tours.render())
}
