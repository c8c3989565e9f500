use crate::cli::commands::load_inputs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_by_driver;
use crate::core::summary::DriverReport;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, ExportRequest};
use crate::ui::messages::info;

/// Handle the `report` command
///
/// Reads every file (failures are reported and skipped), applies the driver
/// filter and writes the week-grouped report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        files,
        out,
        driver,
        week_rule,
        format,
        force,
    } = cmd
    {
        let rule = week_rule.unwrap_or(cfg.week_rule);
        let batch = load_inputs(files, cfg, rule);

        let mut entries = batch.into_entries();
        let driver = driver.as_deref().map(str::trim).filter(|d| !d.is_empty());

        if let Some(name) = driver {
            entries = filter_by_driver(entries, name);
            info(format!("{} entries for driver '{name}'", entries.len()));
        } else {
            info(format!("{} entries extracted", entries.len()));
        }

        // the side panels only exist in the workbook
        let driver_report = match (driver, format) {
            (Some(name), ExportFormat::Xlsx) => Some(DriverReport::new(name, &entries)),
            _ => None,
        };

        ExportLogic::export(
            entries,
            &ExportRequest {
                format: *format,
                path: out,
                driver: driver_report.as_ref(),
                force: *force,
                width_factor: cfg.width_factor,
            },
        )?;
    }

    Ok(())
}
