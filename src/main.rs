use clap::Parser;
use roi_calc::app::report;
use roi_calc::utils::{export, logger};
use roi_calc::{CliConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting roi-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let raw = config.partial_record()?;

    let mut session = Session::new();
    match session.apply(&raw) {
        Ok(snapshot) => {
            if let Some(path) = &config.csv {
                export::write_snapshot_csv(path, snapshot)?;
                tracing::info!("CSV written to {}", path.display());
            }
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report::render_json(snapshot))?);
            } else {
                print!("{}", report::render_text(snapshot));
            }
        }
        Err(report) => {
            tracing::error!("Input validation failed for {} field(s)", report.errors.len());
            for (field, reason) in &report.errors {
                eprintln!("{} {}", field, reason);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
