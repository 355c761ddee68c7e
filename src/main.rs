use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use profit_calculator_tui::{
    app::{App, Portfolio, report},
    config::Config,
    logging,
};

#[derive(Debug, Parser)]
#[command(version, about = "Estimate VAT, margin and withholding for purchased items")]
struct Cli {
    /// CSV file with `base,margin_mode,margin_value,withholding_class` rows
    #[arg(long, global = true)]
    csv: Option<String>,

    /// Where F4 writes the JSON summary
    #[arg(long, global = true)]
    export: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive editor (default)
    Tui,
    /// Print the evaluation of a CSV file and exit
    Report {
        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.csv, cli.export);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            logging::init_file(config.log_file().as_deref())?;

            let mut portfolio = Portfolio::new();
            let mut notice = None;
            if let Some(csv_path) = config.csv_path() {
                notice = portfolio.import_line_items(csv_path)?.notice();
            }

            info!("starting interactive editor");
            let mut app = App::new(portfolio, config.export_path().clone());
            if let Some(notice) = notice {
                app.show_popup(&notice);
            }
            app.run()?;
        }
        Command::Report { json } => {
            logging::init_stderr();

            let mut portfolio = Portfolio::new();
            if let Some(csv_path) = config.csv_path() {
                if let Some(notice) = portfolio.import_line_items(csv_path)?.notice() {
                    eprintln!("{}", notice);
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&portfolio.summary())?);
            } else {
                print!("{}", report::render_text(&portfolio.evaluate()));
            }
        }
    }

    Ok(())
}
