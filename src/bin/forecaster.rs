//! Interactive terminal session for production forecasting.
//!
//! One request at a time, fully synchronous: pick a month, run the
//! forecast, read the report, repeat. A missing artifact ends the session
//! immediately with the path and the remedial action.

use production_forecast::{calendar, engine, report, ModelArtifact, Result};
use std::io::{self, BufRead, Write};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Clothing Production Forecaster")?;
    writeln!(
        stdout,
        "Predicts the optimal production quantity for the upcoming season"
    )?;
    writeln!(stdout, "based on historical sales trends.")?;
    writeln!(stdout)?;

    let artifact = ModelArtifact::load_cached()?;
    let forecast_year = artifact.default_forecast_year();
    let default_month = calendar::default_month();

    writeln!(stdout, "Model trained until: {}", artifact.last_year)?;
    writeln!(stdout, "Products known: {}", artifact.encoder.len())?;

    loop {
        writeln!(stdout)?;
        writeln!(stdout, "Select month for production:")?;
        for (index, name) in calendar::MONTH_NAMES.iter().enumerate() {
            let marker = if index as u32 + 1 == default_month {
                "  (default)"
            } else {
                ""
            };
            writeln!(stdout, "  {:>2}. {}{}", index + 1, name, marker)?;
        }
        write!(
            stdout,
            "Month [1-12], Enter for default, q to quit: "
        )?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let month_num = if input.is_empty() {
            default_month
        } else {
            match input.parse::<u32>() {
                Ok(n) if (1..=12).contains(&n) => n,
                _ => {
                    writeln!(stdout, "Not a month selection: '{}'", input)?;
                    continue;
                }
            }
        };
        let month_name = calendar::month_name(month_num)?;

        writeln!(stdout)?;
        writeln!(stdout, "Target: {} {}", month_name, forecast_year)?;
        writeln!(stdout)?;

        let outcome = engine::forecast(artifact, month_name, forecast_year)?;
        report::render_report(&mut stdout, &outcome)?;
    }

    Ok(())
}
