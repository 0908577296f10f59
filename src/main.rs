//! Flowrate Unit Converter
//!
//! Command-line front end for single and batch flow-rate conversion.

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flowrate::build_info::BuildInfo;
use flowrate::flow::{
    write_csv, BatchStatus, CsvLayout, FlowError, FormatConfig, UnitConversion, DEFAULT_EXPORT_FILE,
};
use flowrate::tools::{batch, convert, status};

#[derive(Parser)]
#[command(name = "flowrate")]
#[command(about = "Convert between L/min, mL/min, µL/min, nL/min, L/h, mL/h and µL/h", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Formatting options shared by the conversion commands
#[derive(Args)]
struct FormatArgs {
    /// Decimal places (0-8)
    #[arg(short, long, default_value_t = 3)]
    decimals: u32,

    /// Always use fixed-point notation
    #[arg(long)]
    no_sci: bool,

    /// Sci-notation threshold t: values above 1e+t or below 1e-t (1-12)
    #[arg(short, long, default_value_t = 6)]
    threshold: i32,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl FormatArgs {
    fn to_config(&self) -> Result<FormatConfig, FlowError> {
        FormatConfig::new(self.decimals, !self.no_sci, self.threshold)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value to every unit
    Convert {
        /// Value to convert
        #[arg(default_value_t = 1.0, allow_negative_numbers = true)]
        value: f64,

        /// Source unit (uL/min and uL/h accepted)
        #[arg(short, long, default_value = "L/min")]
        from: String,

        /// Convert to this unit only
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Convert one value per line from a file or stdin
    Batch {
        /// Input file (default: stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Source unit of every line (uL/min and uL/h accepted)
        #[arg(short, long, default_value = "µL/min")]
        from: String,

        /// Write results as CSV (default path: flowrate_conversions.csv)
        #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
        csv: Option<PathBuf>,

        /// Include raw numeric columns in the CSV
        #[arg(long)]
        full: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List the supported units
    Units {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show usage tips and run the sanity checks
    Tips,

    /// Show version and build information
    Status,
}

fn main() {
    // Logs go to stderr so stdout stays clean for tables, JSON and CSV
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowrate=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            format,
        } => run_convert(value, &from, to.as_deref(), &format),
        Commands::Batch {
            file,
            from,
            csv,
            full,
            format,
        } => run_batch(file, &from, csv, full, &format),
        Commands::Units { json } => run_units(json),
        Commands::Tips => run_tips(),
        Commands::Status => run_status(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_table(conversions: &[UnitConversion]) {
    println!("{:<8} | {}", "Unit", "Formatted");
    println!("{:-<8}-+-{:-<16}", "", "");
    for c in conversions {
        println!("{:<8} | {}", c.unit.symbol(), c.formatted);
    }
}

fn run_convert(
    value: f64,
    from: &str,
    to: Option<&str>,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config()?;

    if let Some(to) = to {
        let response = convert::convert_between(value, from, to, &config)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!(
                "{} {} = {} {}",
                config.format(value),
                response.from_unit,
                response.formatted,
                response.to_unit
            );
        }
        return Ok(());
    }

    let response = convert::convert_single(value, from, &config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.input_summary);
        println!();
        print_table(&response.conversions);
    }

    Ok(())
}

fn run_batch(
    file: Option<PathBuf>,
    from: &str,
    csv: Option<PathBuf>,
    full: bool,
    args: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config()?;

    let text = match &file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let response = batch::convert_batch_text(&text, from, &config)?;

    for message in response.warning_messages() {
        eprintln!("Warning: {}", message);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if response.status == BatchStatus::Empty {
        if let Some(message) = &response.message {
            println!("{}", message);
        }
    } else {
        print!("{}", batch::export_batch_csv(&response, CsvLayout::Formatted));
    }

    if let Some(path) = csv {
        if response.status == BatchStatus::Empty {
            eprintln!("Nothing to export");
        } else {
            let layout = if full { CsvLayout::Full } else { CsvLayout::Formatted };
            let file = std::fs::File::create(&path)?;
            write_csv(&response.result, layout, file)?;
            eprintln!(
                "Exported {} rows to {}",
                response.result.rows.len(),
                path.display()
            );
        }
    }

    Ok(())
}

fn run_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let response = status::list_units();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Base unit: {}", response.base_unit);
    println!();
    for unit in &response.units {
        let aliases = if unit.aliases.is_empty() {
            String::new()
        } else {
            format!(" (alias: {})", unit.aliases.join(", "))
        };
        println!(
            "  {:<8} {:<24} 1 = {:e} L/min{}",
            unit.symbol, unit.name, unit.factor_to_base, aliases
        );
    }

    Ok(())
}

fn run_tips() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", status::USAGE_TIPS.trim());
    println!();

    let report = status::sanity_check();
    for check in &report.checks {
        let mark = if check.passed { "ok" } else { "FAILED" };
        println!(
            "  [{}] {} {} -> {} {} (expected {})",
            mark, check.input, check.from, check.actual, check.to, check.expected
        );
    }

    Ok(())
}

fn run_status() -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("{}", BuildInfo::current().summary());
    let status = status::StatusTracker::new().get_status();
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_csv(args: &[&str]) -> Option<PathBuf> {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Batch { csv, .. } => csv,
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_csv_flag_without_path_uses_default_file() {
        let csv = batch_csv(&["flowrate", "batch", "--csv"]);
        assert_eq!(csv, Some(PathBuf::from(DEFAULT_EXPORT_FILE)));
        assert_eq!(csv, Some(PathBuf::from("flowrate_conversions.csv")));
    }

    #[test]
    fn test_csv_flag_with_path_and_absent() {
        let csv = batch_csv(&["flowrate", "batch", "--csv", "out.csv", "--full"]);
        assert_eq!(csv, Some(PathBuf::from("out.csv")));

        assert_eq!(batch_csv(&["flowrate", "batch"]), None);
    }
}
