use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use serde_json::{Map as JsonMap, Value as JsonValue};
use srsge_core::locate::resolve_save;
use srsge_core::{Field, SaveRecord, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Save directory or header.bin file.
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(long)]
    year: bool,
    #[arg(long)]
    rubles: bool,
    #[arg(long)]
    dollars: bool,
    #[arg(long)]
    json: bool,
    #[arg(long = "set-year")]
    set_year: Option<u16>,
    #[arg(long = "set-rubles", allow_hyphen_values = true)]
    set_rubles: Option<f32>,
    #[arg(long = "set-dollars", allow_hyphen_values = true)]
    set_dollars: Option<f32>,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    year: bool,
    rubles: bool,
    dollars: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            year: cli.year,
            rubles: cli.rubles,
            dollars: cli.dollars,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.year || self.rubles || self.dollars
    }

    fn selected_pairs(&self, record: &SaveRecord) -> Vec<(Field, String)> {
        let mut out = Vec::new();

        if self.year {
            out.push((Field::Year, record.year.to_string()));
        }
        if self.rubles {
            out.push((Field::LocalCurrency, record.local_currency.to_string()));
        }
        if self.dollars {
            out.push((Field::ForeignCurrency, record.foreign_currency.to_string()));
        }

        out
    }

    fn selected_json(&self, record: &SaveRecord) -> JsonMap<String, JsonValue> {
        let mut out = JsonMap::new();

        if self.year {
            out.insert(Field::Year.to_string(), JsonValue::from(record.year));
        }
        if self.rubles {
            out.insert(
                Field::LocalCurrency.to_string(),
                JsonValue::from(record.local_currency),
            );
        }
        if self.dollars {
            out.insert(
                Field::ForeignCurrency.to_string(),
                JsonValue::from(record.foreign_currency),
            );
        }

        out
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fields = FieldSelection::from_cli(&cli);
    let has_edits = cli.set_year.is_some() || cli.set_rubles.is_some() || cli.set_dollars.is_some();

    let path = resolve_save(&cli.path);
    let mut session = Session::load(&path).unwrap_or_else(|e| {
        eprintln!("Error reading save: {}", path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    if let Some(year) = cli.set_year {
        session.set_year(year);
    }
    if let Some(rubles) = cli.set_rubles {
        session.set_local_currency(rubles);
    }
    if let Some(dollars) = cli.set_dollars {
        session.set_foreign_currency(dollars);
    }

    let wrote = has_edits && session.is_dirty();
    let record = if wrote {
        session.save().unwrap_or_else(|(session, e)| {
            eprintln!("Error writing save: {}", session.path().display());
            eprintln!("  {e}");
            process::exit(1);
        })
    } else {
        if has_edits {
            info!(path = %path.display(), "edits match loaded values, skipping write");
        }
        *session.record()
    };

    if cli.json {
        let json = if fields.is_field_mode() {
            JsonValue::Object(fields.selected_json(&record))
        } else {
            JsonValue::Object(default_json(&path, &record))
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (field, value) in fields.selected_pairs(&record) {
            println!("{field}={value}");
        }
        return;
    }

    if wrote {
        println!("Wrote edited save to {}", path.display());
    } else if has_edits {
        println!("No changes to write to {}", path.display());
    }
    print_summary(&record);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_json(path: &Path, record: &SaveRecord) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert(
        "path".to_string(),
        JsonValue::String(path.display().to_string()),
    );
    out.insert(Field::Year.to_string(), JsonValue::from(record.year));
    out.insert(
        Field::LocalCurrency.to_string(),
        JsonValue::from(record.local_currency),
    );
    out.insert(
        Field::ForeignCurrency.to_string(),
        JsonValue::from(record.foreign_currency),
    );
    out
}

fn print_summary(record: &SaveRecord) {
    println!("{:>9}: {}", "Year", record.year);
    println!("{:>9}: {}", "Rubles", format_amount(record.local_currency));
    println!("{:>9}: {}", "Dollars", format_amount(record.foreign_currency));
}

/// Four decimals with thousands separators, e.g. `1,234,567.5000`.
fn format_amount(amount: f32) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let formatted = format!("{:.4}", amount.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
