use std::fmt::Write as _;

use anyhow::Result;
use brew_core::{clamp_to_slider, update_quantity, BrewCalculator};
use clap::{Args, Parser, Subcommand};
use shared::{
    domain::{
        Concentration, Flavor, PourGroup, PourPreferences, QuantityEdit, QuantityField, Roast,
    },
    protocol::{BrewSummary, OptionsResponse},
};
use tracing_subscriber::EnvFilter;

/// 4:6 pour-over calculator.
#[derive(Parser, Debug)]
struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rescale cups, coffee and water from one edited quantity.
    Quantities { field: QuantityField, value: f64 },
    /// Show the pours for a brew.
    Plan {
        #[command(flatten)]
        edit: EditArgs,
        #[arg(long, default_value_t = Flavor::default())]
        flavor: Flavor,
        #[arg(long, default_value_t = Concentration::default())]
        concentration: Concentration,
        #[arg(long, default_value_t = Roast::default())]
        roast: Roast,
    },
    /// List the accepted preference values.
    Options,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(long, conflicts_with_all = ["coffee", "water"])]
    cups: Option<f64>,
    #[arg(long, conflicts_with = "water")]
    coffee: Option<f64>,
    #[arg(long)]
    water: Option<f64>,
}

impl EditArgs {
    fn edit(&self) -> Option<QuantityEdit> {
        self.cups
            .map(QuantityEdit::Cups)
            .or(self.coffee.map(QuantityEdit::Coffee))
            .or(self.water.map(QuantityEdit::Water))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Quantities { field, value } => {
            let edit = QuantityEdit::new(field, value).checked()?;
            let tuple = update_quantity(clamp_to_slider(edit));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tuple)?);
            } else {
                println!(
                    "cups={} coffee={}gr water={}gr",
                    tuple.cups, tuple.coffee_grams, tuple.water_grams
                );
            }
        }
        Command::Plan {
            edit,
            flavor,
            concentration,
            roast,
        } => {
            let mut calculator = BrewCalculator::new(
                PourPreferences {
                    flavor,
                    concentration,
                },
                roast,
            );
            if let Some(edit) = edit.edit() {
                calculator.apply_edit(clamp_to_slider(edit.checked()?));
            }
            let summary = calculator.summary()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_summary(&summary));
            }
        }
        Command::Options => {
            let options = OptionsResponse::catalogue();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", render_options(&options));
            }
        }
    }

    Ok(())
}

fn render_summary(summary: &BrewSummary) -> String {
    let q = summary.quantities;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} cups, {}gr coffee, {}gr water",
        q.cups, q.coffee_grams, q.water_grams
    );
    let _ = writeln!(
        out,
        "flavor={} concentration={} roast={}",
        summary.preferences.flavor, summary.preferences.concentration, summary.roast
    );
    let _ = writeln!(
        out,
        "water temperature: around {}ºC",
        summary.water_temperature_celsius
    );
    for (i, step) in summary.steps.iter().enumerate() {
        let phase = match step.group {
            PourGroup::Flavor => "flavor",
            PourGroup::Concentration => "concentration",
        };
        let _ = writeln!(
            out,
            "pour {}: {:>4}gr  {:<13} {:>5.1}%",
            i + 1,
            step.display_grams,
            phase,
            step.weight_percent
        );
    }
    out
}

fn render_options(options: &OptionsResponse) -> String {
    let mut out = String::new();
    for (name, values) in [
        ("flavor", &options.flavor),
        ("concentration", &options.concentration),
        ("roast", &options.roast),
    ] {
        let values: Vec<_> = values.iter().map(|o| o.value).collect();
        let _ = writeln!(out, "{name}: {}", values.join(", "));
    }
    for field in QuantityField::ALL {
        let (min, max) = field.bounds();
        let _ = writeln!(out, "{field}: {min}..={max}");
    }
    out
}
