//! buildsheet - Main entry point
//!
//! Launches the interactive configurator or runs one of the headless
//! catalog commands.

use anyhow::{Context, Result};
use buildsheet::app::App;
use buildsheet::catalog::{load_catalog, Catalog, JsonCatalog, VehicleId};
use buildsheet::cli::{Cli, Commands};
use buildsheet::logic::analysis::MarginAnalysis;
use buildsheet::logic::compatibility::{compatible_options, group_by_category};
use buildsheet::logic::pricing::{line_price, PricingResult};
use buildsheet::session::Session;
use buildsheet::settings::Settings;
use buildsheet::types::ViewMode;
use buildsheet::ui::dealer::recommendation_text;
use buildsheet::ui::format::{format_currency, format_line_price, format_percent};
use buildsheet::ConfiguratorError;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize tracing. `RUST_LOG` overrides the settings level.
///
/// The TUI owns the terminal, so in that mode logs go to the configured
/// file or nowhere.
fn init_tracing(settings: &Settings, tui: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("Invalid log level {:?}", settings.log_level))?,
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if !tui {
        builder.with_writer(std::io::stderr).init();
    } else if let Some(path) = &settings.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::sink).init();
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let settings = Settings::load_or_default(&cli.settings)?.with_catalog_override(cli.catalog);
    settings.validate()?;

    let tui = matches!(cli.command, None | Some(Commands::Configure));
    init_tracing(&settings, tui)?;
    info!("buildsheet starting up");
    debug!("Settings: {:?}", settings);

    match cli.command {
        None | Some(Commands::Configure) => run_tui(&settings),
        Some(Commands::Validate) => run_validate(&settings),
        Some(Commands::Options { vehicle }) => run_options(&settings, &vehicle),
        Some(Commands::Price {
            vehicle,
            options,
            view,
            json,
        }) => run_price(&settings, &vehicle, &options, view, json),
    }
}

/// Run the interactive configurator
fn run_tui(settings: &Settings) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| ConfiguratorError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        ConfiguratorError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ConfiguratorError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(JsonCatalog::new(&settings.catalog_dir));
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(Into::into)
}

fn load(settings: &Settings) -> Result<Catalog> {
    let source = JsonCatalog::new(&settings.catalog_dir);
    load_catalog(&source)
        .with_context(|| format!("Failed to load catalog from {:?}", settings.catalog_dir))
}

/// Load the catalog and report what was found
fn run_validate(settings: &Settings) -> Result<()> {
    let catalog = load(settings)?;

    println!("Catalog: {}", settings.catalog_dir.display());
    println!("  vehicles:            {}", catalog.vehicles.len());
    println!("  options:             {}", catalog.options.len());
    println!("  option categories:   {}", catalog.option_categories.len());
    println!("  compatibility rules: {}", catalog.compatibility_rules.len());

    let issues = catalog.validate();
    if issues.is_empty() {
        println!("No issues found");
    } else {
        println!("{} issue(s):", issues.len());
        for issue in &issues {
            warn!("Catalog issue: {}", issue);
            println!("  - {}", issue);
        }
    }
    Ok(())
}

/// List the options that fit one vehicle
fn run_options(settings: &Settings, vehicle_id: &str) -> Result<()> {
    let catalog = load(settings)?;
    let vehicle = catalog
        .vehicle(&VehicleId::from(vehicle_id))
        .ok_or_else(|| ConfiguratorError::unknown_vehicle(vehicle_id))?;

    let compatible = compatible_options(&catalog.options, vehicle, &catalog.compatibility_rules);
    println!("{} ({} options)", vehicle.display_name(), compatible.len());

    for group in group_by_category(&compatible, &catalog.option_categories) {
        println!();
        println!("{}", group.name);
        for option in group.options {
            let price = format_line_price(line_price(option, ViewMode::Customer));
            println!("  {:<8} {:<48} {:>10}", option.code, option.name, price);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct PriceReport<'a> {
    vehicle_id: &'a str,
    vehicle: String,
    view: ViewMode,
    options: Vec<OptionLine<'a>>,
    pricing: PricingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    margin: Option<MarginReport>,
}

#[derive(Serialize)]
struct OptionLine<'a> {
    id: &'a str,
    code: &'a str,
    name: &'a str,
    price: String,
}

#[derive(Serialize)]
struct MarginReport {
    margin: rust_decimal::Decimal,
    margin_percent: rust_decimal::Decimal,
    rating: String,
}

/// Price a configuration without the TUI
fn run_price(
    settings: &Settings,
    vehicle_id: &str,
    option_ids: &[String],
    view: ViewMode,
    json: bool,
) -> Result<()> {
    let session = Session::from_ids(load(settings)?, vehicle_id, option_ids, view)?;
    let pricing = session.pricing();
    let analysis = MarginAnalysis::from_pricing(&pricing);
    let vehicle = session
        .selected_vehicle()
        .ok_or_else(|| ConfiguratorError::unknown_vehicle(vehicle_id))?;

    if json {
        let report = PriceReport {
            vehicle_id,
            vehicle: vehicle.display_name(),
            view,
            options: session
                .selected_options()
                .iter()
                .map(|o| OptionLine {
                    id: o.id.as_str(),
                    code: &o.code,
                    name: &o.name,
                    price: format_line_price(line_price(o, view)),
                })
                .collect(),
            pricing,
            margin: (view == ViewMode::Dealer).then(|| MarginReport {
                margin: analysis.margin,
                margin_percent: analysis.margin_percent,
                rating: analysis.rating.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}  [{}]", vehicle.display_name(), view.label());
    println!("  {:<40} {:>12}", "Base Vehicle", format_currency(pricing.base(view)));
    for option in session.selected_options() {
        let label = format!("  {} {}", option.code, option.name);
        println!(
            "  {:<40} {:>12}",
            label,
            format_line_price(line_price(option, view))
        );
    }
    println!("  {:<40} {:>12}", "Options Subtotal", format_currency(pricing.options(view)));
    println!(
        "  {:<40} {:>12}",
        "Destination & Delivery",
        format_currency(pricing.destination_charge)
    );
    println!("  {:<40} {:>12}", view.total_label(), format_currency(pricing.total(view)));

    if view == ViewMode::Dealer {
        println!();
        println!(
            "  Margin {} ({}) {}",
            format_currency(analysis.margin),
            format_percent(analysis.margin_percent),
            analysis.rating
        );
        for recommendation in analysis.recommendations(&pricing, session.selected_options().len()) {
            println!("  > {}", recommendation_text(&recommendation));
        }
    }
    Ok(())
}
