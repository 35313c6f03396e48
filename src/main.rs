use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use product_showcase::data::time_seed;
use product_showcase::{
    ColorChoice, OutputOptions, Overrides, ProductGenerator, Settings, Showcase, Theme,
    ThemeChoice,
};

/// Width used when stdout is not a terminal.
const FALLBACK_WIDTH: u16 = 80;

#[derive(Parser, Debug)]
#[command(name = "product-showcase")]
#[command(about = "Render synthetic products as a colorized table and availability chart")]
struct Args {
    /// Number of products to generate [default: 100]
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for the product generator (defaults to a time-based seed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color theme [default: auto]
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// When to emit ANSI colors [default: auto]
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Width of the availability chart in columns [default: 60]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    chart_width: Option<u16>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            count: self.count,
            seed: self.seed,
            theme: self.theme,
            color: self.color,
            chart_width: self.chart_width,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = Settings::load(&args.overrides())?;
    tracing::debug!(?settings, "resolved settings");

    let seed = settings.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, count = settings.count, "generating products");
    let products = ProductGenerator::new(seed).generate(settings.count)?;

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let width = if is_terminal {
        crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(FALLBACK_WIDTH)
    } else {
        FALLBACK_WIDTH
    };

    let showcase = Showcase::new(products, Theme::from_choice(settings.theme, is_terminal));
    let options = OutputOptions {
        width,
        chart_width: settings.chart_width,
        color: settings.color.enabled(is_terminal),
    };
    showcase.render(&mut stdout.lock(), options)?;

    Ok(())
}

/// Log to stderr so the report on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
