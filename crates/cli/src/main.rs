use clap::{Parser, Subcommand};
use qformat::QFormat;
use qformat_cli::commands::{bounds, convert, demo, table};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qconv")]
#[command(about = "Q(m,n) fixed-point conversion diagnostics for the firmware's Q5.27 buffers", long_about = None)]
struct Cli {
    /// Fixed-point format as Q<m>.<n> (m integer bits including sign, n fractional bits)
    #[arg(long, short, global = true, default_value = "Q5.27")]
    format: QFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the format bounds, round-trip the sample values and add two of them.
    /// This is the default when no subcommand is given.
    Demo,
    /// Print MIN_F, MAX_F, MIN_Q and MAX_Q
    Bounds {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Quantize floats to raw fixed-point values
    F2q {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Reconstruct floats from raw fixed-point values
    Q2f {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Quantize a coefficient table and print it as a C array
    Table {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Name of the C array
        #[arg(long, default_value = "coeffs")]
        name: String,

        /// Also write the raw words (little-endian) to this file
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "qconv=info,qformat_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let mut stdout = io::stdout().lock();

    tracing::debug!("Using format {}", format);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::run(&format, &mut stdout),
        Commands::Bounds { json } => bounds::run(&format, json, &mut stdout),
        Commands::F2q { values } => convert::f2q(&format, &values, &mut stdout),
        Commands::Q2f { values } => convert::q2f(&format, &values, &mut stdout),
        Commands::Table { values, name, out } => {
            table::run(&format, &values, &name, out.as_deref(), &mut stdout)
        }
    }
}
