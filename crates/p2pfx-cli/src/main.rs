//! p2pfx -- fiat-to-fiat conversion rate estimator routed through a
//! P2P marketplace's stable-asset order book.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use p2pfx_cli::app::user_message;
use p2pfx_cli::render::render_quote;
use p2pfx_cli::{AppConfig, Application, ConversionArgs};
use rust_decimal::Decimal;
use tracing::info;

/// P2P fiat-to-fiat conversion estimator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (can also be set via P2PFX_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a conversion between two currencies
    Convert(ConvertArgs),
    /// Discover and list payment methods for a currency
    Methods(MethodsArgs),
}

#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("amount").required(true).args(["send", "receive"]),
))]
struct ConvertArgs {
    /// Source currency code, e.g. RUB
    #[arg(long)]
    from: String,

    /// Destination currency code, e.g. TRY
    #[arg(long)]
    to: String,

    /// Amount of the source currency to send
    #[arg(long)]
    send: Option<Decimal>,

    /// Amount of the destination currency to receive
    #[arg(long)]
    receive: Option<Decimal>,

    /// Payment method for the source currency
    #[arg(long)]
    from_method: Option<String>,

    /// Payment method for the destination currency
    #[arg(long)]
    to_method: Option<String>,

    /// Only consider certified merchants
    #[arg(long)]
    merchant_only: bool,
}

#[derive(Args, Debug)]
struct MethodsArgs {
    /// Currency code, e.g. RUB
    #[arg(long)]
    currency: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    p2pfx_telemetry::init_logging()?;

    info!("Starting p2pfx v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(cli.config.as_deref())?;
    let app = Application::new(config)?;

    match cli.command {
        Command::Convert(args) => {
            let conversion = ConversionArgs {
                from: args.from,
                to: args.to,
                send: args.send,
                receive: args.receive,
                from_method: args.from_method,
                to_method: args.to_method,
                merchant_only: args.merchant_only,
            };
            match app.convert(&conversion).await {
                Ok(quote) => print!("{}", render_quote(&quote)),
                Err(err) => {
                    eprintln!("{}", user_message(&err));
                    std::process::exit(1);
                }
            }
        }
        Command::Methods(args) => match app.discover_methods(&args.currency).await {
            Ok(methods) if methods.is_empty() => {
                println!("Payment methods for {} do not exist.", args.currency);
            }
            Ok(methods) => {
                for method in methods {
                    println!("{:<24} {}", method.short_name, method);
                }
            }
            Err(err) => {
                eprintln!("{}", user_message(&err));
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
