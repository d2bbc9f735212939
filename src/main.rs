use clap::Parser;
use miette::{IntoDiagnostic, Result};
use samp_topup::application::flow::DonationFlow;
use samp_topup::domain::form::FormStep;
use samp_topup::error::TopupError;
use samp_topup::infrastructure::http::HttpRelayClient;
use samp_topup::interfaces::terminal::{PaymentInstructions, TerminalNotifier};
use std::io::{self, Write};

const DEFAULT_ENDPOINT: &str =
    "https://functions.poehali.dev/fd800dc4-3a7e-4679-9120-804c85a4ef8d";
const DEFAULT_CARD: &str = "2200 7020 5523 2552";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Player nickname to credit
    nickname: String,

    /// Top-up amount in donation rubles
    amount: String,

    /// Relay endpoint that forwards requests to the administrator
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint_url: String,

    /// Card number shown in the payment instructions
    #[arg(long, default_value = DEFAULT_CARD)]
    card: String,

    /// Skip the confirmation prompt and submit immediately
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut flow = DonationFlow::new(
        Box::new(HttpRelayClient::new(cli.endpoint_url)),
        Box::new(TerminalNotifier::new()),
    );

    flow.set_nickname(cli.nickname);
    flow.set_amount(cli.amount);
    flow.submit().await;
    if flow.step() != FormStep::Payment {
        // The notifier already explained what is missing.
        return Err(TopupError::Validation(
            "the entered details were rejected".to_string(),
        ))
        .into_diagnostic();
    }

    {
        let stdout = io::stdout();
        let mut instructions = PaymentInstructions::new(stdout.lock());
        instructions
            .render(&cli.card, flow.nickname(), flow.amount())
            .into_diagnostic()?;
    }

    if !cli.yes {
        print!("Press Enter once you have transferred the funds... ");
        io::stdout().flush().into_diagnostic()?;
        let mut ack = String::new();
        io::stdin().read_line(&mut ack).into_diagnostic()?;
    }

    flow.confirm_payment().await;

    Ok(())
}
