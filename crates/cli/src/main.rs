//! SecurBank CLI - account number, interest and form data tools
//!
//! Usage:
//! ```bash
//! securbank account validate 1234-5678-9012-3456
//! securbank account mask 1234567890123456
//! securbank interest 1000 0.05 2
//! securbank currency -- -1234.56
//! securbank email user.name@domain.co.uk
//! securbank form-data --template /content/dam/forms/statement.xdp customerName="John Doe"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{account, email, forms, money};

/// SecurBank - account number and form data utilities
#[derive(Parser)]
#[command(name = "securbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account number tools
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Simple interest (principal * rate * years)
    Interest {
        /// Principal amount
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Rate as a decimal (0.05 for 5%)
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Number of years
        #[arg(allow_negative_numbers = true)]
        years: i32,
    },

    /// Format an amount as currency
    Currency {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Check the shape of an email address
    Email {
        /// Address to check
        address: String,
    },

    /// Build the XML data document for a template render
    FormData {
        /// XDP template path (e.g., /content/dam/forms/statement.xdp)
        #[arg(long)]
        template: Option<String>,
        /// Download filename
        #[arg(long)]
        filename: Option<String>,
        /// Write the XML data document to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Form fields as KEY=VALUE (repeat a key for multi-valued fields)
        fields: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Check that an account number has 8 to 16 digits
    Validate {
        /// Account number, dashes and spaces allowed
        number: String,
    },
    /// Group digits as XXXX-XXXX-...
    Format {
        /// Account number
        number: String,
    },
    /// Hide all but the last 4 digits
    Mask {
        /// Account number
        number: String,
    },
    /// Validate, format and mask in one go
    Inspect {
        /// Account number
        number: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Account { action } => account::handle(action, cli.json)?,

        Commands::Interest {
            principal,
            rate,
            years,
        } => money::interest(principal, rate, years, cli.json)?,

        Commands::Currency { amount } => money::currency(amount, cli.json)?,

        Commands::Email { address } => email::check(&address, cli.json)?,

        Commands::FormData {
            template,
            filename,
            output,
            fields,
        } => forms::form_data(
            template.as_deref(),
            filename.as_deref(),
            &fields,
            output.as_deref(),
            cli.json,
        )?,
    };

    println!("{output}");
    Ok(())
}
