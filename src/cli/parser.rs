//! Command-line interface definition for medialedger:
//! project, client, and invoice records for freelance media businesses.

use crate::analytics::Period;
use crate::exchange::ExportFormat;
use crate::finance::PaymentStatus;
use crate::models::{BusinessType, ClientStatus, ClientType, Currency, InvoiceStatus};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "medialedger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track projects, clients, and invoices for freelance media businesses",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or a custom location)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Business context to operate on (df = Digital Footprints, ff = Film Fixer)
    #[arg(global = true, long = "business", value_enum)]
    pub business: Option<BusinessType>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage invoices
    Invoice {
        #[command(subcommand)]
        action: InvoiceAction,
    },

    /// Revenue, projects, expenses, and profit at a glance
    Dashboard,

    /// Period-filtered revenue/expense/client analytics
    Analytics {
        #[arg(long, value_enum, default_value = "month")]
        period: Period,
    },

    /// Export the project collection
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Import a whole-state JSON file, replacing the project collection
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show or set the preferred currency for the business context
    Currency {
        #[arg(long, value_enum, ignore_case = true)]
        set: Option<Currency>,
    },

    /// Record the current user
    Login {
        username: String,

        #[arg(long, default_value = "user")]
        role: String,
    },

    /// Clear the current user
    Logout,

    /// Show the current user
    Whoami,

    /// Copy the record store to a backup location
    Backup {
        #[arg(long, value_name = "DEST")]
        file: String,

        #[arg(long, help = "Write a zip archive instead of a plain copy")]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a project, or update one in place with --id
    Add {
        #[arg(long = "client", help = "Client name")]
        client_name: Option<String>,

        #[arg(long = "phone", help = "Client phone number")]
        client_phone: Option<String>,

        #[arg(long = "name", help = "Project name")]
        project_name: Option<String>,

        #[arg(long = "date", help = "Project date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "type", help = "Project type value for the business context")]
        project_type: Option<String>,

        #[arg(long = "price", help = "Total price", default_value_t = 0.0)]
        total_price: f64,

        #[arg(long = "upfront", help = "Upfront payment", default_value_t = 0.0)]
        upfront_payment: f64,

        #[arg(long, value_enum, ignore_case = true)]
        currency: Option<Currency>,

        /// Expense entry, repeatable: CATEGORY:AMOUNT[:CURRENCY]
        #[arg(long = "expense", value_name = "CATEGORY:AMOUNT[:CURRENCY]")]
        expenses: Vec<String>,

        #[arg(long, help = "Free-text project details")]
        details: Option<String>,

        #[arg(long, help = "Existing project id to update in place")]
        id: Option<String>,
    },

    /// List projects
    List {
        #[arg(long, short, help = "Case-insensitive substring search")]
        search: Option<String>,

        #[arg(long = "type", help = "Filter by project type value")]
        project_type: Option<String>,

        #[arg(long, value_enum, help = "Filter by payment status")]
        status: Option<PaymentStatus>,
    },

    /// Delete a project by id
    Del {
        id: String,

        #[arg(long, short, help = "Skip the confirmation requirement")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Add a client
    Add {
        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long = "type", value_enum, default_value = "individual")]
        client_type: ClientType,

        #[arg(long, value_enum, default_value = "active")]
        status: ClientStatus,

        #[arg(long)]
        website: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List clients with recomputed project/revenue figures
    List {
        #[arg(long, short, help = "Case-insensitive substring search")]
        search: Option<String>,

        #[arg(long, value_enum, help = "Filter by client status")]
        status: Option<ClientStatus>,
    },

    /// Import clients from a CSV table (appends to the collection)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the client collection
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum InvoiceAction {
    /// Create an invoice
    Create {
        #[arg(long = "client", help = "Client name")]
        client_name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long, help = "Invoice date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "due", help = "Due date (YYYY-MM-DD)")]
        due_date: String,

        #[arg(long, value_enum, ignore_case = true)]
        currency: Option<Currency>,

        /// Line item, repeatable: SERVICE:QTY:PRICE[:DESCRIPTION]
        #[arg(long = "item", value_name = "SERVICE:QTY:PRICE[:DESCRIPTION]")]
        items: Vec<String>,

        #[arg(long, default_value_t = 0.0)]
        tax: f64,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "project-id", help = "Related project id (not verified)")]
        project_id: Option<String>,

        #[arg(long = "number", help = "Invoice number (generated when omitted)")]
        number: Option<String>,
    },

    /// List invoices
    List {
        #[arg(long, short, help = "Search by number, client name, or email")]
        search: Option<String>,

        #[arg(long, value_enum, help = "Filter by invoice status")]
        status: Option<InvoiceStatus>,
    },
}
