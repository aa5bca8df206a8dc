mod commands;
mod render;

use agenda_core::config::GlobalConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Companion agenda: appointments, medicines, contacts and shopping")]
struct Cli {
    /// Print debug logs
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's screen: clock, weather-free summary of events and medicines
    Today,
    /// Month view with event markers
    Month {
        /// Month to show (YYYY-MM or YYYY-MM-DD), defaults to the current month
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Upcoming events grouped by day
    Events {
        /// Show events from this date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD), defaults to a week out
        #[arg(long)]
        to: Option<String>,
    },
    /// Add an event
    New {
        title: Option<String>,

        /// Day (e.g. "2026-09-03", "tomorrow", "sat")
        #[arg(short, long)]
        date: Option<String>,

        /// Time of day (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Category: médical, famille, courses, loisirs, médicament, autre
        #[arg(short, long)]
        category: Option<String>,

        /// Flag the event as important
        #[arg(long)]
        important: bool,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an event by id
    Remove { id: u64 },
    /// Medicine schedule
    Meds {
        #[command(subcommand)]
        action: Option<MedsAction>,
    },
    /// Contact book with one-tap dial numbers
    Contacts {
        #[command(subcommand)]
        action: Option<ContactsAction>,
    },
    /// Shopping checklist
    Shopping {
        #[command(subcommand)]
        action: Option<ShoppingAction>,
    },
    /// Today's weather and clothing advice (simulated)
    Weather,
    /// Emergency numbers and family contacts
    Emergency,
    /// Show or change the settings
    Config {
        /// City reported by the weather
        #[arg(long)]
        city: Option<String>,

        /// Name shown in greetings
        #[arg(long)]
        name: Option<String>,

        /// Where the data file lives
        #[arg(long)]
        data_dir: Option<String>,
    },
}

#[derive(Subcommand)]
enum MedsAction {
    /// Show the schedule (default)
    List,
    /// Mark a medicine taken (or un-taken)
    Take { id: u64 },
    /// Add a medicine
    Add {
        name: String,

        /// Time of day (HH:MM)
        #[arg(short, long)]
        time: String,

        /// Pill color
        #[arg(long, default_value = "blanche")]
        color: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Clear all taken flags for a new day
    Reset,
}

#[derive(Subcommand)]
enum ContactsAction {
    /// Show all contacts (default)
    List,
    /// Add a contact
    Add {
        name: String,

        /// Relation ("Fils", "Fille", "Médecin", ...)
        #[arg(short, long)]
        relation: String,

        #[arg(short, long)]
        phone: String,

        #[arg(long, default_value = "👤")]
        emoji: String,

        /// Show with emergency styling
        #[arg(long)]
        urgent: bool,
    },
    /// Show a contact's dialable number
    Call { id: u64 },
    /// Remove a contact by id
    Remove { id: u64 },
}

#[derive(Subcommand)]
enum ShoppingAction {
    /// Show the checklist (default)
    List,
    /// Add an item
    Add {
        label: String,

        /// Store section
        #[arg(short, long, default_value = "Autre")]
        category: String,
    },
    /// Check (or uncheck) an item
    Check { id: u64 },
    /// Drop everything already checked off
    Clear,
    /// Show suggested staples, or add one by name
    Suggest { label: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = GlobalConfig::load()?;
    log::debug!("Using data directory {}", config.data_path().display());

    match cli.command {
        Commands::Today => commands::today::run(&config),
        Commands::Month { date } => commands::month::run(&config, date.as_deref()),
        Commands::Events { from, to } => commands::events::run(&config, from.as_deref(), to.as_deref()),
        Commands::New {
            title,
            date,
            time,
            category,
            important,
            notes,
        } => commands::new::run(&config, title, date, time, category, important, notes),
        Commands::Remove { id } => commands::remove::run(&config, id),
        Commands::Meds { action } => match action.unwrap_or(MedsAction::List) {
            MedsAction::List => commands::meds::list(&config),
            MedsAction::Take { id } => commands::meds::take(&config, id),
            MedsAction::Add {
                name,
                time,
                color,
                notes,
            } => commands::meds::add(&config, &name, &time, &color, notes.as_deref()),
            MedsAction::Reset => commands::meds::reset(&config),
        },
        Commands::Contacts { action } => match action.unwrap_or(ContactsAction::List) {
            ContactsAction::List => commands::contacts::list(&config),
            ContactsAction::Add {
                name,
                relation,
                phone,
                emoji,
                urgent,
            } => commands::contacts::add(&config, &name, &relation, &phone, &emoji, urgent),
            ContactsAction::Call { id } => commands::contacts::call(&config, id),
            ContactsAction::Remove { id } => commands::contacts::remove(&config, id),
        },
        Commands::Shopping { action } => match action.unwrap_or(ShoppingAction::List) {
            ShoppingAction::List => commands::shopping::list(&config),
            ShoppingAction::Add { label, category } => {
                commands::shopping::add(&config, &label, &category)
            }
            ShoppingAction::Check { id } => commands::shopping::check(&config, id),
            ShoppingAction::Clear => commands::shopping::clear(&config),
            ShoppingAction::Suggest { label } => {
                commands::shopping::suggest(&config, label.as_deref())
            }
        },
        Commands::Weather => commands::weather::run(&config).await,
        Commands::Emergency => commands::emergency::run(&config),
        Commands::Config {
            city,
            name,
            data_dir,
        } => commands::config::run(&config, city.as_deref(), name.as_deref(), data_dir.as_deref()),
    }
}
