mod audit;
mod config;
mod error;
mod export;
mod interactive;
mod logging;
mod route;
mod survey;
mod theme;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use config::Config;
use error::ConfigError;
use interactive::breakdown::Disclosure;
use interactive::document::DocumentBuilder;
use interactive::question_card;
use interactive::utils::format_count;
use route::Route;
use survey::{find_question, sections};

#[derive(Parser)]
#[command(name = "survey")]
#[command(about = "Terminal dashboard for the 2024 supporter survey results", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui {
        /// Page to open on: /, /about-you, /values-views, /your-support, /satisfaction
        #[arg(short, long)]
        page: Option<Route>,
    },
    /// List pages and their questions
    List,
    /// Print one question card as text
    Show {
        /// Question id, e.g. Q4
        question: String,

        /// Output width in columns
        #[arg(short, long, default_value_t = 80)]
        width: u16,

        /// Expand every breakdown
        #[arg(short, long)]
        expand: bool,
    },
    /// Export the survey figures as JSON
    Export {
        /// Only this page
        #[arg(short, long)]
        page: Option<Route>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reconcile counts against printed percentages
    Check,
    /// Show the config file location and effective settings
    Config {
        /// Write a config file with default values
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => (),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;

    match cli.command.unwrap_or(Commands::Tui { page: None }) {
        Commands::Tui { page } => {
            let config = Config::load()?;
            if config.log_to_file {
                // The dashboard owns the terminal, so logging goes to a file or nowhere
                if let Err(e) = logging::init_with_file("survey.log", verbose) {
                    eprintln!("Warning: file logging disabled: {}", e);
                }
            }
            let route = page.unwrap_or(config.start_page);
            interactive::run_interactive(config, route)?;
        }
        Commands::List => {
            logging::init(verbose);
            list_questions();
        }
        Commands::Show {
            question,
            width,
            expand,
        } => {
            logging::init(verbose);
            show_question(&question, width, expand)?;
        }
        Commands::Export { page, output } => {
            logging::init(verbose);
            let export = export::build(page);
            export::write(&export, output.as_deref())?;
            if let Some(path) = output {
                println!("Exported {} section(s) to {}", export.sections.len(), path.display());
            }
        }
        Commands::Check => {
            logging::init(verbose);
            println!("{}", audit::run());
        }
        Commands::Config { init } => {
            logging::init(verbose);
            handle_config_command(init)?;
        }
    }

    Ok(())
}

fn list_questions() {
    println!("{:<14} {}", Route::Overview.nav_label(), Route::Overview.path());
    for section in sections() {
        println!();
        println!("{:<14} {}", section.route.nav_label(), section.route.path());
        for card in section.cards {
            let respondents = card
                .respondents
                .map(format_count)
                .unwrap_or_else(|| "-".to_string());
            println!("  {:<4} {:>6}  {}", card.id, respondents, card.title);
        }
        if let Some(pending) = section.pending {
            println!("  {}", pending);
        }
    }
}

fn show_question(id: &str, width: u16, expand: bool) -> Result<()> {
    let (section, card) = find_question(id)?;
    tracing::debug!(id = card.id, page = %section.route, width, expand, "show question");

    let mut disclosures = vec![Disclosure::default(); card.breakdowns.len()];
    if expand {
        disclosures.iter_mut().for_each(Disclosure::toggle);
    }

    let mut builder = DocumentBuilder::new(width, None);
    question_card::render(&mut builder, card, 0, 0, &disclosures);
    print!("{}", builder.finish().plain_text());
    Ok(())
}

fn handle_config_command(init: bool) -> Result<()> {
    let path = Config::get_config_path().ok_or(ConfigError::NoConfigDir)?;

    if init {
        if path.exists() {
            return Err(anyhow!(
                "Config file already exists at {}",
                path.display()
            ));
        }
        let written = Config::default().save()?;
        println!("Wrote default config to {}", written.display());
        return Ok(());
    }

    let config = Config::load()?;
    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("(not present, showing defaults; create it with `survey config --init`)");
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
