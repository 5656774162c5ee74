use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use git_simulator::core::{
    find_reference, initial_repository, load_catalog, print_error, print_info, print_output,
    print_section_header, print_success, CommandReference, SequentialIds, SimulatorConfig,
};
use git_simulator::terminal::Terminal;
use git_simulator::tutorial::load_tutorials;
use git_simulator::{Session, TutorialTracker};
use std::env;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-simulator")]
#[command(about = "An educational simulator of the git command line")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive simulator (default)
    Shell {
        /// Tutorial to follow (e.g. "basics-1")
        #[arg(long)]
        tutorial: Option<String>,
    },
    /// Run command lines against the sample project and print their output
    Run {
        /// Command lines, one per argument (e.g. "git add README.md")
        #[arg(required = true)]
        lines: Vec<String>,
        /// Print the final repository as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the git command reference
    Reference {
        /// Command name (e.g. "commit" or "git commit")
        name: Option<String>,
    },
    /// List the available tutorials
    Tutorials,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => SimulatorConfig::default_path()?,
    };
    let config = SimulatorConfig::load_or_default(&config_path).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config: {e}");
        SimulatorConfig::default()
    });

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Commands::Shell { tutorial: None }) {
        Commands::Shell { tutorial } => run_shell(config, config_path, tutorial),
        Commands::Run { lines, json } => run_lines(&lines, json),
        Commands::Reference { name } => show_reference(name.as_deref()),
        Commands::Tutorials => list_tutorials(),
    }
}

fn run_shell(
    mut config: SimulatorConfig,
    config_path: PathBuf,
    tutorial: Option<String>,
) -> anyhow::Result<()> {
    let mut tracker = TutorialTracker::new(load_tutorials()?);
    if let Some(id) = &tutorial {
        tracker.select(id)?;
        if config.last_tutorial.as_ref() != Some(id) {
            config.last_tutorial = Some(id.clone());
            match config.save(&config_path) {
                Ok(()) => print_success(&format!("Tutorial '{id}' will be remembered")),
                Err(e) => log::warn!("could not remember tutorial: {e}"),
            }
        }
    }

    let mut terminal = Terminal::new(Session::default(), tracker, config);
    let stdin = io::stdin();
    terminal
        .run(stdin.lock(), &mut io::stdout())
        .context("terminal session failed")?;
    Ok(())
}

fn run_lines(lines: &[String], json: bool) -> anyhow::Result<()> {
    let mut session = Session::with_id_source(initial_repository(Utc::now()), SequentialIds::new());
    for line in lines {
        if let Some(output) = session.run(line) {
            print_output(&output);
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(session.repository())?);
    }
    Ok(())
}

fn show_reference(name: Option<&str>) -> anyhow::Result<()> {
    match name {
        Some(name) => print_reference(&find_reference(name)?),
        None => {
            print_section_header("Git commands");
            for entry in load_catalog()? {
                println!("  {:<18} {}", entry.name.blue(), entry.description);
            }
        }
    }
    Ok(())
}

fn print_reference(entry: &CommandReference) {
    println!("{}", entry.name.blue().bold());
    print_info(&entry.description);
    print_section_header("Syntax");
    println!("  {}", entry.syntax);
    print_section_header("Examples");
    for example in &entry.examples {
        println!("  {example}");
    }
}

fn list_tutorials() -> anyhow::Result<()> {
    for tutorial in load_tutorials()? {
        println!("{} {}", tutorial.id.cyan(), tutorial.title.bold());
        println!("  {}", tutorial.description);
        for (number, step) in tutorial.steps.iter().enumerate() {
            println!("  {:>2}. {}", number + 1, step.instruction);
        }
        println!();
    }
    Ok(())
}
