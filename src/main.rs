use clap::Parser;
use dialoguer::{Input, Select};
use episode_scout::view::terminal::paint;
use episode_scout::{Controller, EpisodeScoutError, TvMazeClient, Transition, tvmaze_controller};
use std::process;
use tracing_subscriber::EnvFilter;

/// Search TVMaze for tv shows and browse their episodes.
#[derive(Debug, Parser)]
#[command(name = "episode-scout", version, about)]
struct Cli {
    /// Search term to submit right away
    term: Option<String>,

    /// Alternative API endpoint
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Sets up stderr logging. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "episode_scout=debug"
    } else {
        "episode_scout=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a short status line for a finished request
fn report_transition(transition: &Transition, what: &str) {
    match transition {
        Transition::Rendered { count } => println!("\nFound {} {}.\n", count, what),
        Transition::Failed(_) => println!("\nCould not load {}.\n", what),
        Transition::Superseded => {}
    }
}

/// Lets the user pick a card's "Episodes" control until they ask for a new
/// search. Returns `false` when they want to quit.
fn browse_results(controller: &mut Controller<TvMazeClient>) -> Result<bool, EpisodeScoutError> {
    loop {
        let cards = controller.page().results.cards();
        let handles: Vec<_> = cards.iter().map(|card| card.handle).collect();
        let mut items: Vec<String> = cards
            .iter()
            .map(|card| format!("{}: {}", card.action_label, card.name))
            .collect();
        items.push("New search".to_string());
        items.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == handles.len() {
            return Ok(true);
        }
        if choice > handles.len() {
            return Ok(false);
        }

        let transition = controller.open_episodes(handles[choice])?;
        report_transition(&transition, "episode(s)");
        println!("{}", paint(controller.page()));
    }
}

fn run(cli: Cli) -> Result<(), EpisodeScoutError> {
    let mut controller = tvmaze_controller(cli.base_url.as_deref());
    println!(
        "Episode Scout reporting: asking {} for shows...",
        controller.source().base_url()
    );

    let mut pending_term = cli.term;
    loop {
        let term = match pending_term.take() {
            Some(term) => term,
            None => Input::<String>::new()
                .with_prompt("Search shows")
                .allow_empty(true)
                .interact_text()?,
        };

        let transition = controller.submit_search(&term);
        report_transition(&transition, "show(s)");
        println!("{}", paint(controller.page()));

        if !browse_results(&mut controller)? {
            return Ok(());
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
