mod build_info;
mod ui;
mod utils;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use darkfort::{ChallengeBook, GameSession, Rules};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use ui::app::App;
use utils::persistence::{
    darkfort_dir, load_json_or_default, save_json, CHALLENGES_FILE, LOG_FILE, RULES_FILE,
};

const FRAME_MS: u64 = 50;

fn print_help() {
    println!("Dark Fort - a dice-driven dungeon crawl\n");
    println!("Usage: darkfort [options]\n");
    println!("Options:");
    println!("  --seed N   Roll every die from a fixed seed");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
    println!();
    println!("Challenge progress and an optional rules.json live in ~/.darkfort/");
}

/// Returns the seed to play with, or exits for informational flags.
fn parse_args() -> Option<u64> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut seed = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("darkfort {}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match iter.next().and_then(|s| s.parse::<u64>().ok()) {
                Some(value) => seed = Some(value),
                None => {
                    eprintln!("--seed needs a non-negative number");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'darkfort --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    seed
}

fn save_challenges(dir: &Path, book: &ChallengeBook) {
    if let Err(e) = save_json(dir, CHALLENGES_FILE, book) {
        tracing::warn!("Could not save challenge progress: {}", e);
    }
}

fn main() -> io::Result<()> {
    let seed = parse_args();

    let dir = darkfort_dir()?;
    utils::logging::init_logging(&dir, LOG_FILE)?;

    let rules = load_json_or_default::<Rules>(&dir, RULES_FILE).sanitized();
    let challenges: ChallengeBook = load_json_or_default(&dir, CHALLENGES_FILE);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!("Starting darkfort (seed {:?}, rules {:?})", seed, rules);

    let session = GameSession::new(rules, challenges, &mut rng);
    let mut app = App::new(session, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &dir);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    save_challenges(&dir, &app.session.challenges);
    result?;

    println!("Goodbye!");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<StdRng>,
    dir: &Path,
) -> io::Result<()> {
    let mut last_frame = Instant::now();
    while !app.should_quit {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_key(key_event.code);
                }
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_frame).as_secs_f64());
        last_frame = now;

        if app.take_needs_save() {
            save_challenges(dir, &app.session.challenges);
        }
    }
    Ok(())
}
