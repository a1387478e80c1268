mod app;
mod catalog;
mod config;
mod filter;
mod form;
mod keys;
mod links;
mod logging;
mod overlay;
mod route;
mod ui;

use app::App;
use catalog::{Catalog, MovieId, MovieRecord};
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use filter::MovieFilter;
use route::Route;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

/// Browse, filter and add movies in a small in-memory catalog
#[derive(Parser)]
#[command(name = "flix", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with the seed catalog (defaults to the built-in movies)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI browser (default)
    Run {
        /// Address to start at, e.g. "/" or "/movie/2"
        #[arg(short, long, default_value = "/")]
        open: Route,
    },
    /// Print the catalog, optionally filtered
    List {
        /// Case-insensitive title substring
        #[arg(short, long, default_value = "")]
        title: String,
        /// Minimum rating; 0 means no constraint
        #[arg(short = 'r', long, default_value_t = 0.0)]
        min_rating: f64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a single movie
    Show {
        /// Movie id
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    match logging::init(&config) {
        Ok(log_path) => info!(log = %log_path.display(), "starting flix"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::seeded(),
    };

    let command = cli.command.unwrap_or(Commands::Run { open: Route::Catalog });
    match command {
        Commands::List { title, min_rating, json } => {
            let filter = MovieFilter { title, min_rating };
            list_movies(&mut io::stdout().lock(), &catalog, &filter, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { id, json } => show_movie(
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &catalog,
            &MovieId::new(id),
            json,
            &config.placeholder_poster,
        ),
        Commands::Run { open } => {
            let mut app = App::new(catalog, config.placeholder_poster.clone());
            app.navigate(open);

            // Init terminal; the guard restores it on every exit path below
            let mut terminal = ratatui::init();
            let guard = RestoreGuard(|| {
                let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
                ratatui::restore();
            });
            crossterm::execute!(io::stdout(), EnableMouseCapture)?;

            let size = terminal.size()?;
            app.update_page_size(size.height);

            // Main loop
            let result = run_app(&mut terminal, &mut app);
            drop(guard);

            if let Err(e) = result {
                error!(error = %e, "event loop failed");
                eprintln!("Error: {e}");
                return Ok(ExitCode::FAILURE);
            }
            info!(movies = app.catalog.len(), "exiting");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs the wrapped closure when dropped.
struct RestoreGuard<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

fn list_movies(
    out: &mut impl Write,
    catalog: &Catalog,
    filter: &MovieFilter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let movies = filter::apply(catalog.movies(), filter);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&movies)?)?;
    } else {
        for movie in movies {
            writeln!(out, "{:>4}  {:.1}  {}", movie.id, movie.rating, movie.title)?;
        }
    }
    Ok(())
}

fn show_movie(
    out: &mut impl Write,
    err: &mut impl Write,
    catalog: &Catalog,
    id: &MovieId,
    json: bool,
    placeholder: &str,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(movie) = catalog.find(id) else {
        writeln!(err, "Movie not found: {}", id)?;
        return Ok(ExitCode::FAILURE);
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(movie)?)?;
    } else {
        print_movie(out, movie, placeholder)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let completed = terminal.draw(|frame| ui::render(app, frame))?;
        app.viewport = completed.area;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    keys::handle_key(app, key);
                }
                Event::Mouse(mouse) => keys::handle_mouse(app, mouse),
                Event::Resize(_, height) => {
                    app.update_page_size(height);
                }
                _ => {}
            }
        }
    }
}

fn print_movie(out: &mut impl Write, movie: &MovieRecord, placeholder: &str) -> io::Result<()> {
    writeln!(out, "{} ({})", movie.title, movie.id)?;
    writeln!(out, "Rating:  {:.1}", movie.rating)?;
    writeln!(out, "Poster:  {}", movie.poster_or(placeholder))?;
    writeln!(out, "Trailer: {}", movie.trailer_url)?;
    writeln!(out)?;
    writeln!(out, "{}", movie.description)?;
    writeln!(out)?;
    writeln!(out, "{}", movie.long_description)
}
