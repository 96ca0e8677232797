use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use usersift::app::{App, OutputMode};
use usersift::config::{self, ConfigResult};
use usersift::search::{self, RenderState, search_render};
use usersift::source::HttpUserSource;

/// Incremental search over a remote user directory
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Incremental search over a remote user directory, filtered as you type"
)]
struct Args {
    /// URL returning a JSON array of users with `name` and `email` fields
    #[arg(long)]
    endpoint: Option<String>,

    /// Run a single lookup and print the results instead of opening the UI
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/usersift-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/usersift-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== USERSIFT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Command line wins over the config file
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config_result.config.source.endpoint.clone());
    let source = HttpUserSource::new(config::parse_endpoint(&endpoint)?);

    if let Some(text) = args.query {
        let render = search::worker::run_once(&source, &text);
        search_render::write_plain(&mut stdout().lock(), &render)?;
        if render == RenderState::Error {
            std::process::exit(1);
        }
        return Ok(());
    }

    let terminal = init_terminal()?;

    let app = App::new();
    let result = run(terminal, app, source, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== USERSIFT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    source: HttpUserSource,
    config_result: ConfigResult,
) -> Result<App> {
    app.warning = config_result.warning;

    setup_search_worker(&mut app, source);

    loop {
        // Apply worker responses before drawing
        app.poll_search();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the search worker thread and channels
fn setup_search_worker(app: &mut App, source: HttpUserSource) {
    log::debug!("Searching users at {}", source.endpoint());

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.search.set_channels(request_tx, response_rx);

    search::worker::spawn_worker(source, request_rx, response_tx);
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    match app.output_mode() {
        Some(OutputMode::Results) => {
            search_render::write_plain(&mut stdout().lock(), &app.search.render)?;
        }
        None => {
            // Exited with Esc or Ctrl+C
        }
    }

    Ok(())
}
