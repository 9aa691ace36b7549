// QUINN: terminal slide deck for the scheduling assistant

use std::io::{self, Stdout};
use std::time::Instant;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use quinn_deck::config::{Cli, Config};
use quinn_deck::deck;
use quinn_deck::logging;
use quinn_deck::ui::App;

/// Puts the terminal into raw mode on the alternate screen and restores it
/// on drop, including when the app returns early with an error.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalGuard { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let slide_count = deck::slides().len();

    let config = match Config::resolve(&cli, slide_count) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    // Flushes buffered log lines when dropped at the end of main
    let _log_guard = logging::init(&config.log)?;
    info!(?config, "starting");

    let mut app = App::new(&config, Instant::now())?;

    let res = {
        let mut guard = TerminalGuard::new()?;
        app.run(&mut guard.terminal)
    };

    if let Err(err) = res {
        error!(%err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
