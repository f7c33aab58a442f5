//! Interactive terminal Game of Life.
//!
//! Runs the prompt-seed-step loop in the terminal's alternate screen:
//! choose the two display symbols, seed the universe randomly or with the
//! cursor, then advance one generation per key press. `x` quits a run and
//! Ctrl-C bails out anywhere.

mod app;
mod input;
mod screen;

use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use petri_engine::{Session, SessionConfig};
use screen::Screen;
use std::io;

fn main() {
    let session = Session::new(SessionConfig::default());
    if let Err(err) = run(session) {
        eprintln!("petri: {err}");
        std::process::exit(1);
    }
}

fn run(session: Session) -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let result = App::new(session, Screen::new(&mut stdout)).run();
    // restore the terminal before surfacing any error from the loop
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    result
}
