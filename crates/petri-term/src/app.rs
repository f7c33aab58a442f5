//! Frame drawing and the interactive loop.

use crate::input;
use crate::screen::Screen;
use petri_engine::{Phase, Session, SymbolRole, render_rows};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BANNER: [&str; 3] = [
    "---------------------------",
    "       Game of life",
    "---------------------------",
];
const PROMPT_LIVE: &str = "Enter a symbol for a live cell: ";
const PROMPT_DEAD: &str = "Enter a symbol for a dead cell: ";
const SEED_QUESTION: &str = "How many seeds would you like to randomly place?";
const SEED_MENU: &str = "Enter a number between 1 and 9 or 0 for manual placement: ";
const MANUAL_HELP: &str = "Use keyboard to move.  Enter s to place a seed. Enter q to exit.";
const MANUAL_KEYS: &str = "a / d for left / right, w / x for up / down.";
const RUN_HINT: &str = "Press any key to advance, x to quit.";
const EXTINCT: &str = "The universe has gone extinct.";

/// Row the notice line (rejections, confirmations) occupies on the prompt
/// screens.
const NOTICE_ROW: u16 = 9;

/// The interactive loop: draws the current phase, reads one key, feeds the
/// session, repeats.
pub struct App<W: Write> {
    session: Session,
    screen: Screen<W>,
}

impl<W: Write> App<W> {
    pub fn new(session: Session, screen: Screen<W>) -> Self {
        Self { session, screen }
    }

    /// Runs the prompt-seed-step loop until quit or Ctrl-C.
    pub fn run(&mut self) -> io::Result<()> {
        let mut notice: Option<String> = None;
        while self.session.phase() != Phase::Terminated {
            self.draw(notice.as_deref())?;
            let key = input::read_key()?;
            if input::is_interrupt(&key) {
                break;
            }
            let Some(cmd) = input::command_for(self.session.phase(), &key) else {
                continue;
            };
            let at_seed_menu = self.session.phase() == Phase::AwaitingSeedMode;
            notice = match self.session.apply(cmd) {
                Ok(()) => {
                    if at_seed_menu {
                        self.confirm_seed_mode()?;
                    }
                    None
                }
                Err(err) => Some(err.to_string()),
            };
        }
        Ok(())
    }

    /// Shows the seed-mode confirmation for a moment before the screen
    /// switches over to the grid.
    fn confirm_seed_mode(&mut self) -> io::Result<()> {
        let text = match self.session.phase() {
            Phase::Running => format!("Randomly placing {} seeds", self.session.population()),
            Phase::ManualSeeding => "Manual input selected".to_string(),
            _ => return Ok(()),
        };
        self.screen.put(NOTICE_ROW, 0, &text)?;
        self.screen.flush()?;
        thread::sleep(Duration::from_secs(1));
        Ok(())
    }

    fn draw(&mut self, notice: Option<&str>) -> io::Result<()> {
        self.screen.clear()?;
        match self.session.phase() {
            Phase::AwaitingSymbols { role } => self.draw_prompts(Some(role), notice)?,
            Phase::AwaitingSeedMode => self.draw_prompts(None, notice)?,
            Phase::ManualSeeding => self.draw_manual()?,
            Phase::Running | Phase::Terminated => self.draw_run()?,
        }
        self.screen.flush()
    }

    /// Symbol prompts and the seed menu, revealed top to bottom as answers
    /// come in. Chosen symbols are echoed under their prompt.
    fn draw_prompts(&mut self, awaiting: Option<SymbolRole>, notice: Option<&str>) -> io::Result<()> {
        for (row, line) in BANNER.iter().enumerate() {
            self.screen.put(row as u16, 0, line)?;
        }
        self.screen.put(3, 0, PROMPT_LIVE)?;
        if awaiting != Some(SymbolRole::Live) {
            let live = self.session.symbols().live().to_string();
            self.screen.put(4, 0, &live)?;
            self.screen.put(5, 0, PROMPT_DEAD)?;
        }
        if awaiting.is_none() {
            let dead = self.session.symbols().dead().to_string();
            self.screen.put(6, 0, &dead)?;
            self.screen.put(7, 0, SEED_QUESTION)?;
            self.screen.put(8, 0, SEED_MENU)?;
        }
        if let Some(text) = notice {
            self.screen.put(NOTICE_ROW, 0, text)?;
        }
        match awaiting {
            Some(SymbolRole::Live) => self.screen.park(3, PROMPT_LIVE.len() as u16),
            Some(SymbolRole::Dead) => self.screen.park(5, PROMPT_DEAD.len() as u16),
            None => self.screen.park(8, SEED_MENU.len() as u16),
        }
    }

    fn draw_grid(&mut self) -> io::Result<()> {
        let rows = render_rows(self.session.grid(), self.session.symbols());
        for (row, text) in rows.iter().enumerate() {
            self.screen.put(row as u16, 0, text)?;
        }
        Ok(())
    }

    fn draw_manual(&mut self) -> io::Result<()> {
        self.draw_grid()?;
        let below = self.session.grid().height() as u16;
        self.screen.put(below + 2, 0, MANUAL_HELP)?;
        self.screen.put(below + 3, 0, MANUAL_KEYS)?;
        // the terminal cursor doubles as the placement cursor
        let cursor = self.session.cursor();
        self.screen.park(cursor.row as u16, cursor.col as u16)
    }

    fn draw_run(&mut self) -> io::Result<()> {
        self.draw_grid()?;
        let below = self.session.grid().height() as u16;
        if self.session.is_extinct() {
            self.screen.put(below + 1, 0, EXTINCT)?;
        }
        self.screen.put(below + 2, 0, RUN_HINT)?;
        self.screen.park(below + 2, RUN_HINT.len() as u16)
    }
}
