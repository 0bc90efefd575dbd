//! Print decoded intents for each key press, including DAS/ARR repeats.
//!
//! Useful for checking how a terminal reports presses, repeats and releases.
//! Quit with `q`, `Esc` or `Ctrl-C`.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use blockstacker::input::{handle_key_event, should_quit, InputHandler};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let mut out = std::io::stdout();
    let mut handler = InputHandler::new();
    let mut last_frame = Instant::now();

    write!(out, "press keys (q to quit)\r\n")?;
    out.flush()?;

    loop {
        let timeout = FRAME.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                let decoded = handle_key_event(key);
                match (key.kind, decoded) {
                    (KeyEventKind::Press, Some(action)) => {
                        if let Some(action) = handler.press(action) {
                            write!(out, "press   {:<10} {:?}\r\n", action.as_str(), key.code)?;
                        }
                    }
                    (KeyEventKind::Release, Some(action)) => {
                        handler.release(action);
                        write!(out, "release {}\r\n", action.as_str())?;
                    }
                    (KeyEventKind::Repeat, _) => {}
                    (_, None) => write!(out, "unmapped {:?}\r\n", key.code)?,
                }
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= FRAME {
            last_frame = Instant::now();
            for action in handler.update(elapsed) {
                write!(out, "repeat  {}\r\n", action.as_str())?;
            }
        }
        out.flush()?;
    }
}
