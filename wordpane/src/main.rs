use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use app::App;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

mod app;
mod audio;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let mut terminal = ratatui::init();
    let result = run(&mut terminal).await;
    ratatui::restore();
    result
}

// the terminal itself belongs to the ui, diagnostics go to a file
fn init_logging() -> anyhow::Result<()> {
    let file = File::create("wordpane.log").context("could not create the log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut app = App::new(outcome_tx);
    let mut events = EventStream::new();
    while app.running {
        terminal.draw(|frame| ui::draw(frame, &app))?;
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.on_key(key),
                Some(Ok(_)) => {}
                Some(Err(error)) => return Err(error.into()),
                None => break,
            },
            Some(outcome) = outcome_rx.recv() => app.handle_outcome(outcome),
        }
    }
    Ok(())
}
