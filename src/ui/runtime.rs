use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::filters::FilterState;
use crate::progress::SearchProgress;
use crate::service::ScholarshipClient;
use crate::types::SearchOutcome;

use super::App;
use super::theme;

/// Builder for the interactive search view.
pub struct SearchUi {
    app: App,
}

impl SearchUi {
    /// Create a view backed by `client`, searching with `query_term`.
    #[must_use]
    pub fn new(client: ScholarshipClient, query_term: impl Into<String>) -> Self {
        Self {
            app: App::new(client, query_term),
        }
    }

    /// Pre-populate the filter form.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.app.set_filters(filters);
        self
    }

    /// Replace the stage message schedule shown while a search runs.
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.app.set_progress(progress);
        self
    }

    /// Select a named color theme; unknown names are an error.
    pub fn with_theme_name(mut self, name: &str) -> Result<Self> {
        let theme = theme::by_name(name)
            .ok_or_else(|| anyhow!("unknown theme '{name}' (available: {})", theme::names().join(", ")))?;
        self.app.set_theme(theme);
        Ok(self)
    }

    /// Run the view to completion on the current terminal.
    pub fn run(mut self) -> Result<SearchOutcome> {
        self.app.run()
    }
}

impl App {
    /// Pump the terminal event loop until the user exits with an outcome.
    pub fn run(&mut self) -> Result<SearchOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<SearchOutcome> = 'event_loop: loop {
            self.pump();
            self.throbber_state.calc_next();

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            terminal.draw(|frame| self.draw(frame, Instant::now()))?;

            let mut maybe_outcome = None;
            while let Some(event) = pending_events.pop_front() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key)? {
                            maybe_outcome = Some(outcome);
                            break;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if let Some(outcome) = maybe_outcome {
                break Ok(outcome);
            }

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}
