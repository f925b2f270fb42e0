use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use super::state::SearchOutcome;
use crate::form::FormDefaults;
use crate::locations::LocationCatalog;

/// Construct an [`App`] for the provided catalogue and run it to completion.
pub fn run(catalog: LocationCatalog, defaults: FormDefaults) -> Result<SearchOutcome> {
	let mut app = App::new(catalog, defaults);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(stdout(), EnableMouseCapture) {
			tracing::warn!(error = %err, "mouse capture unavailable");
		}
		if let Err(err) = terminal.clear() {
			release_terminal();
			return Err(err.into());
		}

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
			self.toasts.expire(Instant::now());

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

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			match self.process_events(&mut pending_events) {
				Ok(Some(outcome)) => break Ok(outcome),
				Ok(None) => {}
				Err(err) => break Err(err),
			}

			thread::sleep(Duration::from_millis(16));
		};

		release_terminal();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		tracing::info!(accepted = result.as_ref().is_ok_and(|o| o.accepted), "session ended");
		result
	}

	/// Apply queued input until one of it ends the session. Events after the
	/// one that ended it stay queued.
	fn process_events(&mut self, pending: &mut VecDeque<Event>) -> Result<Option<SearchOutcome>> {
		while let Some(event) = pending.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key, Instant::now())? {
						return Ok(Some(outcome));
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
				_ => {}
			}
		}
		Ok(None)
	}
}

fn release_terminal() {
	if let Err(err) = execute!(stdout(), DisableMouseCapture) {
		tracing::warn!(error = %err, "failed to release mouse capture");
	}
	ratatui::restore();
}
