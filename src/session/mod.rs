use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;

use crate::controller::{Control, InteractionController};
use crate::input::InputHandler;
use crate::models::Session;

/// Drives one controller from one input handler until the user quits.
pub struct ConverterSession {
    id: String,
    controller: InteractionController,
    events_handled: u32,
}

impl ConverterSession {
    pub fn new(controller: InteractionController) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            controller,
            events_handled: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn events_handled(&self) -> u32 {
        self.events_handled
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub fn view(&self) -> String {
        self.controller.view()
    }

    pub fn into_session(self) -> Session {
        self.controller.into_session()
    }

    /// Render, read one event, apply it; repeat until Quit.
    pub async fn run<H: InputHandler + ?Sized>(&mut self, input: &mut H) -> Result<()> {
        let time_start = Utc::now();
        info!("session {} started", self.id);

        loop {
            input
                .display(&self.controller.view())
                .context("Failed to render view")?;

            let event = input.next_event()?;
            self.events_handled += 1;

            if self.controller.handle(event).await == Control::Quit {
                break;
            }
        }

        self.log_session_stats(time_start, Utc::now());
        Ok(())
    }

    fn log_session_stats(&self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) {
        let duration = end_time.signed_duration_since(start_time);
        let session = self.controller.session();
        let outcome = match (&session.last_error, session.result) {
            (_, Some(_)) => "converted".to_string(),
            (Some(err), None) if session.is_finished() => format!("failed ({})", err.kind()),
            _ => "abandoned".to_string(),
        };

        info!(
            "Session {} completed.\nDuration: {}ms\nEvents: {}\nLast stage: {}\nOutcome: {}",
            self.id,
            duration.num_milliseconds(),
            self.events_handled,
            session.stage.name(),
            outcome
        );
    }
}
