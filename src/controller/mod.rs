mod transition;
mod view;

pub use transition::{transition, Cursor, Effect};
pub use view::{format_result, render};

use log::{debug, error, info, warn};

use crate::exchange::ConversionService;
use crate::input::InputEvent;
use crate::models::{parse_amount, CurrencyList, Session, Stage};

/// Whether the event loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Apply one input event to `session`.
///
/// The only suspension point is the conversion request issued when the target
/// selection is confirmed; the caller must not feed further events until it
/// returns.
pub async fn update(
    session: &mut Session,
    currencies: &CurrencyList,
    service: &dyn ConversionService,
    event: InputEvent,
) -> Control {
    let before = session.stage;
    let effect = transition(session.stage, event);

    match effect {
        Effect::Quit => return Control::Quit,
        Effect::Ignore => {}
        Effect::Append(c) => session.amount_text.push(c),
        Effect::Erase => {
            session.amount_text.pop();
        }
        Effect::SubmitAmount => match parse_amount(&session.amount_text) {
            Ok(amount) => {
                session.amount = Some(amount);
                session.last_error = None;
                session.stage = Stage::SourceSelect;
            }
            Err(err) => {
                debug!("rejected amount {:?}: {}", session.amount_text, err);
                session.last_error = Some(err.into());
            }
        },
        Effect::MoveUp(cursor) => {
            let index = cursor_mut(session, cursor);
            *index = index.saturating_sub(1);
        }
        Effect::MoveDown(cursor) => {
            let index = cursor_mut(session, cursor);
            *index = (*index + 1).min(currencies.last_index());
        }
        Effect::Advance(next) => {
            session.stage = next;
            session.last_error = None;
        }
        Effect::Convert => convert(session, currencies, service).await,
    }

    if session.stage != before {
        debug!("stage {} -> {}", before.name(), session.stage.name());
    }
    Control::Continue
}

fn cursor_mut(session: &mut Session, cursor: Cursor) -> &mut usize {
    match cursor {
        Cursor::Source => &mut session.source_index,
        Cursor::Target => &mut session.target_index,
    }
}

async fn convert(session: &mut Session, currencies: &CurrencyList, service: &dyn ConversionService) {
    let Some(amount) = session.amount else {
        error!("conversion requested before an amount was accepted");
        return;
    };
    let (Some(from), Some(to)) = (
        currencies.get(session.source_index),
        currencies.get(session.target_index),
    ) else {
        error!(
            "selection out of range: source {}, target {}, {} currencies",
            session.source_index,
            session.target_index,
            currencies.len()
        );
        return;
    };

    info!("converting {:.2} {} -> {}", amount, from, to);
    match service.convert(amount, from, to).await {
        Ok(value) => {
            info!("{:.2} {} = {:.2} {}", amount, from, value, to);
            session.result = Some(value);
            session.last_error = None;
        }
        Err(err) => {
            warn!("conversion failed ({}): {}", err.kind(), err);
            session.last_error = Some(err.into());
        }
    }
    session.stage = Stage::ResultShown;
}

/// Owns the session, the currency list and the service for one program run.
pub struct InteractionController {
    session: Session,
    currencies: CurrencyList,
    service: Box<dyn ConversionService>,
}

impl InteractionController {
    pub fn new(currencies: CurrencyList, service: Box<dyn ConversionService>) -> Self {
        Self {
            session: Session::new(),
            currencies,
            service,
        }
    }

    pub async fn handle(&mut self, event: InputEvent) -> Control {
        update(&mut self.session, &self.currencies, self.service.as_ref(), event).await
    }

    pub fn view(&self) -> String {
        render(&self.session, &self.currencies)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn currencies(&self) -> &CurrencyList {
        &self.currencies
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}
