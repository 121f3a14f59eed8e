use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use fxconv::controller::render;
use fxconv::exchange::{ConversionError, ConversionService};
use fxconv::models::Failure;
use fxconv::{
    ConverterSession, CurrencyList, InputEvent, InputHandler, InteractionController, Stage,
};

/// Answers only for the pair the scripted flow is expected to request.
struct PairStub {
    calls: Arc<Mutex<Vec<(f64, String, String)>>>,
}

#[async_trait]
impl ConversionService for PairStub {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        self.calls
            .lock()
            .unwrap()
            .push((amount, from.to_string(), to.to_string()));
        match (amount, from, to) {
            (a, "RON", "GBP") if a == 100.0 => Ok(515.0),
            _ => Err(ConversionError::Service("unsupported-code".to_string())),
        }
    }
}

struct Unreachable;

#[async_trait]
impl ConversionService for Unreachable {
    async fn convert(&self, _amount: f64, _from: &str, _to: &str) -> Result<f64, ConversionError> {
        Err(ConversionError::Transport("connection refused".to_string()))
    }
}

struct ScriptedInput {
    events: VecDeque<InputEvent>,
    last_frame: String,
}

impl ScriptedInput {
    fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        let mut events: VecDeque<_> = events.into_iter().collect();
        events.push_back(InputEvent::Quit);
        Self {
            events,
            last_frame: String::new(),
        }
    }
}

impl InputHandler for ScriptedInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        self.events.pop_front().ok_or_else(|| anyhow!("no more scripted input"))
    }

    fn display(&mut self, view: &str) -> Result<()> {
        self.last_frame = view.to_string();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.last_frame.clear();
        Ok(())
    }
}

fn scripted_flow() -> Vec<InputEvent> {
    vec![
        InputEvent::CharacterInput('1'),
        InputEvent::CharacterInput('0'),
        InputEvent::CharacterInput('0'),
        InputEvent::Confirm,
        InputEvent::MoveDown,
        InputEvent::Confirm,
        InputEvent::MoveDown,
        InputEvent::MoveDown,
        InputEvent::Confirm,
    ]
}

#[tokio::test]
async fn test_end_to_end_conversion() -> Result<()> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let service = PairStub {
        calls: Arc::clone(&calls),
    };
    let mut session = ConverterSession::new(InteractionController::new(
        CurrencyList::default(),
        Box::new(service),
    ));
    let mut input = ScriptedInput::new(scripted_flow());

    session.run(&mut input).await?;

    let state = session.session();
    assert_eq!(state.stage, Stage::ResultShown);
    assert_eq!(state.amount, Some(100.0));
    assert_eq!(state.source_index, 1);
    assert_eq!(state.target_index, 2);
    assert_eq!(state.result, Some(515.0));
    assert!(state.last_error.is_none());
    assert!(state.succeeded());

    assert!(input.last_frame.contains("Rezultat: 100.00 RON = 515.00 GBP"));
    assert_eq!(input.last_frame, session.view());
    assert_eq!(
        *calls.lock().unwrap(),
        vec![(100.0, "RON".to_string(), "GBP".to_string())]
    );
    assert_eq!(session.events_handled(), 10);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_shown_not_fatal() -> Result<()> {
    let mut session = ConverterSession::new(InteractionController::new(
        CurrencyList::default(),
        Box::new(Unreachable),
    ));
    let mut input = ScriptedInput::new(scripted_flow());

    session.run(&mut input).await?;

    let state = session.session();
    assert_eq!(state.stage, Stage::ResultShown);
    assert_eq!(state.result, None);
    assert!(matches!(
        state.last_error,
        Some(Failure::Conversion(ConversionError::Transport(_)))
    ));
    assert!(input.last_frame.contains("Eroare:"));
    assert!(!input.last_frame.contains("Rezultat"));
    assert!(!input.last_frame.contains("515"));
    Ok(())
}

#[tokio::test]
async fn test_quit_midway_leaves_partial_state() -> Result<()> {
    let mut session = ConverterSession::new(InteractionController::new(
        CurrencyList::default(),
        Box::new(Unreachable),
    ));
    let mut input = ScriptedInput::new([
        InputEvent::CharacterInput('4'),
        InputEvent::CharacterInput('2'),
        InputEvent::Confirm,
        InputEvent::MoveDown,
    ]);

    session.run(&mut input).await?;

    let state = session.into_session();
    assert_eq!(state.stage, Stage::SourceSelect);
    assert_eq!(state.amount, Some(42.0));
    assert_eq!(state.source_index, 1);
    assert!(!state.is_finished());
    Ok(())
}

#[tokio::test]
async fn test_view_is_pure_at_every_step() -> Result<()> {
    let currencies = CurrencyList::default();
    let mut controller = InteractionController::new(currencies.clone(), Box::new(Unreachable));

    for event in scripted_flow() {
        let first = controller.view();
        let second = controller.view();
        assert_eq!(first, second);
        assert_eq!(first, render(controller.session(), &currencies));
        controller.handle(event).await;
    }
    assert_eq!(controller.view(), controller.view());
    Ok(())
}
