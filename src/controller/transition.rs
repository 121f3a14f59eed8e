use crate::input::InputEvent;
use crate::models::Stage;

/// Which selection cursor a move applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Source,
    Target,
}

/// What handling one event in one stage amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Append(char),
    Erase,
    SubmitAmount,
    MoveUp(Cursor),
    MoveDown(Cursor),
    Advance(Stage),
    Convert,
    Quit,
    Ignore,
}

/// The whole state machine: every (stage, event) pair maps to exactly one effect.
pub fn transition(stage: Stage, event: InputEvent) -> Effect {
    use InputEvent as E;
    use Stage as S;

    match (stage, event) {
        (_, E::Quit) => Effect::Quit,

        (S::AmountEntry, E::CharacterInput(c)) => Effect::Append(c),
        (S::AmountEntry, E::Erase) => Effect::Erase,
        (S::AmountEntry, E::Confirm) => Effect::SubmitAmount,

        (S::SourceSelect, E::MoveUp) => Effect::MoveUp(Cursor::Source),
        (S::SourceSelect, E::MoveDown) => Effect::MoveDown(Cursor::Source),
        (S::SourceSelect, E::Confirm) => Effect::Advance(S::TargetSelect),

        (S::TargetSelect, E::MoveUp) => Effect::MoveUp(Cursor::Target),
        (S::TargetSelect, E::MoveDown) => Effect::MoveDown(Cursor::Target),
        (S::TargetSelect, E::Confirm) => Effect::Convert,

        _ => Effect::Ignore,
    }
}
