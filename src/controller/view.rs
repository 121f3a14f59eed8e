use crate::models::{CurrencyList, Session, Stage};

const QUIT_HINT: &str = "Apasă q pentru a ieși.";

/// The line shown for a completed conversion.
pub fn format_result(amount: f64, from: &str, result: f64, to: &str) -> String {
    format!("Rezultat: {:.2} {} = {:.2} {}", amount, from, result, to)
}

/// Text for the current stage. Depends on nothing but its arguments.
pub fn render(session: &Session, currencies: &CurrencyList) -> String {
    match session.stage {
        Stage::AmountEntry => amount_entry(session),
        Stage::SourceSelect => selection(
            "Moneda ta:",
            currencies,
            session.source_index,
            "Apasă Enter pentru a confirma.",
        ),
        Stage::TargetSelect => selection(
            "Moneda în care dorești să schimbi:",
            currencies,
            session.target_index,
            "Apasă Enter pentru rezultat.",
        ),
        Stage::ResultShown => result(session, currencies),
    }
}

fn amount_entry(session: &Session) -> String {
    let mut view = format!("Introdu suma de bani:\n> {}", session.amount_text);
    if let Some(err) = &session.last_error {
        view.push_str(&format!("\n\nEroare: {}", err));
    }
    view
}

fn selection(title: &str, currencies: &CurrencyList, cursor: usize, hint: &str) -> String {
    let mut view = format!("\n{}\n", title);
    for (i, code) in currencies.iter().enumerate() {
        let marker = if i == cursor { ">" } else { " " };
        view.push_str(&format!("{} {}\n", marker, code));
    }
    view.push('\n');
    view.push_str(hint);
    view
}

fn result(session: &Session, currencies: &CurrencyList) -> String {
    let body = match (&session.last_error, session.amount, session.result) {
        (Some(err), _, _) => format!("Eroare: {}", err),
        (None, Some(amount), Some(value)) => format_result(
            amount,
            currencies.get(session.source_index).unwrap_or("?"),
            value,
            currencies.get(session.target_index).unwrap_or("?"),
        ),
        (None, _, _) => "Eroare: rezultatul conversiei lipsește".to_string(),
    };
    format!("\n{}\n\n{}", body, QUIT_HINT)
}
