use anyhow::{anyhow, Result};
use log::info;

use super::config::Config;
use crate::controller::{format_result, InteractionController};
use crate::exchange::{create_service, ConversionService};
use crate::input::{create_default_input_handler, InputHandler};
use crate::models::{parse_amount, CurrencyList, Session};
use crate::session::ConverterSession;

/// Run the guided flow on the terminal and hand back the final state.
pub async fn interactive(config: &Config) -> Result<Session> {
    let service = create_service(config.exchange_options()?)?;
    let controller = InteractionController::new(config.currencies.clone(), service);
    let mut session = ConverterSession::new(controller);

    let outcome = {
        let mut prompt = create_default_input_handler()?;
        prompt.clear()?;
        session.run(&mut prompt).await
        // prompt dropped here, restoring the terminal before any error is printed
    };
    outcome?;

    Ok(session.into_session())
}

fn lookup<'a>(currencies: &'a CurrencyList, code: &str) -> Result<&'a str> {
    currencies
        .position(code)
        .and_then(|i| currencies.get(i))
        .ok_or_else(|| {
            anyhow!(
                "Unsupported currency '{}'; choose one of: {}",
                code,
                currencies.iter().collect::<Vec<_>>().join(", ")
            )
        })
}

/// Single conversion without the interactive flow. Amount text follows the
/// same rules as the amount stage.
pub async fn convert_once(
    service: &dyn ConversionService,
    currencies: &CurrencyList,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<String> {
    let amount = parse_amount(amount)?;
    let from = lookup(currencies, from)?;
    let to = lookup(currencies, to)?;

    info!("one-shot conversion {:.2} {} -> {}", amount, from, to);
    let result = service.convert(amount, from, to).await?;
    Ok(format_result(amount, from, result, to))
}

pub fn list_currencies(currencies: &CurrencyList) -> String {
    currencies.iter().collect::<Vec<_>>().join("\n")
}
