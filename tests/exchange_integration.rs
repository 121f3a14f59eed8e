use std::time::Duration;

use anyhow::Result;
use fxconv::exchange::{create_service, ConversionError, ExchangeRateOptions};
use fxconv::models::Failure;
use fxconv::{CurrencyList, InputEvent, InteractionController, Stage};

fn options(base_url: String) -> ExchangeRateOptions {
    ExchangeRateOptions {
        api_key: "secret-key".to_string(),
        base_url,
        timeout: Duration::from_secs(5),
    }
}

async fn run_flow(controller: &mut InteractionController, amount: &str, down_src: usize, down_dst: usize) {
    for c in amount.chars() {
        controller.handle(InputEvent::CharacterInput(c)).await;
    }
    controller.handle(InputEvent::Confirm).await;
    for _ in 0..down_src {
        controller.handle(InputEvent::MoveDown).await;
    }
    controller.handle(InputEvent::Confirm).await;
    for _ in 0..down_dst {
        controller.handle(InputEvent::MoveDown).await;
    }
    controller.handle(InputEvent::Confirm).await;
}

#[tokio::test]
async fn test_flow_against_http_service() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/secret-key/pair/EUR/RUB/12.50")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"result":"success","base_code":"EUR","target_code":"RUB","conversion_rate":100.0,"conversion_result":1250.0}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let service = create_service(options(server.url()))?;
    let mut controller = InteractionController::new(CurrencyList::default(), service);
    run_flow(&mut controller, "12.5", 0, 4).await;

    mock.assert_async().await;
    assert_eq!(controller.session().stage, Stage::ResultShown);
    assert_eq!(controller.session().result, Some(1250.0));
    assert!(controller
        .view()
        .contains("Rezultat: 12.50 EUR = 1250.00 RUB"));
    Ok(())
}

#[tokio::test]
async fn test_service_reported_error() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/secret-key/pair/RON/AED/1.00")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":"error","error-type":"invalid-key"}"#)
        .create_async()
        .await;

    let service = create_service(options(server.url()))?;
    let mut controller = InteractionController::new(CurrencyList::default(), service);
    run_flow(&mut controller, "1", 1, 3).await;

    let session = controller.session();
    assert_eq!(session.stage, Stage::ResultShown);
    assert_eq!(
        session.last_error,
        Some(Failure::Conversion(ConversionError::Service(
            "invalid-key".to_string()
        )))
    );
    assert!(controller.view().contains("invalid-key"));
    Ok(())
}

#[tokio::test]
async fn test_garbled_response_is_decode_failure() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/secret-key/pair/GBP/GBP/3.00")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let service = create_service(options(server.url()))?;
    let mut controller = InteractionController::new(CurrencyList::default(), service);
    run_flow(&mut controller, "3", 2, 2).await;

    let session = controller.session();
    assert_eq!(session.stage, Stage::ResultShown);
    assert_eq!(session.result, None);
    assert_eq!(session.last_error.as_ref().map(Failure::kind), Some("decode"));
    Ok(())
}
