use hotel_data_rs::{HotelDataClient, HotelError, HotelWorkflow, WorkflowState};
use mockito::Matcher;
use pretty_assertions::assert_eq;

fn scrape_body(name: &str, review: &str) -> String {
    format!(
        r#"{{"name":"{}","address":"1 Main St","description":"Nice","review":"{}"}}"#,
        name, review
    )
}

#[tokio::test]
async fn starts_idle_with_no_hotel() {
    let workflow = HotelWorkflow::new(HotelDataClient::new("http://localhost:8000"));
    assert_eq!(workflow.state(), WorkflowState::Idle);
    assert!(workflow.hotel().is_none());
}

#[tokio::test]
async fn save_without_fetch_fails_and_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/hotels")
        .expect(0)
        .create_async()
        .await;

    let mut workflow = HotelWorkflow::new(HotelDataClient::new(server.url()));
    let err = workflow.save().await.unwrap_err();

    assert!(matches!(err, HotelError::ValidationError(msg) if msg == "no data to save"));
    // The precondition violation attempted no transition.
    assert_eq!(workflow.state(), WorkflowState::Idle);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_then_save_walks_the_happy_path() {
    let mut server = mockito::Server::new_async().await;
    let _scrape = server
        .mock("GET", "/api/hotels/scrape")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(scrape_body("Grand Hotel", "4.2"))
        .create_async()
        .await;
    let _save = server
        .mock("POST", "/api/hotels")
        .with_status(200)
        .with_body(r#"{"message":"Hotel data saved successfully"}"#)
        .create_async()
        .await;

    let mut workflow = HotelWorkflow::new(HotelDataClient::new(server.url()));

    let hotel = workflow.fetch("Grand Hotel").await.unwrap();
    assert_eq!(hotel.name, "Grand Hotel");
    assert_eq!(workflow.state(), WorkflowState::FetchedOk);

    let ack = workflow.save().await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Hotel data saved successfully"));
    assert_eq!(workflow.state(), WorkflowState::SavedOk);
}

#[tokio::test]
async fn failed_fetch_clears_previously_held_hotel() {
    let mut server = mockito::Server::new_async().await;
    let _ok = server
        .mock("GET", "/api/hotels/scrape")
        .match_query(Matcher::UrlEncoded(
            "hotel_name".into(),
            "Grand Hotel".into(),
        ))
        .with_status(200)
        .with_body(scrape_body("Grand Hotel", "4.2"))
        .create_async()
        .await;
    let _failing = server
        .mock("GET", "/api/hotels/scrape")
        .match_query(Matcher::UrlEncoded(
            "hotel_name".into(),
            "Other Hotel".into(),
        ))
        .with_status(500)
        .with_body("scrape failed")
        .create_async()
        .await;

    let mut workflow = HotelWorkflow::new(HotelDataClient::new(server.url()));

    workflow.fetch("Grand Hotel").await.unwrap();
    assert!(workflow.hotel().is_some());

    let err = workflow.fetch("Other Hotel").await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // Stale data is never held alongside an error.
    assert!(workflow.hotel().is_none());
    assert_eq!(workflow.state(), WorkflowState::FetchFailed);
}

#[tokio::test]
async fn failed_save_keeps_the_hotel_for_a_retry() {
    let mut server = mockito::Server::new_async().await;
    let _scrape = server
        .mock("GET", "/api/hotels/scrape")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(scrape_body("Grand Hotel", "4.2"))
        .create_async()
        .await;
    let _save = server
        .mock("POST", "/api/hotels")
        .with_status(503)
        .with_body("try later")
        .expect(2)
        .create_async()
        .await;

    let mut workflow = HotelWorkflow::new(HotelDataClient::new(server.url()));
    workflow.fetch("Grand Hotel").await.unwrap();

    let err = workflow.save().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(workflow.state(), WorkflowState::SaveFailed);

    // The failed state is terminal for that attempt only; re-invocation
    // restarts the transition with the same held hotel.
    assert!(workflow.hotel().is_some());
    let err = workflow.save().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn reset_returns_to_idle() {
    let mut server = mockito::Server::new_async().await;
    let _scrape = server
        .mock("GET", "/api/hotels/scrape")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(scrape_body("Grand Hotel", "4.2"))
        .create_async()
        .await;

    let mut workflow = HotelWorkflow::new(HotelDataClient::new(server.url()));
    workflow.fetch("Grand Hotel").await.unwrap();

    workflow.reset();
    assert_eq!(workflow.state(), WorkflowState::Idle);
    assert!(workflow.hotel().is_none());
}
