use crate::common;
use httpmock::Method::GET;
use trailing_pe::SummaryBuilder;

#[tokio::test]
async fn api_fetches_cookie_and_crumb_first() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let api = common::mock_summary_detail(&server, "VOO", "crumb-value");
    let client = common::client_for(&server);

    let d = SummaryBuilder::new(&client, "VOO").summary_detail().await.unwrap();
    // Credentials are reused for the second call.
    SummaryBuilder::new(&client, "VOO").summary_detail().await.unwrap();

    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);
    api.assert_calls(2);
    assert_eq!(d.trailing_pe, Some(27.43));
}

#[tokio::test]
async fn api_retries_on_invalid_crumb_then_succeeds() {
    let server = common::setup_server();
    let client = common::preauth_client_for(&server, "stale-crumb");

    let sym = "VOO";
    let invalid = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "summaryDetail")
            .query_param("crumb", "stale-crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#);
    });

    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let ok = common::mock_summary_detail(&server, sym, "crumb-value");

    let d = SummaryBuilder::new(&client, sym).summary_detail().await.unwrap();

    invalid.assert();
    cookie_mock.assert();
    crumb_mock.assert();
    ok.assert();
    assert_eq!(d.trailing_pe, Some(27.43));
}

#[tokio::test]
async fn invalid_crumb_twice_gives_up() {
    let server = common::setup_server();
    let client = common::preauth_client_for(&server, "stale-crumb");

    let always_invalid = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/VOO");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#);
    });
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);

    let err = SummaryBuilder::new(&client, "VOO").fetch().await.unwrap_err();

    always_invalid.assert_calls(2);
    cookie_mock.assert();
    crumb_mock.assert();
    assert!(matches!(err, trailing_pe::PeError::Api(_)), "got {err:?}");
}

#[tokio::test]
async fn unauthorized_stale_crumb_refreshes_then_succeeds() {
    let server = common::setup_server();
    let client = common::preauth_client_for(&server, "stale-crumb");

    let sym = "VOO";
    let rejected = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "summaryDetail")
            .query_param("crumb", "stale-crumb");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"code":"Unauthorized","description":"Invalid Crumb"}}}"#);
    });
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let ok = common::mock_summary_detail(&server, sym, "crumb-value");

    let d = SummaryBuilder::new(&client, sym).summary_detail().await.unwrap();

    rejected.assert_calls(1);
    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);
    ok.assert_calls(1);
    assert_eq!(d.trailing_pe, Some(27.43));
}

#[tokio::test]
async fn persistent_unauthorized_clears_crumb_for_next_call() {
    let server = common::setup_server();
    let client = common::preauth_client_for(&server, "stale-crumb");

    let rejected = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/VOO");
        then.status(401).body("unauthorized");
    });
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);

    let first = SummaryBuilder::new(&client, "VOO").fetch().await.unwrap_err();
    assert!(
        matches!(first, trailing_pe::PeError::Status { status: 401, .. }),
        "got {first:?}"
    );
    rejected.assert_calls(2);
    cookie_mock.assert_calls(1);
    crumb_mock.assert_calls(1);

    // The rejected crumb is not reused: both attempts of the next call
    // authenticate again.
    let second = SummaryBuilder::new(&client, "VOO").fetch().await.unwrap_err();
    assert!(
        matches!(second, trailing_pe::PeError::Status { status: 401, .. }),
        "got {second:?}"
    );
    rejected.assert_calls(4);
    cookie_mock.assert_calls(3);
    crumb_mock.assert_calls(3);
}
