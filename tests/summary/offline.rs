use crate::common;
use httpmock::Method::GET;
use trailing_pe::{PeError, SummaryBuilder};

#[tokio::test]
async fn offline_summary_detail_uses_recorded_fixture() {
    let sym = "VOO";
    let server = common::setup_server();
    let mock = common::mock_summary_detail(&server, sym, "crumb");
    let client = common::preauth_client_for(&server, "crumb");

    let d = SummaryBuilder::new(&client, sym).summary_detail().await.unwrap();

    mock.assert();
    assert_eq!(d.trailing_pe, Some(27.43));
    assert_eq!(d.forward_pe, None);
    assert_eq!(d.dividend_rate, Some(6.38));
    assert_eq!(d.dividend_yield, Some(0.0127));
    assert_eq!(d.ex_dividend_date, Some(1_711_584_000));
    assert_eq!(d.volume, Some(4_123_456));
    assert_eq!(d.average_volume, Some(5_302_210));
    assert_eq!(d.market_cap, None);
    assert_eq!(d.fifty_two_week_high, Some(509.94));
    assert_eq!(d.currency.as_deref(), Some("USD"));
}

#[tokio::test]
async fn infinite_ratio_decodes() {
    let sym = "BRK-B";
    let server = common::setup_server();
    let mock = common::mock_summary_detail(&server, sym, "crumb");
    let client = common::preauth_client_for(&server, "crumb");

    let d = SummaryBuilder::new(&client, sym).summary_detail().await.unwrap();

    mock.assert();
    assert_eq!(d.trailing_pe, Some(f64::INFINITY));
    assert_eq!(d.forward_pe, Some(22.81));
    assert_eq!(d.dividend_rate, None);
    assert_eq!(d.market_cap, Some(887_654_321_000));
}

#[tokio::test]
async fn requested_modules_are_joined() {
    let sym = "VOO";
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "summaryDetail,price")
            .query_param("crumb", "crumb");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("summary_api_summaryDetail", sym, "json"));
    });
    let client = common::preauth_client_for(&server, "crumb");

    let s = SummaryBuilder::new(&client, sym)
        .modules(["summaryDetail", "price"])
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(s.summary_detail.is_some());
}

#[tokio::test]
async fn missing_module_is_missing_data() {
    let sym = "VOO";
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "summaryDetail");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":[{}],"error":null}}"#);
    });
    let client = common::preauth_client_for(&server, "crumb");

    let s = SummaryBuilder::new(&client, sym).fetch().await.unwrap();
    assert!(s.summary_detail.is_none());

    let err = SummaryBuilder::new(&client, sym)
        .summary_detail()
        .await
        .unwrap_err();
    assert!(matches!(err, PeError::MissingData(_)), "got {err:?}");
    mock.assert_calls(2);
}

#[tokio::test]
async fn empty_result_is_missing_data() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/VOO");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":[],"error":null}}"#);
    });
    let client = common::preauth_client_for(&server, "crumb");

    let err = SummaryBuilder::new(&client, "VOO").fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, PeError::MissingData(_)), "got {err:?}");
}

#[tokio::test]
async fn envelope_error_is_api_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/NOPE");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"code":"Not Found","description":"Quote not found for symbol: NOPE"}}}"#);
    });
    let client = common::preauth_client_for(&server, "crumb");

    let err = SummaryBuilder::new(&client, "NOPE").fetch().await.unwrap_err();

    mock.assert();
    match err {
        PeError::Api(desc) => assert!(desc.contains("NOPE")),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_data_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/VOO");
        then.status(200).body("<html>not json</html>");
    });
    let client = common::preauth_client_for(&server, "crumb");

    let err = SummaryBuilder::new(&client, "VOO").fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, PeError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn no_modules_is_rejected_before_any_request() {
    let server = common::setup_server();
    let client = common::preauth_client_for(&server, "crumb");

    let err = SummaryBuilder::new(&client, "VOO")
        .modules(Vec::<String>::new())
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, PeError::Data(_)), "got {err:?}");
}
