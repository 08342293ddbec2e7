//! HTTP clients against a fake provider.

mod common;

use chrono::{NaiveDate, NaiveTime};
use rail_client::departures::{DepartureProvider, DeparturesClient};
use rail_client::domain::StationCode;
use rail_client::provider::ProviderError;
use rail_client::routes::{RouteProvider, RouteQuery, RoutesClient};
use rail_client::stations::{
    ResolveError, StationClient, StationDirectory, StationProvider, StationResolver,
};

fn code(s: &str) -> StationCode {
    StationCode::parse(s).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
}

#[tokio::test]
async fn fetches_station_directory() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config(addr)).unwrap();

    let stations = client.fetch_stations().await.unwrap();
    assert_eq!(stations.len(), 3);
    assert_eq!(stations[2].name, "Haifa Hof HaCarmel");
    assert_eq!(stations[2].code.as_str(), "2300");
}

#[tokio::test]
async fn resolves_against_live_directory() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config(addr)).unwrap();
    let resolver = StationResolver::new(StationDirectory::new(client));

    assert_eq!(
        resolver.resolve("Haifa Hof HaCarml").await.unwrap(),
        "Haifa Hof HaCarmel"
    );
    assert_eq!(
        resolver.resolve("Tel Aviv Sadolm").await.unwrap(),
        "Tel Aviv Sadolm"
    );
    assert_eq!(
        resolver.resolve_code("Tel Aviv Savidr").await.unwrap().as_str(),
        "3700"
    );

    let err = resolver.resolve_code("Jerusalem").await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidStation(ref raw) if raw == "Jerusalem"));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config_with_stations(addr, "broken")).unwrap();

    let err = client.fetch_stations().await.unwrap_err();
    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_json_error() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config_with_stations(addr, "garbage")).unwrap();

    let err = client.fetch_stations().await.unwrap_err();
    match err {
        ProviderError::Json { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>not json</html>"));
        }
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_field_is_json_error() {
    let addr = common::spawn_provider().await;
    let client =
        StationClient::new(&common::config_with_stations(addr, "missing-code")).unwrap();

    let err = client.fetch_stations().await.unwrap_err();
    assert!(matches!(err, ProviderError::Json { .. }));
}

#[tokio::test]
async fn empty_code_is_malformed() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config_with_stations(addr, "empty-code")).unwrap();

    let err = client.fetch_stations().await.unwrap_err();
    assert!(matches!(err, ProviderError::Malformed { .. }));
}

#[tokio::test]
async fn resolver_surfaces_provider_errors() {
    let addr = common::spawn_provider().await;
    let client = StationClient::new(&common::config_with_stations(addr, "broken")).unwrap();
    let resolver = StationResolver::new(StationDirectory::new(client));

    let err = resolver.resolve_code("Haifa Hof HaCarmel").await.unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Provider(ProviderError::Api { status: 503, .. })
    ));
}

#[tokio::test]
async fn unreachable_provider_is_http_error() {
    // Bind then drop a listener so nothing is serving the port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StationClient::new(&common::config(addr)).unwrap();
    let err = client.fetch_stations().await.unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)));
}

#[tokio::test]
async fn fetches_departures_by_code() {
    let addr = common::spawn_provider().await;
    let client = DeparturesClient::new(&common::config(addr)).unwrap();

    let departures = client.fetch_departures(&code("2300")).await.unwrap();
    assert_eq!(departures.len(), 2);
    assert_eq!(departures[0].destination_name, "Nahariya");
    assert_eq!(departures[0].track, "2");
    assert_eq!(departures[1].train_number, "318");

    let none = client.fetch_departures(&code("3700")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn fetches_routes_for_whole_day() {
    let addr = common::spawn_provider().await;
    let client = RoutesClient::new(&common::config(addr)).unwrap();

    let query = RouteQuery::new(code("3700"), code("2300"), date());
    let routes = client.fetch_routes(&query).await.unwrap();

    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].departure_time, "09:40");
    assert_eq!(routes[0].duration, "01:05");
    assert_eq!(routes[0].price.as_deref(), Some("27.5"));
    assert_eq!(routes[0].train_type.as_deref(), Some("רכבת מהירה"));
    assert_eq!(routes[1].duration, "01:12");
    assert_eq!(routes[2].price, None);
    assert_eq!(routes[2].departs_at.date(), date());
}

#[tokio::test]
async fn sends_time_when_given() {
    let addr = common::spawn_provider().await;
    let client = RoutesClient::new(&common::config(addr)).unwrap();

    let query = RouteQuery::new(code("3700"), code("2300"), date())
        .at(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    let routes = client.fetch_routes(&query).await.unwrap();

    let times: Vec<_> = routes.iter().map(|r| r.departure_time.as_str()).collect();
    assert_eq!(times, vec!["10:20", "11:50"]);
}

#[tokio::test]
async fn departures_outage_is_api_error() {
    let addr = common::spawn_provider().await;
    let client = DeparturesClient::new(&common::config_with_departures(addr, "broken")).unwrap();

    let err = client.fetch_departures(&code("2300")).await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 503, ref message } if message == "maintenance"));
}

#[tokio::test]
async fn departures_non_json_body_is_json_error() {
    let addr = common::spawn_provider().await;
    let client = DeparturesClient::new(&common::config_with_departures(addr, "garbage")).unwrap();

    let err = client.fetch_departures(&code("2300")).await.unwrap_err();
    assert!(matches!(err, ProviderError::Json { .. }));
}

#[tokio::test]
async fn routes_outage_is_api_error() {
    let addr = common::spawn_provider().await;
    let client = RoutesClient::new(&common::config_with_routes(addr, "broken")).unwrap();

    let query = RouteQuery::new(code("3700"), code("2300"), date());
    let err = client.fetch_routes(&query).await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 503, .. }));
}

#[tokio::test]
async fn routes_non_json_body_is_json_error() {
    let addr = common::spawn_provider().await;
    let client = RoutesClient::new(&common::config_with_routes(addr, "garbage")).unwrap();

    let query = RouteQuery::new(code("3700"), code("2300"), date());
    let err = client.fetch_routes(&query).await.unwrap_err();
    match err {
        ProviderError::Json { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>not json</html>"));
        }
        other => panic!("expected JSON error, got {other:?}"),
    }
}
