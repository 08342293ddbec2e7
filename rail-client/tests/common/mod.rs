//! Fake rail provider served over HTTP for end-to-end tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rail_client::config::RailConfig;
use serde_json::json;

/// Serve `router` on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Start the fake provider and return its address.
pub async fn spawn_provider() -> SocketAddr {
    spawn(provider_router()).await
}

/// Config pointing every endpoint at the fake provider's healthy routes.
pub fn config(addr: SocketAddr) -> RailConfig {
    config_with_stations(addr, "stations")
}

/// Config whose station directory is served from `stations_path`.
pub fn config_with_stations(addr: SocketAddr, stations_path: &str) -> RailConfig {
    config_with_paths(addr, stations_path, "departures", "routes")
}

/// Config whose departures board is served from `departures_path`.
pub fn config_with_departures(addr: SocketAddr, departures_path: &str) -> RailConfig {
    config_with_paths(addr, "stations", departures_path, "routes")
}

/// Config whose routes are served from `routes_path`.
pub fn config_with_routes(addr: SocketAddr, routes_path: &str) -> RailConfig {
    config_with_paths(addr, "stations", "departures", routes_path)
}

fn config_with_paths(
    addr: SocketAddr,
    stations_path: &str,
    departures_path: &str,
    routes_path: &str,
) -> RailConfig {
    RailConfig::parse(
        &format!("http://{addr}/{stations_path}"),
        &format!("http://{addr}/{departures_path}"),
        &format!("http://{addr}/{routes_path}"),
    )
    .unwrap()
    .with_timeout(5)
}

fn provider_router() -> Router {
    Router::new()
        .route("/stations", get(stations))
        .route("/departures", get(departures))
        .route("/routes", get(routes))
        .route("/broken", get(broken))
        .route("/garbage", get(garbage))
        .route("/missing-code", get(missing_code))
        .route("/empty-code", get(empty_code))
}

async fn stations() -> Json<serde_json::Value> {
    Json(json!({
        "Stations": [
            {"Name": "Tel Aviv Savidor", "Code": "3700"},
            {"Name": "Tel Aviv HaShalom", "Code": "4600"},
            {"Name": "Haifa Hof HaCarmel", "Code": "2300"}
        ]
    }))
}

async fn departures(Query(params): Query<HashMap<String, String>>) -> Response {
    let Some(code) = params.get("StationCode") else {
        return (StatusCode::BAD_REQUEST, "StationCode is required").into_response();
    };

    let board = match code.as_str() {
        "2300" => json!([
            {"Destination": "Nahariya", "Time": "10:05", "Track": 2, "TrainNumber": "117", "Type": "רכבת מהירה"},
            {"Destination": "Be'er Sheva Center", "Time": "10:12", "Track": "1", "TrainNumber": 318, "Type": "רכבת רגילה"}
        ]),
        _ => json!([]),
    };

    Json(json!({ "RealTimeDepartures": board })).into_response()
}

async fn routes(Query(params): Query<HashMap<String, String>>) -> Response {
    for required in ["OriginStationCode", "DestinationStationCode", "Date"] {
        if !params.contains_key(required) {
            return (StatusCode::BAD_REQUEST, format!("{required} is required")).into_response();
        }
    }

    // Echo the requested day back so callers can see which date was sent
    let date = &params["Date"];
    let mut routes = vec![
        json!({"Departure": format!("{date} 09:40:00"), "Arrival": format!("{date} 10:45:00"), "Price": 27.5, "Type": "רכבת מהירה"}),
        json!({"Departure": format!("{date} 10:20:00"), "Arrival": format!("{date} 11:32:00"), "Duration": "01:12"}),
        json!({"Departure": format!("{date} 11:50:00"), "Arrival": format!("{date} 12:55:00")}),
    ];
    if let Some(time) = params.get("Time") {
        routes.retain(|r| r["Departure"].as_str().is_some_and(|d| &d[11..16] >= time.as_str()));
    }

    Json(json!({ "Routes": routes })).into_response()
}

async fn broken() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response()
}

async fn garbage() -> Response {
    (StatusCode::OK, "<html>not json</html>").into_response()
}

async fn missing_code() -> Json<serde_json::Value> {
    Json(json!({ "Stations": [{"Name": "Lod"}] }))
}

async fn empty_code() -> Json<serde_json::Value> {
    Json(json!({ "Stations": [{"Name": "Lod", "Code": ""}] }))
}
