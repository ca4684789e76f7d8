use std::time::Duration;

use jobsearch_engine::{Coordinates, GeoSettings, LocateError, Locator, NominatimLocator};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn locator(server: &MockServer, coordinates: Option<Coordinates>) -> NominatimLocator {
    NominatimLocator::new(GeoSettings {
        endpoint: server.uri(),
        coordinates,
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

const ANKARA: Coordinates = Coordinates {
    latitude: 39.93,
    longitude: 32.85,
};

#[tokio::test]
async fn reverse_lookup_reads_the_town_when_city_is_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "39.93"))
        .and(query_param("lon", "32.85"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "Çankaya, Ankara",
            "address": {"town": "Çankaya", "state": "Ankara"}
        })))
        .mount(&server)
        .await;

    let city = locator(&server, Some(ANKARA)).locate_city().await.unwrap();
    assert_eq!(city, "Çankaya");
}

#[tokio::test]
async fn missing_position_is_unavailable_without_a_request() {
    let server = MockServer::start().await;
    let err = locator(&server, None).locate_city().await.unwrap_err();
    assert_eq!(err, LocateError::Unavailable);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_address_has_no_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Unable to geocode"})))
        .mount(&server)
        .await;

    let err = locator(&server, Some(ANKARA)).locate_city().await.unwrap_err();
    assert_eq!(err, LocateError::NoPlace);
}

#[tokio::test]
async fn server_error_is_a_lookup_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = locator(&server, Some(ANKARA)).locate_city().await.unwrap_err();
    assert!(matches!(err, LocateError::Lookup(_)));
}
