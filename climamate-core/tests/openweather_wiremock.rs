//! Integration tests for the OpenWeather provider and page flow using wiremock.

use std::sync::Arc;

use climamate_core::{
    ApiKey, FetchError, FetchOutcome, Notification, Page, ViewKind, WeatherProvider,
    provider::openweather::OpenWeatherProvider,
    render::{Scene, render_home},
    theme::Appearance,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn lagos_current() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 3.75, "lat": 6.58 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ],
        "main": { "temp": 29.0, "feels_like": 33.1, "pressure": 1011, "humidity": 70 },
        "wind": { "speed": 3.1, "deg": 230 },
        "dt": 1735732800,
        "sys": { "country": "NG", "sunrise": 1735710000, "sunset": 1735752000 },
        "name": "Lagos",
        "cod": 200
    })
}

fn lagos_forecast() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 2,
        "list": [
            {
                "dt": 1735732800,
                "main": { "temp": 30.4, "humidity": 65 },
                "weather": [{ "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
                "wind": { "speed": 3.5 }
            },
            {
                "dt": 1735819200,
                "main": { "temp": 27.8, "humidity": 75 },
                "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
                "wind": { "speed": 2.9 }
            }
        ],
        "city": { "name": "Lagos", "country": "NG" }
    })
}

fn provider_for(server: &MockServer) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::new(Some(ApiKey::new("TEST_KEY")), server.uri()))
}

async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "cod": status.to_string(),
            "message": "nope"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn current_request_uses_metric_units_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Lagos"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_current()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let query = climamate_core::LocationQuery::parse("Lagos").expect("valid query");
    let snapshot = provider.current(&query).await.expect("current weather");

    assert_eq!(snapshot.location_name, "Lagos");
    assert_eq!(snapshot.country, "NG");
    assert!((snapshot.temperature_c - 29.0).abs() < f64::EPSILON);
    assert_eq!(snapshot.humidity_pct, 70);
}

#[tokio::test]
async fn home_submit_renders_card_and_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_current()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_forecast()))
        .mount(&server)
        .await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    assert_eq!(page.submit("Lagos").await, FetchOutcome::Loaded);
    assert!(!page.is_loading());
    assert_eq!(
        page.take_notifications(),
        vec![Notification::success("Weather fetched for Lagos")]
    );

    let text = render_home(&Scene {
        page: &page,
        trivia: None,
        appearance: Appearance::Light,
        hour: 12,
    });
    assert!(text.contains("Lagos"));
    assert!(text.contains("29°C"));
    assert!(text.contains("Weather looks great for your day! 😊"));
    assert!(text.contains("broken clouds"));
    assert!(text.contains("light rain"));
}

#[tokio::test]
async fn empty_submit_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_current()))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    assert_eq!(page.submit("").await, FetchOutcome::Rejected(FetchError::Validation));
    assert_eq!(
        page.take_notifications(),
        vec![Notification::error("Please enter a city")]
    );

    server.verify().await;
}

#[tokio::test]
async fn not_found_reports_city_not_found() {
    let server = MockServer::start().await;
    mount_status(&server, 404).await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    assert_eq!(page.submit("Atlantis").await, FetchOutcome::Failed(FetchError::NotFound));
    assert!(!page.is_loading());
    assert!(page.weather().is_none());
    assert_eq!(page.take_notifications(), vec![Notification::error("City not found")]);
}

#[tokio::test]
async fn unauthorized_reports_invalid_key() {
    let server = MockServer::start().await;
    mount_status(&server, 401).await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    assert_eq!(page.submit("Lagos").await, FetchOutcome::Failed(FetchError::Unauthorized));
    assert!(!page.is_loading());
    assert_eq!(page.take_notifications(), vec![Notification::error("Invalid API key")]);
}

#[tokio::test]
async fn server_error_is_generic() {
    let server = MockServer::start().await;
    mount_status(&server, 503).await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    let outcome = page.submit("Lagos").await;

    assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Transient(_))));
    assert!(!page.is_loading());
    assert_eq!(page.take_notifications(), vec![Notification::error("Error fetching weather")]);
}

#[tokio::test]
async fn malformed_body_is_transient() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut page = Page::new(ViewKind::Home, provider_for(&server));
    let outcome = page.submit("Lagos").await;

    assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Transient(_))));
    assert!(page.weather().is_none());
}

#[tokio::test]
async fn missing_key_never_reaches_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_current()))
        .expect(0)
        .mount(&server)
        .await;

    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::new(None, server.uri()));
    let mut page = Page::new(ViewKind::Home, provider);

    assert_eq!(page.submit("Lagos").await, FetchOutcome::Failed(FetchError::Unauthorized));
    assert_eq!(page.take_notifications(), vec![Notification::error("Invalid API key")]);

    server.verify().await;
}

#[tokio::test]
async fn landing_mount_fetches_current_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Lagos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_current()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lagos_forecast()))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = Page::new(ViewKind::Landing, provider_for(&server));
    assert_eq!(page.mount("Lagos").await, FetchOutcome::Loaded);
    assert!(page.take_notifications().is_empty());

    server.verify().await;
}
