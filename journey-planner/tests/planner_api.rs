//! End-to-end tests: the real HTTP gateway against a mocked TfL API.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use journey_planner::app::{Inputs, Session};
use journey_planner::gateway::HttpGateway;
use journey_planner::planner::{JourneyPlanner, PlannerConfig, PlannerError, StationResolver};

const JOURNEYS: &str = include_str!("../data/fixtures/journey_results.json");
const TEMPLE: &str = include_str!("../data/fixtures/stop_point_search_temple.json");

fn config_for_mock(base_url: &str) -> PlannerConfig {
    PlannerConfig::new("123456")
        .with_journey_url(format!("{base_url}/Journey/JourneyResults"))
        .with_stop_point_url(format!("{base_url}/StopPoint/Search"))
}

fn search_body(id: &str, ics_id: &str, name: &str) -> String {
    format!(r#"{{"matches":[{{"icsId":"{ics_id}","id":"{id}","name":"{name}"}}]}}"#)
}

async fn mount_search(server: &MockServer, query: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/StopPoint/Search"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolve_temple() {
    let server = MockServer::start().await;
    mount_search(&server, "Temple", TEMPLE.to_string()).await;

    let config = config_for_mock(&server.uri());
    let gateway = HttpGateway::new().unwrap();
    let resolver = StationResolver::new(&gateway, &config);

    assert_eq!(resolver.resolve("Temple", true).await.unwrap(), "940GZZLUTMP");
}

#[tokio::test]
async fn journey_query_filters_walking() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Journey/JourneyResults/1000075/to/1000135"))
        .and(query_param("app_key", "123456"))
        .and(query_param("mode", "tube"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOURNEYS))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let gateway = HttpGateway::new().unwrap();
    let planner = JourneyPlanner::new(&gateway, &config);

    let journeys = planner
        .query_journey("1000075", "1000135", None, None)
        .await
        .unwrap();
    assert_eq!(journeys.len(), 3);
}

#[tokio::test]
async fn journey_query_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Journey/JourneyResults/1000075/to/1000135"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let gateway = HttpGateway::new().unwrap();
    let planner = JourneyPlanner::new(&gateway, &config);

    let err = planner
        .query_journey("1000075", "1000135", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::RateLimitOrAuth));
}

#[tokio::test]
async fn session_prints_itinerary() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Embankment",
        search_body("940GZZLUEMB", "1000075", "Embankment Underground Station"),
    )
    .await;
    mount_search(
        &server,
        "Leicester Square",
        search_body("940GZZLULSQ", "1000135", "Leicester Square Underground Station"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/Journey/JourneyResults/940GZZLUEMB/to/940GZZLULSQ"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOURNEYS))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri());
    let gateway = HttpGateway::new().unwrap();
    let inputs = Inputs {
        from: Some("Embankment".into()),
        to: Some("Leicester Square".into()),
        ..Inputs::default()
    };

    let mut output = Vec::new();
    let shown = Session::new(&gateway, &config, &b""[..], &mut output)
        .run(&inputs)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(shown, 3);
    assert!(output.starts_with("Your journey from Embankment to Leicester Square"));
    assert!(output.contains("-Charing Cross Underground Station\n"));
    assert!(output.contains("Arriving at Leicester Square at 09:21:00"));
}

#[tokio::test]
async fn session_unknown_station() {
    let server = MockServer::start().await;
    mount_search(&server, "Hogwarts", r#"{"matches":[]}"#.to_string()).await;

    let config = config_for_mock(&server.uri());
    let gateway = HttpGateway::new().unwrap();
    let inputs = Inputs {
        from: Some("Hogwarts".into()),
        to: Some("Temple".into()),
        ..Inputs::default()
    };

    let mut output = Vec::new();
    let err = Session::new(&gateway, &config, &b""[..], &mut output)
        .run(&inputs)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error: Hogwarts is not a valid Underground station. Please check the full list of supported Underground stations and try again."
    );
    // Failed before the destination was looked up
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
