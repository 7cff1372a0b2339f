use httpmock::{Method::GET, MockServer};
use mars_photos_rs::{ClientOption, RoverClient};

use crate::common::base_url;

#[test]
fn defaults_fill_in_empty_settings() {
    let client = RoverClient::builder().api_key("").build().unwrap();
    assert_eq!(client.api_key(), "DEMO_KEY");
    assert_eq!(client.version(), "v1");
    assert_eq!(client.user_agent(), "mars-photos-rs");
}

#[test]
fn options_apply_in_order() {
    let client = RoverClient::new([
        ClientOption::ApiKey("first".into()),
        ClientOption::UserAgent("rover-test/1.0".into()),
        ClientOption::ApiKey("second".into()),
        ClientOption::HttpClient(reqwest::Client::new()),
    ])
    .unwrap();

    assert_eq!(client.api_key(), "second");
    assert_eq!(client.user_agent(), "rover-test/1.0");
}

#[test]
fn clones_share_configuration() {
    let client = RoverClient::builder().api_key("a").build().unwrap();
    let clone = client.clone();

    clone.set_api_key("b");
    clone.set_version("v2");

    assert_eq!(client.api_key(), "b");
    assert_eq!(client.version(), "v2");
}

#[tokio::test]
async fn configured_version_key_and_agent_reach_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/rovers/curiosity/photos")
            .query_param("earth_date", "2020-1-2")
            .query_param("api_key", "abc123")
            .header("user-agent", "rover-test/1.0");
        then.status(200).body(r#"{"photos":[]}"#);
    });

    let client = RoverClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();
    client.set_version("v2");
    client.set_api_key("abc123");
    client.set_user_agent("rover-test/1.0");

    client
        .fetch_photos(Some("2020-01-02".parse().unwrap()))
        .await
        .unwrap();
    mock.assert();
}

fn lookup_with(value: Option<&str>) -> impl Fn(&str) -> Option<String> {
    let value = value.map(str::to_string);
    move |key| (key == "NASA_API_KEY").then(|| value.clone()).flatten()
}

#[test]
fn api_key_is_read_from_environment() {
    let client = RoverClient::builder()
        .build_with_lookup(lookup_with(Some("from-env")))
        .unwrap();
    assert_eq!(client.api_key(), "from-env");
}

#[test]
fn explicit_api_key_beats_environment() {
    let client = RoverClient::builder()
        .api_key("explicit")
        .build_with_lookup(lookup_with(Some("from-env")))
        .unwrap();
    assert_eq!(client.api_key(), "explicit");
}

#[test]
fn blank_or_missing_environment_key_falls_back_to_demo_key() {
    for value in [Some("   "), Some(""), None] {
        let client = RoverClient::builder()
            .build_with_lookup(lookup_with(value))
            .unwrap();
        assert_eq!(client.api_key(), "DEMO_KEY", "env value {value:?}");
    }
}
