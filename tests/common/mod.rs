#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use mars_photos_rs::RoverClient;
use std::{fs, path::Path};
use url::Url;

pub const TEST_KEY: &str = "test-key";
pub const PHOTOS_PATH: &str = "/v1/rovers/curiosity/photos";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.base_url())).unwrap()
}

pub fn client_for(server: &MockServer) -> RoverClient {
    RoverClient::builder()
        .base_url(base_url(server))
        .api_key(TEST_KEY)
        .build()
        .unwrap()
}

pub fn mock_photos<'a>(server: &'a MockServer, earth_date: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(PHOTOS_PATH)
            .query_param("earth_date", earth_date)
            .query_param("api_key", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
