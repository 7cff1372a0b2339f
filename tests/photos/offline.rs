use httpmock::{Method::GET, MockServer};
use mars_photos_rs::{EarthDate, RoverStatus};

use crate::common::{PHOTOS_PATH, TEST_KEY, client_for, fixture, mock_photos};

#[tokio::test]
async fn offline_photos_uses_recorded_fixture() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(PHOTOS_PATH)
            .query_param("earth_date", "2016-10-23")
            .query_param("api_key", TEST_KEY)
            .header("user-agent", "mars-photos-rs");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("photos_curiosity_2016-10-23.json"));
    });

    let client = client_for(&server);
    let date: EarthDate = "2016-10-23".parse().unwrap();
    let photos = client.fetch_photos(Some(date)).await.unwrap();

    mock.assert();

    // Upstream order is kept, not sorted by id.
    let ids: Vec<u64> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![605813, 605814, 600110]);

    let first = &photos.photos[0];
    assert_eq!(first.sol, 1499);
    assert_eq!(first.earth_date, Some(date));
    assert!(first.image_url.as_deref().unwrap().ends_with("FHAZ00337M_.JPG"));

    let camera = first.camera.as_ref().unwrap();
    assert_eq!(camera.short_name.as_deref(), Some("FHAZ"));
    assert_eq!(camera.rover_id, Some(5));

    let rover = first.rover.as_ref().unwrap();
    assert_eq!(rover.name, "Curiosity");
    assert_eq!(rover.status, Some(RoverStatus::Active));
    assert_eq!(rover.max_sol, 1505);
    assert_eq!(rover.landing_date.unwrap().to_string(), "2012-8-6");
    assert_eq!(rover.cameras.len(), 3);
    assert_eq!(rover.total_photos, 303000);
}

#[tokio::test]
async fn padded_date_is_sent_unpadded() {
    let server = MockServer::start();
    let mock = mock_photos(&server, "2016-3-5", r#"{"photos":[]}"#);

    let client = client_for(&server);
    let photos = client
        .fetch_photos(Some("2016-03-05".parse().unwrap()))
        .await
        .unwrap();

    mock.assert();
    assert!(photos.is_empty());
}

#[tokio::test]
async fn today_and_none_issue_the_same_query() {
    let today = EarthDate::today().to_string();

    let server_a = MockServer::start();
    let mock_a = mock_photos(&server_a, &today, r#"{"photos":[]}"#);
    client_for(&server_a).fetch_photos_today().await.unwrap();
    mock_a.assert();

    let server_b = MockServer::start();
    let mock_b = mock_photos(&server_b, &today, r#"{"photos":[]}"#);
    client_for(&server_b).fetch_photos(None).await.unwrap();
    mock_b.assert();
}

#[tokio::test]
async fn sparse_photo_defaults_missing_fields() {
    let server = MockServer::start();
    let mock = mock_photos(
        &server,
        "2016-10-23",
        r#"{"photos":[{"id":1,"sol":10,"img_src":"http://x/1.jpg"},{"img_src":""}]}"#,
    );

    let photos = client_for(&server)
        .fetch_photos(Some("2016-10-23".parse().unwrap()))
        .await
        .unwrap();
    mock.assert();

    assert_eq!(photos.len(), 2);
    let first = &photos.photos[0];
    assert_eq!((first.id, first.sol), (1, 10));
    assert_eq!(first.image_url.as_deref(), Some("http://x/1.jpg"));
    assert!(first.camera.is_none() && first.rover.is_none() && first.earth_date.is_none());

    let second = &photos.photos[1];
    assert_eq!((second.id, second.sol), (0, 0));
    assert!(second.image_url.is_none());

    let json = serde_json::to_value(&photos).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "photos": [
                {"id": 1, "sol": 10, "img_src": "http://x/1.jpg"},
                {"id": 0, "sol": 0}
            ]
        })
    );
}

#[tokio::test]
async fn legacy_rover_camera_field_and_unknown_status() {
    let server = MockServer::start();
    let body = concat!(
        r#"{"photos":[{"id":7,"sol":1,"rover":{"id":5,"name":"Curiosity","#,
        r#""status":"dormant","camera":[{"name":"CHEMCAM"}]}}]}"#
    );
    let mock = mock_photos(&server, "2016-10-23", body);

    let photos = client_for(&server)
        .fetch_photos(Some("2016-10-23".parse().unwrap()))
        .await
        .unwrap();
    mock.assert();

    let rover = photos.photos[0].rover.as_ref().unwrap();
    assert_eq!(rover.status, Some(RoverStatus::Other("dormant".into())));
    assert_eq!(rover.cameras[0].short_name.as_deref(), Some("CHEMCAM"));

    let json = serde_json::to_value(rover).unwrap();
    assert_eq!(json["status"], "dormant");
    assert_eq!(json["cameras"][0]["name"], "CHEMCAM");
}

#[tokio::test]
async fn missing_photos_key_is_an_empty_collection() {
    let server = MockServer::start();
    let mock = mock_photos(&server, "2016-10-23", "{}");

    let photos = client_for(&server)
        .fetch_photos(Some("2016-10-23".parse().unwrap()))
        .await
        .unwrap();
    mock.assert();

    assert!(photos.is_empty());
    assert_eq!(serde_json::to_string(&photos).unwrap(), "{}");
}
