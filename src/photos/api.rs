use reqwest::header::USER_AGENT;
use url::Url;

use crate::{
    core::{EarthDate, RoverClient, RoverError, client::ROVER, net},
    photos::{
        model::{Camera, Photo, PhotoCollection, Rover},
        wire,
    },
};

/// `<base>/<version>/rovers/curiosity/photos?earth_date=<Y-M-D>&api_key=<key>`
fn photos_url(client: &RoverClient, earth_date: EarthDate) -> Result<Url, RoverError> {
    let path = format!("{}/rovers/{}/photos", client.version(), ROVER);
    let mut url = client.base_url().join(&path)?;

    let api_key = client.api_key();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("earth_date", &earth_date.to_string());
        if !api_key.is_empty() {
            qp.append_pair("api_key", &api_key);
        }
    }

    Ok(url)
}

pub(super) async fn fetch_photos(
    client: &RoverClient,
    earth_date: EarthDate,
) -> Result<PhotoCollection, RoverError> {
    let url = photos_url(client, earth_date)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = url.path(), %earth_date, "fetching photos");

    let resp = client
        .http()
        .get(url)
        .header(USER_AGENT, client.user_agent())
        .send()
        .await?;
    let resp = net::ensure_success(resp).await?;

    let body = net::get_text(resp).await?;
    let envelope: wire::PhotosEnvelope = serde_json::from_str(&body)?;

    let photos = envelope
        .photos
        .unwrap_or_default()
        .into_iter()
        .map(Photo::from)
        .collect();

    Ok(PhotoCollection { photos })
}

impl From<wire::PhotoNode> for Photo {
    fn from(raw: wire::PhotoNode) -> Self {
        Photo {
            id: raw.id.unwrap_or_default(),
            sol: raw.sol.unwrap_or_default(),
            camera: raw.camera.map(Camera::from),
            rover: raw.rover.map(Rover::from),
            earth_date: raw.earth_date,
            image_url: raw.img_src.filter(|s| !s.is_empty()),
        }
    }
}

impl From<wire::CameraNode> for Camera {
    fn from(raw: wire::CameraNode) -> Self {
        Camera {
            id: raw.id,
            short_name: raw.name,
            rover_id: raw.rover_id,
            full_name: raw.full_name,
            earth_date: raw.earth_date,
        }
    }
}

impl From<wire::RoverNode> for Rover {
    fn from(raw: wire::RoverNode) -> Self {
        Rover {
            id: raw.id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            max_sol: raw.max_sol.unwrap_or_default(),
            max_date: raw.max_date,
            status: raw.status.map(Into::into),
            cameras: raw
                .cameras
                .unwrap_or_default()
                .into_iter()
                .map(Camera::from)
                .collect(),
            landing_date: raw.landing_date,
            launch_date: raw.launch_date,
            total_photos: raw.total_photos.unwrap_or_default(),
        }
    }
}
