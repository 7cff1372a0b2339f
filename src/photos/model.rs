use serde::Serialize;

use crate::core::EarthDate;

/// Photos for one earth date, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PhotoCollection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<Photo>,
}

impl PhotoCollection {
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }
}

impl IntoIterator for PhotoCollection {
    type Item = Photo;
    type IntoIter = std::vec::IntoIter<Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.into_iter()
    }
}

/// A single rover photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    /// The API's identifier for the photo.
    pub id: u64,
    /// Mission sol (Martian day) the photo was taken on.
    pub sol: u32,
    /// The camera that took the photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    /// The rover carrying that camera.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rover: Option<Rover>,
    /// Earth date corresponding to `sol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_date: Option<EarthDate>,
    /// Direct link to the JPEG.
    #[serde(rename = "img_src", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A camera mounted on a rover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Abbreviation such as `FHAZ` or `MAST`.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rover_id: Option<u64>,
    /// Human readable name, e.g. "Front Hazard Avoidance Camera".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_date: Option<EarthDate>,
}

/// Mission summary for a rover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rover {
    pub id: u64,
    pub name: String,
    /// Latest sol with photos.
    pub max_sol: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<EarthDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoverStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cameras: Vec<Camera>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_date: Option<EarthDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<EarthDate>,
    pub total_photos: u64,
}

/// Mission status as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum RoverStatus {
    Active,
    Complete,
    /// Anything the API may add later, kept verbatim.
    Other(String),
}

impl From<String> for RoverStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => RoverStatus::Active,
            "complete" => RoverStatus::Complete,
            _ => RoverStatus::Other(s),
        }
    }
}

impl From<RoverStatus> for String {
    fn from(status: RoverStatus) -> Self {
        match status {
            RoverStatus::Active => "active".to_string(),
            RoverStatus::Complete => "complete".to_string(),
            RoverStatus::Other(s) => s,
        }
    }
}
