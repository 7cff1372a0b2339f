use serde::Deserialize;

use crate::core::EarthDate;

#[derive(Deserialize)]
pub(crate) struct PhotosEnvelope {
    pub(crate) photos: Option<Vec<PhotoNode>>,
}

#[derive(Deserialize)]
pub(crate) struct PhotoNode {
    pub(crate) id: Option<u64>,
    pub(crate) sol: Option<u32>,
    pub(crate) camera: Option<CameraNode>,
    pub(crate) rover: Option<RoverNode>,
    pub(crate) earth_date: Option<EarthDate>,
    pub(crate) img_src: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct CameraNode {
    pub(crate) id: Option<u64>,
    pub(crate) name: Option<String>,
    pub(crate) rover_id: Option<u64>,
    pub(crate) full_name: Option<String>,
    pub(crate) earth_date: Option<EarthDate>,
}

#[derive(Deserialize)]
pub(crate) struct RoverNode {
    pub(crate) id: Option<u64>,
    pub(crate) name: Option<String>,
    pub(crate) max_sol: Option<u32>,
    pub(crate) max_date: Option<EarthDate>,
    pub(crate) status: Option<String>,
    // Older payloads used the singular field name.
    #[serde(alias = "camera")]
    pub(crate) cameras: Option<Vec<CameraNode>>,
    pub(crate) landing_date: Option<EarthDate>,
    pub(crate) launch_date: Option<EarthDate>,
    pub(crate) total_photos: Option<u64>,
}
