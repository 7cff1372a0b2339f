//! mars-photos-rs: typed client for the NASA Mars rover photos API.
//!
//! ```no_run
//! use mars_photos_rs::{EarthDate, RoverClient};
//!
//! # async fn run() -> Result<(), mars_photos_rs::RoverError> {
//! let client = RoverClient::builder().api_key("DEMO_KEY").build()?;
//! let photos = client.fetch_photos(Some("2016-10-23".parse::<EarthDate>()?)).await?;
//! for photo in photos.iter() {
//!     println!("{} {:?}", photo.id, photo.image_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! With the `server` feature (on by default) the [`server`] module exposes the
//! same lookups over a small JSON HTTP endpoint.

pub mod core;
pub mod photos;
#[cfg(feature = "server")]
pub mod server;

pub use crate::core::{ClientOption, EarthDate, RoverClient, RoverClientBuilder, RoverError};
pub use photos::{Camera, Photo, PhotoCollection, Rover, RoverStatus};
