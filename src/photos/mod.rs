mod api;
mod model;
mod wire;

pub use model::{Camera, Photo, PhotoCollection, Rover, RoverStatus};

use crate::{EarthDate, RoverClient, RoverError};

impl RoverClient {
    /// Fetches Curiosity's photos for `earth_date`, or for today (local time) when `None`.
    ///
    /// # Errors
    ///
    /// - [`RoverError::Transport`] if the request could not be completed.
    /// - [`RoverError::Status`] if the API answered with a non-2xx status.
    /// - [`RoverError::Decode`] if the body is not the expected JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch_photos(
        &self,
        earth_date: Option<EarthDate>,
    ) -> Result<PhotoCollection, RoverError> {
        api::fetch_photos(self, earth_date.unwrap_or_else(EarthDate::today)).await
    }

    /// Shorthand for `fetch_photos(None)`.
    ///
    /// # Errors
    ///
    /// Same as [`RoverClient::fetch_photos`].
    pub async fn fetch_photos_today(&self) -> Result<PhotoCollection, RoverError> {
        self.fetch_photos(None).await
    }
}
