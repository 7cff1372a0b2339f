use chrono::{Local, TimeDelta};
use mars_photos_rs::{ClientOption, RoverClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RoverClient::new([ClientOption::UserAgent("mars-photos-demo".into())])?;

    let ten_hours_ago = Local::now() - TimeDelta::hours(10);
    let photos = client.fetch_photos(Some(ten_hours_ago.into())).await?;

    for (i, photo) in photos.iter().enumerate() {
        println!(
            "#{i}: id:{} earthDate: {} imageURL: {}",
            photo.id,
            photo.earth_date.map(|d| d.to_string()).unwrap_or_default(),
            photo.image_url.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}
