use mars_photos_rs::RoverClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Picks up NASA_API_KEY when set, DEMO_KEY otherwise.
    let client = RoverClient::builder().build()?;

    let photos = client.fetch_photos_today().await?;
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
