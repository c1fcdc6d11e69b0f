use morty_core::{group_by_season, season_label, MortyApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = MortyApi::new()?;

    println!("Searching for 'Rick'...\n");

    let ricks = api.search_all_characters_by_name("Rick").await?;
    println!("Found {} characters:", ricks.len());
    for character in ricks.iter().take(10) {
        println!("  #{} {} ({})", character.id, character.name, character.status);
    }

    let rick = api.get_character(1).await?;
    println!("\nDetails for {}:", rick.name);
    for point in rick.data_points() {
        println!("  {}: {}", point.title, point.description);
    }

    let first_episodes: Vec<u32> = rick.episode_ids.iter().copied().take(3).collect();
    for episode in api.get_episodes(&first_episodes).await? {
        println!("  {} {}", episode.episode_code, episode.name);
    }

    println!("\nAll episodes by season:");
    let episodes = api.get_all_episodes().await?;
    for (season, episodes) in group_by_season(&episodes) {
        println!("  {} - {} episodes", season_label(season), episodes.len());
    }

    Ok(())
}
