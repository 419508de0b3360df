use std::{io, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, Config},
    error,
    error::{ApiError, Error, TokenError},
    info,
    session::Session,
    success, utils,
};

pub async fn extract() {
    let config_path = config::config_path();
    let config = match Config::load(&config_path).await {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    info!("Refreshing access token...");
    let session = match Session::start(config, &config::tokens_path(&config_path)).await {
        Ok(session) => session,
        Err(Error::Token(e @ TokenError::NotFound(_))) => {
            error!("{}. Please run `spexport auth` first.", e)
        }
        Err(e) => error!("{}", e),
    };
    success!("Access token refreshed successfully");

    let (file_name, playlist_url) = match read_inputs() {
        Ok(inputs) => inputs,
        Err(e) => error!("Failed to read input: {}", e),
    };

    if utils::parse_playlist_id(&playlist_url).is_none() {
        error!("Invalid playlist URL");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks from playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let output = PathBuf::from(&file_name);
    let result = session.export_playlist(&playlist_url, &output).await;
    pb.finish_and_clear();

    match result {
        Ok(count) => {
            info!("Found {} tracks", count);
            success!("CSV file '{}' has been created successfully", file_name);
        }
        Err(Error::Fetch(ApiError::Unauthorized)) => {
            error!("Failed to fetch playlist. Token may have expired.")
        }
        Err(e) => error!("{}", e),
    }
}

fn read_inputs() -> io::Result<(String, String)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let file_name = utils::prompt(
        &mut input,
        &mut output,
        "Enter the name of the CSV file (without .csv extension): ",
    )?;
    let playlist_url = utils::prompt(&mut input, &mut output, "Enter the Spotify playlist URL: ")?;

    Ok((utils::ensure_csv_extension(&file_name), playlist_url))
}
