use std::{
    io::{self, BufRead, Write},
    sync::LazyLock,
};

use regex::Regex;

static PLAYLIST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/playlist/([a-zA-Z0-9]+)").expect("playlist id pattern is valid")
});

/// Extracts the id from a playlist URL such as
/// `https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc`.
///
/// Bare ids and other URL shapes are rejected.
pub fn parse_playlist_id(url: &str) -> Option<String> {
    PLAYLIST_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn ensure_csv_extension(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}

/// Prints `message` and reads one trimmed line from `input`.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
