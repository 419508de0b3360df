//! CSV serialization of playlist tracks.

use std::path::Path;

use crate::{error::Error, types::TrackRecord};

pub const HEADER: [&str; 4] = ["Song Name", "Artist", "Duration (seconds)", "Popularity"];

/// Renders seconds the way the exporter always has: `222.0`, `222.5`.
pub fn format_seconds(seconds: f64) -> String {
    // Debug keeps the trailing `.0` that Display drops.
    format!("{:?}", seconds)
}

/// Serializes records into CSV bytes, header row first.
pub fn to_csv(records: &[TrackRecord]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.artists.join(", ").as_str(),
            format_seconds(record.duration_seconds).as_str(),
            record.popularity.to_string().as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
}

pub async fn save_csv(path: &Path, records: &[TrackRecord]) -> Result<(), Error> {
    let bytes = to_csv(records)?;
    async_fs::write(path, bytes)
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}
