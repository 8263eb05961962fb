use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use tempfile::NamedTempFile;

use crate::error::LibraryError;
use crate::model::genre::Genre;
use crate::model::movie::Movie;

// Creates the file with its header row if it does not exist yet.
// Returns true when a new file was created. Never touches the content
// of an existing file.
pub fn initialize(path: &Path) -> Result<bool, LibraryError> {
    if path.exists() {
        return Ok(false);
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record(Movie::csv_header())?;
    writer.flush()?;
    Ok(true)
}

// A missing or unreadable file yields an empty collection, and every
// row that fails to decode is skipped. Load never aborts the program.
pub fn load(path: &Path) -> HashMap<String, Movie> {
    if !path.exists() {
        return HashMap::new();
    }

    let mut reader = match ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!(
                "Could not read library file {}, starting empty: {}",
                path.display(),
                e
            );
            return HashMap::new();
        }
    };

    let mut movies = HashMap::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };
        if let Some(movie) = decode_row(&record) {
            movies.insert(movie.id().to_string(), movie);
        }
    }
    movies
}

fn decode_row(record: &StringRecord) -> Option<Movie> {
    if record.len() != 4 && record.len() != 5 {
        return None;
    }

    let id = record.get(0)?.trim();
    id.parse::<u64>().ok()?;
    let title = record.get(1)?;
    let year = record.get(2)?.trim().parse::<u32>().ok()?;
    let genre = record.get(3)?.trim().parse::<Genre>().ok()?;
    let rating = match record.get(4).map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<f32>().ok()?),
    };

    // Movie::new re-uppercases the title, so externally edited files
    // still end up normalized.
    Movie::new(id.to_string(), title, year, genre, rating).ok()
}

// Full overwrite through a temp file in the target directory, renamed
// over the destination once the write is complete, so a failed save
// never leaves a half-written file behind.
pub fn save(movies: &HashMap<String, Movie>, path: &Path) -> Result<(), LibraryError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = Writer::from_writer(&mut tmp);
        writer.write_record(Movie::csv_header())?;
        for movie in movies.values() {
            writer.write_record(movie.to_record())?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
