use std::fmt;

use crate::error::LibraryError;
use crate::model::genre::Genre;

pub const MIN_YEAR: u32 = 1888;
pub const MAX_YEAR: u32 = 2024;

#[derive(Debug, Clone)]
pub struct Movie {
    id: String,
    pub title: String,
    pub year: u32,
    pub genre: Genre,
    pub rating: Option<f32>,
}

impl Movie {
    // A rating supplied here is rounded but not range-checked; only
    // set_rating enforces the 0-10 range.
    pub fn new(
        id: String,
        title: &str,
        year: u32,
        genre: Genre,
        rating: Option<f32>,
    ) -> Result<Movie, LibraryError> {
        let title = normalize_title(title);
        if title.is_empty() {
            return Err(LibraryError::EmptyTitle);
        }
        validate_year(year)?;

        Ok(Movie {
            id,
            title,
            year,
            genre,
            rating: rating.map(round_to_hundredths),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    // The normalized title, used for equality and duplicate detection.
    // Never a storage key; that is what `id` is for.
    pub fn identity_key(&self) -> &str {
        &self.title
    }

    pub fn set_rating(&mut self, value: f32) -> Result<(), LibraryError> {
        validate_rating(value)?;
        self.rating = Some(round_to_hundredths(value));
        Ok(())
    }

    pub fn to_record(&self) -> Vec<String> {
        return vec![
            self.id.clone(),
            self.title.clone(),
            self.year.to_string(),
            self.genre.to_string(),
            self.rating
                .map(|r| format!("{:.2}", r))
                .unwrap_or("".to_string()),
        ];
    }

    pub fn csv_header() -> Vec<&'static str> {
        return vec!["movie_id", "title", "year", "genre", "rating"];
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(
                f,
                "{} ({}) - Genre: {}, Rating: {:.2}",
                self.title, self.year, self.genre, rating
            ),
            None => write!(
                f,
                "{} ({}) - Genre: {}, Rating: N/A",
                self.title, self.year, self.genre
            ),
        }
    }
}

pub fn normalize_title(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub(crate) fn validate_year(year: u32) -> Result<(), LibraryError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(LibraryError::YearOutOfRange(year))
    }
}

pub(crate) fn validate_rating(value: f32) -> Result<(), LibraryError> {
    if (0.0..=10.0).contains(&value) {
        Ok(())
    } else {
        Err(LibraryError::RatingOutOfRange(value))
    }
}

pub(crate) fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
