use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::LibraryError;
use crate::model::genre::Genre;
use crate::model::movie::{
    normalize_title, round_to_hundredths, validate_rating, validate_year, Movie,
};
use crate::persisters::csv_store;

#[derive(Debug, Default, Clone)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<Genre>,
    pub rating: Option<f32>,
}

pub struct Library {
    movies: HashMap<String, Movie>,
    // Highest numeric id handed out or loaded this session. Never
    // lowered on delete, so ids strictly increase within a session.
    last_id: u64,
    path: PathBuf,
}

impl Library {
    pub fn open(path: impl Into<PathBuf>) -> Library {
        let path = path.into();
        let movies = csv_store::load(&path);
        let last_id = movies
            .keys()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Library {
            movies,
            last_id,
            path,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn generate_id(&self) -> String {
        (self.last_id + 1).to_string()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        let key = normalize_title(title);
        self.movies.values().any(|movie| movie.identity_key() == key)
    }

    pub fn add(
        &mut self,
        title: &str,
        year: u32,
        genre: Genre,
        rating: Option<f32>,
    ) -> Result<String, LibraryError> {
        let title = normalize_title(title);
        if title.is_empty() {
            return Err(LibraryError::EmptyTitle);
        }
        if self.contains_title(&title) {
            return Err(LibraryError::DuplicateTitle(title));
        }
        if let Some(value) = rating {
            validate_rating(value)?;
        }

        let id = self.generate_id();
        let movie = Movie::new(id.clone(), &title, year, genre, rating)?;
        self.movies.insert(id.clone(), movie);
        self.last_id += 1;
        self.save()?;
        Ok(id)
    }

    pub fn edit(&mut self, selector: usize, update: MovieUpdate) -> Result<(), LibraryError> {
        let id = self.resolve(selector)?;

        // Validate every requested field before touching the movie, so
        // a rejected edit leaves the store unchanged.
        let new_title = match &update.title {
            Some(title) => {
                let title = normalize_title(title);
                if title.is_empty() {
                    return Err(LibraryError::EmptyTitle);
                }
                let taken = self
                    .movies
                    .values()
                    .any(|movie| movie.id() != id && movie.identity_key() == title);
                if taken {
                    return Err(LibraryError::DuplicateTitle(title));
                }
                Some(title)
            }
            None => None,
        };
        if let Some(year) = update.year {
            validate_year(year)?;
        }
        if let Some(value) = update.rating {
            validate_rating(value)?;
        }

        let movie = self
            .movies
            .get_mut(&id)
            .ok_or(LibraryError::NoSuchMovie(selector))?;
        if let Some(title) = new_title {
            movie.title = title;
        }
        if let Some(year) = update.year {
            movie.year = year;
        }
        if let Some(genre) = update.genre {
            movie.genre = genre;
        }
        if let Some(value) = update.rating {
            movie.set_rating(value)?;
        }
        self.save()?;
        Ok(())
    }

    pub fn delete(&mut self, selector: usize) -> Result<Movie, LibraryError> {
        let id = self.resolve(selector)?;
        let removed = self
            .movies
            .remove(&id)
            .ok_or(LibraryError::NoSuchMovie(selector))?;
        self.save()?;
        Ok(removed)
    }

    pub fn list(&self) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies.values().collect();
        movies.sort_by_key(|movie| movie.title.clone());
        movies
    }

    pub fn list_by_genre(&self, genre: Genre) -> Vec<&Movie> {
        self.list()
            .into_iter()
            .filter(|movie| movie.genre == genre)
            .collect()
    }

    pub fn genres_present(&self) -> Vec<Genre> {
        let mut genres: Vec<Genre> = self.movies.values().map(|movie| movie.genre).collect();
        genres.sort_by_key(|genre| genre.as_str());
        genres.dedup();
        genres
    }

    pub fn average_rating(&self) -> f32 {
        let ratings: Vec<f32> = self.movies.values().filter_map(|movie| movie.rating).collect();
        if ratings.is_empty() {
            return 0.0;
        }
        round_to_hundredths(ratings.iter().sum::<f32>() / ratings.len() as f32)
    }

    pub fn save(&self) -> Result<(), LibraryError> {
        csv_store::save(&self.movies, &self.path)
    }

    // Selectors are 1-based positions in the title-sorted listing, the
    // same numbering the menu shows.
    fn resolve(&self, selector: usize) -> Result<String, LibraryError> {
        let listing = self.list();
        if selector == 0 || selector > listing.len() {
            return Err(LibraryError::NoSuchMovie(selector));
        }
        Ok(listing[selector - 1].id().to_string())
    }
}
