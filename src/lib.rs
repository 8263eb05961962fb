use std::path::Path;

pub mod error;
pub mod library;
pub mod menu;
pub mod model;
pub mod persisters;

pub use error::LibraryError;
pub use library::{Library, MovieUpdate};
pub use model::genre::Genre;
pub use model::movie::Movie;

use persisters::csv_store;

pub fn run(library_file: &Path) {
    match csv_store::initialize(library_file) {
        Ok(true) => log::info!(
            "Welcome to your Watched Movies Library! \
             File '{}' was created successfully and is ready for your inputs!",
            library_file.display()
        ),
        Ok(false) => log::info!(
            "Welcome back to your Watched Movies Library! \
             The file '{}' is open and ready for inputs.",
            library_file.display()
        ),
        Err(e) => log::error!(
            "An error occurred while creating {}: {}",
            library_file.display(),
            e
        ),
    }

    let mut library = Library::open(library_file);
    menu::run(&mut library);
}
