use std::path::Path;

mod logging;

const LIBRARY_FILE: &str = "movies.csv";

fn main() {
    logging::setup_logging();

    movielib::run(Path::new(LIBRARY_FILE));
}
