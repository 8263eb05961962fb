use std::io::{self, Write};

use crate::library::{Library, MovieUpdate};
use crate::model::genre::Genre;
use crate::model::movie::normalize_title;

pub fn run(library: &mut Library) {
    loop {
        display_menu();
        let choice = prompt("Enter your choice: ");
        match choice.as_str() {
            "1" => add_movie(library),
            "2" => edit_movie(library),
            "3" => delete_movie(library),
            "4" => display_movies(library),
            "5" => display_movies_by_genre(library),
            "6" => show_average_rating(library),
            "7" => {
                match library.save() {
                    Ok(()) => println!("Changes saved!"),
                    Err(e) => println!("An error occurred while saving: {}", e),
                }
                println!("\nFarewell! See you next time in your movie library!");
                break;
            }
            _ => println!("\nInvalid choice. Please select a valid option.\n{}", separator()),
        }
    }
}

fn display_menu() {
    println!("\nMovies Library Menu:");
    println!("1. Add a movie");
    println!("2. Edit a movie");
    println!("3. Delete a movie");
    println!("4. Display all movies");
    println!("5. Find movies by genre");
    println!("6. Show average rating");
    println!("7. Exit the library");
    println!("{}", separator());
}

fn add_movie(library: &mut Library) {
    let title = loop {
        let input = prompt("Enter movie title (or 'm' to return to menu): ");
        if input.eq_ignore_ascii_case("m") {
            return;
        }
        let title = normalize_title(&input);
        if title.is_empty() {
            continue;
        }
        if library.contains_title(&title) {
            println!("Looks like {} already exists in your library.", title);
            return;
        }
        break title;
    };

    let year = match prompt_year("Enter movie year (or 'm' to return to menu): ") {
        Some(year) => year,
        None => return,
    };

    println!("\nWhat is the genre of {}?", title);
    let genre = match prompt_genre() {
        Some(genre) => genre,
        None => return,
    };

    let rating = prompt_rating(&format!("\nHow would you rate {} from 0 to 10? ", title));

    match library.add(&title, year, genre, Some(rating)) {
        Ok(_) => println!("\nMovie '{}' added successfully.\n{}", title, separator()),
        Err(e) => println!("\n{}\n{}", e, separator()),
    }
}

fn edit_movie(library: &mut Library) {
    if library.is_empty() {
        println!("\nNo movies in the library.\n{}", separator());
        return;
    }

    list_movies(library);
    let selector = match prompt_selection(
        "\nSelect the movie to edit by number (or 'm' to return): ",
        library.len(),
    ) {
        Some(selector) => selector,
        None => return,
    };
    let title = library.list()[selector - 1].title.clone();

    println!("\nWhat would you like to edit?");
    println!("1. Name");
    println!("2. Year");
    println!("3. Genre");
    println!("4. Rating");
    println!("5. All of the above");
    println!("\nm. Return to menu");
    println!("{}", separator());

    let choice = loop {
        let input = prompt("Enter your choice: ");
        if input.eq_ignore_ascii_case("m") {
            return;
        }
        match input.as_str() {
            "1" | "2" | "3" | "4" | "5" => break input,
            _ => println!("Invalid choice. Please select a valid option."),
        }
    };

    let mut update = MovieUpdate::default();
    if choice == "1" || choice == "5" {
        let input = prompt(&format!("\nWhat is the correct name for '{}'? ", title));
        if input.eq_ignore_ascii_case("m") {
            return;
        }
        update.title = Some(input);
    }
    if choice == "2" || choice == "5" {
        match prompt_year(&format!("\nWhat is the correct year for '{}'? ", title)) {
            Some(year) => update.year = Some(year),
            None => return,
        }
    }
    if choice == "3" || choice == "5" {
        println!("\nWhat is the correct genre for '{}'?", title);
        match prompt_genre() {
            Some(genre) => update.genre = Some(genre),
            None => return,
        }
    }
    if choice == "4" || choice == "5" {
        let rating = prompt_rating(&format!(
            "\nWhat is the correct rating for '{}'? (0-10): ",
            title
        ));
        update.rating = Some(rating);
    }

    match library.edit(selector, update) {
        Ok(()) => println!("\nMovie '{}' updated successfully.\n{}", title, separator()),
        Err(e) => println!("\n{}\n{}", e, separator()),
    }
}

fn delete_movie(library: &mut Library) {
    if library.is_empty() {
        println!("\nNo movies in the library.\n{}", separator());
        return;
    }

    list_movies(library);
    let selector = match prompt_selection(
        "\nSelect the movie to delete by number (or 'm' to return): ",
        library.len(),
    ) {
        Some(selector) => selector,
        None => return,
    };

    match library.delete(selector) {
        Ok(movie) => println!(
            "\nMovie '{}' deleted successfully.\n{}",
            movie.title,
            separator()
        ),
        Err(e) => println!("\n{}\n{}", e, separator()),
    }
}

fn display_movies(library: &Library) {
    if library.is_empty() {
        println!("\nNo movies in the library.\n{}", separator());
        return;
    }

    println!("\nMovies in your library:");
    for (i, movie) in library.list().iter().enumerate() {
        println!("{}. {}", i + 1, movie);
    }
    println!("{}", separator());
}

fn display_movies_by_genre(library: &Library) {
    if library.is_empty() {
        println!("\nNo movies in the library.\n{}", separator());
        return;
    }

    let genres = library.genres_present();
    println!("\nGenres available:");
    for (i, genre) in genres.iter().enumerate() {
        println!("{}. {}", i + 1, genre);
    }
    println!("\nm. Return to menu");
    println!("{}", separator());

    let selected = loop {
        let input = prompt("\nEnter genre number to filter by (or 'm' to return): ");
        if input.eq_ignore_ascii_case("m") {
            return;
        }
        match input.parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= genres.len() => break genres[choice - 1],
            _ => println!("Something went wrong. Please choose a valid number."),
        }
    };

    let filtered = library.list_by_genre(selected);
    if filtered.is_empty() {
        println!("\nNo movies found in the genre: {}\n{}", selected, separator());
    } else {
        println!("\nMovies in the genre '{}':", selected);
        for (i, movie) in filtered.iter().enumerate() {
            println!("{}. {}", i + 1, movie);
        }
        println!("{}", separator());
    }
}

fn show_average_rating(library: &Library) {
    println!(
        "\nAverage rating: {:.2}\n{}",
        library.average_rating(),
        separator()
    );
}

fn list_movies(library: &Library) {
    println!("\nMovies in your library:");
    for (i, movie) in library.list().iter().enumerate() {
        println!("{}. {}", i + 1, movie);
    }
    println!("\nm. Return to menu");
    println!("{}", separator());
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().expect("could not flush stdout");
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read user input");
    input.trim().to_string()
}

fn prompt_year(message: &str) -> Option<u32> {
    loop {
        let input = prompt(message);
        if input.eq_ignore_ascii_case("m") {
            return None;
        }
        match input.parse::<u32>() {
            Ok(year) if year < 1888 => {
                println!("\nIs it the first movie ever made? Please enter a valid year.")
            }
            Ok(year) if year > 2024 => {
                println!("\nWe are not yet in the future! Please enter a valid year.")
            }
            Ok(year) => return Some(year),
            Err(_) => println!("Please make sure to add a valid year."),
        }
    }
}

fn prompt_genre() -> Option<Genre> {
    for i in 0..5 {
        println!(
            "{:2}. {:<18} {:2}. {:<18} {:2}. {:<18}",
            i + 1,
            Genre::ALL[i].as_str(),
            i + 6,
            Genre::ALL[i + 5].as_str(),
            i + 11,
            Genre::ALL[i + 10].as_str()
        );
    }
    println!("\nm. Return to menu");
    println!("{}", separator());

    loop {
        let input = prompt("\nSelect a genre by number (or 'm' to return): ");
        if input.eq_ignore_ascii_case("m") {
            return None;
        }
        match input.parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= Genre::ALL.len() => {
                return Some(Genre::ALL[choice - 1])
            }
            Ok(_) => println!(
                "Invalid choice. Please select a number between 1 and {}.",
                Genre::ALL.len()
            ),
            Err(_) => println!("Invalid input. Please enter a valid number or 'm' to return."),
        }
    }
}

fn prompt_rating(message: &str) -> f32 {
    loop {
        match prompt(message).parse::<f32>() {
            Ok(rating) if (0.0..=10.0).contains(&rating) => return rating,
            Ok(_) => println!("Rating must be between 0 and 10."),
            Err(_) => println!("Invalid input. Please enter a number between 0 and 10."),
        }
    }
}

fn prompt_selection(message: &str, len: usize) -> Option<usize> {
    loop {
        let input = prompt(message);
        if input.eq_ignore_ascii_case("m") {
            return None;
        }
        match input.parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= len => return Some(choice),
            _ => println!("Something went wrong. Please choose a valid number."),
        }
    }
}

fn separator() -> String {
    "_".repeat(36)
}
