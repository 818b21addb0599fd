use crate::models::{Author, Book};

fn book(id: &str, name: &str, genre: &str, author_id: &str) -> Book {
    Book {
        id: id.to_string(),
        name: name.to_string(),
        genre: genre.to_string(),
        author_id: author_id.to_string(),
    }
}

fn author(id: &str, name: &str, age: i32) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

pub fn books() -> Vec<Book> {
    vec![
        book(
            "1",
            "Harry Potter and the Chamber of Secrets",
            "Fantasy Fiction",
            "1",
        ),
        book(
            "2",
            "Harry Potter and the Prisoner of Azkaban",
            "Fantasy Fiction",
            "1",
        ),
        book(
            "3",
            "Harry Potter and the Goblet of Fire",
            "Fantasy Fiction",
            "1",
        ),
        book("4", "The Way of Shadows", "High fantasy", "2"),
        book("5", "Beyond the Shadows", "High fantasy", "2"),
    ]
}

pub fn authors() -> Vec<Author> {
    vec![author("1", "J. K. Rowling", 56), author("2", "Brent Weeks", 45)]
}
