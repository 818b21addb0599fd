use bookshelf_store::models::{NewAuthor, NewBook};

pub fn new_book(name: &str, genre: &str, author_id: &str) -> NewBook {
    NewBook {
        name: name.to_string(),
        genre: genre.to_string(),
        author_id: author_id.to_string(),
    }
}

pub fn new_author(name: &str, age: i32) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        age,
    }
}
