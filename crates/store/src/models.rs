/// Identifiers are opaque strings. Freshly allocated ones are decimal
/// numbers, but lookups never assume that.
pub type BookId = String;
pub type AuthorId = String;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub genre: String,
    /// Not checked against the author collection; may dangle.
    pub author_id: AuthorId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub age: i32,
}

/// Arguments of the `addBook` mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub genre: String,
    pub author_id: AuthorId,
}

impl NewBook {
    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            name: self.name,
            genre: self.genre,
            author_id: self.author_id,
        }
    }
}

/// Arguments of the `addAuthor` mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub age: i32,
}

impl NewAuthor {
    pub(crate) fn into_author(self, id: AuthorId) -> Author {
        Author {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
