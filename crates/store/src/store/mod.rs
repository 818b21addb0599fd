use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Author, Book, NewAuthor, NewBook};
use crate::sample_data;

/// An abstraction over all storage operations. It uses [`Arc`] internally, so
/// it's cheaply cloneable and all clones share the same collections.
#[derive(Clone, Default)]
pub struct Store {
    collections: Arc<RwLock<Collections>>,
}

impl Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Collections {
    books: Vec<Book>,
    authors: Vec<Author>,
    book_ids: IdCounter,
    author_ids: IdCounter,
}

/// Hands out decimal ids that were never handed out before and don't clash
/// with any numeric id already in the collection.
#[derive(Debug)]
struct IdCounter {
    next: u64,
    taken: BTreeSet<u64>,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self {
            next: 1,
            taken: BTreeSet::new(),
        }
    }
}

impl IdCounter {
    fn starting_after<'a>(ids: impl Iterator<Item = &'a str>) -> Self {
        let taken: BTreeSet<u64> = ids.filter_map(|id| id.parse::<u64>().ok()).collect();
        // Past `u64::MAX` there's nothing to count up to, so start over from 1
        // and skip the taken ids instead.
        let next = taken
            .last()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(1);
        Self { next, taken }
    }

    fn allocate(&mut self) -> String {
        while self.taken.contains(&self.next) {
            self.next = self.next.wrapping_add(1);
        }
        let id = self.next;
        self.taken.insert(id);
        self.next = self.next.wrapping_add(1);
        id.to_string()
    }
}

impl Store {
    /// Creates a store with no books and no authors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that holds exactly the given records, in order.
    pub fn from_records(books: Vec<Book>, authors: Vec<Author>) -> Self {
        info!(
            books = books.len(),
            authors = authors.len(),
            "Initializing in-memory store"
        );

        let collections = Collections {
            book_ids: IdCounter::starting_after(books.iter().map(|b| b.id.as_str())),
            author_ids: IdCounter::starting_after(authors.iter().map(|a| a.id.as_str())),
            books,
            authors,
        };

        Self {
            collections: Arc::new(RwLock::new(collections)),
        }
    }

    /// Creates a store seeded with the built-in sample library.
    pub fn with_sample_data() -> Self {
        Self::from_records(sample_data::books(), sample_data::authors())
    }
}

/// Getters.
impl Store {
    /// Returns the first book with the given id, if any.
    pub async fn book(&self, id: &str) -> Option<Book> {
        let collections = self.collections.read().await;
        collections.books.iter().find(|book| book.id == id).cloned()
    }

    /// Returns the first author with the given id, if any.
    pub async fn author(&self, id: &str) -> Option<Author> {
        let collections = self.collections.read().await;
        collections
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    /// All books, in insertion order.
    pub async fn books(&self) -> Vec<Book> {
        self.collections.read().await.books.clone()
    }

    /// All authors, in insertion order.
    pub async fn authors(&self) -> Vec<Author> {
        self.collections.read().await.authors.clone()
    }

    /// All books whose `author_id` is `author_id`, in insertion order.
    pub async fn books_by_author(&self, author_id: &str) -> Vec<Book> {
        let collections = self.collections.read().await;
        collections
            .books
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }
}

/// Setters.
impl Store {
    /// Appends a new book and returns it. The author id is stored as given,
    /// whether or not such an author exists.
    pub async fn add_book(&self, new_book: NewBook) -> Book {
        let mut collections = self.collections.write().await;

        let id = collections.book_ids.allocate();
        let book = new_book.into_book(id);
        collections.books.push(book.clone());

        debug!(id = %book.id, author_id = %book.author_id, "Added book");
        book
    }

    /// Appends a new author and returns it.
    pub async fn add_author(&self, new_author: NewAuthor) -> Author {
        let mut collections = self.collections.write().await;

        let id = collections.author_ids.allocate();
        let author = new_author.into_author(id);
        collections.authors.push(author.clone());

        debug!(id = %author.id, "Added author");
        author
    }
}
