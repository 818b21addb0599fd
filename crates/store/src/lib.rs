//! In-memory storage of books and authors for the bookshelf API.

pub mod models;
mod sample_data;
mod store;

pub use store::Store;
