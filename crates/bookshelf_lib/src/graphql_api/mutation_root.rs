use async_graphql::{Context, Object, ID};
use bookshelf_store::models::{NewAuthor, NewBook};
use tracing::info;

use super::{api_types, ctx_data};
use crate::metrics;

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Adds a new book to the library and returns it. The author ID is not
    /// checked; a book whose author doesn't exist resolves `author` to
    /// `null`.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: ID,
    ) -> api_types::Book {
        let new_book = NewBook {
            name,
            genre,
            author_id: author_id.0,
        };
        let book = ctx_data(ctx).store.add_book(new_book).await;

        metrics().books_added.inc();
        info!(id = %book.id, name = %book.name, "Book added");

        book.into()
    }

    /// Adds a new author to the library and returns it.
    async fn add_author(&self, ctx: &Context<'_>, name: String, age: i32) -> api_types::Author {
        let author = ctx_data(ctx)
            .store
            .add_author(NewAuthor { name, age })
            .await;

        metrics().authors_added.inc();
        info!(id = %author.id, name = %author.name, "Author added");

        author.into()
    }
}
