use async_graphql::{Context, Object, ID};
use bookshelf_store::models;
use tracing::debug;

use super::ctx_data;

/// A book in the library.
#[derive(Clone, Debug, derive_more::From)]
pub struct Book {
    model: models::Book,
}

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID::from(self.model.id.as_str())
    }

    async fn name(&self) -> &str {
        &self.model.name
    }

    async fn genre(&self) -> &str {
        &self.model.genre
    }

    /// The author of this book, or `null` if no author with a matching ID
    /// exists.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        debug!(book = ?self.model, "Resolving author of book");

        ctx_data(ctx)
            .store
            .author(&self.model.author_id)
            .await
            .map(Into::into)
    }
}

/// An author of one or more books.
#[derive(Clone, Debug, derive_more::From)]
pub struct Author {
    model: models::Author,
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID::from(self.model.id.as_str())
    }

    async fn name(&self) -> &str {
        &self.model.name
    }

    async fn age(&self) -> i32 {
        self.model.age
    }

    /// All books written by this author, in the order they were added.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        debug!(author = ?self.model, "Resolving books of author");

        ctx_data(ctx)
            .store
            .books_by_author(&self.model.id)
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
