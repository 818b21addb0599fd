use async_graphql::{Context, Object, ID};

use super::{api_types, ctx_data};

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Fetches the book with the given ID. Returns `null` if there's no such
    /// book or no ID was given.
    async fn book(&self, ctx: &Context<'_>, id: Option<ID>) -> Option<api_types::Book> {
        let id = id?;
        ctx_data(ctx).store.book(&id).await.map(Into::into)
    }

    /// Fetches the author with the given ID. Returns `null` if there's no such
    /// author or no ID was given.
    async fn author(&self, ctx: &Context<'_>, id: Option<ID>) -> Option<api_types::Author> {
        let id = id?;
        ctx_data(ctx).store.author(&id).await.map(Into::into)
    }

    /// All books, in the order they were added.
    async fn books(&self, ctx: &Context<'_>) -> Vec<api_types::Book> {
        let ctx_data = ctx_data(ctx);
        ctx_data
            .store
            .books()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// All authors, in the order they were added.
    async fn authors(&self, ctx: &Context<'_>) -> Vec<api_types::Author> {
        let ctx_data = ctx_data(ctx);
        ctx_data
            .store
            .authors()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
