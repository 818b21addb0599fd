pub mod api_types;
mod mutation_root;
mod server;

use async_graphql::{Context, EmptySubscription, Schema, SchemaBuilder};
use bookshelf_store::Store;

pub use self::mutation_root::MutationRoot;
pub use self::server::QueryRoot;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Data shared by all resolvers. The store is passed in explicitly so tests
/// can supply their own.
pub struct ApiSchemaContext {
    pub store: Store,
}

impl ApiSchemaContext {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

pub fn api_schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

pub fn api_schema(ctx: ApiSchemaContext) -> ApiSchema {
    api_schema_builder().data(ctx).finish()
}

pub fn ctx_data<'a>(ctx: &'a Context) -> &'a ApiSchemaContext {
    ctx.data::<ApiSchemaContext>()
        .expect("Failed to get API context")
}
