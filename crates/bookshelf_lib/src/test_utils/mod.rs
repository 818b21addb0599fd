use async_graphql::{Request, Variables};
use bookshelf_store::Store;
use serde_json::Value;

use crate::graphql_api::{api_schema, ApiSchema, ApiSchemaContext};

/// An API schema backed by a store seeded with the sample library.
pub fn sample_schema() -> ApiSchema {
    schema_with_store(Store::with_sample_data())
}

/// An API schema backed by a store with no records at all.
pub fn empty_schema() -> ApiSchema {
    schema_with_store(Store::new())
}

pub fn schema_with_store(store: Store) -> ApiSchema {
    api_schema(ApiSchemaContext::new(store))
}

/// Executes `query` and returns its `data` as JSON, panicking if the response
/// carries any errors.
pub async fn execute_ok(schema: &ApiSchema, query: &str) -> Value {
    execute_ok_with_variables(schema, query, Value::Null).await
}

pub async fn execute_ok_with_variables(schema: &ApiSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
