//! Generates `schema.graphql`, the SDL of the GraphQL API, at build time.
