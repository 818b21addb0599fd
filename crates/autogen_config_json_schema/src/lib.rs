//! Generates `schema.json`, the JSON Schema of the configuration file, at build time.
