use std::env;
use std::fs::File;
use std::io::*;

use bookshelf_lib::graphql_api::api_schema_builder;

fn main() -> std::io::Result<()> {
    let out_path = env::current_dir()?.join("schema.graphql");
    let mut f = File::create(&out_path)?;

    let sdl = api_schema_builder().finish().sdl();
    f.write_all(sdl.as_bytes())?;

    println!("cargo:rerun-if-changed=../bookshelf_lib/src/graphql_api");
    Ok(())
}
