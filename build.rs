//! Build script.

use std::error::Error;
use vergen_git2::{BuildBuilder, Emitter, Git2Builder};

// Main entry point for the build script.
fn main() -> Result<(), Box<dyn Error>> {
    // fetch some version information
    Emitter::default()
        .add_instructions(&BuildBuilder::all_build()?)?
        .add_instructions(&Git2Builder::all_git()?)?
        .emit_and_set()?;

    Ok(())
}
