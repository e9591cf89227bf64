//! Prints the backend provisioning manifest as JSON.
//!
//! The deploy pipeline feeds this to the provisioning tool; the
//! runtime service never reads it.

use anyhow::{Context, Result};
use provision::BackendDefinition;

fn main() -> Result<()> {
    let manifest = BackendDefinition::birdwatch()
        .to_manifest_json()
        .context("Failed to serialize backend manifest")?;
    println!("{}", manifest);
    Ok(())
}
