//! Loading the list a command operates on.
//!
//! `tk` keeps no state between runs. Each invocation starts from a list
//! document given with `--file` (or `-` for stdin), or from a fresh empty
//! list titled with the configured default.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use ticks_core::ItemCollection;
use tracing::debug;

/// Where the starting list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Fresh,
    Stdin,
    File(&'a Path),
}

impl<'a> Source<'a> {
    pub fn from_arg(file: Option<&'a Path>) -> Self {
        match file {
            None => Self::Fresh,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path),
        }
    }
}

/// Build the starting list for a command.
pub fn load_list(source: Source<'_>, default_title: &str) -> Result<ItemCollection> {
    let list = match source {
        Source::Fresh => ItemCollection::new(default_title),
        Source::Stdin => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read list document from stdin")?;
            ItemCollection::from_json(&input)?
        }
        Source::File(path) => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ItemCollection::from_json(&input)?
        }
    };

    debug!(title = list.title(), items = list.len(), "loaded list");
    Ok(list)
}
