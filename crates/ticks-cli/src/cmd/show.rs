//! `tk show` — print the list.

use crate::output::{OutputMode, render_item};
use ticks_core::ItemCollection;

pub fn run_show(list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    render_item(list, output)?;
    Ok(())
}
