//! `tk add` — append items to the end of the list.

use crate::output::{OutputMode, render_item, render_notice};
use clap::Args;
use ticks_core::{Item, ItemCollection};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Titles of the items to add, in order.
    #[arg(required = true, allow_hyphen_values = true)]
    pub titles: Vec<String>,
}

pub fn run_add(
    args: &AddArgs,
    list: &mut ItemCollection,
    output: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    for title in &args.titles {
        list.add(Item::new(title.as_str()));
    }

    render_notice(quiet, &format!("Added {} item(s)", args.titles.len()))?;
    render_item(&*list, output)?;
    Ok(())
}
