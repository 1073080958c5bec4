//! Commands addressing one item by position: `tk at`, `tk done-at`,
//! `tk undone-at`, `tk remove-at`.
//!
//! The index is taken as text so that negative or non-numeric input is
//! reported as an invalid index rather than rejected by argument parsing.

use crate::output::{ItemView, OutputMode, render_item, render_notice};
use clap::Args;
use ticks_core::ItemCollection;

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Zero-based position of the item.
    #[arg(allow_hyphen_values = true)]
    pub index: String,
}

pub fn run_at(args: &IndexArgs, list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    let idx = list.resolve_index(&args.index)?;
    let item = list.item_at(idx)?;
    render_item(&ItemView::new(Some(idx), item), output)?;
    Ok(())
}

pub fn run_done_at(
    args: &IndexArgs,
    list: &ItemCollection,
    output: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    let idx = list.resolve_index(&args.index)?;
    list.mark_done_at(idx)?;

    render_notice(quiet, &format!("Marked item {idx} as done"))?;
    render_item(list, output)?;
    Ok(())
}

pub fn run_undone_at(
    args: &IndexArgs,
    list: &ItemCollection,
    output: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    let idx = list.resolve_index(&args.index)?;
    list.mark_undone_at(idx)?;

    render_notice(quiet, &format!("Marked item {idx} as not done"))?;
    render_item(list, output)?;
    Ok(())
}

pub fn run_remove_at(
    args: &IndexArgs,
    list: &mut ItemCollection,
    output: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    let idx = list.resolve_index(&args.index)?;
    let removed = list.remove_at(idx)?;

    render_notice(quiet, &format!("Removed {removed}"))?;
    render_item(&*list, output)?;
    Ok(())
}
