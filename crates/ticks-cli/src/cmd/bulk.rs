//! Whole-list commands: `tk done-all`, `tk undone-all`, `tk filter`.

use crate::output::{OutputMode, render_item, render_notice};
use clap::{ArgGroup, Args};
use ticks_core::ItemCollection;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("state").required(true).args(["done", "not_done"])))]
pub struct FilterArgs {
    /// Keep only finished items.
    #[arg(long)]
    pub done: bool,

    /// Keep only unfinished items.
    #[arg(long)]
    pub not_done: bool,

    /// Title for the filtered list (defaults to the current title).
    #[arg(long)]
    pub title: Option<String>,
}

pub fn run_done_all(list: &ItemCollection, output: OutputMode, quiet: bool) -> anyhow::Result<()> {
    list.mark_all_done();
    render_notice(quiet, &format!("Marked {} item(s) as done", list.len()))?;
    render_item(list, output)?;
    Ok(())
}

pub fn run_undone_all(list: &ItemCollection, output: OutputMode, quiet: bool) -> anyhow::Result<()> {
    list.mark_all_undone();
    render_notice(quiet, &format!("Marked {} item(s) as not done", list.len()))?;
    render_item(list, output)?;
    Ok(())
}

pub fn run_filter(args: &FilterArgs, list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    let filtered = match (&args.title, args.done) {
        (None, true) => list.all_done(),
        (None, false) => list.all_not_done(),
        (Some(title), done) => list.filter_titled(|item| item.is_done() == done, title.as_str()),
    };
    render_item(&filtered, output)?;
    Ok(())
}
