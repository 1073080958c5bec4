//! Commands addressing one item by exact title: `tk find`, `tk done`.

use crate::output::{ItemView, OutputMode, render_item, render_notice, render_optional_item};
use clap::Args;
use std::rc::Rc;
use ticks_core::ItemCollection;

#[derive(Args, Debug)]
pub struct TitleArgs {
    /// Exact title to match; the first matching item is used.
    #[arg(allow_hyphen_values = true)]
    pub title: String,
}

pub fn run_find(args: &TitleArgs, list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    let view = list.find_by_title(&args.title).map(|found| {
        let index = list.iter().position(|item| Rc::ptr_eq(item, found));
        ItemView::new(index, found)
    });
    render_optional_item(view, output)
}

pub fn run_done(
    args: &TitleArgs,
    list: &ItemCollection,
    output: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    if list.mark_done(&args.title) {
        render_notice(quiet, &format!("Marked \"{}\" as done", args.title))?;
    } else {
        render_notice(quiet, &format!("No item titled \"{}\"; nothing changed", args.title))?;
    }
    render_item(list, output)?;
    Ok(())
}
