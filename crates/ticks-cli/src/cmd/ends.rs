//! `tk first`, `tk last`, `tk shift`, `tk pop`.

use crate::output::{ItemView, OutputMode, render_item, render_notice, render_optional_item};
use ticks_core::ItemCollection;

pub fn run_first(list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    let view = list.first().map(|item| ItemView::new(Some(0), item));
    render_optional_item(view, output)
}

pub fn run_last(list: &ItemCollection, output: OutputMode) -> anyhow::Result<()> {
    let view = list
        .last()
        .map(|item| ItemView::new(Some(list.len() - 1), item));
    render_optional_item(view, output)
}

pub fn run_shift(list: &mut ItemCollection, output: OutputMode, quiet: bool) -> anyhow::Result<()> {
    match list.shift() {
        Some(item) => render_notice(quiet, &format!("Removed {item}"))?,
        None => render_notice(quiet, "List is empty; nothing removed")?,
    }
    render_item(&*list, output)?;
    Ok(())
}

pub fn run_pop(list: &mut ItemCollection, output: OutputMode, quiet: bool) -> anyhow::Result<()> {
    match list.pop() {
        Some(item) => render_notice(quiet, &format!("Removed {item}"))?,
        None => render_notice(quiet, "List is empty; nothing removed")?,
    }
    render_item(&*list, output)?;
    Ok(())
}
