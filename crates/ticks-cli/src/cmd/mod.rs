pub mod add;
pub mod bulk;
pub mod completions;
pub mod ends;
pub mod index;
pub mod show;
pub mod title;
