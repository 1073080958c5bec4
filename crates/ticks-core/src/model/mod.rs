pub mod collection;
pub mod item;
pub mod record;
