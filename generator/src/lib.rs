//! Name Generator
//!
//! Picks one given name at random from a fixed female or male table.

pub mod args;
pub mod category;
pub mod config;
pub mod error;
pub mod names;
pub mod picker;

pub use args::category_from_args;
pub use category::Category;
pub use config::Config;
pub use error::{Error, InvalidArguments, Result, USAGE};
pub use names::NameList;
pub use picker::{NamePicker, Selection};
