pub mod error;
pub mod order;
mod repl;
pub mod report;
pub mod storage;

pub use error::{Error, Result};
pub use repl::*;
pub use storage::{Category, Config, Inventory, Item};
