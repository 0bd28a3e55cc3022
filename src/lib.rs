pub mod cli;
pub mod error;
pub mod extract;
pub mod loader;
pub mod parser;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::Cli;
pub use error::{LoadError, Result};
pub use loader::{load_categories, load_database, LoadConfig, LoadSummary};
pub use ui::{LogUi, Phase, SilentUi, Ui};
