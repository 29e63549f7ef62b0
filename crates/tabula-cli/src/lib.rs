//! Interactive terminal front-end for tabula.

pub mod command;
pub mod error;
pub mod history;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::CliError;
pub use history::History;
pub use session::{Session, SessionConfig};
