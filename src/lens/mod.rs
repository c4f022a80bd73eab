//! Lens module
//!
//! Lenses hold the read-side logic of the tool. Each lens works on an open
//! [`DatabaseConn`](crate::database::DatabaseConn) and returns plain,
//! serializable records that the CLI renders with [`utils::OutputFormat`].
//!
//! - `catalog`: table listing, column inspection and database file info
//! - `utils`: output formats and display helpers

pub mod catalog;
pub mod utils;
