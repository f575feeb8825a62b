//! One module per subcommand. Handlers translate arguments, call into
//! `springgen-core`, and render results; no generation logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod types;
