#[cfg(feature = "cli")]
pub mod cli;
pub mod roster_file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
