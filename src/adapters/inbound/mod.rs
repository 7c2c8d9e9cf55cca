/// Inbound adapters - drive the application from user input
mod pantry_shell;

pub use pantry_shell::{PantryShell, ShellCommand};
