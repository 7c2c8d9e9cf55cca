/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the traits the application core uses to
/// reach the catalog, the auth backend, files and the terminal.
pub mod outbound;
