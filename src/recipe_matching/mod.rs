/// Domain layer - recipe matching business logic
///
/// Pure types and services with no I/O. Network access, files and
/// presentation live behind the ports in `crate::ports`.
pub mod domain;
pub mod policies;
pub mod services;
