/// Application layer - Use cases, DTOs and session state
///
/// This layer orchestrates domain services and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod session;
pub mod use_cases;
