//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod console_email_service;
mod in_memory_account_repository;
mod postgres_admin_system_repository;
mod postgres_system_repository;
mod postgres_user_repository;
mod smtp_email_service;

pub use console_email_service::ConsoleEmailService;
pub use in_memory_account_repository::InMemoryAccountRepository;
pub use postgres_admin_system_repository::PostgresAdminSystemRepository;
pub use postgres_system_repository::PostgresSystemRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use smtp_email_service::{SmtpEmailConfig, SmtpEmailService};
