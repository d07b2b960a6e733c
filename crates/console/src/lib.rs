//! `invoicedesk-console`
//!
//! **Responsibility:** thin line-oriented front end over the invoice store.
//!
//! This crate only collects text, forwards operations to `InvoiceStore::submit`, and
//! renders whatever snapshot comes back. All rules live in `invoicedesk-invoicing`.

pub mod command;
pub mod config;
pub mod console;

pub use command::{Command, CommandError};
pub use config::ConsoleConfig;
pub use console::Console;
