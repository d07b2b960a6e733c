//! Invoicing domain module.
//!
//! An in-memory, single-owner invoice collection: the entity model, a closed set of
//! operations applied by a pure reducer, and the read-side queries derived from it.
//! No IO, no persistence, no presentation.

pub mod collection;
pub mod input;
pub mod invoice;
pub mod operation;
pub mod query;
pub mod seed;
pub mod store;

pub use collection::InvoiceCollection;
pub use input::{FormMode, InvoiceForm, parse_price, parse_quantity, parse_status};
pub use invoice::{DEFAULT_PRICE, DEFAULT_QUANTITY, Invoice, InvoiceStatus};
pub use operation::Operation;
pub use query::{StatusSummary, count_by_status, total_amount};
pub use seed::sample_invoices;
pub use store::InvoiceStore;
