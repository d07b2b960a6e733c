use crate::invoice::{Invoice, InvoiceStatus};

/// The four demo invoices the client starts with.
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice::new("HD001", "Nguyen Van A", "Product 1")
            .with_quantity(2)
            .with_price(50_000)
            .with_status(InvoiceStatus::Paid),
        Invoice::new("HD002", "Tran Thi B", "Product 2")
            .with_quantity(1)
            .with_price(120_000),
        Invoice::new("HD003", "Hoang Van C", "Product 3")
            .with_quantity(1)
            .with_price(10_000),
        Invoice::new("HD004", "Le Thi D", "Product 4")
            .with_quantity(3)
            .with_price(75_000)
            .with_status(InvoiceStatus::Paid),
    ]
}
