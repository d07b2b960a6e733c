//! Boundary conversions from raw text input.
//!
//! The engine only ever sees typed `Invoice` values; anything a user typed is turned
//! into one here, with the default-on-parse-failure rules applied.

use crate::invoice::{DEFAULT_PRICE, DEFAULT_QUANTITY, Invoice, InvoiceStatus};
use crate::operation::Operation;

/// Leading integer of `text`: optional whitespace, optional sign, then the longest run
/// of ASCII digits. Trailing garbage is ignored (`"12abc"` → 12).
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Quantity from user input. Unparsable or zero becomes 1.
pub fn parse_quantity(text: &str) -> i64 {
    match parse_leading_integer(text) {
        Some(quantity) if quantity != 0 => quantity,
        _ => DEFAULT_QUANTITY,
    }
}

/// Price from user input. Unparsable becomes 0.
pub fn parse_price(text: &str) -> i64 {
    parse_leading_integer(text).unwrap_or(DEFAULT_PRICE)
}

/// Status from user input: `paid` or `unpaid`, case-insensitive. Anything else is unpaid.
pub fn parse_status(text: &str) -> InvoiceStatus {
    let text = text.trim();
    if text.eq_ignore_ascii_case("paid") {
        InvoiceStatus::Paid
    } else {
        InvoiceStatus::Unpaid
    }
}

/// Whether a form adds a new invoice or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the invoice with this id. The id is fixed for the life of the form.
    Edit { id: String },
}

/// Raw field values as typed into an add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceForm {
    mode: FormMode,
    id: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    pub status: String,
}

impl InvoiceForm {
    /// Empty add form.
    pub fn blank() -> Self {
        Self {
            mode: FormMode::Create,
            id: String::new(),
            customer_name: String::new(),
            product_name: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            price: DEFAULT_PRICE.to_string(),
            status: "unpaid".to_string(),
        }
    }

    /// Edit form prefilled from `invoice`.
    pub fn for_edit(invoice: &Invoice) -> Self {
        Self {
            mode: FormMode::Edit {
                id: invoice.id.clone(),
            },
            id: invoice.id.clone(),
            customer_name: invoice.customer_name.clone(),
            product_name: invoice.product_name.clone(),
            quantity: invoice.quantity.to_string(),
            price: invoice.price.to_string(),
            status: invoice.status.label().to_lowercase(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the id field. Ignored in edit mode; returns whether the value was taken.
    pub fn set_id(&mut self, id: impl Into<String>) -> bool {
        if self.is_edit() {
            return false;
        }
        self.id = id.into();
        true
    }

    /// Typed candidate with the parse defaults applied.
    pub fn to_candidate(&self) -> Invoice {
        let id = match &self.mode {
            FormMode::Create => self.id.clone(),
            FormMode::Edit { id } => id.clone(),
        };
        Invoice {
            id,
            customer_name: self.customer_name.clone(),
            product_name: self.product_name.clone(),
            quantity: parse_quantity(&self.quantity),
            price: parse_price(&self.price),
            status: parse_status(&self.status),
        }
    }

    /// `Create` for an add form, `Update` for an edit form.
    pub fn to_operation(&self) -> Operation {
        let candidate = self.to_candidate();
        match self.mode {
            FormMode::Create => Operation::Create(candidate),
            FormMode::Edit { .. } => Operation::Update(candidate),
        }
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::blank()
    }
}
