use serde::{Deserialize, Serialize};

use invoicedesk_core::{DomainError, DomainResult, Entity, RequiredField};

/// Quantity used when the entered value cannot be parsed.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Price used when the entered value cannot be parsed.
pub const DEFAULT_PRICE: i64 = 0;

/// Payment status. Exactly two states; new invoices start out unpaid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 2] = [InvoiceStatus::Paid, InvoiceStatus::Unpaid];

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            InvoiceStatus::Paid => InvoiceStatus::Unpaid,
            InvoiceStatus::Unpaid => InvoiceStatus::Paid,
        }
    }

    pub fn is_paid(self) -> bool {
        self == InvoiceStatus::Paid
    }

    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Unpaid => "Unpaid",
        }
    }

    /// Caption for the button that flips this status.
    pub fn toggle_action_label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Mark as unpaid",
            InvoiceStatus::Unpaid => "Mark as paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single billing record.
///
/// `price` is an integer amount in whatever unit the caller bills in; the engine never
/// interprets currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl Invoice {
    /// New unpaid invoice with default quantity and price.
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity: DEFAULT_QUANTITY,
            price: DEFAULT_PRICE,
            status: InvoiceStatus::default(),
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    /// `quantity × price`, recomputed on every call.
    ///
    /// Widened to `i128` so no pair of `i64` inputs can overflow.
    pub fn total_amount(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.price)
    }

    /// Required text fields must be non-empty. Checked in field order so the first
    /// missing one is reported.
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            (RequiredField::Id, &self.id),
            (RequiredField::CustomerName, &self.customer_name),
            (RequiredField::ProductName, &self.product_name),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(DomainError::missing_field(*field)),
            None => Ok(()),
        }
    }

    /// Same record with its status flipped.
    pub(crate) fn with_toggled_status(&self) -> Self {
        Self {
            status: self.status.toggled(),
            ..self.clone()
        }
    }
}

impl Entity for Invoice {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
