//! Ordered invoice collection and the pure mutation engine.
//!
//! Every operation takes `&self` and returns a new collection. A rejected operation
//! returns an error and the original collection is untouched, so no partial state is
//! ever observable.

use serde::{Deserialize, Serialize};

use invoicedesk_core::{DomainError, DomainResult, Entity, Reducer};

use crate::invoice::{Invoice, InvoiceStatus};
use crate::operation::Operation;

/// Invoices in insertion order, ids unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvoiceCollection {
    invoices: Vec<Invoice>,
}

impl InvoiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection by creating each invoice in turn.
    ///
    /// Fails on the first invoice `create` would reject.
    pub fn from_invoices(invoices: impl IntoIterator<Item = Invoice>) -> DomainResult<Self> {
        invoices
            .into_iter()
            .try_fold(Self::new(), |collection, invoice| collection.create(&invoice))
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Invoice> {
        self.invoices.iter()
    }

    pub fn as_slice(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.has_id(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.invoices.iter().position(|invoice| invoice.has_id(id))
    }

    /// Append `candidate` at the end.
    pub fn create(&self, candidate: &Invoice) -> DomainResult<Self> {
        candidate.validate()?;
        if self.contains(&candidate.id) {
            return Err(DomainError::duplicate_id(candidate.id.clone()));
        }

        let mut invoices = self.invoices.clone();
        invoices.push(candidate.clone());
        Ok(Self { invoices })
    }

    /// Replace the invoice whose id matches `candidate.id`, in place.
    ///
    /// An id that matches nothing is rejected with `NotFound`.
    pub fn update(&self, candidate: &Invoice) -> DomainResult<Self> {
        candidate.validate()?;
        let idx = self
            .position(&candidate.id)
            .ok_or_else(|| DomainError::not_found(candidate.id.clone()))?;

        let mut invoices = self.invoices.clone();
        invoices[idx] = candidate.clone();
        Ok(Self { invoices })
    }

    /// Remove the invoice with `id`, if any.
    pub fn delete(&self, id: &str) -> Self {
        Self {
            invoices: self
                .invoices
                .iter()
                .filter(|invoice| !invoice.has_id(id))
                .cloned()
                .collect(),
        }
    }

    /// Flip the status of the invoice with `id`, if any.
    pub fn toggle_status(&self, id: &str) -> Self {
        Self {
            invoices: self
                .invoices
                .iter()
                .map(|invoice| {
                    if invoice.has_id(id) {
                        invoice.with_toggled_status()
                    } else {
                        invoice.clone()
                    }
                })
                .collect(),
        }
    }

    /// Number of invoices currently in `status`.
    pub fn count_by_status(&self, status: InvoiceStatus) -> usize {
        self.invoices
            .iter()
            .filter(|invoice| invoice.status == status)
            .count()
    }
}

impl Reducer for InvoiceCollection {
    type Operation = Operation;
    type Error = DomainError;

    fn reduce(&self, operation: &Self::Operation) -> Result<Self, Self::Error> {
        match operation {
            Operation::Create(candidate) => self.create(candidate),
            Operation::Update(candidate) => self.update(candidate),
            Operation::Delete(id) => Ok(self.delete(id)),
            Operation::ToggleStatus(id) => Ok(self.toggle_status(id)),
        }
    }
}

impl<'a> IntoIterator for &'a InvoiceCollection {
    type Item = &'a Invoice;
    type IntoIter = core::slice::Iter<'a, Invoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.invoices.iter()
    }
}

// Deserializing goes through `from_invoices` so a snapshot with duplicate ids or
// empty required fields is rejected instead of smuggled in.
impl<'de> Deserialize<'de> for InvoiceCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let invoices = Vec::<Invoice>::deserialize(deserializer)?;
        Self::from_invoices(invoices).map_err(serde::de::Error::custom)
    }
}
