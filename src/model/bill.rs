//! Billable line items.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::Customer;

/// A billable line item associated with a payment or a bill load.
///
/// Charge requests against hosted bill data identify bills by type and
/// identifiers only; blind charges and bill loads additionally carry the
/// full presentment detail (due date, presentment mode, obligor).
///
/// Optional string fields distinguish absent from blank: `None` is omitted
/// from the wire entirely, `Some(String::new())` is sent as an empty
/// element. The gateway treats the two differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    /// Gateway-configured bill type name (e.g. "Tax Payments").
    pub bill_type: Option<String>,
    /// First bill identifier.
    pub identifier1: String,
    /// Second bill identifier, when the bill type uses one.
    pub identifier2: Option<String>,
    /// Amount owed on this bill.
    pub amount: Decimal,
    /// Date the bill is due.
    pub due_date: Option<NaiveDate>,
    /// How the bill is presented to the payer.
    pub presentment: Option<BillPresentment>,
    /// The obligor, for bill loads.
    pub customer: Option<Customer>,
}

impl Bill {
    /// Creates a bill with the identifying fields only.
    #[must_use]
    pub fn new(identifier1: impl Into<String>, amount: Decimal) -> Self {
        Self {
            bill_type: None,
            identifier1: identifier1.into(),
            identifier2: None,
            amount,
            due_date: None,
            presentment: None,
            customer: None,
        }
    }
}

/// How a loaded bill is presented to the payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillPresentment {
    /// Full bill detail is shown.
    Full,
    /// Only a summary is shown.
    Summary,
}

impl BillPresentment {
    /// Gateway wire text for this presentment mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Summary => "Summary",
        }
    }
}
