//! Payment method descriptors.
//!
//! A request carries exactly one payment method kind: clear-text card data,
//! an ACH account, or an opaque token previously issued by the gateway. The
//! enum makes the "exactly one kind" invariant structural rather than a
//! runtime check.

/// The payment method a request charges or tokenizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Clear-text credit card data.
    Card(CardData),
    /// ACH bank account data.
    Ach(AchAccount),
    /// An opaque multi-use token issued by the gateway.
    Token(TokenData),
}

impl PaymentMethod {
    /// Returns the kind of this payment method.
    #[must_use]
    pub fn kind(&self) -> PaymentMethodKind {
        match self {
            Self::Card(_) => PaymentMethodKind::Card,
            Self::Ach(_) => PaymentMethodKind::Ach,
            Self::Token(_) => PaymentMethodKind::Token,
        }
    }
}

/// Discriminant for [`PaymentMethod`], used by operation routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodKind {
    /// Clear-text card.
    Card,
    /// ACH account.
    Ach,
    /// Gateway-issued token.
    Token,
}

/// Clear-text credit card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    /// Primary account number.
    pub number: String,
    /// Expiration month (1-12).
    pub expiration_month: u32,
    /// Four-digit expiration year.
    pub expiration_year: i32,
    /// Card verification number, when collected.
    pub security_code: Option<String>,
    /// Name embossed on the card.
    pub card_holder_name: Option<String>,
}

/// ACH bank account data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchAccount {
    /// Bank account number.
    pub account_number: String,
    /// ABA routing number.
    pub routing_number: String,
    /// Checking or savings.
    pub account_type: AccountType,
    /// Personal or business account.
    pub check_type: CheckType,
    /// NACHA standard entry class code.
    pub sec_code: SecCode,
    /// Name on the account.
    pub check_holder_name: Option<String>,
    /// Bank display name.
    pub bank_name: Option<String>,
}

/// A gateway-issued multi-use token standing in for card or ACH data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// The opaque token value.
    pub value: String,
    /// Expiration month of the underlying card, when known.
    pub expiration_month: Option<u32>,
    /// Expiration year of the underlying card, when known.
    pub expiration_year: Option<i32>,
}

/// Bank account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
}

impl AccountType {
    /// Gateway wire text for this account type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
        }
    }
}

/// Check ownership type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckType {
    /// Personal account.
    Personal,
    /// Business account.
    Business,
}

impl CheckType {
    /// Gateway wire text for this check type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Business => "Business",
        }
    }
}

/// NACHA standard entry class code for ACH transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecCode {
    /// Internet-initiated entry.
    Web,
    /// Prearranged payment and deposit.
    Ppd,
    /// Corporate credit or debit.
    Ccd,
    /// Telephone-initiated entry.
    Tel,
}

impl SecCode {
    /// Gateway wire text for this SEC code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "WEB",
            Self::Ppd => "PPD",
            Self::Ccd => "CCD",
            Self::Tel => "TEL",
        }
    }
}
