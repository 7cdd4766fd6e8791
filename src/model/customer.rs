//! Customer and address data holders.

/// A customer record, used for billing detail and recurring-payment CRUD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    /// Merchant-assigned customer identifier.
    pub id: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Home phone number.
    pub home_phone: Option<String>,
    /// Mobile phone number.
    pub mobile_phone: Option<String>,
    /// Postal address.
    pub address: Option<Address>,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// First street address line.
    pub street_address1: Option<String>,
    /// Second street address line.
    pub street_address2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country code.
    pub country: Option<String>,
}

impl Address {
    /// Creates an address carrying only a postal code.
    ///
    /// Tokenization calls typically send just the postal code for
    /// address verification.
    #[must_use]
    pub fn with_postal_code(postal_code: impl Into<String>) -> Self {
        Self { postal_code: Some(postal_code.into()), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_with_postal_code() {
        let address = Address::with_postal_code("12345");
        assert_eq!(address.postal_code.as_deref(), Some("12345"));
        assert!(address.city.is_none());
    }

    #[test]
    fn test_customer_default_is_empty() {
        let customer = Customer::default();
        assert!(customer.id.is_none());
        assert!(customer.address.is_none());
    }
}
