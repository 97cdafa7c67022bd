use serde::{Deserialize, Serialize};

use orderentry_core::{BoundaryResult, CustomerId, Entity};

/// Customer record resolved from the customer directory.
///
/// Postal code and country select the tax entries that apply to the
/// customer's orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    #[serde(default)]
    name: String,
    postal_code: String,
    country: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Customer directory boundary.
///
/// `Ok(None)` means the directory answered and does not know the customer;
/// `Err` means the directory itself failed.
pub trait CustomerLookup {
    fn get(&self, customer_id: CustomerId) -> BoundaryResult<Option<Customer>>;
}

impl<T: CustomerLookup + ?Sized> CustomerLookup for &T {
    fn get(&self, customer_id: CustomerId) -> BoundaryResult<Option<Customer>> {
        (**self).get(customer_id)
    }
}
