use chrono::NaiveDate;

use crate::domain::table::cell::CellValue;
use crate::domain::table::column::{RowKey, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub postal_code: String,
    pub orders: i64,
    pub spent: f64,
    pub last_order: Option<NaiveDate>,
}

impl TableRow for Customer {
    fn row_key(&self) -> RowKey {
        RowKey(self.id.clone())
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::text(self.id.as_str()),
            "name" => CellValue::text(self.name.as_str()),
            "email" => CellValue::text(self.email.as_str()),
            "city" => CellValue::text(self.city.as_str()),
            "postal_code" => CellValue::text(self.postal_code.as_str()),
            "orders" => CellValue::Integer(self.orders),
            "spent" => CellValue::Number(self.spent),
            "last_order" => self.last_order.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Criteria from the Customers filter form. Blank fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub city: String,
    pub postal_code: String,
    pub search: String,
}

impl CustomerFilter {
    pub fn is_empty(&self) -> bool {
        self.city.trim().is_empty()
            && self.postal_code.trim().is_empty()
            && self.search.trim().is_empty()
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        let search = self.search.trim().to_lowercase();
        contains_ci(&customer.city, &self.city)
            && contains_ci(&customer.postal_code, &self.postal_code)
            && (search.is_empty()
                || [
                    &customer.id,
                    &customer.name,
                    &customer.email,
                    &customer.city,
                    &customer.postal_code,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&search)))
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
