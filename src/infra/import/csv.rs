use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::entities::customer::Customer;

const BUNDLED_CUSTOMERS: &str = include_str!("../../../assets/customers.csv");

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("csv header is required")]
    EmptyHeader,
    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),
    #[error("row {row}: `{value}` is not a valid {column}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: customer id is blank")]
    BlankId { row: usize },
    #[error("row {row}: duplicate customer id `{id}`")]
    DuplicateId { row: usize, id: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        HeaderIndex(
            headers
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.trim().to_ascii_lowercase().replace(' ', "_"), idx))
                .collect(),
        )
    }

    fn require(&self, name: &'static str) -> Result<usize, ImportError> {
        self.0
            .get(name)
            .copied()
            .ok_or(ImportError::MissingColumn(name))
    }

    fn optional(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }
}

fn cell(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|idx| record.get(idx))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, ',' | '$' | ' '))
        .collect();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn parse_customers<R: Read>(reader: R) -> Result<Vec<Customer>, ImportError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ImportError::EmptyHeader);
    }

    let index = HeaderIndex::new(&headers);
    let id_idx = index.require("id")?;
    let name_idx = index.require("name")?;
    let email_idx = index.optional("email");
    let city_idx = index.optional("city");
    let postal_idx = index.optional("postal_code");
    let orders_idx = index.optional("orders");
    let spent_idx = index.optional("spent");
    let last_order_idx = index.optional("last_order");

    let mut seen = BTreeSet::new();
    let mut customers = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        let row = offset + 1;

        let id = cell(&record, Some(id_idx));
        if id.is_empty() {
            return Err(ImportError::BlankId { row });
        }
        if !seen.insert(id.clone()) {
            return Err(ImportError::DuplicateId { row, id });
        }

        let orders_text = cell(&record, orders_idx);
        let orders = if orders_text.is_empty() {
            0
        } else {
            orders_text
                .parse::<i64>()
                .map_err(|_| ImportError::InvalidValue {
                    row,
                    column: "orders",
                    value: orders_text.clone(),
                })?
        };

        let spent_text = cell(&record, spent_idx);
        let spent = parse_amount(&spent_text).ok_or_else(|| ImportError::InvalidValue {
            row,
            column: "spent",
            value: spent_text.clone(),
        })?;

        let last_order_text = cell(&record, last_order_idx);
        let last_order = if last_order_text.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(&last_order_text, "%Y-%m-%d").map_err(|_| {
                    ImportError::InvalidValue {
                        row,
                        column: "last_order",
                        value: last_order_text.clone(),
                    }
                })?,
            )
        };

        customers.push(Customer {
            id,
            name: cell(&record, Some(name_idx)),
            email: cell(&record, email_idx),
            city: cell(&record, city_idx),
            postal_code: cell(&record, postal_idx),
            orders,
            spent,
            last_order,
        });
    }

    Ok(customers)
}

pub fn import_customers_csv(csv_path: &Path) -> Result<Vec<Customer>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    parse_customers(file)
        .with_context(|| format!("failed to import customers from {}", csv_path.display()))
}

pub fn bundled_customers() -> Result<Vec<Customer>> {
    parse_customers(BUNDLED_CUSTOMERS.as_bytes()).context("bundled customer data is invalid")
}
