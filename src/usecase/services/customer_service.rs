use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use crate::domain::entities::customer::{Customer, CustomerFilter};
use crate::domain::table::column::TableRow;
use crate::domain::table::selection::SelectionTracker;
use crate::infra::import::csv::{bundled_customers, import_customers_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub skipped: usize,
}

pub struct CustomerService;

impl CustomerService {
    pub fn load_demo() -> Result<Vec<Customer>> {
        bundled_customers()
    }

    pub fn import_csv(path: &Path) -> Result<Vec<Customer>> {
        import_customers_csv(path)
    }

    /// Appends imported customers whose id is not loaded yet.
    pub fn merge(existing: &mut Vec<Customer>, imported: Vec<Customer>) -> MergeSummary {
        let mut known: BTreeSet<String> = existing.iter().map(|c| c.id.clone()).collect();
        let mut summary = MergeSummary {
            added: 0,
            skipped: 0,
        };
        for customer in imported {
            if known.insert(customer.id.clone()) {
                existing.push(customer);
                summary.added += 1;
            } else {
                summary.skipped += 1;
            }
        }
        summary
    }

    pub fn filtered(customers: &[Customer], filter: &CustomerFilter) -> Vec<Customer> {
        if filter.is_empty() {
            return customers.to_vec();
        }
        customers
            .iter()
            .filter(|customer| filter.matches(customer))
            .cloned()
            .collect()
    }

    /// Removes the selected customers and clears their keys from the
    /// selection. Returns how many were removed.
    pub fn remove_selected(customers: &mut Vec<Customer>, selection: &mut SelectionTracker) -> usize {
        let before = customers.len();
        customers.retain(|customer| !selection.is_selected(&customer.row_key()));
        selection.retain(customers.as_slice());
        before - customers.len()
    }
}
