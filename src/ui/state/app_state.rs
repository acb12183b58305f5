use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::customer::{Customer, CustomerFilter};
use crate::domain::table::selection::SelectionTracker;

/// Signals backing the Customers page.
pub struct CustomersState {
    pub customers: Signal<Vec<Customer>>,
    pub filter_draft: Signal<CustomerFilter>,
    pub applied_filter: Signal<CustomerFilter>,
    pub selection: Signal<SelectionTracker>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl CustomersState {
    pub fn new() -> Self {
        Self {
            customers: use_signal(Vec::<Customer>::new),
            filter_draft: use_signal(CustomerFilter::default),
            applied_filter: use_signal(CustomerFilter::default),
            selection: use_signal(SelectionTracker::default),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
