pub mod cell;
pub mod column;
pub mod pagination;
pub mod selection;
pub mod sorting;
