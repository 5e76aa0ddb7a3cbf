//! Terminal output formatting

mod display;

pub use display::{print_chain_result, print_neighbours};
