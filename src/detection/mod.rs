//! Detection implementation submodule.
//!
//! - `extract_edition`: edition from the `@license` header line
//! - `extract_version`: version label from the `@copyright` header line
//! - `year_to_version`: static copyright year lookup table

mod parser;
mod year_table;

pub(crate) use parser::{extract_edition, extract_version};
#[cfg(test)]
pub(crate) use year_table::year_to_version;
