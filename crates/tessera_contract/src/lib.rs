//! Dynamic structured-output contract builder.
//!
//! For a given table and HTTP method this crate derives the
//! [`ToolContract`](tessera_interface::ToolContract) a reasoning-engine
//! answer must satisfy: a recursive filter predicate for reads, updates and
//! deletes, and typed row objects for inserts and updates. The
//! `data_type -> representation` mapping lives in [`ValueRepr`] and is shared
//! with the validation stage's coercion routine so the two can never drift.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parameters;
mod repr;
mod selection;

pub use parameters::{
    FILTER_CONDITIONS, INSERTED_ROWS, PARAMETERS_FUNCTION, UPDATED_DATA, parameter_contract,
};
pub use repr::{ValueRepr, column_value_schema};
pub use selection::{RELEVANT_GROUPINGS, SELECT_FUNCTION, selection_contract};
