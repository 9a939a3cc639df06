//! Units of work produced by the selection stage.

use crate::HttpMethod;
use serde::{Deserialize, Serialize};

/// One (task, application, table, HTTP method) unit of work.
///
/// Produced once by Selection, consumed exactly once by Generation.
/// `table_name` is free text from the engine and may name a table the
/// application does not carry; resolution happens in the generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// One step of the user's instruction, in the engine's words
    pub task: String,
    /// Name of the application to operate on
    pub application_name: String,
    /// Name of the table within that application
    pub table_name: String,
    /// The CRUD method this task maps to
    pub http_method: HttpMethod,
}
