//! Core data types for the Tessera inference pipeline.
//!
//! This crate provides the foundation data types shared by every stage:
//! application schemas, conversation history, the recursive condition tree,
//! and the request/response envelopes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod condition;
mod grouping;
mod http;
mod message;
mod request;
mod schema;

pub use condition::{BooleanClause, ComparisonOperator, Condition, ConditionGroup, ConditionLeaf};
pub use grouping::Grouping;
pub use http::HttpMethod;
pub use message::{ChatMessage, Role};
pub use request::{HttpMethodResult, InferenceRequest, InferenceResponse, Row};
pub use schema::{ApplicationContent, Column, DataType, PrimaryKey, Table};
