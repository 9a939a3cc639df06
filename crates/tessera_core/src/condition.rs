//! Recursive filter predicates over table columns.

use serde::{Deserialize, Serialize};

/// Boolean connective joining the members of a condition group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum BooleanClause {
    /// Every member must hold
    And,
    /// At least one member must hold
    Or,
}

/// Column comparison operators the engine may choose from.
///
/// The wire names are the SQL-flavoured spellings the contract exposes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum ComparisonOperator {
    /// Equality
    #[serde(rename = "=")]
    Eq,
    /// Inequality
    #[serde(rename = "!=")]
    Ne,
    /// Strictly greater
    #[serde(rename = ">")]
    Gt,
    /// Strictly smaller
    #[serde(rename = "<")]
    Lt,
    /// Greater or equal
    #[serde(rename = ">=")]
    Ge,
    /// Smaller or equal
    #[serde(rename = "<=")]
    Le,
    /// SQL LIKE pattern match
    #[serde(rename = "LIKE")]
    Like,
    /// Membership in a value list
    #[serde(rename = "IN")]
    In,
    /// Negated identity, SQL `IS NOT`
    #[serde(rename = "IS NOT")]
    IsNot,
}

impl ComparisonOperator {
    /// Wire spelling of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Like => "LIKE",
            ComparisonOperator::In => "IN",
            ComparisonOperator::IsNot => "IS NOT",
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionLeaf {
    /// Column the comparison applies to; `"id"` is always admissible
    pub column: String,
    /// Comparison operator
    pub operator: ComparisonOperator,
    /// Comparison value; an array for the `IN` operator
    pub value: serde_json::Value,
}

/// A group of conditions joined by one boolean connective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// Connective applied across `conditions`
    pub boolean_clause: BooleanClause,
    /// Members, each a leaf or a nested group
    pub conditions: Vec<Condition>,
}

/// A recursive filter predicate: either a single comparison or a
/// boolean-joined group of nested predicates.
///
/// Serialized untagged; the two shapes are disjoint (a group carries
/// `boolean_clause`/`conditions`, a leaf `column`/`operator`/`value`).
///
/// # Examples
///
/// ```
/// use tessera_core::Condition;
///
/// let tree: Condition = serde_json::from_value(serde_json::json!({
///     "boolean_clause": "AND",
///     "conditions": [
///         {"column": "age", "operator": ">", "value": 30},
///         {
///             "boolean_clause": "OR",
///             "conditions": [
///                 {"column": "name", "operator": "LIKE", "value": "%smith%"},
///                 {"column": "id", "operator": "IN", "value": [1, 2, 3]},
///             ],
///         },
///     ],
/// }))
/// .unwrap();
///
/// match tree {
///     Condition::Group(group) => assert_eq!(group.conditions.len(), 2),
///     Condition::Leaf(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// A boolean-joined group of nested predicates
    Group(ConditionGroup),
    /// A single column comparison
    Leaf(ConditionLeaf),
}
