//! Closed type taxonomy shared by the whole model.
//!
//! Every enum here serializes as its lower/snake-case string, which is also the
//! only spelling accepted by the structural validator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDataType {
    String,
    Number,
    Date,
    Boolean,
    Currency,
    Smallint,
    Bigint,
    Float,
    Double,
    Decimal,
    Numeric,
    Money,
}

impl FieldDataType {
    pub const ALL: [FieldDataType; 12] = [
        FieldDataType::String,
        FieldDataType::Number,
        FieldDataType::Date,
        FieldDataType::Boolean,
        FieldDataType::Currency,
        FieldDataType::Smallint,
        FieldDataType::Bigint,
        FieldDataType::Float,
        FieldDataType::Double,
        FieldDataType::Decimal,
        FieldDataType::Numeric,
        FieldDataType::Money,
    ];

    /// Parse a canonical type name. Matching is exact (no case folding).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::String => "string",
            FieldDataType::Number => "number",
            FieldDataType::Date => "date",
            FieldDataType::Boolean => "boolean",
            FieldDataType::Currency => "currency",
            FieldDataType::Smallint => "smallint",
            FieldDataType::Bigint => "bigint",
            FieldDataType::Float => "float",
            FieldDataType::Double => "double",
            FieldDataType::Decimal => "decimal",
            FieldDataType::Numeric => "numeric",
            FieldDataType::Money => "money",
        }
    }

    /// Numeric types accept aggregations and range operators.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldDataType::Number
                | FieldDataType::Currency
                | FieldDataType::Smallint
                | FieldDataType::Bigint
                | FieldDataType::Float
                | FieldDataType::Double
                | FieldDataType::Decimal
                | FieldDataType::Numeric
                | FieldDataType::Money
        )
    }

    /// Types a report may be grouped by.
    pub fn is_groupable(&self) -> bool {
        matches!(
            self,
            FieldDataType::String
                | FieldDataType::Date
                | FieldDataType::Boolean
                | FieldDataType::Number
                | FieldDataType::Smallint
                | FieldDataType::Bigint
        )
    }

    pub fn is_date(&self) -> bool {
        matches!(self, FieldDataType::Date)
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation applied to a numeric selected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationType {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl AggregationType {
    pub const ALL: [AggregationType; 5] = [
        AggregationType::Sum,
        AggregationType::Avg,
        AggregationType::Count,
        AggregationType::Min,
        AggregationType::Max,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationType::Sum => "sum",
            AggregationType::Avg => "avg",
            AggregationType::Count => "count",
            AggregationType::Min => "min",
            AggregationType::Max => "max",
        }
    }
}

impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    StartsWith,
    GreaterThan,
    LessThan,
    Between,
    InList,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 8] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::Contains,
        FilterOperator::StartsWith,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::Between,
        FilterOperator::InList,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "not_equals",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::GreaterThan => "greater_than",
            FilterOperator::LessThan => "less_than",
            FilterOperator::Between => "between",
            FilterOperator::InList => "in_list",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
