// 📊 Record Model - the long-form facts schema and its side relations

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// VALUE
// ============================================================================

/// A metric value. Converted values that are numerically integral render as
/// integers; everything else stays a float. `from_f64` is the only
/// constructor used by the parsers, so a `Float` is never integral - which
/// keeps the derived equality meaningful for exact-row deduplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn from_f64(v: f64) -> Self {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
            Value::Int(v as i64)
        } else {
            Value::Float(v)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
        }
    }
}

// Parsed values are always finite, so total equality is sound
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Int(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Value::Float(f) => {
                1u8.hash(state);
                f.to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

// ============================================================================
// FACT RECORD
// ============================================================================

/// One normalized (insurer, year, category, segment, channel, KPI) -> value
/// tuple. Blank dimensions are empty strings, never a null marker. The full
/// tuple including Value is the record's identity for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fact {
    #[serde(rename = "Insurer")]
    pub insurer: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "L1")]
    pub l1: String,
    #[serde(rename = "L2")]
    pub l2: String,
    #[serde(rename = "L3")]
    pub l3: String,
    #[serde(rename = "Individual_Group")]
    pub individual_group: String,
    #[serde(rename = "Distribution_Channel")]
    pub distribution_channel: String,
    #[serde(rename = "KPI")]
    pub kpi: String,
    #[serde(rename = "Value")]
    pub value: Value,
    #[serde(rename = "Source")]
    pub source: String,
}

impl Fact {
    /// Create a fact with blank category/segment/channel dimensions
    pub fn new(insurer: &str, year: i32, kpi: &str, value: Value, source: &str) -> Self {
        Fact {
            insurer: insurer.to_string(),
            year,
            l1: String::new(),
            l2: String::new(),
            l3: String::new(),
            individual_group: "Not Applicable".to_string(),
            distribution_channel: String::new(),
            kpi: kpi.to_string(),
            value,
            source: source.to_string(),
        }
    }

    pub fn with_segment(mut self, segment: &str) -> Self {
        self.individual_group = segment.to_string();
        self
    }

    pub fn with_l1(mut self, l1: &str) -> Self {
        self.l1 = l1.to_string();
        self
    }

    pub fn with_category(mut self, l1: &str, l2: &str, l3: &str) -> Self {
        self.l1 = l1.to_string();
        self.l2 = l2.to_string();
        self.l3 = l3.to_string();
        self
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.distribution_channel = channel.to_string();
        self
    }
}

// ============================================================================
// SIDE RELATIONS
// ============================================================================

/// State-level detail row from the state-wise layouts. Excluded from the
/// facts relation's category dimensions; contributes to it via group-sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateDetail {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Insurer")]
    pub insurer: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Individual_Group")]
    pub individual_group: String,
    #[serde(rename = "KPI")]
    pub kpi: String,
    #[serde(rename = "Value")]
    pub value: Value,
    #[serde(rename = "Source")]
    pub source: String,
}

/// Per-fund-type AUM detail row; the facts relation keeps only the
/// grand-total fund
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundDetail {
    #[serde(rename = "Insurer")]
    pub insurer: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Fund_Type")]
    pub fund_type: String,
    #[serde(rename = "AUM")]
    pub aum: Value,
    #[serde(rename = "Source")]
    pub source: String,
}

/// Per-period solvency detail row, including non-March quarters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolvencyDetail {
    #[serde(rename = "Insurer")]
    pub insurer: String,
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Solvency_Ratio")]
    pub solvency_ratio: Value,
    #[serde(rename = "Source")]
    pub source: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_integral_becomes_int() {
        assert_eq!(Value::from_f64(1_505_000_000.0), Value::Int(1_505_000_000));
        assert_eq!(Value::from_f64(0.0), Value::Int(0));
        assert_eq!(Value::from_f64(-3.0), Value::Int(-3));
    }

    #[test]
    fn test_value_fractional_stays_float() {
        assert_eq!(Value::from_f64(95.3), Value::Float(95.3));
        assert_eq!(Value::from_f64(1.85), Value::Float(1.85));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from_f64(42.0).to_string(), "42");
        assert_eq!(Value::from_f64(95.3).to_string(), "95.3");
    }

    #[test]
    fn test_fact_builder_defaults() {
        let fact = Fact::new("LIC", 2024, "Total Premium", Value::Int(100), "Part I - Table 2");
        assert_eq!(fact.l1, "");
        assert_eq!(fact.individual_group, "Not Applicable");
        assert_eq!(fact.distribution_channel, "");

        let fact = fact
            .with_segment("Individual")
            .with_category("Linked", "VIP", "Life")
            .with_channel("Brokers");
        assert_eq!(fact.individual_group, "Individual");
        assert_eq!(fact.l2, "VIP");
        assert_eq!(fact.distribution_channel, "Brokers");
    }

    #[test]
    fn test_fact_equality_includes_value() {
        let a = Fact::new("LIC", 2024, "Total Premium", Value::Int(100), "Part I - Table 2");
        let b = a.clone();
        let c = Fact::new("LIC", 2024, "Total Premium", Value::Int(101), "Part I - Table 2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
