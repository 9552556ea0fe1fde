use crate::{
    predicate::ast::{CompareOp, Predicate},
    schema::{FieldSpec, FieldType},
    types::Timestamp,
    value::{TextMode, Value},
};

///
/// Operator
///
/// Closed operator table. The wire carries operator names as strings;
/// unknown names fail `parse` and the clause is dropped. Internally every
/// operator is matched exhaustively, so adding one is a compile-time
/// exercise.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    // text
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    IsBlank,
    IsNotBlank,
    // numeric
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Between,
    // boolean
    IsTrue,
    IsFalse,
    // date
    Before,
    After,
    DateBetween,
    LastXDays,
    LastXWeeks,
    LastXMonths,
    // set
    In,
    NotIn,
}

impl Operator {
    /// Resolve a wire operator name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let op = match name {
            "equals" => Self::Equals,
            "not_equals" => Self::NotEquals,
            "contains" => Self::Contains,
            "not_contains" => Self::NotContains,
            "starts_with" => Self::StartsWith,
            "ends_with" => Self::EndsWith,
            "is_blank" => Self::IsBlank,
            "is_not_blank" => Self::IsNotBlank,
            "greater_than" => Self::GreaterThan,
            "greater_or_equal" => Self::GreaterOrEqual,
            "less_than" => Self::LessThan,
            "less_or_equal" => Self::LessOrEqual,
            "between" => Self::Between,
            "is_true" => Self::IsTrue,
            "is_false" => Self::IsFalse,
            "before" => Self::Before,
            "after" => Self::After,
            "date_between" => Self::DateBetween,
            "last_x_days" => Self::LastXDays,
            "last_x_weeks" => Self::LastXWeeks,
            "last_x_months" => Self::LastXMonths,
            "in" => Self::In,
            "not_in" => Self::NotIn,
            _ => return None,
        };

        Some(op)
    }

    /// Lower one resolved `(field, operator, value)` triple into a predicate.
    ///
    /// Fails with a message when the value has the wrong shape for the
    /// operator or cannot be coerced to the field's declared type; the
    /// caller drops the clause.
    pub(crate) fn lower(
        self,
        spec: &'static FieldSpec,
        value: &serde_json::Value,
        case_sensitive: bool,
        now: Timestamp,
    ) -> Result<Predicate, String> {
        let mode = if case_sensitive { TextMode::Cs } else { TextMode::Ci };
        let field = spec.name;

        let predicate = match self {
            Self::Equals => {
                Predicate::compare(field, CompareOp::Eq, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::NotEquals => {
                Predicate::compare(field, CompareOp::Ne, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::Contains => {
                Predicate::compare(field, CompareOp::Contains, coerce_text(value)?, mode)
            }
            Self::NotContains => Predicate::not(Predicate::compare(
                field,
                CompareOp::Contains,
                coerce_text(value)?,
                mode,
            )),
            Self::StartsWith => {
                Predicate::compare(field, CompareOp::StartsWith, coerce_text(value)?, mode)
            }
            Self::EndsWith => {
                Predicate::compare(field, CompareOp::EndsWith, coerce_text(value)?, mode)
            }

            Self::IsBlank => Predicate::IsBlank { field },
            Self::IsNotBlank => Predicate::IsNotBlank { field },

            Self::GreaterThan => {
                Predicate::compare(field, CompareOp::Gt, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::GreaterOrEqual => {
                Predicate::compare(field, CompareOp::Gte, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::LessThan => {
                Predicate::compare(field, CompareOp::Lt, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::LessOrEqual => {
                Predicate::compare(field, CompareOp::Lte, coerce_scalar(spec.ty, value)?, mode)
            }
            Self::Between => {
                let (min, max) = coerce_pair(spec.ty, value)?;
                range_inclusive(field, min, max, mode)
            }

            Self::IsTrue => {
                Predicate::compare(field, CompareOp::Eq, Value::Bool(true), mode)
            }
            Self::IsFalse => {
                Predicate::compare(field, CompareOp::Eq, Value::Bool(false), mode)
            }

            Self::Before => {
                Predicate::compare(field, CompareOp::Lt, coerce_timestamp(value)?, mode)
            }
            Self::After => {
                Predicate::compare(field, CompareOp::Gt, coerce_timestamp(value)?, mode)
            }
            Self::DateBetween => {
                let (start, end) = coerce_timestamp_pair(value)?;
                range_inclusive(field, start, end, mode)
            }

            Self::LastXDays => relative_window(field, value, mode, |n| now.minus_days(n))?,
            Self::LastXWeeks => relative_window(field, value, mode, |n| now.minus_weeks(n))?,
            Self::LastXMonths => relative_window(field, value, mode, |n| now.minus_months(n))?,

            Self::In => {
                Predicate::compare(field, CompareOp::In, coerce_list(spec.ty, value)?, mode)
            }
            Self::NotIn => {
                Predicate::compare(field, CompareOp::NotIn, coerce_list(spec.ty, value)?, mode)
            }
        };

        Ok(predicate)
    }
}

/// Inclusive range lowered as `field >= min AND field <= max`.
fn range_inclusive(field: &'static str, min: Value, max: Value, mode: TextMode) -> Predicate {
    Predicate::and(vec![
        Predicate::compare(field, CompareOp::Gte, min, mode),
        Predicate::compare(field, CompareOp::Lte, max, mode),
    ])
}

/// `field >= now - N units`, boundary inclusive.
fn relative_window(
    field: &'static str,
    value: &serde_json::Value,
    mode: TextMode,
    bound: impl FnOnce(i64) -> Timestamp,
) -> Result<Predicate, String> {
    let n = value
        .as_i64()
        .filter(|n| *n >= 0)
        .ok_or_else(|| format!("expected a non-negative integer count, got {value}"))?;

    Ok(Predicate::compare(
        field,
        CompareOp::Gte,
        Value::Timestamp(bound(n)),
        mode,
    ))
}

/// Coerce a wire JSON literal to the field's declared scalar type.
///
/// List fields coerce to their element type, so `tags equals "vip"` tests
/// element membership.
fn coerce_scalar(ty: FieldType, value: &serde_json::Value) -> Result<Value, String> {
    let coerced = match ty {
        FieldType::Text | FieldType::TextList => return coerce_text(value),
        FieldType::Int => Value::Int(
            value
                .as_i64()
                .ok_or_else(|| format!("expected an integer, got {value}"))?,
        ),
        FieldType::Float => Value::Float(
            value
                .as_f64()
                .ok_or_else(|| format!("expected a number, got {value}"))?,
        ),
        FieldType::Bool => Value::Bool(
            value
                .as_bool()
                .ok_or_else(|| format!("expected a boolean, got {value}"))?,
        ),
        FieldType::Timestamp => return coerce_timestamp(value),
        FieldType::Id => {
            let text = value
                .as_str()
                .ok_or_else(|| format!("expected an id string, got {value}"))?;
            Value::Ulid(ulid::Ulid::from_string(text).map_err(|err| format!("bad id: {err}"))?)
        }
    };

    Ok(coerced)
}

fn coerce_text(value: &serde_json::Value) -> Result<Value, String> {
    value
        .as_str()
        .map(|text| Value::Text(text.to_string()))
        .ok_or_else(|| format!("expected a string, got {value}"))
}

/// Accepts RFC 3339 strings or integer epoch seconds.
fn coerce_timestamp(value: &serde_json::Value) -> Result<Value, String> {
    if let Some(text) = value.as_str() {
        return Timestamp::parse_rfc3339(text).map(Value::Timestamp);
    }
    if let Some(secs) = value.as_i64() {
        return Ok(Value::Timestamp(Timestamp::from_seconds(secs)));
    }

    Err(format!("expected an RFC 3339 string or epoch seconds, got {value}"))
}

fn coerce_pair(ty: FieldType, value: &serde_json::Value) -> Result<(Value, Value), String> {
    let [min, max] = as_pair(value)?;
    Ok((coerce_scalar(ty, min)?, coerce_scalar(ty, max)?))
}

fn coerce_timestamp_pair(value: &serde_json::Value) -> Result<(Value, Value), String> {
    let [start, end] = as_pair(value)?;
    Ok((coerce_timestamp(start)?, coerce_timestamp(end)?))
}

fn as_pair(value: &serde_json::Value) -> Result<[&serde_json::Value; 2], String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected a [min, max] pair, got {value}"))?;

    match items.as_slice() {
        [min, max] => Ok([min, max]),
        _ => Err(format!("expected exactly 2 elements, got {}", items.len())),
    }
}

fn coerce_list(ty: FieldType, value: &serde_json::Value) -> Result<Value, String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected an array, got {value}"))?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(coerce_scalar(ty, item)?);
    }

    Ok(Value::List(out))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCORE: &FieldSpec = &FieldSpec {
        name: "engagementScore",
        ty: FieldType::Int,
    };
    const CREATED: &FieldSpec = &FieldSpec {
        name: "createdAt",
        ty: FieldType::Timestamp,
    };

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Operator::parse("equals"), Some(Operator::Equals));
        assert_eq!(Operator::parse("last_x_months"), Some(Operator::LastXMonths));
        assert_eq!(Operator::parse("regex"), None);
        assert_eq!(Operator::parse("EQUALS"), None);
    }

    #[test]
    fn between_lowers_to_inclusive_range() {
        let pred = Operator::Between
            .lower(SCORE, &json!([10, 20]), false, Timestamp::EPOCH)
            .unwrap();

        let Predicate::And(parts) = pred else {
            panic!("expected And, got {pred:?}");
        };
        assert_eq!(parts[0], Predicate::compare("engagementScore", CompareOp::Gte, Value::Int(10), TextMode::Ci));
        assert_eq!(parts[1], Predicate::compare("engagementScore", CompareOp::Lte, Value::Int(20), TextMode::Ci));
    }

    #[test]
    fn between_rejects_wrong_arity() {
        assert!(Operator::Between
            .lower(SCORE, &json!([10]), false, Timestamp::EPOCH)
            .is_err());
        assert!(Operator::Between
            .lower(SCORE, &json!(10), false, Timestamp::EPOCH)
            .is_err());
    }

    #[test]
    fn last_x_days_bound_is_inclusive_gte() {
        let now = Timestamp::from_seconds(30 * 86_400);
        let pred = Operator::LastXDays.lower(CREATED, &json!(7), false, now).unwrap();

        assert_eq!(
            pred,
            Predicate::compare(
                "createdAt",
                CompareOp::Gte,
                Value::Timestamp(Timestamp::from_seconds(23 * 86_400)),
                TextMode::Ci,
            )
        );
    }

    #[test]
    fn relative_window_rejects_negative_counts() {
        assert!(Operator::LastXWeeks
            .lower(CREATED, &json!(-1), false, Timestamp::EPOCH)
            .is_err());
        assert!(Operator::LastXDays
            .lower(CREATED, &json!("7"), false, Timestamp::EPOCH)
            .is_err());
    }

    #[test]
    fn not_contains_wraps_in_not() {
        let spec: &'static FieldSpec = &FieldSpec {
            name: "name",
            ty: FieldType::Text,
        };
        let pred = Operator::NotContains
            .lower(spec, &json!("corp"), false, Timestamp::EPOCH)
            .unwrap();

        assert!(matches!(pred, Predicate::Not(_)));
    }

    #[test]
    fn date_ops_accept_rfc3339_and_epoch() {
        assert!(Operator::Before
            .lower(CREATED, &json!("2026-01-01T00:00:00Z"), false, Timestamp::EPOCH)
            .is_ok());
        assert!(Operator::After
            .lower(CREATED, &json!(1_700_000_000), false, Timestamp::EPOCH)
            .is_ok());
        assert!(Operator::Before
            .lower(CREATED, &json!("yesterday"), false, Timestamp::EPOCH)
            .is_err());
    }
}
