use crate::{
    model::{FieldValues, Record},
    predicate::ast::{ComparePredicate, CompareOp, Predicate},
    value::{self, TextMode, TextOp, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of reading a field from a row during evaluation. Distinguishes a
/// missing field from a present field whose value is `Null`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that exposes fields by name. Decouples
/// evaluation from concrete entity types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl<T: FieldValues> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

// Rows reach the executor as trait objects through the store's scan port;
// field access goes through the supertrait vtable.
impl Row for dyn Record + '_ {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access, no leniency decisions. Fields
/// are already resolved through the allow-list, so a missing field only
/// occurs for rows that genuinely lack the value; it evaluates as a
/// non-match (and as blank for `IsBlank`).
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::IsBlank { field } => match row.field(field) {
            FieldPresence::Present(value) => value.is_blank(),
            FieldPresence::Missing => true,
        },
        Predicate::IsNotBlank { field } => match row.field(field) {
            FieldPresence::Present(value) => !value.is_blank(),
            FieldPresence::Missing => false,
        },
    }
}

///
/// Evaluate a single comparison against a row.
///
/// Returns `false` if the field is missing or the comparison is undefined
/// for the actual value's type.
///
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        field,
        op,
        value,
        mode,
    } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    // NOTE: Comparison helpers return None when a comparison is invalid; eval treats that as false.
    match op {
        CompareOp::Eq => eq_with_membership(&actual, value, *mode).unwrap_or(false),
        CompareOp::Ne => eq_with_membership(&actual, value, *mode).is_some_and(|v| !v),

        CompareOp::Lt => value::compare_order(&actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => value::compare_order(&actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => value::compare_order(&actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => value::compare_order(&actual, value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(&actual, value, *mode).unwrap_or(false),
        CompareOp::NotIn => in_list(&actual, value, *mode).is_some_and(|matched| !matched),

        CompareOp::Contains => contains(&actual, value, *mode),

        CompareOp::StartsWith => {
            value::compare_text(&actual, value, *mode, TextOp::StartsWith).unwrap_or(false)
        }
        CompareOp::EndsWith => {
            value::compare_text(&actual, value, *mode, TextOp::EndsWith).unwrap_or(false)
        }
    }
}

///
/// Equality with element membership for list fields: a scalar literal
/// against a list actual tests whether any element equals it, matching how
/// the compiler coerces scalar literals to a list field's element type.
///
fn eq_with_membership(actual: &Value, literal: &Value, mode: TextMode) -> Option<bool> {
    match (actual, literal) {
        (Value::List(_), Value::List(_)) => value::compare_eq(actual, literal, mode),
        (Value::List(items), _) => membership(items, literal, mode),
        _ => value::compare_eq(actual, literal, mode),
    }
}

///
/// Check whether any element of a list equals a scalar literal.
///
/// Membership in an empty list is defined false, so negated forms are
/// vacuously true.
///
fn membership(items: &[Value], literal: &Value, mode: TextMode) -> Option<bool> {
    if items.is_empty() {
        return Some(false);
    }

    let mut saw_valid = false;
    for item in items {
        match value::compare_eq(item, literal, mode) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}

///
/// Check whether a value belongs to the literal value set.
///
/// A list actual belongs when any of its elements does. Membership in an
/// empty set is defined false, so `not_in []` matches every row.
///
fn in_list(actual: &Value, list: &Value, mode: TextMode) -> Option<bool> {
    let Value::List(set) = list else {
        return None;
    };
    if set.is_empty() {
        return Some(false);
    }

    if let Value::List(items) = actual {
        if items.is_empty() {
            return Some(false);
        }

        let mut saw_valid = false;
        for item in items {
            match scalar_in(item, set, mode) {
                Some(true) => return Some(true),
                Some(false) => saw_valid = true,
                None => {}
            }
        }
        return saw_valid.then_some(false);
    }

    scalar_in(actual, set, mode)
}

fn scalar_in(actual: &Value, set: &[Value], mode: TextMode) -> Option<bool> {
    let mut saw_valid = false;
    for item in set {
        match value::compare_eq(actual, item, mode) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}

///
/// `contains` over a text field is substring match; over a list field it is
/// element membership.
///
fn contains(actual: &Value, needle: &Value, mode: TextMode) -> bool {
    if matches!(actual, Value::Text(_)) {
        return value::compare_text(actual, needle, mode, TextOp::Contains).unwrap_or(false);
    }

    let Value::List(items) = actual else {
        return false;
    };

    items
        .iter()
        // Invalid comparisons are treated as non-matches.
        .any(|item| value::compare_eq(item, needle, mode).unwrap_or(false))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct TestRow(BTreeMap<&'static str, Value>);

    impl Row for TestRow {
        fn field(&self, name: &str) -> FieldPresence {
            match self.0.get(name) {
                Some(value) => FieldPresence::Present(value.clone()),
                None => FieldPresence::Missing,
            }
        }
    }

    fn row(entries: &[(&'static str, Value)]) -> TestRow {
        TestRow(entries.iter().cloned().collect())
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn and_or_not_combine() {
        let r = row(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
        let a = Predicate::compare("a", CompareOp::Eq, Value::Int(1), TextMode::Ci);
        let b = Predicate::compare("b", CompareOp::Eq, Value::Int(9), TextMode::Ci);

        assert!(eval(&r, &Predicate::and(vec![a.clone()])));
        assert!(!eval(&r, &Predicate::and(vec![a.clone(), b.clone()])));
        assert!(eval(&r, &Predicate::or(vec![a.clone(), b.clone()])));
        assert!(eval(&r, &Predicate::not(b)));
        assert!(!eval(&r, &Predicate::not(a)));
    }

    #[test]
    fn missing_field_never_matches_compare() {
        let r = row(&[]);
        let pred = Predicate::compare("a", CompareOp::Ne, Value::Int(1), TextMode::Ci);

        // Ne does not match a missing field either.
        assert!(!eval(&r, &pred));
    }

    #[test]
    fn contains_covers_text_and_list_fields() {
        let r = row(&[
            ("name", text("xAbCy")),
            ("tags", Value::List(vec![text("VIP"), text("beta")])),
        ]);

        let sub = Predicate::compare("name", CompareOp::Contains, text("ABC"), TextMode::Ci);
        assert!(eval(&r, &sub));

        let member = Predicate::compare("tags", CompareOp::Contains, text("vip"), TextMode::Ci);
        assert!(eval(&r, &member));

        let member_cs = Predicate::compare("tags", CompareOp::Contains, text("vip"), TextMode::Cs);
        assert!(!eval(&r, &member_cs));
    }

    #[test]
    fn in_list_semantics() {
        let r = row(&[("status", text("Active"))]);

        let members = Value::List(vec![text("active"), text("trial")]);
        assert!(eval(
            &r,
            &Predicate::compare("status", CompareOp::In, members.clone(), TextMode::Ci)
        ));
        assert!(!eval(
            &r,
            &Predicate::compare("status", CompareOp::NotIn, members, TextMode::Ci)
        ));

        // list of incomparable values: membership is undefined, not a match
        let junk = Value::List(vec![Value::Int(1)]);
        assert!(!eval(
            &r,
            &Predicate::compare("status", CompareOp::In, junk.clone(), TextMode::Ci)
        ));
        assert!(!eval(
            &r,
            &Predicate::compare("status", CompareOp::NotIn, junk, TextMode::Ci)
        ));
    }

    #[test]
    fn scalar_operators_on_list_fields_test_membership() {
        let r = row(&[(
            "tags",
            Value::List(vec![text("Newsletter"), text("beta")]),
        )]);

        let eq = Predicate::compare("tags", CompareOp::Eq, text("newsletter"), TextMode::Ci);
        assert!(eval(&r, &eq));

        let eq_cs = Predicate::compare("tags", CompareOp::Eq, text("newsletter"), TextMode::Cs);
        assert!(!eval(&r, &eq_cs));

        let ne_hit = Predicate::compare("tags", CompareOp::Ne, text("newsletter"), TextMode::Ci);
        assert!(!eval(&r, &ne_hit));

        let ne_miss = Predicate::compare("tags", CompareOp::Ne, text("vip"), TextMode::Ci);
        assert!(eval(&r, &ne_miss));

        let set = Value::List(vec![text("vip"), text("newsletter")]);
        let any_in = Predicate::compare("tags", CompareOp::In, set.clone(), TextMode::Ci);
        assert!(eval(&r, &any_in));
        let none_in = Predicate::compare("tags", CompareOp::NotIn, set, TextMode::Ci);
        assert!(!eval(&r, &none_in));

        let disjoint = Value::List(vec![text("vip")]);
        let not_in = Predicate::compare("tags", CompareOp::NotIn, disjoint, TextMode::Ci);
        assert!(eval(&r, &not_in));
    }

    #[test]
    fn membership_in_an_empty_list_or_set_is_false() {
        let r = row(&[("tags", Value::List(vec![])), ("status", text("active"))]);

        // empty list field: equals matches nothing, not_equals matches
        let eq = Predicate::compare("tags", CompareOp::Eq, text("vip"), TextMode::Ci);
        assert!(!eval(&r, &eq));
        let ne = Predicate::compare("tags", CompareOp::Ne, text("vip"), TextMode::Ci);
        assert!(eval(&r, &ne));

        // empty literal set: `in` matches nothing, `not_in` matches everything
        let empty = Value::List(vec![]);
        let is_in = Predicate::compare("status", CompareOp::In, empty.clone(), TextMode::Ci);
        assert!(!eval(&r, &is_in));
        let not_in = Predicate::compare("status", CompareOp::NotIn, empty, TextMode::Ci);
        assert!(eval(&r, &not_in));
    }

    #[test]
    fn blank_checks_cover_null_empty_and_missing() {
        let r = row(&[("email", Value::Null), ("name", text(""))]);

        assert!(eval(&r, &Predicate::IsBlank { field: "email" }));
        assert!(eval(&r, &Predicate::IsBlank { field: "name" }));
        assert!(eval(&r, &Predicate::IsBlank { field: "absent" }));
        assert!(!eval(&r, &Predicate::IsNotBlank { field: "email" }));
        assert!(!eval(&r, &Predicate::IsNotBlank { field: "absent" }));

        let r2 = row(&[("email", text("a@b.co"))]);
        assert!(eval(&r2, &Predicate::IsNotBlank { field: "email" }));
    }
}
