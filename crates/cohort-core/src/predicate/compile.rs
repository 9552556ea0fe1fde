use crate::{
    clock::Clock,
    filter::{FilterCondition, FilterDefinition, FilterGroup, Logic},
    predicate::{
        ast::Predicate,
        diagnostics::{CompileDiagnostics, DropReason},
        op::Operator,
    },
    schema::EntityKind,
    types::Timestamp,
};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Maximum nesting depth of a submitted filter tree.
///
/// UI-built trees stay far below this; the limit bounds evaluation cost for
/// pathological client input without changing behavior for valid trees.
pub const MAX_FILTER_DEPTH: usize = 16;

/// Maximum number of raw leaf conditions in a submitted filter tree.
pub const MAX_FILTER_CLAUSES: usize = 256;

///
/// FilterError
///
/// Guardrail failures are hard errors, unlike per-clause resolution which
/// is lenient.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum FilterError {
    #[error("filter tree exceeds maximum nesting depth of {max}")]
    DepthExceeded { max: usize },

    #[error("filter tree has more than {max} clauses")]
    ClauseCountExceeded { max: usize },
}

///
/// Compiled
///
/// Result of compiling a wire filter tree. `predicate == None` means no
/// clause anywhere resolved: the executor treats that as match-all. That
/// degrade-to-unfiltered policy is deliberate and relied on by clients;
/// do not tighten it into a validation error.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Compiled {
    pub predicate: Option<Predicate>,
    pub diagnostics: CompileDiagnostics,
}

///
/// Compile a wire filter tree into an optional predicate for one entity.
///
/// Shape guardrails are checked first; afterwards compilation cannot fail.
/// Unresolvable leaves (unknown field, unknown operator, malformed value)
/// are dropped with a diagnostic and evaluation continues.
///
pub fn compile(
    entity: EntityKind,
    definition: &FilterDefinition,
    clock: &dyn Clock,
) -> Result<Compiled, FilterError> {
    check_shape(definition)?;

    let mut diagnostics = CompileDiagnostics::default();
    let now = clock.now();
    let predicate = compile_group(entity, definition, now, &mut diagnostics);

    Ok(Compiled {
        predicate,
        diagnostics,
    })
}

///
/// Reduce one group (or the root) to a single optional predicate.
///
/// 1. compile direct conditions, keeping only resolvable ones
/// 2. recurse into nested groups, keeping only non-empty results
/// 3. zero clauses → `None`; one clause → unwrapped; otherwise combined
///    under the group's own logic
///
/// The same rule applies at every level, root included.
///
fn compile_group(
    entity: EntityKind,
    group: &FilterGroup,
    now: Timestamp,
    diagnostics: &mut CompileDiagnostics,
) -> Option<Predicate> {
    let mut clauses: Vec<Predicate> = group
        .conditions
        .iter()
        .filter_map(|condition| compile_condition(entity, condition, now, diagnostics))
        .collect();

    clauses.extend(
        group
            .groups
            .iter()
            .filter_map(|nested| compile_group(entity, nested, now, diagnostics)),
    );

    match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ => Some(match group.logic {
            Logic::And => Predicate::and(clauses),
            Logic::Or => Predicate::or(clauses),
        }),
    }
}

///
/// Compile one leaf condition, or `None` when it is unresolvable.
///
fn compile_condition(
    entity: EntityKind,
    condition: &FilterCondition,
    now: Timestamp,
    diagnostics: &mut CompileDiagnostics,
) -> Option<Predicate> {
    let Some(spec) = entity.resolve_field(&condition.field) else {
        diagnostics.record_drop(&condition.field, &condition.operator, DropReason::UnknownField);
        return None;
    };

    let Some(operator) = Operator::parse(&condition.operator) else {
        diagnostics.record_drop(
            &condition.field,
            &condition.operator,
            DropReason::UnknownOperator,
        );
        return None;
    };

    match operator.lower(spec, &condition.value, condition.case_sensitive, now) {
        Ok(predicate) => {
            diagnostics.resolved += 1;
            Some(predicate)
        }
        Err(message) => {
            diagnostics.record_drop(
                &condition.field,
                &condition.operator,
                DropReason::MalformedValue { message },
            );
            None
        }
    }
}

fn check_shape(definition: &FilterDefinition) -> Result<(), FilterError> {
    let mut clauses = 0usize;
    check_group(definition, 1, &mut clauses)?;

    Ok(())
}

fn check_group(
    group: &FilterGroup,
    depth: usize,
    clauses: &mut usize,
) -> Result<(), FilterError> {
    if depth > MAX_FILTER_DEPTH {
        return Err(FilterError::DepthExceeded {
            max: MAX_FILTER_DEPTH,
        });
    }

    *clauses += group.conditions.len();
    if *clauses > MAX_FILTER_CLAUSES {
        return Err(FilterError::ClauseCountExceeded {
            max: MAX_FILTER_CLAUSES,
        });
    }

    for nested in &group.groups {
        check_group(nested, depth + 1, clauses)?;
    }

    Ok(())
}

///
/// TESTS
///
