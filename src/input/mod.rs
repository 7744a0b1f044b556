//! # Input Module
//!
//! Parsing of command-line selections and overrides.
//!
//! Selections are written `id:VARIANT` (`jump:B`); a bare `id` picks
//! variant `A`. Overrides are written `id.name=value` and apply to every
//! selection of that component.

use crate::{ComponentSelection, GameLabError, GameLabResult, ParamKind, ParamValue, Registry};

/// Variant picked when a selection names none.
pub const DEFAULT_VARIANT: char = 'A';

/// One `id.name=value` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub component: String,
    pub key: String,
    pub value: String,
}

/// Parses `id:VARIANT` or `id`.
///
/// # Examples
///
/// ```
/// use gamelab::parse_selection;
///
/// let selection = parse_selection("jump:B").unwrap();
/// assert_eq!(selection.component_id, "jump");
/// assert_eq!(selection.variant, 'B');
/// ```
pub fn parse_selection(spec: &str) -> GameLabResult<ComponentSelection> {
    let spec = spec.trim();
    let (id, variant) = match spec.split_once(':') {
        Some((id, variant)) => {
            let mut chars = variant.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => (id.trim(), key.to_ascii_uppercase()),
                _ => {
                    return Err(GameLabError::InvalidArgument(format!(
                        "variant in '{}' must be a single character",
                        spec
                    )))
                }
            }
        }
        None => (spec, DEFAULT_VARIANT),
    };

    if id.is_empty() {
        return Err(GameLabError::InvalidArgument(format!(
            "selection '{}' has no component id",
            spec
        )));
    }
    Ok(ComponentSelection::new(id, variant))
}

/// Parses `id.name=value`.
pub fn parse_assignment(spec: &str) -> GameLabResult<Assignment> {
    let invalid = || GameLabError::InvalidArgument(format!("expected id.name=value, got '{}'", spec));
    let (target, value) = spec.split_once('=').ok_or_else(invalid)?;
    let (component, key) = target.trim().split_once('.').ok_or_else(invalid)?;
    if component.is_empty() || key.is_empty() {
        return Err(invalid());
    }
    Ok(Assignment {
        component: component.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Applies parameter overrides to every matching selection.
///
/// Each value is parsed as the kind the selected variant declares for that
/// parameter, so a text parameter can hold `2024` or `true`.
pub fn apply_parameters(
    registry: &Registry,
    selections: &mut [ComponentSelection],
    assignments: &[Assignment],
) -> GameLabResult<()> {
    apply(selections, assignments, |selection, assignment| {
        let (_, variant) = registry.variant(&selection.component_id, selection.variant)?;
        let spec = variant
            .find_param(&assignment.key)
            .ok_or_else(|| GameLabError::UnknownParameter {
                component: assignment.component.clone(),
                parameter: assignment.key.clone(),
            })?;
        let value = ParamValue::parse_as(spec.kind, &assignment.value).ok_or_else(|| {
            GameLabError::ParameterType {
                component: assignment.component.clone(),
                parameter: assignment.key.clone(),
                expected: spec.kind,
                found: ParamKind::Text,
            }
        })?;
        selection.parameters.insert(assignment.key.clone(), value);
        Ok(())
    })
}

/// Applies asset bindings to every matching selection.
pub fn apply_assets(
    selections: &mut [ComponentSelection],
    assignments: &[Assignment],
) -> GameLabResult<()> {
    apply(selections, assignments, |selection, assignment| {
        selection
            .assets
            .insert(assignment.key.clone(), assignment.value.clone());
        Ok(())
    })
}

fn apply<F>(selections: &mut [ComponentSelection], assignments: &[Assignment], mut set: F) -> GameLabResult<()>
where
    F: FnMut(&mut ComponentSelection, &Assignment) -> GameLabResult<()>,
{
    for assignment in assignments {
        let mut matched = false;
        for selection in selections
            .iter_mut()
            .filter(|s| s.component_id == assignment.component)
        {
            set(selection, assignment)?;
            matched = true;
        }
        if !matched {
            return Err(GameLabError::InvalidArgument(format!(
                "'{}' is not selected",
                assignment.component
            )));
        }
    }
    Ok(())
}
