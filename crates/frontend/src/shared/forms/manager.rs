use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

use super::state::{FieldError, FieldState, FormSnapshot};

/// One validation rule attached to a registered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Parses as an integer and is not below the minimum
    MinNumber(i64),
    MaxLen(usize),
}

impl Rule {
    fn check(&self, value: &str) -> Option<FieldError> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    Some(FieldError::required())
                } else {
                    None
                }
            }
            Rule::MinNumber(min) => {
                // Empty input is Required's business
                if value.trim().is_empty() {
                    return None;
                }
                match value.trim().parse::<i64>() {
                    Ok(n) if n >= *min => None,
                    Ok(_) => Some(FieldError::new("MIN", format!("Must be at least {min}"))),
                    Err(_) => Some(FieldError::new("NOT_A_NUMBER", "Enter a whole number")),
                }
            }
            Rule::MaxLen(limit) => {
                if value.chars().count() > *limit {
                    Some(FieldError::new(
                        "MAX_LEN",
                        format!("Must be {limit} characters or fewer"),
                    ))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    initial: String,
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default)]
struct FormData {
    values: HashMap<String, String>,
    touched: HashSet<String>,
    errors: HashMap<String, FieldError>,
    submitted: bool,
}

/// Reactive owner of one form's values and validation state.
///
/// Validation runs on submit; after the first submit each change
/// re-validates its field, so error messages clear as the user types.
/// `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct FormManager {
    specs: StoredValue<Vec<FieldSpec>>,
    data: RwSignal<FormData>,
}

impl FormManager {
    pub fn new() -> Self {
        Self {
            specs: StoredValue::new(Vec::new()),
            data: RwSignal::new(FormData::default()),
        }
    }

    /// Register a field with its initial value and rules.
    pub fn with_field(self, name: &str, initial: &str, rules: Vec<Rule>) -> Self {
        self.specs.update_value(|specs| {
            specs.push(FieldSpec {
                name: name.to_string(),
                initial: initial.to_string(),
                rules,
            });
        });
        self.data.update(|data| {
            data.values.insert(name.to_string(), initial.to_string());
        });
        self
    }

    /// Current value of a field; reactive inside tracking closures.
    pub fn value(&self, name: &str) -> String {
        self.data
            .with(|data| data.values.get(name).cloned())
            .unwrap_or_default()
    }

    pub fn set_value(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let revalidated = self.specs.with_value(|specs| {
            self.data.with_untracked(|data| {
                if data.submitted {
                    Some(Self::run_rules(specs, name, &value))
                } else {
                    None
                }
            })
        });
        self.data.update(|data| {
            data.values.insert(name.to_string(), value);
            if let Some(result) = revalidated {
                match result {
                    Some(error) => {
                        data.errors.insert(name.to_string(), error);
                    }
                    None => {
                        data.errors.remove(name);
                    }
                }
            }
        });
    }

    /// Mark a field as visited (blur).
    pub fn touch(&self, name: &str) {
        self.data.update(|data| {
            data.touched.insert(name.to_string());
        });
    }

    /// Run every rule of every field. Returns true when the form is
    /// clean; the per-field errors land in the snapshot either way.
    pub fn validate_all(&self) -> bool {
        self.specs.with_value(|specs| {
            self.data.update(|data| {
                data.submitted = true;
                data.errors.clear();
                for spec in specs {
                    let value = data.values.get(&spec.name).cloned().unwrap_or_default();
                    if let Some(error) = Self::run_rules(specs, &spec.name, &value) {
                        data.errors.insert(spec.name.clone(), error);
                    }
                }
            });
            self.data.with_untracked(|data| data.errors.is_empty())
        })
    }

    /// Back to initial values, untouched and unvalidated.
    pub fn reset(&self) {
        self.specs.with_value(|specs| {
            self.data.update(|data| {
                data.values = specs
                    .iter()
                    .map(|spec| (spec.name.clone(), spec.initial.clone()))
                    .collect();
                data.touched.clear();
                data.errors.clear();
                data.submitted = false;
            });
        });
    }

    /// The committed state the resolver reads. Reactive inside tracking
    /// closures.
    pub fn snapshot(&self) -> FormSnapshot {
        self.specs.with_value(|specs| {
            self.data.with(|data| {
                let mut snapshot = FormSnapshot::new();
                for spec in specs {
                    let value = data.values.get(&spec.name).cloned().unwrap_or_default();
                    snapshot.set(
                        spec.name.clone(),
                        FieldState {
                            error: data.errors.get(&spec.name).cloned(),
                            is_dirty: value != spec.initial,
                            is_touched: data.touched.contains(&spec.name),
                        },
                    );
                }
                snapshot
            })
        })
    }

    /// Look one field up in a snapshot taken earlier.
    pub fn get_field_state(&self, name: &str, snapshot: &FormSnapshot) -> FieldState {
        snapshot.field_state(name)
    }

    fn run_rules(specs: &[FieldSpec], name: &str, value: &str) -> Option<FieldError> {
        let spec = specs.iter().find(|spec| spec.name == name)?;
        spec.rules.iter().find_map(|rule| rule.check(value))
    }
}

impl Default for FormManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restock_form() -> FormManager {
        FormManager::new()
            .with_field("quantity", "", vec![Rule::Required, Rule::MinNumber(1)])
            .with_field("reason", "delivery", vec![Rule::Required])
            .with_field("note", "", vec![Rule::MaxLen(10)])
    }

    #[test]
    fn starts_clean() {
        let form = restock_form();
        let snapshot = form.snapshot();
        assert_eq!(snapshot.field_state("quantity"), FieldState::default());
        assert_eq!(form.value("reason"), "delivery");
    }

    #[test]
    fn validate_fills_errors() {
        let form = restock_form();
        assert!(!form.validate_all());
        let state = form.get_field_state("quantity", &form.snapshot());
        assert_eq!(state.error.map(|e| e.code), Some("REQUIRED".to_string()));
    }

    #[test]
    fn first_failing_rule_wins() {
        let form = restock_form();
        form.set_value("quantity", "0");
        form.validate_all();
        let state = form.snapshot().field_state("quantity");
        assert_eq!(state.error.map(|e| e.code), Some("MIN".to_string()));

        form.set_value("quantity", "four");
        let state = form.snapshot().field_state("quantity");
        assert_eq!(state.error.map(|e| e.code), Some("NOT_A_NUMBER".to_string()));
    }

    #[test]
    fn changes_revalidate_after_submit() {
        let form = restock_form();
        form.validate_all();
        assert!(form.snapshot().field_state("quantity").invalid());

        form.set_value("quantity", "25");
        assert!(!form.snapshot().field_state("quantity").invalid());
    }

    #[test]
    fn changes_do_not_validate_before_submit() {
        let form = restock_form();
        form.set_value("quantity", "0");
        assert!(!form.snapshot().field_state("quantity").invalid());
    }

    #[test]
    fn dirty_tracks_difference_from_initial() {
        let form = restock_form();
        form.set_value("reason", "recount");
        assert!(form.snapshot().field_state("reason").is_dirty);

        form.set_value("reason", "delivery");
        assert!(!form.snapshot().field_state("reason").is_dirty);
    }

    #[test]
    fn touch_marks_the_field() {
        let form = restock_form();
        form.touch("note");
        let snapshot = form.snapshot();
        assert!(snapshot.field_state("note").is_touched);
        assert!(!snapshot.field_state("quantity").is_touched);
    }

    #[test]
    fn max_len_counts_characters() {
        let form = restock_form();
        form.set_value("note", "0123456789X");
        form.set_value("quantity", "5");
        assert!(!form.validate_all());
        let state = form.snapshot().field_state("note");
        assert_eq!(state.error.map(|e| e.code), Some("MAX_LEN".to_string()));
    }

    #[test]
    fn reset_restores_initials() {
        let form = restock_form();
        form.set_value("quantity", "7");
        form.touch("quantity");
        form.validate_all();

        form.reset();
        assert_eq!(form.value("quantity"), "");
        assert_eq!(form.value("reason"), "delivery");
        let state = form.snapshot().field_state("quantity");
        assert_eq!(state, FieldState::default());
    }

    #[test]
    fn valid_form_passes() {
        let form = restock_form();
        form.set_value("quantity", "25");
        assert!(form.validate_all());
    }
}
