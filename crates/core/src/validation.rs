//! Operation-scoped field validation.
//!
//! Each entity publishes a static table of [`FieldRules`]: for every field, the
//! constraints it carries and the operations each constraint applies to. The
//! validator looks up the constraints active for one [`Operation`], reads the
//! field through a [`FieldValue`] view and collects every failure.
//!
//! Violations are a report, not an error. Callers that want to reject the
//! enclosing operation use [`ensure_valid`] or [`Violations::into_result`].

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::operation::{Operation, OperationSet};

/// Constraint kinds a field can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// The value must be present.
    NotNull,
    /// The value must be present and, for text, keep at least one character
    /// once leading and trailing ASCII control/space characters (`<= U+0020`)
    /// are stripped.
    NotBlank,
}

impl Constraint {
    pub fn is_satisfied_by(self, value: &FieldValue<'_>) -> bool {
        if value.is_absent() {
            return false;
        }
        match (self, value) {
            (Constraint::NotBlank, FieldValue::Text(s)) => !is_blank(s),
            _ => true,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Constraint::NotNull => "must not be null",
            Constraint::NotBlank => "must not be blank",
        }
    }
}

/// Blank text: nothing left after stripping characters at or below `U+0020`.
///
/// Non-breaking and other Unicode spaces count as content.
fn is_blank(s: &str) -> bool {
    s.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Borrowed view of a field's current value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Int(i64),
    Bool(bool),
    Text(&'a str),
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Absent, |v| FieldValue::Int(v.into()))
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Bool)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

/// The constraints declared on one field, each scoped to a set of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub field: &'static str,
    pub constraints: &'static [(Constraint, OperationSet)],
}

impl FieldRules {
    pub const fn new(field: &'static str, constraints: &'static [(Constraint, OperationSet)]) -> Self {
        Self { field, constraints }
    }

    /// A field that is accepted as-is under every operation.
    pub const fn unconstrained(field: &'static str) -> Self {
        Self::new(field, &[])
    }

    /// Constraints that apply under `op`, in declaration order.
    pub fn constraints_for(&self, op: Operation) -> impl Iterator<Item = Constraint> + '_ {
        self.constraints
            .iter()
            .filter(move |(_, ops)| ops.includes(op))
            .map(|(constraint, _)| *constraint)
    }

    /// Whether any constraint applies to this field under `op`.
    pub fn is_required_for(&self, op: Operation) -> bool {
        self.constraints_for(op).next().is_some()
    }
}

/// One field failing one constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, constraint: Constraint) -> Self {
        Self {
            field,
            constraint,
            message: format!("{field} {}", constraint.describe()),
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// All violations found for one entity under one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field == field)
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|v| v.field)
    }

    /// `Ok(())` when empty, otherwise a [`DomainError::Validation`].
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(v, f)?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An entity whose fields carry operation-scoped constraints.
pub trait Validate {
    /// Entity kind, used in logs.
    const KIND: &'static str;

    /// Field rule table, in field declaration order.
    fn rules() -> &'static [FieldRules];

    /// Current value of the named field. Unknown names read as absent.
    fn field(&self, name: &str) -> FieldValue<'_>;

    /// Shorthand for [`validate`].
    fn check(&self, op: Operation) -> Violations
    where
        Self: Sized,
    {
        validate(self, op)
    }
}

/// Evaluate every constraint active under `op` and collect all failures.
///
/// Violations are ordered by field declaration, then by constraint declaration.
pub fn validate<T: Validate>(entity: &T, op: Operation) -> Violations {
    let mut violations = Violations::new();

    for rules in T::rules() {
        let value = entity.field(rules.field);
        for constraint in rules.constraints_for(op) {
            if !constraint.is_satisfied_by(&value) {
                violations.push(Violation::new(rules.field, constraint));
            }
        }
    }

    tracing::debug!(
        entity = T::KIND,
        operation = %op,
        violations = violations.len(),
        "validated"
    );

    violations
}

/// Validate and turn any violation into a [`DomainError::Validation`].
pub fn ensure_valid<T: Validate>(entity: &T, op: Operation) -> DomainResult<()> {
    validate(entity, op).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_ONLY: OperationSet = OperationSet::ADD;
    const ADD_UPDATE: OperationSet = OperationSet::ADD.union(OperationSet::UPDATE);

    /// Minimal entity with one field per value shape.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Probe {
        code: Option<i32>,
        label: Option<String>,
        flag: Option<bool>,
        note: Option<String>,
    }

    const PROBE_RULES: &[FieldRules] = &[
        FieldRules::new("code", &[(Constraint::NotNull, ADD_ONLY)]),
        FieldRules::new(
            "label",
            &[
                (Constraint::NotNull, ADD_UPDATE),
                (Constraint::NotBlank, ADD_UPDATE),
            ],
        ),
        FieldRules::new("flag", &[(Constraint::NotBlank, ADD_ONLY)]),
        FieldRules::unconstrained("note"),
    ];

    impl Validate for Probe {
        const KIND: &'static str = "probe";

        fn rules() -> &'static [FieldRules] {
            PROBE_RULES
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "code" => self.code.into(),
                "label" => self.label.as_deref().into(),
                "flag" => self.flag.into(),
                "note" => self.note.as_deref().into(),
                _ => FieldValue::Absent,
            }
        }
    }

    #[test]
    fn not_null_fails_only_on_absent() {
        assert!(!Constraint::NotNull.is_satisfied_by(&FieldValue::Absent));
        assert!(Constraint::NotNull.is_satisfied_by(&FieldValue::Int(0)));
        assert!(Constraint::NotNull.is_satisfied_by(&FieldValue::Bool(false)));
        assert!(Constraint::NotNull.is_satisfied_by(&FieldValue::Text("")));
    }

    #[test]
    fn not_blank_rejects_absent_empty_and_whitespace() {
        assert!(!Constraint::NotBlank.is_satisfied_by(&FieldValue::Absent));
        assert!(!Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("")));
        assert!(!Constraint::NotBlank.is_satisfied_by(&FieldValue::Text(" \t\n")));
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Text(" a ")));
    }

    #[test]
    fn not_blank_strips_only_control_and_space_characters() {
        assert!(!Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("\u{1}")));
        assert!(!Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("\u{0}\r\u{1f} ")));
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("\u{a0}")));
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("\u{3000}")));
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Text("\u{7f}")));
    }

    #[test]
    fn not_blank_accepts_present_non_text() {
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Bool(false)));
        assert!(Constraint::NotBlank.is_satisfied_by(&FieldValue::Int(-1)));
    }

    #[test]
    fn constraints_for_filters_by_operation() {
        let label = &PROBE_RULES[1];
        assert_eq!(
            label.constraints_for(Operation::Update).collect::<Vec<_>>(),
            vec![Constraint::NotNull, Constraint::NotBlank]
        );
        assert_eq!(label.constraints_for(Operation::Get).count(), 0);
        assert!(label.is_required_for(Operation::Add));
        assert!(!label.is_required_for(Operation::Del));
        assert!(!PROBE_RULES[3].is_required_for(Operation::Add));
    }

    #[test]
    fn collects_every_violation_in_declaration_order() {
        let violations = validate(&Probe::default(), Operation::Add);

        assert_eq!(violations.len(), 4);
        assert_eq!(
            violations.fields().collect::<Vec<_>>(),
            vec!["code", "label", "label", "flag"]
        );
        assert_eq!(
            violations.for_field("label").map(|v| v.constraint).collect::<Vec<_>>(),
            vec![Constraint::NotNull, Constraint::NotBlank]
        );
    }

    #[test]
    fn operation_without_rules_accepts_anything() {
        assert!(validate(&Probe::default(), Operation::Get).is_empty());
        assert!(validate(&Probe::default(), Operation::Del).is_empty());
    }

    #[test]
    fn messages_name_field_and_constraint() {
        let probe = Probe {
            code: Some(1),
            label: Some("  ".to_string()),
            flag: Some(true),
            note: None,
        };

        let violations = probe.check(Operation::Add);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.iter().next().unwrap().message, "label must not be blank");
        assert_eq!(violations.to_string(), "label must not be blank");
    }

    #[test]
    fn display_joins_messages() {
        let violations = validate(&Probe::default(), Operation::Update);
        assert_eq!(
            violations.to_string(),
            "label must not be null; label must not be blank"
        );
    }

    #[test]
    fn ensure_valid_maps_to_domain_error() {
        let probe = Probe {
            code: Some(7),
            label: Some("x".to_string()),
            flag: Some(false),
            note: None,
        };
        assert_eq!(ensure_valid(&probe, Operation::Add), Ok(()));

        let err = ensure_valid(&Probe::default(), Operation::Update).unwrap_err();
        match &err {
            DomainError::Validation(v) => assert_eq!(v.len(), 2),
            _ => panic!("Expected Validation error"),
        }
        assert_eq!(
            err.to_string(),
            "validation failed: label must not be null; label must not be blank"
        );
        assert_eq!(err.violations().map(Violations::len), Some(2));
    }

    #[test]
    fn violations_serialize_as_list() {
        let violations = validate(&Probe::default(), Operation::Update);
        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "field": "label", "constraint": "not_null", "message": "label must not be null" },
                { "field": "label", "constraint": "not_blank", "message": "label must not be blank" }
            ])
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_probe() -> impl Strategy<Value = Probe> {
            (
                proptest::option::of(any::<i32>()),
                proptest::option::of("[ a-z]{0,8}"),
                proptest::option::of(any::<bool>()),
                proptest::option::of(".{0,8}"),
            )
                .prop_map(|(code, label, flag, note)| Probe {
                    code,
                    label,
                    flag,
                    note,
                })
        }

        proptest! {
            /// Property: fields with no constraint for an operation never report.
            #[test]
            fn unconstrained_fields_never_report(probe in any_probe()) {
                for op in Operation::ALL {
                    let violations = validate(&probe, op);
                    prop_assert_eq!(violations.for_field("note").count(), 0);
                    if op != Operation::Add {
                        prop_assert_eq!(violations.for_field("code").count(), 0);
                        prop_assert_eq!(violations.for_field("flag").count(), 0);
                    }
                }
            }

            /// Property: validation is pure and deterministic.
            #[test]
            fn validation_is_pure(probe in any_probe()) {
                let before = probe.clone();
                for op in Operation::ALL {
                    let first = validate(&probe, op);
                    let second = validate(&probe, op);
                    prop_assert_eq!(first, second);
                }
                prop_assert_eq!(probe, before);
            }
        }
    }
}
