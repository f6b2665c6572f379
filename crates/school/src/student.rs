use serde::{Deserialize, Serialize};

use classroll_core::{Constraint, Entity, FieldRules, FieldValue, Validate};

use crate::{EXISTING_RECORD, WRITES_CONTENT};

/// A student record.
///
/// Every field is optional; which ones must be set depends on the operation
/// the record is validated for (see [`Student::rules`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: Option<i32>,
    name: Option<String>,
    male: Option<bool>,
    teacher_id: Option<i32>,
}

const RULES: &[FieldRules] = &[
    FieldRules::new("id", &[(Constraint::NotNull, EXISTING_RECORD)]),
    FieldRules::new("name", &[(Constraint::NotBlank, WRITES_CONTENT)]),
    FieldRules::new("male", &[(Constraint::NotNull, WRITES_CONTENT)]),
    // Optional under every operation.
    FieldRules::unconstrained("teacherId"),
];

impl Student {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn male(&self) -> Option<bool> {
        self.male
    }

    pub fn teacher_id(&self) -> Option<i32> {
        self.teacher_id
    }

    pub fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_male(&mut self, male: Option<bool>) {
        self.male = male;
    }

    pub fn set_teacher_id(&mut self, teacher_id: Option<i32>) {
        self.teacher_id = teacher_id;
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_male(mut self, male: bool) -> Self {
        self.male = Some(male);
        self
    }

    pub fn with_teacher_id(mut self, teacher_id: i32) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }
}

impl Entity for Student {
    type Id = i32;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl Validate for Student {
    const KIND: &'static str = "student";

    fn rules() -> &'static [FieldRules] {
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_deref().into(),
            "male" => self.male.into(),
            "teacherId" => self.teacher_id.into(),
            _ => FieldValue::Absent,
        }
    }
}
