use serde::{Deserialize, Serialize};

use classroll_core::{Constraint, Entity, FieldRules, FieldValue, Validate};

use crate::{EXISTING_RECORD, WRITES_CONTENT};

/// A teacher record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    id: Option<i32>,
    name: Option<String>,
    male: Option<bool>,
}

const RULES: &[FieldRules] = &[
    FieldRules::new("id", &[(Constraint::NotNull, EXISTING_RECORD)]),
    FieldRules::new("name", &[(Constraint::NotBlank, WRITES_CONTENT)]),
    FieldRules::new("male", &[(Constraint::NotNull, WRITES_CONTENT)]),
];

impl Teacher {
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

    pub fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_male(&mut self, male: Option<bool>) {
        self.male = male;
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
}

impl Entity for Teacher {
    type Id = i32;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl Validate for Teacher {
    const KIND: &'static str = "teacher";

    fn rules() -> &'static [FieldRules] {
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_deref().into(),
            "male" => self.male.into(),
            _ => FieldValue::Absent,
        }
    }
}
