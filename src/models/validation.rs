use serde::Serialize;
use serde_json::{Map, Value};

/// A single rejected field, as reported to clients under `validationErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}

/// Type and format constraint applied to a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// A string with strictly fewer than `n` characters.
    TextShorterThan(usize),
    /// A string with exactly `n` characters.
    TextOfLength(usize),
    /// Any string.
    Text,
    Boolean,
    Number,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub constraint: Constraint,
    /// Whether format errors carry the field name. Required errors never do.
    pub tag_field: bool,
}

impl FieldRule {
    fn check(&self, value: Option<&Value>) -> Option<ValidationError> {
        let value = match value {
            None | Some(Value::Null) if self.required => {
                return Some(ValidationError::new(format!(
                    "The field '{}' is required",
                    self.name
                )));
            }
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };

        self.format_error(value).map(|message| {
            if self.tag_field {
                ValidationError::for_field(self.name, message)
            } else {
                ValidationError::new(message)
            }
        })
    }

    fn format_error(&self, value: &Value) -> Option<String> {
        match self.constraint {
            Constraint::TextShorterThan(limit) => match value.as_str() {
                None => Some(self.not_a_string()),
                Some(text) if text.chars().count() >= limit => {
                    Some(format!("Should contain less than {} characters", limit))
                }
                Some(_) => None,
            },
            Constraint::TextOfLength(length) => match value.as_str() {
                None => Some(self.not_a_string()),
                Some(text) if text.chars().count() != length => Some(format!(
                    "The field '{}' should contain {} characters",
                    self.name, length
                )),
                Some(_) => None,
            },
            Constraint::Text => (!value.is_string()).then(|| self.not_a_string()),
            Constraint::Boolean => (!value.is_boolean())
                .then(|| format!("The field '{}' should be a boolean", self.name)),
            Constraint::Number => (!value.is_number())
                .then(|| format!("The field '{}' should be a number", self.name)),
        }
    }

    fn not_a_string(&self) -> String {
        format!("The field '{}' should be a string", self.name)
    }
}

/// Ordered set of field rules for one resource.
///
/// Every rule is evaluated on every call; errors accumulate in rule order.
#[derive(Debug, Clone, Copy)]
pub struct Ruleset {
    rules: &'static [FieldRule],
}

impl Ruleset {
    pub const fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    pub fn validate(&self, payload: &Map<String, Value>) -> Vec<ValidationError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(payload.get(rule.name)))
            .collect()
    }

    pub fn check(&self, payload: &Map<String, Value>) -> Result<(), Vec<ValidationError>> {
        let errors = self.validate(payload);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub const MOVIE_RULES: Ruleset = Ruleset::new(&[
    FieldRule {
        name: "title",
        required: true,
        constraint: Constraint::TextShorterThan(255),
        tag_field: true,
    },
    FieldRule {
        name: "director",
        required: true,
        constraint: Constraint::TextShorterThan(255),
        tag_field: true,
    },
    FieldRule {
        name: "year",
        required: true,
        constraint: Constraint::TextOfLength(4),
        tag_field: false,
    },
    FieldRule {
        name: "color",
        required: true,
        constraint: Constraint::Boolean,
        tag_field: false,
    },
    FieldRule {
        name: "duration",
        required: true,
        constraint: Constraint::Number,
        tag_field: false,
    },
]);

// Presence is left to the store; only the value types are narrowed here.
pub const USER_RULES: Ruleset = Ruleset::new(&[
    FieldRule {
        name: "firstname",
        required: false,
        constraint: Constraint::Text,
        tag_field: true,
    },
    FieldRule {
        name: "lastname",
        required: false,
        constraint: Constraint::Text,
        tag_field: true,
    },
    FieldRule {
        name: "email",
        required: false,
        constraint: Constraint::Text,
        tag_field: true,
    },
    FieldRule {
        name: "city",
        required: false,
        constraint: Constraint::Text,
        tag_field: true,
    },
    FieldRule {
        name: "language",
        required: false,
        constraint: Constraint::Text,
        tag_field: true,
    },
]);
