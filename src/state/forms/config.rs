//! Serializable form descriptions

use super::error::FormError;
use super::field::FormField;
use super::rule::ValidationRule;
use serde::{Deserialize, Serialize};

/// Fields and rules supplied when a form is constructed
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    pub fields: Vec<FieldConfig>,
}

/// One field entry of a [`FormConfig`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub initial_value: String,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Serialized form of a [`ValidationRule`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    Required { message: String },
    Pattern { regex: String, message: String },
}

impl FieldConfig {
    /// Compile the rules and build the field
    pub fn into_field(self) -> Result<FormField, FormError> {
        let mut field = FormField::with_value(&self.name, self.initial_value);
        for rule in self.rules {
            let rule = match rule {
                RuleConfig::Required { message } => ValidationRule::required(message),
                RuleConfig::Pattern { regex, message } => {
                    ValidationRule::pattern(&regex, message).map_err(|source| {
                        FormError::InvalidPattern {
                            field: self.name.clone(),
                            source,
                        }
                    })?
                }
            };
            field = field.rule(rule);
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOGIN_JSON: &str = r#"{
        "fields": [
            {
                "name": "email",
                "rules": [
                    {"kind": "required", "message": "Email is required"},
                    {"kind": "pattern", "regex": "^[^@]+@[^@]+\\.[^@]+$", "message": "Invalid email"}
                ]
            },
            {
                "name": "password",
                "initial_value": "hunter2",
                "rules": [{"kind": "required", "message": "Password is required"}]
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_login_config() {
        let config: FormConfig = serde_json::from_str(LOGIN_JSON).unwrap();
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[0].name, "email");
        assert_eq!(config.fields[0].initial_value, "");
        assert_eq!(
            config.fields[0].rules[0],
            RuleConfig::Required {
                message: "Email is required".to_string()
            }
        );
        assert_eq!(config.fields[1].initial_value, "hunter2");
    }

    #[test]
    fn test_rules_default_to_empty() {
        let field: FieldConfig = serde_json::from_str(r#"{"name": "nickname"}"#).unwrap();
        assert!(field.rules.is_empty());
    }

    #[test]
    fn test_unknown_rule_kind_is_rejected() {
        let result: Result<RuleConfig, _> =
            serde_json::from_str(r#"{"kind": "min_length", "message": "short"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_field_keeps_rule_order() {
        let config: FormConfig = serde_json::from_str(LOGIN_JSON).unwrap();
        let field = config.fields[0].clone().into_field().unwrap();
        let messages: Vec<&str> = field.rules().iter().map(|r| r.message()).collect();
        assert_eq!(messages, vec!["Email is required", "Invalid email"]);
    }

    #[test]
    fn test_into_field_reports_bad_pattern() {
        let field = FieldConfig {
            name: "zip".to_string(),
            initial_value: String::new(),
            rules: vec![RuleConfig::Pattern {
                regex: "[0-9".to_string(),
                message: "bad zip".to_string(),
            }],
        };
        let err = field.into_field().unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { ref field, .. } if field == "zip"));
        assert!(err.to_string().starts_with("invalid pattern for field `zip`"));
    }
}
