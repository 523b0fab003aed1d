use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::schema::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("expected a mapping of options, got {0}")]
    NotAMapping(String),
    #[error("option keys must be strings, got {0}")]
    NonStringKey(String),
    #[error("[{0}] is an invalid option for [tcl_ac]")]
    UnknownKey(String),
    #[error("{key}: expected a {expected} value, but cannot convert '{value}'")]
    InvalidType {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{key}: unknown value '{value}', valid options are {}", quoted(.allowed))]
    InvalidChoice {
        key: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("YAML parsing failed: {0}")]
    Yaml(String),
}

fn quoted(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|a| format!("'{}'", a))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e.to_string())
    }
}

type Result<T> = std::result::Result<T, ConfigError>;

/// One platform entry as it came out of the configuration loader.
#[derive(Clone, Debug, PartialEq)]
pub struct RawConfig(pub Value);

impl RawConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(RawConfig(serde_yaml::from_str(s)?))
    }

    /// Parse a YAML list of platform entries.
    pub fn list_from_yaml_str(s: &str) -> Result<Vec<Self>> {
        let entries: Vec<Value> = serde_yaml::from_str(s)?;
        Ok(entries.into_iter().map(RawConfig).collect())
    }
}

impl From<Mapping> for RawConfig {
    fn from(m: Mapping) -> Self {
        RawConfig(Value::Mapping(m))
    }
}

/// Configuration for one driver instance with every option populated.
///
/// Direction fields hold lowercase canonical names. Building a value by hand
/// skips validation; [`build_initialization_plan`](crate::build_initialization_plan)
/// still rejects names outside the lookup tables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidatedConfig {
    pub beeper_enabled: bool,
    pub display_enabled: bool,
    pub vertical_direction: String,
    pub horizontal_direction: String,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub host_options: Mapping,
}

impl ValidatedConfig {
    /// The declared instance id, if the user gave one.
    pub fn id(&self) -> Option<&str> {
        self.host_options.get(CONF_ID).and_then(Value::as_str)
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        ValidatedConfig {
            beeper_enabled: true,
            display_enabled: false,
            vertical_direction: "max_down".to_string(),
            horizontal_direction: "max_right".to_string(),
            host_options: Mapping::new(),
        }
    }
}

fn check_choice(descriptor: &'static FieldDescriptor, value: &str) -> Result<()> {
    match descriptor.kind {
        FieldKind::Choice(allowed) if !allowed.contains(&value) => Err(ConfigError::InvalidChoice {
            key: descriptor.name,
            value: value.to_string(),
            allowed,
        }),
        _ => Ok(()),
    }
}

/// Validate with the default [`BooleanPolicy`] and [`HostSchema`].
pub fn validate(raw: &RawConfig) -> Result<ValidatedConfig> {
    validate_with(raw, &ValidationOptions::default())
}

pub fn validate_with(raw: &RawConfig, options: &ValidationOptions) -> Result<ValidatedConfig> {
    let structured = check_structure(&raw.0, options)?;

    let mut config = ValidatedConfig {
        host_options: structured.host_options,
        ..ValidatedConfig::default()
    };

    for (descriptor, value) in structured.fields {
        match value {
            FieldValue::Boolean(b) => match descriptor.name {
                CONF_BEEPER => config.beeper_enabled = b,
                CONF_DISPLAY => config.display_enabled = b,
                _ => {}
            },
            FieldValue::Choice(s) => {
                check_choice(descriptor, &s)?;
                match descriptor.name {
                    CONF_VERTICAL_DIRECTION => config.vertical_direction = s,
                    CONF_HORIZONTAL_DIRECTION => config.horizontal_direction = s,
                    _ => {}
                }
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawConfig {
        RawConfig::from_yaml_str(s).unwrap()
    }

    #[test]
    fn empty_gets_defaults_test() {
        assert_eq!(validate(&raw("{}")), Ok(ValidatedConfig::default()));
    }

    #[test]
    fn explicit_values_test() {
        let config = validate(&raw(
            "beeper_enabled: false\n\
             display_enabled: true\n\
             vertical_direction: up\n\
             horizontal_direction: left",
        ))
        .unwrap();
        assert!(!config.beeper_enabled);
        assert!(config.display_enabled);
        assert_eq!(config.vertical_direction, "up");
        assert_eq!(config.horizontal_direction, "left");
    }

    #[test]
    fn case_insensitive_choice_test() {
        let config =
            validate(&raw("vertical_direction: SWING\nhorizontal_direction: Max_Left")).unwrap();
        assert_eq!(config.vertical_direction, "swing");
        assert_eq!(config.horizontal_direction, "max_left");
    }

    #[test]
    fn invalid_choice_test() {
        assert_eq!(
            validate(&raw("vertical_direction: diagonal")),
            Err(ConfigError::InvalidChoice {
                key: CONF_VERTICAL_DIRECTION,
                value: "diagonal".into(),
                allowed: &["max_up", "up", "center", "down", "max_down", "swing"],
            })
        );
    }

    #[test]
    fn cross_axis_choice_test() {
        // valid vertically, not horizontally
        assert!(matches!(
            validate(&raw("horizontal_direction: max_up")),
            Err(ConfigError::InvalidChoice { key: CONF_HORIZONTAL_DIRECTION, .. })
        ));
    }

    #[test]
    fn numeric_choice_test() {
        assert_eq!(
            validate(&raw("horizontal_direction: 3")),
            Err(ConfigError::InvalidChoice {
                key: CONF_HORIZONTAL_DIRECTION,
                value: "3".into(),
                allowed: &["max_left", "left", "center", "right", "max_right", "swing"],
            })
        );
    }

    #[test]
    fn climate_entity_keys_pass_through_test() {
        let config = validate(&raw(
            "platform: tcl_ac\nname: AC\nmqtt_id: ac_mqtt\non_state:\n  - logger.log: changed",
        ))
        .unwrap();
        assert_eq!(config.host_options.get("mqtt_id").and_then(Value::as_str), Some("ac_mqtt"));
        assert!(config.host_options.get("on_state").is_some());
        assert_eq!(config.vertical_direction, "max_down");
    }

    #[test]
    fn boolean_word_permissive_test() {
        let config = validate(&raw("beeper_enabled: 'no'\ndisplay_enabled: yes")).unwrap();
        assert!(!config.beeper_enabled);
        assert!(config.display_enabled);
    }

    #[test]
    fn boolean_word_strict_test() {
        let strict = ValidationOptions {
            booleans: BooleanPolicy::STRICT,
            ..ValidationOptions::default()
        };
        assert_eq!(
            validate_with(&raw("beeper_enabled: yes"), &strict),
            Err(ConfigError::InvalidType {
                key: CONF_BEEPER,
                expected: "boolean",
                value: "yes".into(),
            })
        );
    }

    #[test]
    fn boolean_number_rejected_test() {
        assert!(matches!(
            validate(&raw("display_enabled: 1")),
            Err(ConfigError::InvalidType { key: CONF_DISPLAY, .. })
        ));
    }

    #[test]
    fn id_test() {
        let config = validate(&raw("id: living_room_ac\nname: Living Room")).unwrap();
        assert_eq!(config.id(), Some("living_room_ac"));
        assert_eq!(ValidatedConfig::default().id(), None);
    }

    #[test]
    fn error_message_test() {
        let err = validate(&raw("vertical_direction: diagonal")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "vertical_direction: unknown value 'diagonal', valid options are \
             'max_up', 'up', 'center', 'down', 'max_down', 'swing'"
        );
    }

    #[test]
    fn yaml_error_test() {
        assert!(matches!(RawConfig::from_yaml_str("a: [1"), Err(ConfigError::Yaml(_))));
    }
}
