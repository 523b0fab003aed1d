//! Declarative description of the `tcl_ac` climate platform options and the
//! generic (structural) half of validation.
//!
//! The schema is plain data: a list of [`FieldDescriptor`]s. Stage one of
//! validation walks the raw mapping against it, rejecting unknown keys,
//! filling defaults and coercing booleans. Choice membership is checked
//! afterwards by [`validate`](super::validate).

use serde_yaml::{Mapping, Value};

use super::types::{HorizontalDirection, VerticalDirection};
use super::validate::ConfigError;

pub const CONF_BEEPER: &str = "beeper_enabled";
pub const CONF_DISPLAY: &str = "display_enabled";
pub const CONF_VERTICAL_DIRECTION: &str = "vertical_direction";
pub const CONF_HORIZONTAL_DIRECTION: &str = "horizontal_direction";
pub const CONF_ID: &str = "id";

/// Keys owned by the host's climate entity, component and UART device
/// schemas. They are accepted and handed through untouched.
pub const HOST_KEYS: &[&str] = &[
    "platform",
    // entity
    CONF_ID,
    "name",
    "internal",
    "disabled_by_default",
    "icon",
    "entity_category",
    "device_id",
    // climate
    "visual",
    "on_state",
    "on_control",
    "web_server",
    "web_server_id",
    "mqtt_id",
    "retain",
    "discovery",
    "availability",
    "qos",
    "state_topic",
    "command_topic",
    "action_state_topic",
    "current_temperature_state_topic",
    "current_humidity_state_topic",
    "fan_mode_state_topic",
    "fan_mode_command_topic",
    "mode_state_topic",
    "mode_command_topic",
    "preset_state_topic",
    "preset_command_topic",
    "swing_mode_state_topic",
    "swing_mode_command_topic",
    "target_humidity_state_topic",
    "target_humidity_command_topic",
    "target_temperature_state_topic",
    "target_temperature_command_topic",
    "target_temperature_high_state_topic",
    "target_temperature_high_command_topic",
    "target_temperature_low_state_topic",
    "target_temperature_low_command_topic",
    // component
    "setup_priority",
    // uart device
    "uart_id",
];

/// Which keys besides the adapter's own options the host schema accepts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HostSchema {
    /// Only these keys; anything else is [`ConfigError::UnknownKey`].
    Keys(&'static [&'static str]),
    /// Every extra key is passed through and left for the host to judge.
    Open,
}

impl HostSchema {
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            HostSchema::Keys(keys) => keys.contains(&key),
            HostSchema::Open => true,
        }
    }
}

impl Default for HostSchema {
    fn default() -> Self {
        HostSchema::Keys(HOST_KEYS)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Boolean,
    /// Case-insensitive choice among lowercase canonical strings.
    Choice(&'static [&'static str]),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldDefault {
    Boolean(bool),
    Choice(&'static str),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
}

pub static SCHEMA: [FieldDescriptor; 4] = [
    FieldDescriptor {
        name: CONF_BEEPER,
        kind: FieldKind::Boolean,
        default: FieldDefault::Boolean(true),
    },
    FieldDescriptor {
        name: CONF_DISPLAY,
        kind: FieldKind::Boolean,
        default: FieldDefault::Boolean(false),
    },
    FieldDescriptor {
        name: CONF_VERTICAL_DIRECTION,
        kind: FieldKind::Choice(VerticalDirection::CHOICES),
        default: FieldDefault::Choice("max_down"),
    },
    FieldDescriptor {
        name: CONF_HORIZONTAL_DIRECTION,
        kind: FieldKind::Choice(HorizontalDirection::CHOICES),
        default: FieldDefault::Choice("max_right"),
    },
];

pub fn field(name: &str) -> Option<&'static FieldDescriptor> {
    SCHEMA.iter().find(|f| f.name == name)
}

/// Which scalars count as booleans.
///
/// The host framework decides this; [`BooleanPolicy::PERMISSIVE`] mirrors
/// its boolean validator and is the default.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BooleanPolicy {
    pub truthy: &'static [&'static str],
    pub falsy: &'static [&'static str],
}

impl BooleanPolicy {
    /// Only YAML booleans.
    pub const STRICT: BooleanPolicy = BooleanPolicy { truthy: &[], falsy: &[] };

    /// YAML booleans plus case-insensitive word literals.
    pub const PERMISSIVE: BooleanPolicy = BooleanPolicy {
        truthy: &["true", "yes", "on", "enable"],
        falsy: &["false", "no", "off", "disable"],
    };

    pub fn coerce(&self, value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => {
                let s = s.to_lowercase();
                if self.truthy.contains(&s.as_str()) {
                    Some(true)
                } else if self.falsy.contains(&s.as_str()) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for BooleanPolicy {
    fn default() -> Self {
        BooleanPolicy::PERMISSIVE
    }
}

/// The host-defined parts of validation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationOptions {
    pub booleans: BooleanPolicy,
    pub host_schema: HostSchema,
}

/// A field value after stage one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    Boolean(bool),
    /// Already lowercased; membership not yet checked.
    Choice(String),
}

/// Output of the structural pass: one value per [`SCHEMA`] entry, in schema
/// order, plus the host-owned keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Structured {
    pub fields: Vec<(&'static FieldDescriptor, FieldValue)>,
    pub host_options: Mapping,
}

impl Structured {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(f, _)| f.name == name)
            .map(|(_, v)| v)
    }
}

pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(t) => format!("{}", t.tag),
    }
}

fn coerce_field(
    descriptor: &'static FieldDescriptor,
    value: &Value,
    policy: &BooleanPolicy,
) -> Result<FieldValue, ConfigError> {
    match descriptor.kind {
        FieldKind::Boolean => policy
            .coerce(value)
            .map(FieldValue::Boolean)
            .ok_or_else(|| ConfigError::InvalidType {
                key: descriptor.name,
                expected: "boolean",
                value: describe(value),
            }),
        // numbers are compared by their text, like any other unknown choice
        FieldKind::Choice(_) => match value {
            Value::String(s) => Ok(FieldValue::Choice(s.to_lowercase())),
            Value::Number(n) => Ok(FieldValue::Choice(n.to_string().to_lowercase())),
            other => Err(ConfigError::InvalidType {
                key: descriptor.name,
                expected: "string",
                value: describe(other),
            }),
        },
    }
}

fn default_value(descriptor: &FieldDescriptor) -> FieldValue {
    match descriptor.default {
        FieldDefault::Boolean(b) => FieldValue::Boolean(b),
        FieldDefault::Choice(s) => FieldValue::Choice(s.to_string()),
    }
}

/// Stage one: shape, unknown keys, defaults and type coercion.
pub fn check_structure(
    raw: &Value,
    options: &ValidationOptions,
) -> Result<Structured, ConfigError> {
    let mapping = match raw {
        Value::Mapping(m) => m,
        Value::Null => return check_mapping(&Mapping::new(), options),
        other => return Err(ConfigError::NotAMapping(describe(other))),
    };
    check_mapping(mapping, options)
}

fn check_mapping(
    mapping: &Mapping,
    options: &ValidationOptions,
) -> Result<Structured, ConfigError> {
    let mut host_options = Mapping::new();
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or_else(|| ConfigError::NonStringKey(describe(key)))?;
        if field(key).is_some() {
            continue;
        }
        if options.host_schema.accepts(key) {
            host_options.insert(Value::String(key.to_string()), value.clone());
        } else {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
    }

    let mut fields = Vec::with_capacity(SCHEMA.len());
    for descriptor in SCHEMA.iter() {
        let value = match mapping.get(descriptor.name) {
            Some(value) => coerce_field(descriptor, value, &options.booleans)?,
            None => {
                log::debug!("{} not set, using default {:?}", descriptor.name, descriptor.default);
                default_value(descriptor)
            }
        };
        fields.push((descriptor, value));
    }

    Ok(Structured { fields, host_options })
}
