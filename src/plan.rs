use core::fmt;

use heapless::Vec;
use serde::Serialize;

use crate::config::schema::{CONF_HORIZONTAL_DIRECTION, CONF_VERTICAL_DIRECTION};
use crate::config::{DirectionCode, HorizontalDirection, ValidatedConfig, VerticalDirection};
use crate::interface::ClimateDriver;

/// Number of instructions in every plan.
pub const PLAN_LEN: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("{key}: '{value}' has no direction code")]
    UnmappedChoice { key: &'static str, value: String },
}

/// One setter call on the driver instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "call", content = "arg", rename_all = "snake_case")]
pub enum Instruction {
    SetBeeperEnabled(bool),
    SetDisplayEnabled(bool),
    SetVerticalDirection(DirectionCode),
    SetHorizontalDirection(DirectionCode),
}

impl Instruction {
    /// Name of the driver setter this instruction calls.
    pub fn method(&self) -> &'static str {
        match self {
            Instruction::SetBeeperEnabled(_) => "set_beeper_enabled",
            Instruction::SetDisplayEnabled(_) => "set_display_enabled",
            Instruction::SetVerticalDirection(_) => "set_vertical_direction",
            Instruction::SetHorizontalDirection(_) => "set_horizontal_direction",
        }
    }

    pub fn apply<D: ClimateDriver + ?Sized>(&self, driver: &mut D) {
        match *self {
            Instruction::SetBeeperEnabled(b) => driver.set_beeper_enabled(b),
            Instruction::SetDisplayEnabled(b) => driver.set_display_enabled(b),
            Instruction::SetVerticalDirection(code) => driver.set_vertical_direction(code),
            Instruction::SetHorizontalDirection(code) => driver.set_horizontal_direction(code),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::SetBeeperEnabled(b) | Instruction::SetDisplayEnabled(b) => {
                write!(f, "{}({})", self.method(), b)
            }
            Instruction::SetVerticalDirection(code) | Instruction::SetHorizontalDirection(code) => {
                write!(f, "{}({})", self.method(), code)
            }
        }
    }
}

/// The instructions for one driver instance, in declaration order.
///
/// The driver accepts them independently, so order only matters for
/// readable output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InitializationPlan(Vec<Instruction, PLAN_LEN>);

impl InitializationPlan {
    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Instruction> {
        self.0.iter()
    }

    /// Invoke every instruction on `driver` in plan order.
    pub fn apply<D: ClimateDriver + ?Sized>(&self, driver: &mut D) {
        for instruction in self.iter() {
            instruction.apply(driver);
        }
    }
}

impl<'a> IntoIterator for &'a InitializationPlan {
    type Item = &'a Instruction;
    type IntoIter = core::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn vertical_code(name: &str) -> Result<DirectionCode, PlanError> {
    name.parse::<VerticalDirection>()
        .map(DirectionCode::from)
        .map_err(|_| PlanError::UnmappedChoice {
            key: CONF_VERTICAL_DIRECTION,
            value: name.to_string(),
        })
}

fn horizontal_code(name: &str) -> Result<DirectionCode, PlanError> {
    name.parse::<HorizontalDirection>()
        .map(DirectionCode::from)
        .map_err(|_| PlanError::UnmappedChoice {
            key: CONF_HORIZONTAL_DIRECTION,
            value: name.to_string(),
        })
}

/// Translate a validated configuration into setter calls.
///
/// Fails only for a hand-built [`ValidatedConfig`] whose direction names are
/// not canonical.
pub fn build_initialization_plan(
    config: &ValidatedConfig,
) -> Result<InitializationPlan, PlanError> {
    let vertical = vertical_code(&config.vertical_direction)?;
    let horizontal = horizontal_code(&config.horizontal_direction)?;

    let plan = InitializationPlan(
        [
            Instruction::SetBeeperEnabled(config.beeper_enabled),
            Instruction::SetDisplayEnabled(config.display_enabled),
            Instruction::SetVerticalDirection(vertical),
            Instruction::SetHorizontalDirection(horizontal),
        ]
        .into_iter()
        .collect(),
    );
    log::debug!("initialization plan: {:?}", plan.instructions());
    Ok(plan)
}
