//! tcl_ac
//!
//! Configuration adapter for TCL air conditioners driven over their UART
//! connector. It declares the platform options (beeper, display, vane
//! directions), validates them, and turns them into the setter calls that
//! wire up one driver instance.
//!
//! There is no protocol code here. The unit's serial link is owned by the
//! host framework; this library only decides what the driver should be told
//! at start-up. The UART connection operates at 9600 baud, 8 bits per byte,
//! even parity with 1 stop bit (9600 8E1); configure the host's UART bus as
//! such. The same values are available as [`TclAcClimate::UART_SETTINGS`].
//!
//! ## General Usage
//!
//! Validate a platform entry and build its initialization plan:
//!
//! ```
//! use tcl_ac::{build_initialization_plan, validate, Instruction, RawConfig};
//!
//! let raw = RawConfig::from_yaml_str("
//!     platform: tcl_ac
//!     display_enabled: true
//!     vertical_direction: SWING
//! ").unwrap();
//!
//! // Missing options get their defaults, directions are lowercased.
//! let config = validate(&raw).unwrap();
//! assert_eq!(config.vertical_direction, "swing");
//! assert_eq!(config.horizontal_direction, "max_right");
//!
//! let plan = build_initialization_plan(&config).unwrap();
//!
//! // swing is sent as 0xff, max_right as 0x05
//! assert_eq!(plan.instructions(), &[
//!     Instruction::SetBeeperEnabled(true),
//!     Instruction::SetDisplayEnabled(true),
//!     Instruction::SetVerticalDirection(tcl_ac::VerticalDirection::Swing.into()),
//!     Instruction::SetHorizontalDirection(tcl_ac::HorizontalDirection::MaxRight.into()),
//! ]);
//!
//! for instruction in &plan {
//!     println!("{}", instruction);
//! }
//! ```
//!
//! Bad values are rejected before anything is generated:
//!
//! ```
//! use tcl_ac::{validate, ConfigError, RawConfig};
//!
//! let raw = RawConfig::from_yaml_str("horizontal_direction: diagonal").unwrap();
//!
//! match validate(&raw) {
//!     Err(ConfigError::InvalidChoice { key, value, .. }) => {
//!         assert_eq!(key, "horizontal_direction");
//!         assert_eq!(value, "diagonal");
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! To hand a configured driver to the host, implement [`Host`] and call
//! [`configure`].

pub mod config;
pub mod interface;
pub mod plan;

#[doc(inline)]
pub use config::*;
pub use interface::{
    configure, configure_all, configure_with, ClimateDriver, Host, HostError, Parity, TclAcClimate,
    UartSettings,
};
pub use plan::{build_initialization_plan, InitializationPlan, Instruction, PlanError};

/// Any failure while setting up one driver instance.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot build initialization plan: {0}")]
    Plan(#[from] PlanError),
    #[error("host rejected instance in {hook}: {source}")]
    Host {
        hook: &'static str,
        source: HostError,
    },
}
