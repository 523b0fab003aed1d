use core::fmt;

use embedded_hal::serial;

use crate::config::{
    validate_with, DirectionCode, HorizontalDirection, RawConfig, ValidatedConfig,
    ValidationOptions, VerticalDirection,
};
use crate::plan::build_initialization_plan;
use crate::Error;

/// The setters every TCL climate driver exposes to the host's generated code.
pub trait ClimateDriver {
    fn set_beeper_enabled(&mut self, enabled: bool);
    fn set_display_enabled(&mut self, enabled: bool);
    fn set_vertical_direction(&mut self, code: DirectionCode);
    fn set_horizontal_direction(&mut self, code: DirectionCode);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Serial line parameters, as the host's UART bus must be configured.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UartSettings {
    pub baud_rate: u32,
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: u8,
}

impl fmt::Display for UartSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Even => 'E',
            Parity::Odd => 'O',
        };
        write!(f, "{} {}{}{}", self.baud_rate, self.data_bits, parity, self.stop_bits)
    }
}

/// Driver instance state for one TCL unit.
///
/// The serial port is configured and handed over by the host; this type only
/// holds it alongside the settings the initialization plan writes. The unit
/// talks at 9600 baud, 8 data bits, even parity, 1 stop bit (9600 8E1), see
/// [`TclAcClimate::UART_SETTINGS`].
pub struct TclAcClimate<S> where S: serial::Read<u8> + serial::Write<u8> {
    serial: S,
    beeper_enabled: bool,
    display_enabled: bool,
    vertical_direction: DirectionCode,
    horizontal_direction: DirectionCode,
}

impl<S> TclAcClimate<S> where S: serial::Read<u8> + serial::Write<u8> {
    pub const UART_SETTINGS: UartSettings = UartSettings {
        baud_rate: 9600,
        data_bits: 8,
        parity: Parity::Even,
        stop_bits: 1,
    };

    pub fn new(serial: S) -> Self {
        TclAcClimate {
            serial,
            beeper_enabled: true,
            display_enabled: false,
            vertical_direction: VerticalDirection::default().into(),
            horizontal_direction: HorizontalDirection::default().into(),
        }
    }

    pub fn beeper_enabled(&self) -> bool { self.beeper_enabled }
    pub fn display_enabled(&self) -> bool { self.display_enabled }
    pub fn vertical_direction(&self) -> DirectionCode { self.vertical_direction }
    pub fn horizontal_direction(&self) -> DirectionCode { self.horizontal_direction }

    /// The transport, for the runtime driver to read and write frames.
    pub fn serial(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Give the transport back to the host.
    pub fn release(self) -> S {
        self.serial
    }

    pub fn dump_config(&self) {
        log::info!("TCL AC:");
        log::info!("  UART: {}", Self::UART_SETTINGS);
        log::info!("  Beeper: {}", if self.beeper_enabled { "ON" } else { "OFF" });
        log::info!("  Display: {}", if self.display_enabled { "ON" } else { "OFF" });
        log::info!("  Vertical Direction: {}", self.vertical_direction);
        log::info!("  Horizontal Direction: {}", self.horizontal_direction);
    }
}

impl<S> ClimateDriver for TclAcClimate<S> where S: serial::Read<u8> + serial::Write<u8> {
    fn set_beeper_enabled(&mut self, enabled: bool) {
        self.beeper_enabled = enabled;
    }

    fn set_display_enabled(&mut self, enabled: bool) {
        self.display_enabled = enabled;
    }

    fn set_vertical_direction(&mut self, code: DirectionCode) {
        self.vertical_direction = code;
    }

    fn set_horizontal_direction(&mut self, code: DirectionCode) {
        self.horizontal_direction = code;
    }
}

pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Entry points of the host framework that a platform must call.
///
/// `new_instance` allocates the driver (and its serial transport, which the
/// host owns). The three `register_*` hooks expose it as a component, a
/// climate entity and a UART device respectively.
pub trait Host {
    type Instance: ClimateDriver;

    fn new_instance(&mut self, config: &ValidatedConfig) -> Result<Self::Instance, HostError>;

    fn register_component(
        &mut self,
        instance: &mut Self::Instance,
        config: &ValidatedConfig,
    ) -> Result<(), HostError>;

    fn register_climate(
        &mut self,
        instance: &mut Self::Instance,
        config: &ValidatedConfig,
    ) -> Result<(), HostError>;

    fn register_uart_device(
        &mut self,
        instance: &mut Self::Instance,
        config: &ValidatedConfig,
    ) -> Result<(), HostError>;
}

/// Validate one platform entry and set up its driver instance through `host`.
///
/// Nothing is handed to the host unless validation and plan building both
/// succeed.
pub fn configure<H: Host>(raw: &RawConfig, host: &mut H) -> Result<H::Instance, Error> {
    configure_with(raw, &ValidationOptions::default(), host)
}

pub fn configure_with<H: Host>(
    raw: &RawConfig,
    options: &ValidationOptions,
    host: &mut H,
) -> Result<H::Instance, Error> {
    let config = validate_with(raw, options)?;
    let plan = build_initialization_plan(&config)?;

    let mut instance = host
        .new_instance(&config)
        .map_err(|source| Error::Host { hook: "new_instance", source })?;
    host.register_component(&mut instance, &config)
        .map_err(|source| Error::Host { hook: "register_component", source })?;
    host.register_climate(&mut instance, &config)
        .map_err(|source| Error::Host { hook: "register_climate", source })?;
    host.register_uart_device(&mut instance, &config)
        .map_err(|source| Error::Host { hook: "register_uart_device", source })?;

    plan.apply(&mut instance);
    log::debug!("configured tcl_ac instance {}", config.id().unwrap_or("<generated>"));
    Ok(instance)
}

/// Configure several instances. Each entry is handled on its own; one
/// failing does not affect the others.
pub fn configure_all<H: Host>(
    raws: &[RawConfig],
    host: &mut H,
) -> Vec<Result<H::Instance, Error>> {
    raws.iter().map(|raw| configure(raw, host)).collect()
}
