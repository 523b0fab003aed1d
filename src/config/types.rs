use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use super::encoding::*;

/// Protocol byte for a vane position.
///
/// Only the values produced by [`VerticalDirection`] and
/// [`HorizontalDirection`] can be constructed: 1 to 5 for fixed positions
/// from one extreme to the other, and [`DirectionCode::SWING`] for a
/// continuous sweep.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct DirectionCode(u8);

impl DirectionCode {
    pub const SWING: DirectionCode = DirectionCode(0xff);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_swing(self) -> bool {
        self == Self::SWING
    }
}

impl fmt::Display for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownDirection;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VerticalDirection {
    MaxUp   = 0x01,
    Up      = 0x02,
    Center  = 0x03,
    Down    = 0x04,
    MaxDown = 0x05,
    Swing   = 0xff,
}

impl VerticalDirection {
    pub const CHOICES: &'static [&'static str] =
        &["max_up", "up", "center", "down", "max_down", "swing"];

    const TABLE: [(&'static str, VerticalDirection); 6] = [
        ("max_up", VerticalDirection::MaxUp),
        ("up", VerticalDirection::Up),
        ("center", VerticalDirection::Center),
        ("down", VerticalDirection::Down),
        ("max_down", VerticalDirection::MaxDown),
        ("swing", VerticalDirection::Swing),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VerticalDirection::MaxUp => "max_up",
            VerticalDirection::Up => "up",
            VerticalDirection::Center => "center",
            VerticalDirection::Down => "down",
            VerticalDirection::MaxDown => "max_down",
            VerticalDirection::Swing => "swing",
        }
    }
}

impl Default for VerticalDirection {
    fn default() -> Self {
        VerticalDirection::MaxDown
    }
}

impl OneByteEncodable for VerticalDirection {
    fn encoded_as_byte(&self) -> u8 {
        *self as u8
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HorizontalDirection {
    MaxLeft  = 0x01,
    Left     = 0x02,
    Center   = 0x03,
    Right    = 0x04,
    MaxRight = 0x05,
    Swing    = 0xff,
}

impl HorizontalDirection {
    pub const CHOICES: &'static [&'static str] =
        &["max_left", "left", "center", "right", "max_right", "swing"];

    const TABLE: [(&'static str, HorizontalDirection); 6] = [
        ("max_left", HorizontalDirection::MaxLeft),
        ("left", HorizontalDirection::Left),
        ("center", HorizontalDirection::Center),
        ("right", HorizontalDirection::Right),
        ("max_right", HorizontalDirection::MaxRight),
        ("swing", HorizontalDirection::Swing),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HorizontalDirection::MaxLeft => "max_left",
            HorizontalDirection::Left => "left",
            HorizontalDirection::Center => "center",
            HorizontalDirection::Right => "right",
            HorizontalDirection::MaxRight => "max_right",
            HorizontalDirection::Swing => "swing",
        }
    }
}

impl Default for HorizontalDirection {
    fn default() -> Self {
        HorizontalDirection::MaxRight
    }
}

impl OneByteEncodable for HorizontalDirection {
    fn encoded_as_byte(&self) -> u8 {
        *self as u8
    }
}

direction_code_enum!(VerticalDirection, HorizontalDirection);

/// Lookup is against the lowercase canonical names only; callers lowercase
/// user input first.
fn lookup<T: Copy>(table: &[(&'static str, T)], s: &str) -> Result<T, UnknownDirection> {
    table
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, direction)| *direction)
        .ok_or(UnknownDirection)
}

impl FromStr for VerticalDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::TABLE, s)
    }
}

impl FromStr for HorizontalDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::TABLE, s)
    }
}

impl fmt::Display for VerticalDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HorizontalDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for VerticalDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for HorizontalDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_codes_test() {
        let codes: Vec<u8> = VerticalDirection::CHOICES
            .iter()
            .map(|name| DirectionCode::from(name.parse::<VerticalDirection>().unwrap()).value())
            .collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 255]);
    }

    #[test]
    fn horizontal_codes_test() {
        let codes: Vec<u8> = HorizontalDirection::CHOICES
            .iter()
            .map(|name| DirectionCode::from(name.parse::<HorizontalDirection>().unwrap()).value())
            .collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 255]);
    }

    #[test]
    fn choices_match_names_test() {
        for (name, direction) in VerticalDirection::TABLE.iter() {
            assert_eq!(*name, direction.name());
        }
        for (name, direction) in HorizontalDirection::TABLE.iter() {
            assert_eq!(*name, direction.name());
        }
    }

    #[test]
    fn parse_is_exact_test() {
        assert_eq!("SWING".parse::<VerticalDirection>(), Err(UnknownDirection));
        assert_eq!("max_left".parse::<VerticalDirection>(), Err(UnknownDirection));
        assert_eq!("max_up".parse::<HorizontalDirection>(), Err(UnknownDirection));
    }

    #[test]
    fn swing_test() {
        assert!(DirectionCode::from(VerticalDirection::Swing).is_swing());
        assert!(DirectionCode::from(HorizontalDirection::Swing).is_swing());
        assert!(!DirectionCode::from(HorizontalDirection::Center).is_swing());
    }

    #[test]
    fn defaults_test() {
        assert_eq!(VerticalDirection::default(), VerticalDirection::MaxDown);
        assert_eq!(HorizontalDirection::default(), HorizontalDirection::MaxRight);
    }
}
