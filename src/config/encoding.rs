pub trait OneByteEncodable {
    fn encoded_as_byte(&self) -> u8;
}

macro_rules! direction_code_enum {
    ( $( $enum:ty ),* ) => {
        $(
            impl From<$enum> for $crate::config::types::DirectionCode
            where
                $enum: OneByteEncodable,
            {
                fn from(direction: $enum) -> Self {
                    $crate::config::types::DirectionCode(direction.encoded_as_byte())
                }
            }
        )*
    }
}
