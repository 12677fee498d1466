//! A UUID (See Core Spec 5.3 Vol 1E 2.9.1. Basic Types)

/// A UUID (See Core Spec 5.3 Vol 1E 2.9.1. Basic Types)
///
/// Note that the underlying storage is BIG-ENDIAN, matching the HAL's
/// bt_uuid_t interop layout - all converters act as though the backing
/// storage is LITTLE-ENDIAN.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Uuid([u8; 16]);

const BASE_UUID: u128 = 0x00000000_0000_1000_8000_0080_5F9B_34FB;

impl Uuid {
    /// Constructor from a 16-bit or 32-bit UUID alias.
    pub const fn new(val: u32) -> Self {
        Self((BASE_UUID + ((val as u128) << 96)).to_be_bytes())
    }

    /// Constructor from the HAL's little-endian byte order.
    pub fn new_from_le_bytes(mut bytes: [u8; 16]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    /// Returns the UUID in the HAL's little-endian byte order.
    pub fn le_bytes(&self) -> [u8; 16] {
        let mut out = self.0;
        out.reverse();
        out
    }
}
