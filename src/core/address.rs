//! A Bluetooth device address (mirrors the HAL's bt_bdaddr_t)

/// A six-byte Bluetooth device address.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct RawAddress {
    /// The address bytes stored in little-endian format
    pub address: [u8; 6],
}

impl RawAddress {
    /// An empty/invalid address
    pub const EMPTY: Self = Self { address: [0, 0, 0, 0, 0, 0] };
}

impl From<[u8; 6]> for RawAddress {
    fn from(address: [u8; 6]) -> Self {
        Self { address }
    }
}
