//! The hardware abstraction layer surface consumed by the GATT stack.

pub mod fake_gatt_interface;
pub mod gatt_types;
