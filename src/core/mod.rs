//! Data types shared by every HAL capability area.

pub mod address;
pub mod uuid;
