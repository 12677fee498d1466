//! Helpers with no HAL semantics of their own.

pub mod observer_list;
