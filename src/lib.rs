//! A fake Bluetooth GATT HAL interface for exercising the GATT stack in
//! unit tests, where no radio or vendor driver exists.
//!
//! The real HAL hands the stack three fixed tables of function pointers
//! (client, advertiser, server) with no per-call user-data argument. This
//! crate substitutes those tables with entry points that forward to
//! test-supplied handler objects bound in process-wide slots, and lets test
//! code simulate the HAL's asynchronous callbacks by fanning notifications
//! out to registered observers.

pub mod core;
pub mod hal;
pub mod utils;
