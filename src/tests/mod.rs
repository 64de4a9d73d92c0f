//! Crate-internal feature tests.
//!
//! Unit tests beside the code cover the primitives; the modules here
//! exercise whole flows: gate resolution, the save workflow, controller
//! event handling, and the session driver.
