#![warn(missing_docs)]
#![warn(clippy::correctness)]

//! Raspberry Pi GPIO control through the kernel's sysfs interface.
//!
//! Pins must be exported through `/sys/class/gpio/export` before any
//! operation here can succeed; export and unexport are left to the operator.

/// Errors that the pin operations can report.
pub mod error;

/// The set of GPIO pins exposed on the physical header.
pub mod pins;

/// Paths and value types for the sysfs GPIO class directory.
pub mod sysfs;

/// Everything related to the gpio command line tool.
pub mod tool;
