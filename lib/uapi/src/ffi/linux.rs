//! # Definitions of Linux System Interfaces
//!
//! This module mirrors the Linux kernel `uapi` definitions needed to drive
//! sound and video devices via `ioctl(2)`. Every definition is written once
//! and is valid for all architectures, since the compiler computes the
//! layout of each mirror with the C rules of the compilation target.
//!
//! ## Completeness
//!
//! This module does not claim complete coverage of the mirrored headers.
//! Structures are complete, though, including all union branches, since a
//! missing member would change the layout. Feel free to add more interfaces
//! if needed.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

#[cfg(test)]
mod test;

pub mod asound;
pub mod ioctl;
pub mod types;
pub mod videodev2;
