//! # Kernel ABI Mirrors and Probe Manifests
//!
//! This library mirrors the Linux kernel interfaces of the device families
//! supported by `kabi-probe`, and declares which parts of them are emitted.
//!
//! The mirrors in [`ffi`] are `#[repr(C)]` definitions, so their layout is
//! the layout the C compiler of the compilation target uses for the kernel
//! headers. The manifests in [`manifest`] capture constants and structure
//! layouts from these mirrors via [`kabi_layout::probe`].

pub mod ffi;
pub mod manifest;
