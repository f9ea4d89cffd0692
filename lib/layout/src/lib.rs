//! # Kernel ABI Layout Resolution and Emission
//!
//! This library turns layout facts captured from native type definitions
//! (sizes, offsets, alignments, and constant values) into declarations of a
//! foreign type system that reproduce the same byte layout. The foreign
//! type system is that of Go, as used by the device-control libraries that
//! consume the generated declarations.
//!
//! The library is split into the following stages:
//!
//!  * [`decl`] holds the native facts: constants, type aliases, and
//!    structures with their members. The [`probe`] macros capture these facts
//!    from Rust `#[repr(C)]` definitions, so they always reflect the layout
//!    rules of the compilation target.
//!
//!  * [`layout`] resolves a [`decl::Module`] against a [`target::Target`]:
//!    it sizes every declared type, derives the synthetic padding and filler
//!    fields, and verifies that the emitted declarations reproduce every
//!    native offset and size under the layout rules of the target.
//!
//!  * [`emit`] renders a resolved module as text.
//!
//! Resolution is all-or-nothing. Either a module resolves completely, or
//! an [`Error`] describes the first inconsistency. Nothing partial is ever
//! rendered.

pub mod decl;
pub mod emit;
pub mod error;
pub mod layout;
pub mod probe;
pub mod target;
pub mod ty;

pub use decl::{
    Alias,
    Class,
    ConstBlock,
    ConstGroup,
    Constant,
    Member,
    Module,
    Radix,
    ScalarKind,
    Struct,
};
pub use emit::Options;
pub use error::Error;
pub use layout::{Field, FieldKind, Resolved, ResolvedAlias, ResolvedStruct};
pub use target::{Builtin, Target};
