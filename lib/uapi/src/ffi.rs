//! # Definitions of System Interfaces
//!
//! For all system interfaces the respective raw definitions of constants,
//! structures, and types are provided in this module. They are transposed
//! from the C headers into Rust following a small set of rules, yielding the
//! same result a tool like `bindgen` would produce:
//!
//!  * Names are kept exactly as in the C headers, including case and
//!    prefixes, so every definition can be looked up in the upstream
//!    headers. Members named after Rust keywords use raw identifiers
//!    (`r#type`).
//!
//!  * Scalar members use the C types of the `libc` crate (`c_int`,
//!    `c_ulong`, ...) or the fixed-size kernel types, exactly as the C
//!    headers spell them. This keeps the mirrors architecture independent:
//!    the compiler applies the C layout rules of the target.
//!
//!  * C-enums are provided as raw integer constants.
//!
//!  * Anonymous unions are named after their enclosing structure with an
//!    `_anon` suffix and are embedded as a member called `anon`. Named
//!    unions are named after their enclosing structure and member.
//!
//!  * Pointers are kept as raw pointers. Only their size and alignment
//!    matter for the mirrors.
//!
//! This module only provides definitions, but no implementation.

pub mod linux;
