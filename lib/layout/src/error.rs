//! # Resolution Errors
//!
//! Every inconsistency between the native facts and the declarations that
//! would be emitted for them is reported as an [`Error`]. There is no
//! recoverable path: a module either resolves completely or not at all.

/// Enumeration of all errors reported while resolving a module.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A type expression does not follow the type grammar.
    #[error("invalid type expression `{input}` at byte {position}: {reason}")]
    Syntax {
        input: String,
        position: usize,
        reason: &'static str,
    },

    /// A type expression names a type that is neither a builtin, an alias,
    /// nor a structure.
    #[error("`{owner}` references unknown type `{name}`")]
    UnknownType {
        owner: String,
        name: String,
    },

    /// A type expression names a structure that is declared only after the
    /// referencing declaration.
    #[error("`{owner}` references structure `{name}` before its declaration")]
    ForwardReference {
        owner: String,
        name: String,
    },

    /// An array length names a constant that is not part of the module.
    #[error("`{owner}` references undeclared constant `{name}`")]
    UnknownConstant {
        owner: String,
        name: String,
    },

    /// An array length does not evaluate to a valid length.
    #[error("array length `{expr}` in `{owner}` is invalid: {reason}")]
    Length {
        owner: String,
        expr: String,
        reason: &'static str,
    },

    /// A name is declared twice.
    #[error("duplicate declaration of `{name}`")]
    Duplicate {
        name: String,
    },

    /// No builtin type of the target matches a native scalar.
    #[error("no builtin type for alias `{name}` ({size} bytes)")]
    NoBuiltin {
        name: String,
        size: usize,
    },

    /// A member begins before the previous member ends.
    #[error("`{structure}.{field}` at offset {offset} overlaps the previous member ending at {end}")]
    Overlap {
        structure: String,
        field: String,
        offset: usize,
        end: usize,
    },

    /// A member extends past the end of its structure.
    #[error("`{structure}.{field}` ends at {end}, past the structure size {size}")]
    OutOfBounds {
        structure: String,
        field: String,
        end: usize,
        size: usize,
    },

    /// The declared type of a member does not have the native member size.
    #[error("`{structure}.{field}` is {native} bytes natively, but declared as `{ty}` of {declared} bytes")]
    FieldSize {
        structure: String,
        field: String,
        ty: String,
        native: usize,
        declared: usize,
    },

    /// The target would place a member at a different offset than the
    /// native compiler did.
    #[error("`{structure}.{field}` is at offset {native} natively, but the target places it at {target}")]
    Misaligned {
        structure: String,
        field: String,
        native: usize,
        target: usize,
    },

    /// The target would give a structure a different total size than the
    /// native compiler did.
    #[error("`{structure}` is {native} bytes natively, but {target} bytes on the target")]
    StructSize {
        structure: String,
        native: usize,
        target: usize,
    },

    /// The target would align a structure more strictly than the native
    /// compiler did.
    #[error("`{structure}` is {native}-byte aligned natively, but {target}-byte aligned on the target")]
    StructAlign {
        structure: String,
        native: usize,
        target: usize,
    },
}
