//! # Native Declarations
//!
//! This module models the facts captured from native definitions: the values
//! of symbolic constants, the categories of native scalar types, and the
//! size and member offsets of structures. These facts are inputs to
//! [`crate::layout`] and are never modified after capture.
//!
//! A [`Module`] groups everything that is emitted as one unit of output.

use core::fmt;

/// Fixed-width integer class of a constant.
///
/// Native constants are typed with ambiguous C types like `int` or
/// `unsigned long`. The class records the width and signedness the native
/// compiler actually used, so the value can be represented with an explicit
/// fixed-width type of the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Class {
    pub signed: bool,
    pub bits: u32,
}

impl fmt::Display for Class {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}int{}", if self.signed { "" } else { "u" }, self.bits)
    }
}

/// Rust primitive integers that native constants can be captured from.
pub trait Integral: Copy {
    /// Class of this integer type on the compilation target.
    const CLASS: Class;

    /// Widen the value losslessly.
    fn widen(self) -> i128;
}

macro_rules! impl_integral {
    ($($t:ty => $signed:expr),* $(,)?) => {
        $(
            impl Integral for $t {
                const CLASS: Class = Class {
                    signed: $signed,
                    bits: <$t>::BITS,
                };

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integral! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
}

/// Literal format of a constant in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Zero-padded hexadecimal with at least 8 digits, used for request codes
    /// and bit patterns.
    Hex,
    /// Plain signed decimal, used for ordinals and enumerations.
    Decimal,
}

/// A named native constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: i128,
    pub class: Class,
    pub radix: Radix,
}

impl Constant {
    /// Capture a constant value together with its native class.
    pub fn new<I: Integral>(name: &str, value: I, radix: Radix) -> Self {
        Self {
            name: name.to_owned(),
            value: value.widen(),
            class: I::CLASS,
            radix: radix,
        }
    }

    /// Capture a constant that is emitted in hexadecimal.
    pub fn hex<I: Integral>(name: &str, value: I) -> Self {
        Self::new(name, value, Radix::Hex)
    }

    /// Capture a constant that is emitted in decimal.
    pub fn decimal<I: Integral>(name: &str, value: I) -> Self {
        Self::new(name, value, Radix::Decimal)
    }
}

/// Constants that are rendered next to each other. Groups carry no meaning
/// beyond readability of the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstGroup {
    pub constants: Vec<Constant>,
}

/// Groups of constants rendered as one block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstBlock {
    pub groups: Vec<ConstGroup>,
}

/// Category of a native scalar type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// Character storage (`unsigned char`).
    Byte,
    /// Signed integer.
    Signed,
    /// Unsigned integer.
    Unsigned,
    /// Address-sized pointer value.
    Pointer,
}

/// Target of a type alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasTarget {
    /// A native scalar of the given category and size, resolved to a builtin
    /// type of the target.
    Native {
        kind: ScalarKind,
        size: usize,
    },
    /// Another type expression, usually a previously declared alias.
    Name(String),
}

/// A type alias declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub target: AliasTarget,
}

impl Alias {
    /// Alias a native scalar type, captured via its Rust counterpart `T`.
    pub fn native<T>(name: &str, kind: ScalarKind) -> Self {
        Self {
            name: name.to_owned(),
            target: AliasTarget::Native {
                kind: kind,
                size: core::mem::size_of::<T>(),
            },
        }
    }

    /// Alias another type expression.
    pub fn to(name: &str, target: &str) -> Self {
        Self {
            name: name.to_owned(),
            target: AliasTarget::Name(target.to_owned()),
        }
    }
}

/// A native structure member, selected for emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Name of the emitted field.
    pub name: String,
    /// Native access path, e.g. `fmt.pix` for a union branch.
    pub path: String,
    /// Emitted type expression.
    pub ty: String,
    /// Native byte offset from the start of the structure.
    pub offset: usize,
    /// Native byte size.
    pub size: usize,
}

impl Member {
    pub fn new(name: &str, path: &str, ty: &str, offset: usize, size: usize) -> Self {
        Self {
            name: strip_raw(name).to_owned(),
            path: path.split('.').map(|v| strip_raw(v.trim())).collect::<Vec<_>>().join("."),
            ty: ty.to_owned(),
            offset: offset,
            size: size,
        }
    }
}

/// A native structure with the members selected for emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub size: usize,
    pub align: usize,
    pub members: Vec<Member>,
}

/// A unit of output: package name, aliases, constants, and structures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub package: String,
    pub aliases: Vec<Alias>,
    pub consts: Vec<ConstBlock>,
    pub structs: Vec<Struct>,
}

impl Module {
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_owned(),
            ..Default::default()
        }
    }

    /// Iterate all constants of all blocks in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        self.consts
            .iter()
            .flat_map(|b| b.groups.iter())
            .flat_map(|g| g.constants.iter())
    }
}

// Raw identifiers like `r#type` are used for members named after Rust
// keywords. Their native name is the bare identifier.
fn strip_raw(v: &str) -> &str {
    v.strip_prefix("r#").unwrap_or(v)
}
