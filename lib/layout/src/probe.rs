//! # Layout Probes
//!
//! The macros of this module capture layout facts from `#[repr(C)]` Rust
//! definitions. Since `repr(C)` applies the C layout rules of the
//! compilation target, every captured size and offset is the value the
//! target's C compiler would produce for the mirrored definition.
//!
//! All lookups are resolved by the compiler. A manifest naming a structure,
//! member, or constant that does not exist fails to compile, rather than
//! producing a description that disagrees with the native definition.
//!
//! ```rust
//! #[repr(C)]
//! struct pair {
//!     tag: u32,
//!     value: u64,
//! }
//!
//! let s = kabi_layout::probe::structure!(pair {
//!     tag: "uint32",
//!     value: "uint64",
//! });
//!
//! assert_eq!(s.members[1].offset, core::mem::offset_of!(pair, value));
//! ```

/// Size of the target type of a place projection.
///
/// The projection is never called. It only serves to name the type of a
/// (possibly nested) member, which has no other spelling in stable Rust.
pub fn size_of_pointee<T, F>(_projection: fn(*const T) -> *const F) -> usize {
    core::mem::size_of::<F>()
}

#[doc(hidden)]
#[macro_export]
macro_rules! kabi_member {
    ($s:ident, $name:ident = $($path:ident).+, $ty:literal) => {
        $crate::decl::Member::new(
            ::core::stringify!($name),
            ::core::stringify!($($path).+),
            $ty,
            ::core::mem::offset_of!($s, $($path).+),
            $crate::probe::size_of_pointee(|v: *const $s| unsafe {
                ::core::ptr::addr_of!((*v) $(.$path)+)
            }),
        )
    };

    ($s:ident, $name:ident, $ty:literal) => {
        $crate::kabi_member!($s, $name = $name, $ty)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! kabi_structure {
    (
        $s:ident {
            $(
                $name:ident $(= $($path:ident).+)? : $ty:literal
            ),* $(,)?
        }
    ) => {
        $crate::decl::Struct {
            name: ::std::string::String::from(::core::stringify!($s)),
            size: ::core::mem::size_of::<$s>(),
            align: ::core::mem::align_of::<$s>(),
            members: ::std::vec![
                $(
                    $crate::kabi_member!($s, $name $(= $($path).+)?, $ty),
                )*
            ],
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! kabi_constant {
    (hex, $c:ident) => {
        $crate::decl::Constant::hex(::core::stringify!($c), $c)
    };
    (dec, $c:ident) => {
        $crate::decl::Constant::decimal(::core::stringify!($c), $c)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! kabi_constants {
    (
        $(
            $radix:ident { $($c:ident),* $(,)? }
        ),* $(,)?
    ) => {
        $crate::decl::ConstBlock {
            groups: ::std::vec![
                $(
                    $crate::decl::ConstGroup {
                        constants: ::std::vec![
                            $($crate::kabi_constant!($radix, $c),)*
                        ],
                    },
                )*
            ],
        }
    };
}

/// Capture a structure and a selection of its members.
///
/// Each member is given as `name: "type"`, where the type is the type
/// expression to emit for it. Members reached through nested aggregates,
/// usually the one branch of a union that is emitted, are written as
/// `name = outer.inner: "type"`. The same form renames a member whose native
/// name differs from the emitted name.
///
/// Size and offset of every member are captured from the compiler, the
/// declared type is only checked against them later on.
#[doc(inline)]
pub use crate::kabi_structure as structure;

/// Capture a block of constants.
///
/// The block consists of groups tagged either `hex` or `dec`, selecting the
/// literal format of all constants in the group. Constants keep the integer
/// class of their Rust type.
///
/// ```rust
/// const A: u32 = 0x100;
/// const B: i32 = -1;
///
/// let block = kabi_layout::probe::constants! {
///     hex { A },
///     dec { B },
/// };
///
/// assert_eq!(block.groups.len(), 2);
/// assert_eq!(block.groups[1].constants[0].value, -1);
/// ```
#[doc(inline)]
pub use crate::kabi_constants as constants;

#[cfg(test)]
mod test {
    use super::*;
    use crate::decl::{Class, Radix};

    #[allow(dead_code, non_camel_case_types)]
    #[derive(Clone, Copy)]
    #[repr(C)]
    union tagged_u {
        small: u32,
        large: [u8; 64],
    }

    #[allow(dead_code, non_camel_case_types)]
    #[repr(C)]
    struct tagged {
        kind: u32,
        u: tagged_u,
    }

    #[allow(dead_code, non_camel_case_types)]
    #[repr(C)]
    struct word_ptr {
        r#type: i32,
        ptr: *mut u8,
    }

    const REQ: u32 = 0x0001;
    const NEG: i16 = -2;

    #[test]
    fn union_branch() {
        let s = structure!(tagged {
            kind: "uint32",
            small = u.small: "uint32",
        });

        assert_eq!(s.name, "tagged");
        assert_eq!(s.size, 68);
        assert_eq!(s.align, 4);
        assert_eq!(s.members.len(), 2);

        let m = &s.members[1];
        assert_eq!(m.name, "small");
        assert_eq!(m.path, "u.small");
        assert_eq!(m.offset, 4);
        assert_eq!(m.size, 4);
    }

    #[test]
    fn raw_identifiers() {
        let s = structure!(word_ptr {
            r#type: "int32",
            ptr: "uintptr",
        });

        assert_eq!(s.members[0].name, "type");
        assert_eq!(s.members[1].offset, core::mem::size_of::<*mut u8>());
        assert_eq!(s.members[1].size, core::mem::size_of::<usize>());
    }

    #[test]
    fn constant_groups() {
        let block = constants! {
            hex { REQ },
            dec { NEG, REQ },
        };

        assert_eq!(block.groups.len(), 2);
        let c = &block.groups[0].constants[0];
        assert_eq!(c.name, "REQ");
        assert_eq!(c.radix, Radix::Hex);
        assert_eq!(c.class, Class { signed: false, bits: 32 });

        let c = &block.groups[1].constants[0];
        assert_eq!(c.value, -2);
        assert_eq!(c.class, Class { signed: true, bits: 16 });
        assert_eq!(block.groups[1].constants[1].radix, Radix::Decimal);
    }
}
