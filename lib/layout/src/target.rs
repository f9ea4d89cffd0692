//! # Target Layout Rules
//!
//! The emitted declarations are compiled by the Go toolchain of the same
//! architecture the native facts were captured on. Go lays out structures
//! with its own rules: fields are placed in order, each at the next multiple
//! of its alignment, and the structure size is rounded up to the largest
//! field alignment. Those rules agree with C for most scalars, but not for
//! all of them. Most notably, 64-bit integers are only 4-byte aligned on the
//! 32-bit Go ports, while the ARM and MIPS C ABIs align them to 8 bytes.
//!
//! This module describes the Go layout rules of every supported
//! architecture. The description is data rather than a trait, so it can be
//! selected at runtime and compared in tests. [`Target::native()`] picks the
//! description matching the compilation target.

use crate::decl::ScalarKind;

/// Layout rules of one Go architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    /// Architecture name as used by `GOARCH` and build constraints.
    pub goarch: &'static str,
    /// Size and alignment of `uintptr`.
    pub pointer: usize,
    /// Alignment of 64-bit scalars.
    pub align64: usize,
}

impl Target {
    pub const I386: Self = Self { goarch: "386", pointer: 4, align64: 4 };
    pub const AMD64: Self = Self { goarch: "amd64", pointer: 8, align64: 8 };
    pub const ARM: Self = Self { goarch: "arm", pointer: 4, align64: 4 };
    pub const ARM64: Self = Self { goarch: "arm64", pointer: 8, align64: 8 };
    pub const LOONG64: Self = Self { goarch: "loong64", pointer: 8, align64: 8 };
    pub const MIPS: Self = Self { goarch: "mips", pointer: 4, align64: 4 };
    pub const MIPSLE: Self = Self { goarch: "mipsle", pointer: 4, align64: 4 };
    pub const MIPS64: Self = Self { goarch: "mips64", pointer: 8, align64: 8 };
    pub const MIPS64LE: Self = Self { goarch: "mips64le", pointer: 8, align64: 8 };
    pub const PPC64: Self = Self { goarch: "ppc64", pointer: 8, align64: 8 };
    pub const PPC64LE: Self = Self { goarch: "ppc64le", pointer: 8, align64: 8 };
    pub const RISCV64: Self = Self { goarch: "riscv64", pointer: 8, align64: 8 };
    pub const S390X: Self = Self { goarch: "s390x", pointer: 8, align64: 8 };

    /// All architectures with known layout rules.
    pub const ALL: &'static [Self] = &[
        Self::I386,
        Self::AMD64,
        Self::ARM,
        Self::ARM64,
        Self::LOONG64,
        Self::MIPS,
        Self::MIPSLE,
        Self::MIPS64,
        Self::MIPS64LE,
        Self::PPC64,
        Self::PPC64LE,
        Self::RISCV64,
        Self::S390X,
    ];

    /// Layout rules of the architecture this crate is compiled for, if it
    /// has a Go port.
    pub const fn native() -> Option<Self> {
        NATIVE
    }
}

#[cfg(target_arch = "x86")]
const NATIVE: Option<Target> = Some(Target::I386);
#[cfg(target_arch = "x86_64")]
const NATIVE: Option<Target> = Some(Target::AMD64);
#[cfg(target_arch = "arm")]
const NATIVE: Option<Target> = Some(Target::ARM);
#[cfg(target_arch = "aarch64")]
const NATIVE: Option<Target> = Some(Target::ARM64);
#[cfg(target_arch = "loongarch64")]
const NATIVE: Option<Target> = Some(Target::LOONG64);
#[cfg(all(target_arch = "mips", target_endian = "big"))]
const NATIVE: Option<Target> = Some(Target::MIPS);
#[cfg(all(target_arch = "mips", target_endian = "little"))]
const NATIVE: Option<Target> = Some(Target::MIPSLE);
#[cfg(all(target_arch = "mips64", target_endian = "big"))]
const NATIVE: Option<Target> = Some(Target::MIPS64);
#[cfg(all(target_arch = "mips64", target_endian = "little"))]
const NATIVE: Option<Target> = Some(Target::MIPS64LE);
#[cfg(all(target_arch = "powerpc64", target_endian = "big"))]
const NATIVE: Option<Target> = Some(Target::PPC64);
#[cfg(all(target_arch = "powerpc64", target_endian = "little"))]
const NATIVE: Option<Target> = Some(Target::PPC64LE);
#[cfg(target_arch = "riscv64")]
const NATIVE: Option<Target> = Some(Target::RISCV64);
#[cfg(target_arch = "s390x")]
const NATIVE: Option<Target> = Some(Target::S390X);
#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "loongarch64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc64",
    target_arch = "riscv64",
    target_arch = "s390x",
)))]
const NATIVE: Option<Target> = None;

/// Predeclared scalar types of the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Byte,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
}

impl Builtin {
    pub const ALL: &'static [Self] = &[
        Self::Byte,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|v| v.name() == name).copied()
    }

    pub const fn size(self, target: &Target) -> usize {
        match self {
            Self::Byte | Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 => 4,
            Self::Int64 | Self::Uint64 => 8,
            Self::Uintptr => target.pointer,
        }
    }

    pub const fn align(self, target: &Target) -> usize {
        match self {
            Self::Int64 | Self::Uint64 => target.align64,
            v => v.size(target),
        }
    }

    /// Select the builtin representing a native scalar of the given category
    /// and size. Pointers are only representable if they have the size of
    /// `uintptr` on the target.
    pub fn select(kind: ScalarKind, size: usize, target: &Target) -> Option<Self> {
        match (kind, size) {
            (ScalarKind::Byte, 1) => Some(Self::Byte),
            (ScalarKind::Signed, 1) => Some(Self::Int8),
            (ScalarKind::Signed, 2) => Some(Self::Int16),
            (ScalarKind::Signed, 4) => Some(Self::Int32),
            (ScalarKind::Signed, 8) => Some(Self::Int64),
            (ScalarKind::Unsigned, 1) => Some(Self::Uint8),
            (ScalarKind::Unsigned, 2) => Some(Self::Uint16),
            (ScalarKind::Unsigned, 4) => Some(Self::Uint32),
            (ScalarKind::Unsigned, 8) => Some(Self::Uint64),
            (ScalarKind::Pointer, v) if v == target.pointer => Some(Self::Uintptr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // 64-bit scalars are 4-byte aligned only on the 32-bit ports.
    #[test]
    fn word_alignment() {
        for t in Target::ALL {
            let expected = if t.pointer == 4 { 4 } else { 8 };
            assert_eq!(Builtin::Uint64.align(t), expected, "{}", t.goarch);
            assert_eq!(Builtin::Int64.size(t), 8);
            assert_eq!(Builtin::Uintptr.size(t), t.pointer);
        }
    }

    #[test]
    fn native_matches_pointer_width() {
        if let Some(t) = Target::native() {
            assert_eq!(t.pointer, core::mem::size_of::<usize>());
            assert!(Target::ALL.contains(&t));
        }
    }

    // Exactly one architecture is selected on the common hosts.
    #[test]
    fn native_architecture() {
        let expected = match std::env::consts::ARCH {
            "x86" => Some(Target::I386),
            "x86_64" => Some(Target::AMD64),
            "aarch64" => Some(Target::ARM64),
            "riscv64" => Some(Target::RISCV64),
            "s390x" => Some(Target::S390X),
            _ => return,
        };
        assert_eq!(Target::native(), expected);
    }

    #[test]
    fn select_builtins() {
        let t = Target::I386;
        assert_eq!(Builtin::select(ScalarKind::Byte, 1, &t), Some(Builtin::Byte));
        assert_eq!(Builtin::select(ScalarKind::Signed, 4, &t), Some(Builtin::Int32));
        assert_eq!(Builtin::select(ScalarKind::Unsigned, 8, &t), Some(Builtin::Uint64));
        assert_eq!(Builtin::select(ScalarKind::Pointer, 4, &t), Some(Builtin::Uintptr));
        assert_eq!(Builtin::select(ScalarKind::Pointer, 8, &t), None);
        assert_eq!(Builtin::select(ScalarKind::Byte, 2, &t), None);

        for b in Builtin::ALL {
            assert_eq!(Builtin::from_name(b.name()), Some(*b));
        }
        assert_eq!(Builtin::from_name("int"), None);
    }
}
