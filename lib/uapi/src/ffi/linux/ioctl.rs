//! # Device Control Request Codes
//!
//! Requests of `ioctl(2)` are 32-bit codes that encode a transfer direction,
//! a subsystem type, a request number, and the size of the argument
//! structure (`asm-generic/ioctl.h`). The bit layout of the direction and
//! size fields differs between architectures:
//!
//!  * mips, powerpc, and sparc use 3 direction bits and 13 size bits, with
//!    explicit `NONE`, `READ`, and `WRITE` bits.
//!  * All other architectures use 2 direction bits and 14 size bits, with
//!    `NONE` being zero.
//!
//! Codes are computed in `const` context. An argument type that does not fit
//! the size field fails compilation.

#[cfg(any(
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "sparc",
    target_arch = "sparc64",
))]
mod arch {
    pub const _IOC_SIZEBITS: u32 = 13;
    pub const _IOC_DIRBITS: u32 = 3;

    pub const _IOC_NONE: u32 = 1;
    pub const _IOC_READ: u32 = 2;
    pub const _IOC_WRITE: u32 = 4;
}

#[cfg(not(any(
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "sparc",
    target_arch = "sparc64",
)))]
mod arch {
    pub const _IOC_SIZEBITS: u32 = 14;
    pub const _IOC_DIRBITS: u32 = 2;

    pub const _IOC_NONE: u32 = 0;
    pub const _IOC_WRITE: u32 = 1;
    pub const _IOC_READ: u32 = 2;
}

pub use arch::{_IOC_DIRBITS, _IOC_NONE, _IOC_READ, _IOC_SIZEBITS, _IOC_WRITE};

pub const _IOC_NRBITS: u32 = 8;
pub const _IOC_TYPEBITS: u32 = 8;

pub const _IOC_NRMASK: u32 = (1 << _IOC_NRBITS) - 1;
pub const _IOC_TYPEMASK: u32 = (1 << _IOC_TYPEBITS) - 1;
pub const _IOC_SIZEMASK: u32 = (1 << _IOC_SIZEBITS) - 1;
pub const _IOC_DIRMASK: u32 = (1 << _IOC_DIRBITS) - 1;

pub const _IOC_NRSHIFT: u32 = 0;
pub const _IOC_TYPESHIFT: u32 = _IOC_NRSHIFT + _IOC_NRBITS;
pub const _IOC_SIZESHIFT: u32 = _IOC_TYPESHIFT + _IOC_TYPEBITS;
pub const _IOC_DIRSHIFT: u32 = _IOC_SIZESHIFT + _IOC_SIZEBITS;

pub const fn _IOC(dir: u32, ty: u8, nr: u8, size: usize) -> u32 {
    assert!(size <= _IOC_SIZEMASK as usize, "ioctl argument exceeds the size field");

    (dir << _IOC_DIRSHIFT)
        | ((ty as u32) << _IOC_TYPESHIFT)
        | ((nr as u32) << _IOC_NRSHIFT)
        | ((size as u32) << _IOC_SIZESHIFT)
}

pub const fn _IO(ty: u8, nr: u8) -> u32 {
    _IOC(_IOC_NONE, ty, nr, 0)
}

pub const fn _IOR<T>(ty: u8, nr: u8) -> u32 {
    _IOC(_IOC_READ, ty, nr, core::mem::size_of::<T>())
}

pub const fn _IOW<T>(ty: u8, nr: u8) -> u32 {
    _IOC(_IOC_WRITE, ty, nr, core::mem::size_of::<T>())
}

pub const fn _IOWR<T>(ty: u8, nr: u8) -> u32 {
    _IOC(_IOC_READ | _IOC_WRITE, ty, nr, core::mem::size_of::<T>())
}

pub const fn _IOC_DIR(code: u32) -> u32 {
    (code >> _IOC_DIRSHIFT) & _IOC_DIRMASK
}

pub const fn _IOC_TYPE(code: u32) -> u32 {
    (code >> _IOC_TYPESHIFT) & _IOC_TYPEMASK
}

pub const fn _IOC_NR(code: u32) -> u32 {
    (code >> _IOC_NRSHIFT) & _IOC_NRMASK
}

pub const fn _IOC_SIZE(code: u32) -> u32 {
    (code >> _IOC_SIZESHIFT) & _IOC_SIZEMASK
}
