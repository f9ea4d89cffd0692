//! # Probe Manifests
//!
//! A manifest lists the constants, type aliases, and structures of one
//! device family that are emitted, together with the emitted type of every
//! member. All values and layouts are captured from the mirrors in
//! [`crate::ffi`] when the manifest is built.

use kabi_layout::Module;

pub mod alsa;
pub mod v4l2;

/// Device families with a manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// ALSA PCM devices (`sound/asound.h`).
    Alsa,
    /// Video for Linux devices (`linux/videodev2.h`).
    V4l2,
}

impl Family {
    pub const ALL: &'static [Self] = &[Self::Alsa, Self::V4l2];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Alsa => "alsa",
            Self::V4l2 => "v4l2",
        }
    }

    /// Build the manifest of this family for the given output package.
    pub fn module(self, package: &str) -> Module {
        match self {
            Self::Alsa => alsa::module(package),
            Self::V4l2 => v4l2::module(package),
        }
    }
}
