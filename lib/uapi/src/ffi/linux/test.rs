//! # Tests for the Linux FFI Definitions
//!
//! This module contains tests for the exported FFI definitions of the
//! `ffi::linux` module. Layout values are compared with the values the C
//! compiler produces for the kernel headers on the respective architecture.

use core::mem::{align_of, offset_of, size_of};

use super::{asound::*, ioctl::*, videodev2::*};

// Verify that a request code encodes its own argument size, in the same way
// `_IOC_SIZE()` decodes it in the kernel.
fn arg_size(code: u32) -> usize {
    _IOC_SIZE(code) as usize
}

#[test]
fn ioctl_fields() {
    let code = _IOWR::<v4l2_format>(b'V', 4);
    assert_eq!(_IOC_DIR(code), _IOC_READ | _IOC_WRITE);
    assert_eq!(_IOC_TYPE(code), b'V' as u32);
    assert_eq!(_IOC_NR(code), 4);
    assert_eq!(arg_size(code), size_of::<v4l2_format>());

    assert_eq!(_IOC_DIR(_IO(b'A', 0x40)), _IOC_NONE);
    assert_eq!(_IOC_SIZE(_IO(b'A', 0x40)), 0);
    assert_eq!(_IOC_DIRSHIFT + _IOC_DIRBITS, 32);
}

// Direction and size fields follow the bit layout of the architecture.
#[test]
fn ioctl_layout() {
    let legacy = cfg!(any(
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "sparc",
        target_arch = "sparc64",
    ));

    if legacy {
        assert_eq!((_IOC_SIZEBITS, _IOC_DIRBITS), (13, 3));
        assert_eq!((_IOC_NONE, _IOC_READ, _IOC_WRITE), (1, 2, 4));
    } else {
        assert_eq!((_IOC_SIZEBITS, _IOC_DIRBITS), (14, 2));
        assert_eq!((_IOC_NONE, _IOC_READ, _IOC_WRITE), (0, 2, 1));
    }

    assert_eq!(_IOC_SIZEMASK as usize + 1, 1 << _IOC_SIZEBITS);
    assert_eq!(_IOW::<u32>(b'V', 18) >> _IOC_DIRSHIFT, _IOC_WRITE);
}

#[test]
fn ioctl_sizes() {
    assert_eq!(arg_size(SNDRV_PCM_IOCTL_INFO), size_of::<snd_pcm_info>());
    assert_eq!(arg_size(SNDRV_PCM_IOCTL_HW_PARAMS), size_of::<snd_pcm_hw_params>());
    assert_eq!(arg_size(SNDRV_PCM_IOCTL_SW_PARAMS), size_of::<snd_pcm_sw_params>());
    assert_eq!(arg_size(SNDRV_PCM_IOCTL_READI_FRAMES), size_of::<snd_xferi>());
    assert_eq!(arg_size(VIDIOC_QUERYBUF), size_of::<v4l2_buffer>());
    assert_eq!(arg_size(VIDIOC_G_PARM), size_of::<v4l2_streamparm>());
    assert_eq!(arg_size(VIDIOC_ENUM_FRAMEINTERVALS), size_of::<v4l2_frmivalenum>());
}

// Layout facts that hold on every architecture.
#[test]
fn portable_layout() {
    assert_eq!(size_of::<snd_mask>(), 32);
    assert_eq!(size_of::<snd_interval>(), 12);
    assert_eq!(size_of::<snd_pcm_sync_id>(), 16);
    assert_eq!(offset_of!(snd_pcm_info, sync), 208);
    assert_eq!(size_of::<snd_pcm_info>(), 288);

    assert_eq!(size_of::<v4l2_capability>(), 104);
    assert_eq!(size_of::<v4l2_pix_format>(), 48);
    assert_eq!(size_of::<v4l2_pix_format_mplane>(), 192);
    assert_eq!(size_of::<v4l2_format_fmt>(), 200);
    assert_eq!(size_of::<v4l2_streamparm>(), 204);
    assert_eq!(size_of::<v4l2_requestbuffers>(), 20);
    assert_eq!(size_of::<v4l2_timecode>(), 16);
    assert_eq!(size_of::<v4l2_fmtdesc>(), 64);
    assert_eq!(size_of::<v4l2_frmsizeenum>(), 44);
    assert_eq!(size_of::<v4l2_frmivalenum>(), 52);

    // The format union is aligned like its pointer-carrying branch.
    assert_eq!(align_of::<v4l2_format_fmt>(), align_of::<*mut v4l2_clip>());
    assert_eq!(
        offset_of!(v4l2_format, fmt),
        align_of::<*mut v4l2_clip>().max(size_of::<u32>()),
    );
}

#[cfg(target_arch = "x86_64")]
#[test]
fn x86_64_layout() {
    assert_eq!(size_of::<snd_xferi>(), 24);
    assert_eq!(size_of::<snd_pcm_hw_params>(), 608);
    assert_eq!(offset_of!(snd_pcm_hw_params, fifo_size), 536);
    assert_eq!(offset_of!(snd_pcm_hw_params, reserved), 544);
    assert_eq!(size_of::<snd_pcm_sw_params>(), 136);
    assert_eq!(offset_of!(snd_pcm_sw_params, avail_min), 16);

    assert_eq!(size_of::<v4l2_format>(), 208);
    assert_eq!(offset_of!(v4l2_format, fmt.pix), 8);
    assert_eq!(size_of::<v4l2_buffer>(), 88);
    assert_eq!(offset_of!(v4l2_buffer, timestamp), 24);
    assert_eq!(offset_of!(v4l2_buffer, timecode), 40);
    assert_eq!(offset_of!(v4l2_buffer, m.offset), 64);
    assert_eq!(offset_of!(v4l2_buffer, length), 72);
}

#[cfg(target_arch = "x86_64")]
#[test]
fn x86_64_ioctl() {
    assert_eq!(SNDRV_PCM_IOCTL_PVERSION, 0x80044100);
    assert_eq!(SNDRV_PCM_IOCTL_INFO, 0x81204101);
    assert_eq!(SNDRV_PCM_IOCTL_HW_REFINE, 0xc2604110);
    assert_eq!(SNDRV_PCM_IOCTL_HW_PARAMS, 0xc2604111);
    assert_eq!(SNDRV_PCM_IOCTL_SW_PARAMS, 0xc0884113);
    assert_eq!(SNDRV_PCM_IOCTL_PREPARE, 0x00004140);
    assert_eq!(SNDRV_PCM_IOCTL_WRITEI_FRAMES, 0x40184150);
    assert_eq!(SNDRV_PCM_IOCTL_READI_FRAMES, 0x80184151);

    assert_eq!(VIDIOC_QUERYCAP, 0x80685600);
    assert_eq!(VIDIOC_ENUM_FMT, 0xc0405602);
    assert_eq!(VIDIOC_G_FMT, 0xc0d05604);
    assert_eq!(VIDIOC_S_FMT, 0xc0d05605);
    assert_eq!(VIDIOC_REQBUFS, 0xc0145608);
    assert_eq!(VIDIOC_QUERYBUF, 0xc0585609);
    assert_eq!(VIDIOC_QBUF, 0xc058560f);
    assert_eq!(VIDIOC_DQBUF, 0xc0585611);
    assert_eq!(VIDIOC_STREAMON, 0x40045612);
    assert_eq!(VIDIOC_STREAMOFF, 0x40045613);
    assert_eq!(VIDIOC_G_PARM, 0xc0cc5615);
    assert_eq!(VIDIOC_S_PARM, 0xc0cc5616);
    assert_eq!(VIDIOC_ENUM_FRAMESIZES, 0xc02c564a);
    assert_eq!(VIDIOC_ENUM_FRAMEINTERVALS, 0xc034564b);
}

#[cfg(target_arch = "x86")]
#[test]
fn x86_layout() {
    assert_eq!(size_of::<snd_xferi>(), 12);
    assert_eq!(size_of::<snd_pcm_hw_params>(), 604);
    assert_eq!(size_of::<snd_pcm_sw_params>(), 104);
    assert_eq!(VIDIOC_G_FMT, 0xc0cc5604);
}
