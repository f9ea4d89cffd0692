//! # Advanced Linux Sound Architecture
//!
//! Definitions of the PCM interface of `sound/asound.h`. Only the parts
//! needed to configure a PCM stream and to transfer interleaved frames are
//! mirrored.

use libc::{c_int, c_long, c_uchar, c_uint, c_ulong, c_ushort, c_void};

use super::{
    ioctl::{_IO, _IOR, _IOW, _IOWR},
    types::__u32,
};

pub type snd_pcm_uframes_t = c_ulong;
pub type snd_pcm_sframes_t = c_long;

pub const SNDRV_PCM_STREAM_PLAYBACK: c_int = 0;
pub const SNDRV_PCM_STREAM_CAPTURE: c_int = 1;

pub const SNDRV_PCM_ACCESS_MMAP_INTERLEAVED: c_int = 0;
pub const SNDRV_PCM_ACCESS_MMAP_NONINTERLEAVED: c_int = 1;
pub const SNDRV_PCM_ACCESS_MMAP_COMPLEX: c_int = 2;
pub const SNDRV_PCM_ACCESS_RW_INTERLEAVED: c_int = 3;
pub const SNDRV_PCM_ACCESS_RW_NONINTERLEAVED: c_int = 4;

pub const SNDRV_PCM_FORMAT_S8: c_int = 0;
pub const SNDRV_PCM_FORMAT_U8: c_int = 1;
pub const SNDRV_PCM_FORMAT_S16_LE: c_int = 2;
pub const SNDRV_PCM_FORMAT_S16_BE: c_int = 3;
pub const SNDRV_PCM_FORMAT_U16_LE: c_int = 4;
pub const SNDRV_PCM_FORMAT_U16_BE: c_int = 5;
pub const SNDRV_PCM_FORMAT_S24_LE: c_int = 6;
pub const SNDRV_PCM_FORMAT_S24_BE: c_int = 7;
pub const SNDRV_PCM_FORMAT_U24_LE: c_int = 8;
pub const SNDRV_PCM_FORMAT_U24_BE: c_int = 9;
pub const SNDRV_PCM_FORMAT_S32_LE: c_int = 10;
pub const SNDRV_PCM_FORMAT_S32_BE: c_int = 11;
pub const SNDRV_PCM_FORMAT_U32_LE: c_int = 12;
pub const SNDRV_PCM_FORMAT_U32_BE: c_int = 13;
pub const SNDRV_PCM_FORMAT_FLOAT_LE: c_int = 14;
pub const SNDRV_PCM_FORMAT_FLOAT_BE: c_int = 15;
pub const SNDRV_PCM_FORMAT_FLOAT64_LE: c_int = 16;
pub const SNDRV_PCM_FORMAT_FLOAT64_BE: c_int = 17;
pub const SNDRV_PCM_FORMAT_IEC958_SUBFRAME_LE: c_int = 18;
pub const SNDRV_PCM_FORMAT_IEC958_SUBFRAME_BE: c_int = 19;
pub const SNDRV_PCM_FORMAT_MU_LAW: c_int = 20;
pub const SNDRV_PCM_FORMAT_A_LAW: c_int = 21;
pub const SNDRV_PCM_FORMAT_IMA_ADPCM: c_int = 22;
pub const SNDRV_PCM_FORMAT_MPEG: c_int = 23;

// Mask parameters
pub const SNDRV_PCM_HW_PARAM_ACCESS: c_int = 0;
pub const SNDRV_PCM_HW_PARAM_FORMAT: c_int = 1;
pub const SNDRV_PCM_HW_PARAM_SUBFORMAT: c_int = 2;
pub const SNDRV_PCM_HW_PARAM_FIRST_MASK: c_int = SNDRV_PCM_HW_PARAM_ACCESS;
pub const SNDRV_PCM_HW_PARAM_LAST_MASK: c_int = SNDRV_PCM_HW_PARAM_SUBFORMAT;

// Interval parameters
pub const SNDRV_PCM_HW_PARAM_SAMPLE_BITS: c_int = 8;
pub const SNDRV_PCM_HW_PARAM_FRAME_BITS: c_int = 9;
pub const SNDRV_PCM_HW_PARAM_CHANNELS: c_int = 10;
pub const SNDRV_PCM_HW_PARAM_RATE: c_int = 11;
pub const SNDRV_PCM_HW_PARAM_PERIOD_TIME: c_int = 12;
pub const SNDRV_PCM_HW_PARAM_PERIOD_SIZE: c_int = 13;
pub const SNDRV_PCM_HW_PARAM_PERIOD_BYTES: c_int = 14;
pub const SNDRV_PCM_HW_PARAM_PERIODS: c_int = 15;
pub const SNDRV_PCM_HW_PARAM_BUFFER_TIME: c_int = 16;
pub const SNDRV_PCM_HW_PARAM_BUFFER_SIZE: c_int = 17;
pub const SNDRV_PCM_HW_PARAM_BUFFER_BYTES: c_int = 18;
pub const SNDRV_PCM_HW_PARAM_TICK_TIME: c_int = 19;
pub const SNDRV_PCM_HW_PARAM_FIRST_INTERVAL: c_int = SNDRV_PCM_HW_PARAM_SAMPLE_BITS;
pub const SNDRV_PCM_HW_PARAM_LAST_INTERVAL: c_int = SNDRV_PCM_HW_PARAM_TICK_TIME;

pub const SNDRV_MASK_MAX: c_int = 256;

pub const SNDRV_PCM_TSTAMP_NONE: c_int = 0;
pub const SNDRV_PCM_TSTAMP_ENABLE: c_int = 1;

#[repr(C)]
#[derive(Clone, Copy)]
pub union snd_pcm_sync_id {
    pub id: [c_uchar; 16],
    pub id16: [c_ushort; 8],
    pub id32: [c_uint; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_pcm_info {
    pub device: c_uint,
    pub subdevice: c_uint,
    pub stream: c_int,
    pub card: c_int,
    pub id: [c_uchar; 64],
    pub name: [c_uchar; 80],
    pub subname: [c_uchar; 32],
    pub dev_class: c_int,
    pub dev_subclass: c_int,
    pub subdevices_count: c_uint,
    pub subdevices_avail: c_uint,
    pub sync: snd_pcm_sync_id,
    pub reserved: [c_uchar; 64],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_xferi {
    pub result: snd_pcm_sframes_t,
    pub buf: *mut c_void,
    pub frames: snd_pcm_uframes_t,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_mask {
    pub bits: [__u32; (SNDRV_MASK_MAX as usize + 31) / 32],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_interval {
    pub min: c_uint,
    pub max: c_uint,
    // openmin:1, openmax:1, integer:1, empty:1
    pub bitfield: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_pcm_hw_params {
    pub flags: c_uint,
    pub masks: [snd_mask; (SNDRV_PCM_HW_PARAM_LAST_MASK - SNDRV_PCM_HW_PARAM_FIRST_MASK + 1) as usize],
    pub mres: [snd_mask; 5],
    pub intervals: [snd_interval; (SNDRV_PCM_HW_PARAM_LAST_INTERVAL - SNDRV_PCM_HW_PARAM_FIRST_INTERVAL + 1) as usize],
    pub ires: [snd_interval; 9],
    pub rmask: c_uint,
    pub cmask: c_uint,
    pub info: c_uint,
    pub msbits: c_uint,
    pub rate_num: c_uint,
    pub rate_den: c_uint,
    pub fifo_size: snd_pcm_uframes_t,
    pub reserved: [c_uchar; 64],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct snd_pcm_sw_params {
    pub tstamp_mode: c_int,
    pub period_step: c_uint,
    pub sleep_min: c_uint,
    pub avail_min: snd_pcm_uframes_t,
    pub xfer_align: snd_pcm_uframes_t,
    pub start_threshold: snd_pcm_uframes_t,
    pub stop_threshold: snd_pcm_uframes_t,
    pub silence_threshold: snd_pcm_uframes_t,
    pub silence_size: snd_pcm_uframes_t,
    pub boundary: snd_pcm_uframes_t,
    pub proto: c_uint,
    pub tstamp_type: c_uint,
    pub reserved: [c_uchar; 56],
}

pub const SNDRV_PCM_IOCTL_PVERSION: u32 = _IOR::<c_int>(b'A', 0x00);
pub const SNDRV_PCM_IOCTL_INFO: u32 = _IOR::<snd_pcm_info>(b'A', 0x01);
pub const SNDRV_PCM_IOCTL_HW_REFINE: u32 = _IOWR::<snd_pcm_hw_params>(b'A', 0x10);
pub const SNDRV_PCM_IOCTL_HW_PARAMS: u32 = _IOWR::<snd_pcm_hw_params>(b'A', 0x11);
pub const SNDRV_PCM_IOCTL_SW_PARAMS: u32 = _IOWR::<snd_pcm_sw_params>(b'A', 0x13);
pub const SNDRV_PCM_IOCTL_PREPARE: u32 = _IO(b'A', 0x40);
pub const SNDRV_PCM_IOCTL_WRITEI_FRAMES: u32 = _IOW::<snd_xferi>(b'A', 0x50);
pub const SNDRV_PCM_IOCTL_READI_FRAMES: u32 = _IOR::<snd_xferi>(b'A', 0x51);
