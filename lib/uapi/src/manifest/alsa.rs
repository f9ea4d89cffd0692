//! # Sound Manifest
//!
//! PCM constants and structures of `sound/asound.h`, as needed to configure
//! a PCM stream and to transfer interleaved frames.

use kabi_layout::{probe, Alias, Module, ScalarKind};
use libc::{c_int, c_long, c_uchar, c_uint, c_ulong, c_void};

use crate::ffi::linux::{asound::*, types::__u32};

pub fn module(package: &str) -> Module {
    let mut m = Module::new(package);

    m.aliases = vec![
        Alias::native::<c_uchar>("unsigned_char", ScalarKind::Byte),
        Alias::native::<c_int>("signed_int", ScalarKind::Signed),
        Alias::native::<c_uint>("unsigned_int", ScalarKind::Unsigned),
        Alias::native::<c_long>("signed_long", ScalarKind::Signed),
        Alias::native::<c_ulong>("unsigned_long", ScalarKind::Unsigned),
        Alias::native::<__u32>("__u32", ScalarKind::Unsigned),
        Alias::native::<*mut c_void>("void__user", ScalarKind::Pointer),
        Alias::to("snd_pcm_uframes_t", "unsigned_long"),
        Alias::to("snd_pcm_sframes_t", "signed_long"),
    ];

    m.consts = vec![
        probe::constants! {
            dec {
                SNDRV_PCM_STREAM_PLAYBACK,
                SNDRV_PCM_STREAM_CAPTURE,
            },
            dec {
                SNDRV_PCM_ACCESS_MMAP_INTERLEAVED,
                SNDRV_PCM_ACCESS_MMAP_NONINTERLEAVED,
                SNDRV_PCM_ACCESS_MMAP_COMPLEX,
                SNDRV_PCM_ACCESS_RW_INTERLEAVED,
                SNDRV_PCM_ACCESS_RW_NONINTERLEAVED,
            },
            dec {
                SNDRV_PCM_FORMAT_S8,
                SNDRV_PCM_FORMAT_U8,
                SNDRV_PCM_FORMAT_S16_LE,
                SNDRV_PCM_FORMAT_S16_BE,
                SNDRV_PCM_FORMAT_U16_LE,
                SNDRV_PCM_FORMAT_U16_BE,
                SNDRV_PCM_FORMAT_S24_LE,
                SNDRV_PCM_FORMAT_S24_BE,
                SNDRV_PCM_FORMAT_U24_LE,
                SNDRV_PCM_FORMAT_U24_BE,
                SNDRV_PCM_FORMAT_S32_LE,
                SNDRV_PCM_FORMAT_S32_BE,
                SNDRV_PCM_FORMAT_U32_LE,
                SNDRV_PCM_FORMAT_U32_BE,
                SNDRV_PCM_FORMAT_FLOAT_LE,
                SNDRV_PCM_FORMAT_FLOAT_BE,
                SNDRV_PCM_FORMAT_FLOAT64_LE,
                SNDRV_PCM_FORMAT_FLOAT64_BE,
                SNDRV_PCM_FORMAT_MU_LAW,
                SNDRV_PCM_FORMAT_A_LAW,
                SNDRV_PCM_FORMAT_MPEG,
            },
            hex {
                SNDRV_PCM_IOCTL_PVERSION,
                SNDRV_PCM_IOCTL_INFO,
                SNDRV_PCM_IOCTL_HW_REFINE,
                SNDRV_PCM_IOCTL_HW_PARAMS,
                SNDRV_PCM_IOCTL_SW_PARAMS,
                SNDRV_PCM_IOCTL_PREPARE,
                SNDRV_PCM_IOCTL_WRITEI_FRAMES,
                SNDRV_PCM_IOCTL_READI_FRAMES,
            },
        },
        probe::constants! {
            dec {
                SNDRV_PCM_HW_PARAM_ACCESS,
                SNDRV_PCM_HW_PARAM_FORMAT,
                SNDRV_PCM_HW_PARAM_SUBFORMAT,
                SNDRV_PCM_HW_PARAM_FIRST_MASK,
                SNDRV_PCM_HW_PARAM_LAST_MASK,
            },
            dec {
                SNDRV_PCM_HW_PARAM_SAMPLE_BITS,
                SNDRV_PCM_HW_PARAM_FRAME_BITS,
                SNDRV_PCM_HW_PARAM_CHANNELS,
                SNDRV_PCM_HW_PARAM_RATE,
                SNDRV_PCM_HW_PARAM_PERIOD_TIME,
                SNDRV_PCM_HW_PARAM_PERIOD_SIZE,
                SNDRV_PCM_HW_PARAM_PERIOD_BYTES,
                SNDRV_PCM_HW_PARAM_PERIODS,
                SNDRV_PCM_HW_PARAM_BUFFER_TIME,
                SNDRV_PCM_HW_PARAM_BUFFER_SIZE,
                SNDRV_PCM_HW_PARAM_BUFFER_BYTES,
                SNDRV_PCM_HW_PARAM_TICK_TIME,
                SNDRV_PCM_HW_PARAM_FIRST_INTERVAL,
                SNDRV_PCM_HW_PARAM_LAST_INTERVAL,
            },
            dec { SNDRV_MASK_MAX },
            dec {
                SNDRV_PCM_TSTAMP_NONE,
                SNDRV_PCM_TSTAMP_ENABLE,
            },
        },
    ];

    m.structs = vec![
        probe::structure!(snd_pcm_info {
            device: "unsigned_int",
            subdevice: "unsigned_int",
            stream: "signed_int",
            card: "signed_int",
            id: "[64]unsigned_char",
            name: "[80]unsigned_char",
            subname: "[32]unsigned_char",
            dev_class: "signed_int",
            dev_subclass: "signed_int",
            subdevices_count: "unsigned_int",
            subdevices_avail: "unsigned_int",
            pad1 = sync: "[16]unsigned_char",
            reserved: "[64]unsigned_char",
        }),
        probe::structure!(snd_xferi {
            result: "snd_pcm_sframes_t",
            buf: "void__user",
            frames: "snd_pcm_uframes_t",
        }),
        probe::structure!(snd_mask {
            bits: "[(SNDRV_MASK_MAX+31)/32]__u32",
        }),
        probe::structure!(snd_interval {
            min: "unsigned_int",
            max: "unsigned_int",
            bit = bitfield: "unsigned_int",
        }),
        probe::structure!(snd_pcm_hw_params {
            flags: "unsigned_int",
            masks: "[SNDRV_PCM_HW_PARAM_LAST_MASK-SNDRV_PCM_HW_PARAM_FIRST_MASK+1]snd_mask",
            mres: "[5]snd_mask",
            intervals: "[SNDRV_PCM_HW_PARAM_LAST_INTERVAL-SNDRV_PCM_HW_PARAM_FIRST_INTERVAL+1]snd_interval",
            ires: "[9]snd_interval",
            rmask: "unsigned_int",
            cmask: "unsigned_int",
            info: "unsigned_int",
            msbits: "unsigned_int",
            rate_num: "unsigned_int",
            rate_den: "unsigned_int",
            fifo_size: "snd_pcm_uframes_t",
            reserved: "[64]unsigned_char",
        }),
        probe::structure!(snd_pcm_sw_params {
            tstamp_mode: "signed_int",
            period_step: "unsigned_int",
            sleep_min: "unsigned_int",
            avail_min: "snd_pcm_uframes_t",
            xfer_align: "snd_pcm_uframes_t",
            start_threshold: "snd_pcm_uframes_t",
            stop_threshold: "snd_pcm_uframes_t",
            silence_threshold: "snd_pcm_uframes_t",
            silence_size: "snd_pcm_uframes_t",
            boundary: "snd_pcm_uframes_t",
            proto: "unsigned_int",
            tstamp_type: "unsigned_int",
            reserved: "[56]unsigned_char",
        }),
    ];

    m
}
