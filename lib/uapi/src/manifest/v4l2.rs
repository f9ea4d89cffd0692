//! # Video Manifest
//!
//! Capture-side constants and structures of `linux/videodev2.h`. Structures
//! are listed so that every structure precedes its first use as a member.

use kabi_layout::{probe, Module};

use crate::ffi::linux::videodev2::*;

pub fn module(package: &str) -> Module {
    let mut m = Module::new(package);

    m.consts = vec![
        probe::constants! {
            hex {
                VIDIOC_QUERYCAP,
                VIDIOC_ENUM_FMT,
                VIDIOC_G_FMT,
                VIDIOC_S_FMT,
                VIDIOC_REQBUFS,
                VIDIOC_QUERYBUF,
            },
            hex {
                VIDIOC_QBUF,
                VIDIOC_DQBUF,
                VIDIOC_STREAMON,
                VIDIOC_STREAMOFF,
                VIDIOC_G_PARM,
                VIDIOC_S_PARM,
            },
            hex {
                VIDIOC_ENUM_FRAMESIZES,
                VIDIOC_ENUM_FRAMEINTERVALS,
            },
        },
        probe::constants! {
            dec {
                V4L2_BUF_TYPE_VIDEO_CAPTURE,
                V4L2_COLORSPACE_DEFAULT,
                V4L2_FIELD_NONE,
                V4L2_FRMIVAL_TYPE_DISCRETE,
                V4L2_FRMSIZE_TYPE_DISCRETE,
                V4L2_MEMORY_MMAP,
            },
        },
    ];

    m.structs = vec![
        probe::structure!(v4l2_capability {
            driver: "[16]byte",
            card: "[32]byte",
            bus_info: "[32]byte",
            version: "uint32",
            capabilities: "uint32",
            device_caps: "uint32",
            reserved: "[3]uint32",
        }),
        probe::structure!(v4l2_pix_format {
            width: "uint32",
            height: "uint32",
            pixelformat: "uint32",
            field: "uint32",
            bytesperline: "uint32",
            sizeimage: "uint32",
            colorspace: "uint32",
            r#priv: "uint32",
            flags: "uint32",
            ycbcr_enc = anon.ycbcr_enc: "uint32",
            quantization: "uint32",
            xfer_func: "uint32",
        }),
        probe::structure!(v4l2_format {
            r#type: "uint32",
            pix = fmt.pix: "v4l2_pix_format",
        }),
        probe::structure!(v4l2_fract {
            numerator: "uint32",
            denominator: "uint32",
        }),
        probe::structure!(v4l2_captureparm {
            capability: "uint32",
            capturemode: "uint32",
            timeperframe: "v4l2_fract",
            extendedmode: "uint32",
            readbuffers: "uint32",
            reserved: "[4]uint32",
        }),
        probe::structure!(v4l2_streamparm {
            r#type: "uint32",
            capture = parm.capture: "v4l2_captureparm",
        }),
        probe::structure!(v4l2_requestbuffers {
            count: "uint32",
            r#type: "uint32",
            memory: "uint32",
            capabilities: "uint32",
            flags: "uint8",
            reserved: "[3]uint8",
        }),
        probe::structure!(v4l2_timecode {
            r#type: "uint32",
            flags: "uint32",
            frames: "uint8",
            seconds: "uint8",
            minutes: "uint8",
            hours: "uint8",
            userbits: "[4]uint8",
        }),
        probe::structure!(v4l2_buffer {
            index: "uint32",
            r#type: "uint32",
            bytesused: "uint32",
            flags: "uint32",
            field: "uint32",
            timecode: "v4l2_timecode",
            sequence: "uint32",
            memory: "uint32",
            offset = m.offset: "uint32",
            length: "uint32",
        }),
        probe::structure!(v4l2_fmtdesc {
            index: "uint32",
            r#type: "uint32",
            flags: "uint32",
            description: "[32]byte",
            pixelformat: "uint32",
            mbus_code: "uint32",
            reserved: "[3]uint32",
        }),
        probe::structure!(v4l2_frmsize_discrete {
            width: "uint32",
            height: "uint32",
        }),
        probe::structure!(v4l2_frmsizeenum {
            index: "uint32",
            pixel_format: "uint32",
            r#type: "uint32",
            discrete = anon.discrete: "v4l2_frmsize_discrete",
        }),
        probe::structure!(v4l2_frmivalenum {
            index: "uint32",
            pixel_format: "uint32",
            width: "uint32",
            height: "uint32",
            r#type: "uint32",
            discrete = anon.discrete: "v4l2_fract",
        }),
    ];

    m
}
