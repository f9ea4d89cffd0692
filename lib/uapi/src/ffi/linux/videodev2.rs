//! # Video for Linux Two
//!
//! Definitions of the video capture interface of `linux/videodev2.h`: device
//! capabilities, format negotiation, streaming parameters, buffer exchange,
//! and enumeration of frame sizes and intervals.
//!
//! Unions are mirrored with all of their branches, since the largest and the
//! most aligned branch determine the layout of the enclosing structure.

use libc::{c_int, c_ulong, c_void, timeval};

use super::{
    ioctl::{_IOR, _IOW, _IOWR},
    types::{__s32, __u16, __u32, __u8},
};

pub const VIDEO_MAX_PLANES: c_int = 8;

pub const V4L2_BUF_TYPE_VIDEO_CAPTURE: c_int = 1;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT: c_int = 2;
pub const V4L2_BUF_TYPE_VIDEO_OVERLAY: c_int = 3;

pub const V4L2_COLORSPACE_DEFAULT: c_int = 0;

pub const V4L2_FIELD_ANY: c_int = 0;
pub const V4L2_FIELD_NONE: c_int = 1;

pub const V4L2_FRMSIZE_TYPE_DISCRETE: c_int = 1;
pub const V4L2_FRMSIZE_TYPE_CONTINUOUS: c_int = 2;
pub const V4L2_FRMSIZE_TYPE_STEPWISE: c_int = 3;

pub const V4L2_FRMIVAL_TYPE_DISCRETE: c_int = 1;
pub const V4L2_FRMIVAL_TYPE_CONTINUOUS: c_int = 2;
pub const V4L2_FRMIVAL_TYPE_STEPWISE: c_int = 3;

pub const V4L2_MEMORY_MMAP: c_int = 1;
pub const V4L2_MEMORY_USERPTR: c_int = 2;
pub const V4L2_MEMORY_OVERLAY: c_int = 3;
pub const V4L2_MEMORY_DMABUF: c_int = 4;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_rect {
    pub left: __s32,
    pub top: __s32,
    pub width: __u32,
    pub height: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_fract {
    pub numerator: __u32,
    pub denominator: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_capability {
    pub driver: [__u8; 16],
    pub card: [__u8; 32],
    pub bus_info: [__u8; 32],
    pub version: __u32,
    pub capabilities: __u32,
    pub device_caps: __u32,
    pub reserved: [__u32; 3],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_pix_format_anon {
    pub ycbcr_enc: __u32,
    pub hsv_enc: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_pix_format {
    pub width: __u32,
    pub height: __u32,
    pub pixelformat: __u32,
    pub field: __u32,
    pub bytesperline: __u32,
    pub sizeimage: __u32,
    pub colorspace: __u32,
    pub r#priv: __u32,
    pub flags: __u32,
    pub anon: v4l2_pix_format_anon,
    pub quantization: __u32,
    pub xfer_func: __u32,
}

#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct v4l2_plane_pix_format {
    pub sizeimage: __u32,
    pub bytesperline: __u32,
    pub reserved: [__u16; 6],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_pix_format_mplane_anon {
    pub ycbcr_enc: __u8,
    pub hsv_enc: __u8,
}

#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct v4l2_pix_format_mplane {
    pub width: __u32,
    pub height: __u32,
    pub pixelformat: __u32,
    pub field: __u32,
    pub colorspace: __u32,
    pub plane_fmt: [v4l2_plane_pix_format; VIDEO_MAX_PLANES as usize],
    pub num_planes: __u8,
    pub flags: __u8,
    pub anon: v4l2_pix_format_mplane_anon,
    pub quantization: __u8,
    pub xfer_func: __u8,
    pub reserved: [__u8; 7],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_clip {
    pub c: v4l2_rect,
    pub next: *mut v4l2_clip,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_window {
    pub w: v4l2_rect,
    pub field: __u32,
    pub chromakey: __u32,
    pub clips: *mut v4l2_clip,
    pub clipcount: __u32,
    pub bitmap: *mut c_void,
    pub global_alpha: __u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_vbi_format {
    pub sampling_rate: __u32,
    pub offset: __u32,
    pub samples_per_line: __u32,
    pub sample_format: __u32,
    pub start: [__s32; 2],
    pub count: [__u32; 2],
    pub flags: __u32,
    pub reserved: [__u32; 2],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_sliced_vbi_format {
    pub service_set: __u16,
    pub service_lines: [[__u16; 24]; 2],
    pub io_size: __u32,
    pub reserved: [__u32; 2],
}

#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct v4l2_sdr_format {
    pub pixelformat: __u32,
    pub buffersize: __u32,
    pub reserved: [__u8; 24],
}

#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct v4l2_meta_format {
    pub dataformat: __u32,
    pub buffersize: __u32,
    pub width: __u32,
    pub height: __u32,
    pub bytesperline: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_format_fmt {
    pub pix: v4l2_pix_format,
    pub pix_mp: v4l2_pix_format_mplane,
    pub win: v4l2_window,
    pub vbi: v4l2_vbi_format,
    pub sliced: v4l2_sliced_vbi_format,
    pub sdr: v4l2_sdr_format,
    pub meta: v4l2_meta_format,
    pub raw_data: [__u8; 200],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_format {
    pub r#type: __u32,
    pub fmt: v4l2_format_fmt,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_captureparm {
    pub capability: __u32,
    pub capturemode: __u32,
    pub timeperframe: v4l2_fract,
    pub extendedmode: __u32,
    pub readbuffers: __u32,
    pub reserved: [__u32; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_outputparm {
    pub capability: __u32,
    pub outputmode: __u32,
    pub timeperframe: v4l2_fract,
    pub extendedmode: __u32,
    pub writebuffers: __u32,
    pub reserved: [__u32; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_streamparm_parm {
    pub capture: v4l2_captureparm,
    pub output: v4l2_outputparm,
    pub raw_data: [__u8; 200],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_streamparm {
    pub r#type: __u32,
    pub parm: v4l2_streamparm_parm,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_requestbuffers {
    pub count: __u32,
    pub r#type: __u32,
    pub memory: __u32,
    pub capabilities: __u32,
    pub flags: __u8,
    pub reserved: [__u8; 3],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_timecode {
    pub r#type: __u32,
    pub flags: __u32,
    pub frames: __u8,
    pub seconds: __u8,
    pub minutes: __u8,
    pub hours: __u8,
    pub userbits: [__u8; 4],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_plane_m {
    pub mem_offset: __u32,
    pub userptr: c_ulong,
    pub fd: __s32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_plane {
    pub bytesused: __u32,
    pub length: __u32,
    pub m: v4l2_plane_m,
    pub data_offset: __u32,
    pub reserved: [__u32; 11],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_buffer_m {
    pub offset: __u32,
    pub userptr: c_ulong,
    pub planes: *mut v4l2_plane,
    pub fd: __s32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_buffer_anon {
    pub request_fd: __s32,
    pub reserved: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_buffer {
    pub index: __u32,
    pub r#type: __u32,
    pub bytesused: __u32,
    pub flags: __u32,
    pub field: __u32,
    pub timestamp: timeval,
    pub timecode: v4l2_timecode,
    pub sequence: __u32,
    pub memory: __u32,
    pub m: v4l2_buffer_m,
    pub length: __u32,
    pub reserved2: __u32,
    pub anon: v4l2_buffer_anon,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_fmtdesc {
    pub index: __u32,
    pub r#type: __u32,
    pub flags: __u32,
    pub description: [__u8; 32],
    pub pixelformat: __u32,
    pub mbus_code: __u32,
    pub reserved: [__u32; 3],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_frmsize_discrete {
    pub width: __u32,
    pub height: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_frmsize_stepwise {
    pub min_width: __u32,
    pub max_width: __u32,
    pub step_width: __u32,
    pub min_height: __u32,
    pub max_height: __u32,
    pub step_height: __u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_frmsizeenum_anon {
    pub discrete: v4l2_frmsize_discrete,
    pub stepwise: v4l2_frmsize_stepwise,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_frmsizeenum {
    pub index: __u32,
    pub pixel_format: __u32,
    pub r#type: __u32,
    pub anon: v4l2_frmsizeenum_anon,
    pub reserved: [__u32; 2],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_frmival_stepwise {
    pub min: v4l2_fract,
    pub max: v4l2_fract,
    pub step: v4l2_fract,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union v4l2_frmivalenum_anon {
    pub discrete: v4l2_fract,
    pub stepwise: v4l2_frmival_stepwise,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct v4l2_frmivalenum {
    pub index: __u32,
    pub pixel_format: __u32,
    pub width: __u32,
    pub height: __u32,
    pub r#type: __u32,
    pub anon: v4l2_frmivalenum_anon,
    pub reserved: [__u32; 2],
}

pub const VIDIOC_QUERYCAP: u32 = _IOR::<v4l2_capability>(b'V', 0);
pub const VIDIOC_ENUM_FMT: u32 = _IOWR::<v4l2_fmtdesc>(b'V', 2);
pub const VIDIOC_G_FMT: u32 = _IOWR::<v4l2_format>(b'V', 4);
pub const VIDIOC_S_FMT: u32 = _IOWR::<v4l2_format>(b'V', 5);
pub const VIDIOC_REQBUFS: u32 = _IOWR::<v4l2_requestbuffers>(b'V', 8);
pub const VIDIOC_QUERYBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 9);
pub const VIDIOC_QBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 15);
pub const VIDIOC_DQBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 17);
pub const VIDIOC_STREAMON: u32 = _IOW::<c_int>(b'V', 18);
pub const VIDIOC_STREAMOFF: u32 = _IOW::<c_int>(b'V', 19);
pub const VIDIOC_G_PARM: u32 = _IOWR::<v4l2_streamparm>(b'V', 21);
pub const VIDIOC_S_PARM: u32 = _IOWR::<v4l2_streamparm>(b'V', 22);
pub const VIDIOC_ENUM_FRAMESIZES: u32 = _IOWR::<v4l2_frmsizeenum>(b'V', 74);
pub const VIDIOC_ENUM_FRAMEINTERVALS: u32 = _IOWR::<v4l2_frmivalenum>(b'V', 75);
