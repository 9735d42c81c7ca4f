//! The enet configuration descriptor and its fixed byte layout.
//!
//! The descriptor is a flat 52-byte little-endian record shared with the
//! device firmware through a mapped memory region. The layout below is a
//! binary contract: every field sits at an explicit offset with an explicit
//! width, including a deprecated 16-bit interrupt timer slot that is carried
//! for compatibility and never interpreted.
//!
//! | offset | width | field |
//! |-------:|------:|-------|
//! | 0  | 4  | flags |
//! | 4  | 4  | wq_desc_count |
//! | 8  | 4  | rq_desc_count |
//! | 12 | 2  | mtu |
//! | 14 | 2  | intr_timer (deprecated) |
//! | 16 | 1  | intr_timer_type |
//! | 17 | 1  | intr_mode |
//! | 18 | 16 | devname |
//! | 34 | 4  | intr_timer_usec |
//! | 38 | 2  | loop_tag |
//! | 40 | 2  | vf_rq_count |
//! | 42 | 2  | num_arfs |
//! | 44 | 8  | mem_paddr |

use crate::features::EnetFeatures;
use crate::intr::{IntrMode, IntrTimerType};
use thiserror::Error;

/// Encoded descriptor size in bytes.
pub const ENET_CONFIG_SIZE: usize = 52;

/// Capacity of the device name buffer. A name filling the buffer exactly is
/// not NUL-terminated.
pub const DEVNAME_LEN: usize = 16;

const OFF_FLAGS: usize = 0;
const OFF_WQ_DESC_COUNT: usize = 4;
const OFF_RQ_DESC_COUNT: usize = 8;
const OFF_MTU: usize = 12;
const OFF_INTR_TIMER_LEGACY: usize = 14;
const OFF_INTR_TIMER_TYPE: usize = 16;
const OFF_INTR_MODE: usize = 17;
const OFF_DEVNAME: usize = 18;
const OFF_INTR_TIMER_USEC: usize = 34;
const OFF_LOOP_TAG: usize = 38;
const OFF_VF_RQ_COUNT: usize = 40;
const OFF_NUM_ARFS: usize = 42;
const OFF_MEM_PADDR: usize = 44;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("config buffer too short: {len} < {min}")]
    TooShort { len: usize, min: usize },
}

/// One device's negotiated enet configuration.
///
/// A plain value type: construct it, mutate fields during negotiation, then
/// [`install`](EnetConfig::install) it into the shared region. The firmware
/// side reads the same layout back with [`load`](EnetConfig::load). Only one
/// side may write a given descriptor at a time; callers needing cross-thread
/// mutation must wrap it in their own lock.
///
/// No field is range-checked here. Queue counts, MTU and friends have
/// device-model-dependent limits the driver layer validates before commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnetConfig {
    /// Offload/capability feature set. Unknown bits are preserved.
    pub flags: EnetFeatures,
    /// Transmit (work queue) descriptor count. Zero is never valid on real
    /// hardware but is not rejected here.
    pub wq_desc_count: u32,
    /// Receive queue descriptor count.
    pub rq_desc_count: u32,
    /// Maximum transmission unit in bytes.
    pub mtu: u16,
    /// Deprecated 16-bit timer slot at offset 14. Carried for layout
    /// compatibility; `intr_timer_usec` supersedes it and new logic never
    /// reads this field.
    pub intr_timer_legacy: u16,
    /// Raw timer interpretation selector; see [`IntrTimerType`]. Stored raw so
    /// that decoding never fails on an out-of-range byte.
    pub intr_timer_type: u8,
    /// Raw requested interrupt mode; see [`IntrMode`]. Stored raw for the same
    /// reason as `intr_timer_type`.
    pub intr_mode: u8,
    /// Short device name, NUL-padded, not guaranteed NUL-terminated.
    pub devname: [u8; DEVNAME_LEN],
    /// Interrupt coalescing timer in microseconds; interpreted per
    /// `intr_timer_type`.
    pub intr_timer_usec: u32,
    /// Opaque loopback tag; meaningful only while [`EnetFeatures::LOOP`] is
    /// set.
    pub loop_tag: u16,
    /// Receive queues assigned to a virtual function context.
    pub vf_rq_count: u16,
    /// Accelerated receive-flow-steering filter slots.
    pub num_arfs: u16,
    /// Physical address of an auxiliary memory region; opaque at this layer.
    pub mem_paddr: u64,
}

impl EnetConfig {
    /// Encode into the fixed 52-byte wire layout. Infallible.
    pub fn encode(&self) -> [u8; ENET_CONFIG_SIZE] {
        let mut buf = [0u8; ENET_CONFIG_SIZE];
        buf[OFF_FLAGS..OFF_FLAGS + 4].copy_from_slice(&self.flags.bits().to_le_bytes());
        buf[OFF_WQ_DESC_COUNT..OFF_WQ_DESC_COUNT + 4]
            .copy_from_slice(&self.wq_desc_count.to_le_bytes());
        buf[OFF_RQ_DESC_COUNT..OFF_RQ_DESC_COUNT + 4]
            .copy_from_slice(&self.rq_desc_count.to_le_bytes());
        buf[OFF_MTU..OFF_MTU + 2].copy_from_slice(&self.mtu.to_le_bytes());
        buf[OFF_INTR_TIMER_LEGACY..OFF_INTR_TIMER_LEGACY + 2]
            .copy_from_slice(&self.intr_timer_legacy.to_le_bytes());
        buf[OFF_INTR_TIMER_TYPE] = self.intr_timer_type;
        buf[OFF_INTR_MODE] = self.intr_mode;
        buf[OFF_DEVNAME..OFF_DEVNAME + DEVNAME_LEN].copy_from_slice(&self.devname);
        buf[OFF_INTR_TIMER_USEC..OFF_INTR_TIMER_USEC + 4]
            .copy_from_slice(&self.intr_timer_usec.to_le_bytes());
        buf[OFF_LOOP_TAG..OFF_LOOP_TAG + 2].copy_from_slice(&self.loop_tag.to_le_bytes());
        buf[OFF_VF_RQ_COUNT..OFF_VF_RQ_COUNT + 2]
            .copy_from_slice(&self.vf_rq_count.to_le_bytes());
        buf[OFF_NUM_ARFS..OFF_NUM_ARFS + 2].copy_from_slice(&self.num_arfs.to_le_bytes());
        buf[OFF_MEM_PADDR..OFF_MEM_PADDR + 8].copy_from_slice(&self.mem_paddr.to_le_bytes());
        buf
    }

    /// Decode from a byte buffer holding at least [`ENET_CONFIG_SIZE`] bytes;
    /// trailing bytes are ignored.
    ///
    /// Fails only on insufficient length. There is no checksum or version in
    /// this layer, and no field content is rejected: unknown flag bits and
    /// out-of-range `intr_timer_type`/`intr_mode` bytes come through verbatim.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < ENET_CONFIG_SIZE {
            return Err(DecodeError::TooShort {
                len: buf.len(),
                min: ENET_CONFIG_SIZE,
            });
        }
        let mut exact = [0u8; ENET_CONFIG_SIZE];
        exact.copy_from_slice(&buf[..ENET_CONFIG_SIZE]);
        Ok(Self::from_bytes(&exact))
    }

    /// Decode from an exactly-sized buffer. Never fails: there is nothing in
    /// the layout that can be malformed, only missing.
    pub fn from_bytes(buf: &[u8; ENET_CONFIG_SIZE]) -> Self {
        let mut devname = [0u8; DEVNAME_LEN];
        devname.copy_from_slice(&buf[OFF_DEVNAME..OFF_DEVNAME + DEVNAME_LEN]);

        Self {
            flags: EnetFeatures::from_bits_retain(u32_at(buf, OFF_FLAGS)),
            wq_desc_count: u32_at(buf, OFF_WQ_DESC_COUNT),
            rq_desc_count: u32_at(buf, OFF_RQ_DESC_COUNT),
            mtu: u16_at(buf, OFF_MTU),
            intr_timer_legacy: u16_at(buf, OFF_INTR_TIMER_LEGACY),
            intr_timer_type: buf[OFF_INTR_TIMER_TYPE],
            intr_mode: buf[OFF_INTR_MODE],
            devname,
            intr_timer_usec: u32_at(buf, OFF_INTR_TIMER_USEC),
            loop_tag: u16_at(buf, OFF_LOOP_TAG),
            vf_rq_count: u16_at(buf, OFF_VF_RQ_COUNT),
            num_arfs: u16_at(buf, OFF_NUM_ARFS),
            mem_paddr: u64_at(buf, OFF_MEM_PADDR),
        }
    }

    pub fn set_feature(&mut self, feature: EnetFeatures) {
        self.flags.insert(feature);
    }

    pub fn clear_feature(&mut self, feature: EnetFeatures) {
        self.flags.remove(feature);
    }

    pub fn has_feature(&self, feature: EnetFeatures) -> bool {
        self.flags.contains(feature)
    }

    /// Typed view of the raw `intr_mode` byte. `None` for bytes outside the
    /// wire enumeration.
    pub fn requested_intr_mode(&self) -> Option<IntrMode> {
        IntrMode::from_raw(self.intr_mode)
    }

    pub fn set_intr_mode(&mut self, mode: IntrMode) {
        self.intr_mode = mode.raw();
    }

    /// Typed view of the raw `intr_timer_type` byte.
    pub fn timer_type(&self) -> Option<IntrTimerType> {
        IntrTimerType::from_raw(self.intr_timer_type)
    }

    pub fn set_timer_type(&mut self, ty: IntrTimerType) {
        self.intr_timer_type = ty.raw();
    }

    /// Set the device name, truncating at [`DEVNAME_LEN`] bytes and
    /// NUL-padding the remainder.
    pub fn set_devname(&mut self, name: &str) {
        self.devname = [0u8; DEVNAME_LEN];
        let bytes = name.as_bytes();
        let n = bytes.len().min(DEVNAME_LEN);
        self.devname[..n].copy_from_slice(&bytes[..n]);
    }

    /// The device name up to the first NUL (or the full buffer if none), or
    /// `None` if those bytes are not UTF-8.
    pub fn devname_str(&self) -> Option<&str> {
        let end = self
            .devname
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(DEVNAME_LEN);
        core::str::from_utf8(&self.devname[..end]).ok()
    }

    /// Write the encoded descriptor at the base of `region`.
    pub fn install<R: ConfigRegion + ?Sized>(&self, region: &mut R) {
        region.write_at(0, &self.encode());
    }

    /// Read a descriptor back from the base of `region`.
    pub fn load<R: ConfigRegion + ?Sized>(region: &R) -> Self {
        let mut buf = [0u8; ENET_CONFIG_SIZE];
        region.read_at(0, &mut buf);
        Self::from_bytes(&buf)
    }
}

fn u16_at(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

fn u32_at(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

fn u64_at(buf: &[u8], off: usize) -> u64 {
    u64::from_le_bytes([
        buf[off],
        buf[off + 1],
        buf[off + 2],
        buf[off + 3],
        buf[off + 4],
        buf[off + 5],
        buf[off + 6],
        buf[off + 7],
    ])
}

/// Raw byte access to the mapped region the descriptor lives in.
///
/// The PCI/bus layer that maps the region implements this; the descriptor
/// itself neither knows nor cares where the bytes land. Implementations must
/// expose at least [`ENET_CONFIG_SIZE`] bytes from the descriptor base.
pub trait ConfigRegion {
    fn read_at(&self, offset: usize, buf: &mut [u8]);
    fn write_at(&mut self, offset: usize, buf: &[u8]);
}

/// Byte-slice regions, mainly for tests and host-side staging buffers.
impl ConfigRegion for [u8] {
    fn read_at(&self, offset: usize, buf: &mut [u8]) {
        buf.copy_from_slice(&self[offset..offset + buf.len()]);
    }

    fn write_at(&mut self, offset: usize, buf: &[u8]) {
        self[offset..offset + buf.len()].copy_from_slice(buf);
    }
}
