//! Feature-flag vocabulary for the enet configuration descriptor.
//!
//! Each flag is an independently-enableable capability occupying a fixed bit
//! position in the descriptor's 32-bit `flags` word. The numeric values are an
//! external contract with the device firmware and must not be renumbered.

use bitflags::bitflags;

bitflags! {
    /// Offload and capability flags carried in [`EnetConfig::flags`].
    ///
    /// Flags are a set, not an enum: any combination may be present. No
    /// combination is corrected or rejected here — an RSS hash sub-flag set
    /// while [`EnetFeatures::RSS`] is clear is preserved verbatim, and bits
    /// outside the catalog survive a decode/encode round trip untouched.
    /// Whether such combinations mean anything is device policy.
    ///
    /// [`EnetConfig::flags`]: crate::config::EnetConfig::flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EnetFeatures: u32 {
        /// TCP segmentation offload.
        const TSO = 0x1;
        /// Large receive offload.
        const LRO = 0x2;
        /// Receive checksum offload.
        const RX_CSUM = 0x4;
        /// Transmit checksum offload.
        const TX_CSUM = 0x8;
        /// Receive side scaling.
        const RSS = 0x10;
        /// Hash on IPv4 fields.
        const RSS_HASH_IPV4 = 0x20;
        /// Hash on TCP + IPv4 fields.
        const RSS_HASH_TCP_IPV4 = 0x40;
        /// Hash on IPv6 fields.
        const RSS_HASH_IPV6 = 0x80;
        /// Hash on TCP + IPv6 fields.
        const RSS_HASH_TCP_IPV6 = 0x100;
        /// Hash on IPv6 extended fields.
        const RSS_HASH_IPV6_EX = 0x200;
        /// Hash on TCP + IPv6 extended fields.
        const RSS_HASH_TCP_IPV6_EX = 0x400;
        /// Loopback mode; gives meaning to `loop_tag`.
        const LOOP = 0x800;
        /// VMQ (NetQ-compatible) queueing.
        const VMQ = 0x4000;
        /// VXLAN tunnel offload.
        const VXLAN = 0x10000;
        /// NVGRE tunnel offload.
        const NVGRE = 0x20000;
    }
}

impl Default for EnetFeatures {
    fn default() -> Self {
        EnetFeatures::empty()
    }
}

impl EnetFeatures {
    /// Union of every RSS hash selector sub-flag.
    pub const RSS_HASH_ALL: EnetFeatures = EnetFeatures::RSS_HASH_IPV4
        .union(EnetFeatures::RSS_HASH_TCP_IPV4)
        .union(EnetFeatures::RSS_HASH_IPV6)
        .union(EnetFeatures::RSS_HASH_TCP_IPV6)
        .union(EnetFeatures::RSS_HASH_IPV6_EX)
        .union(EnetFeatures::RSS_HASH_TCP_IPV6_EX);
}
