#![forbid(unsafe_code)]

//! vNIC enet configuration descriptor and feature vocabulary.
//!
//! This crate implements the fixed-layout configuration record a host driver
//! exchanges with the firmware backing a virtualized Ethernet NIC: queue
//! sizing, MTU, interrupt coalescing policy, and the offload feature bitmask,
//! plus the interrupt-mode fallback procedure both sides must agree on.
//!
//! The byte layout and every numeric constant here (flag bit positions, enum
//! discriminants) are an external contract shared with non-Rust device
//! firmware; they must not be renumbered or reordered.
//!
//! Deliberately out of scope: PCI enumeration, DMA ring formats, RSS hash
//! computation, and range validation of queue counts or MTU. Valid ranges are
//! device-model-dependent, so the driver layer that knows the model enforces
//! them; this crate accepts and round-trips any value.

pub mod config;
pub mod features;
pub mod intr;

pub use config::{ConfigRegion, DecodeError, EnetConfig, DEVNAME_LEN, ENET_CONFIG_SIZE};
pub use features::EnetFeatures;
pub use intr::{resolve, IntrMechanism, IntrMode, IntrResolution, IntrSupport, IntrTimerType};
