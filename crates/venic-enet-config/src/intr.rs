//! Interrupt mode negotiation and timer interpretation.
//!
//! The host requests an interrupt delivery mode in the descriptor; the side
//! that knows what the platform actually supports runs [`resolve`] to pick the
//! one concrete mechanism. Both sides must reproduce the same fallback order,
//! so the whole procedure lives here as a pure function.

use bitflags::bitflags;

/// How `intr_timer_usec` is interpreted. Wire values 0/1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IntrTimerType {
    /// The timer is the minimum spacing enforced between consecutive
    /// interrupts — a rate cap.
    Min = 0,
    /// The timer is how long the device sits idle with no new work before
    /// firing — a coalescing delay.
    Idle = 1,
}

impl IntrTimerType {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(IntrTimerType::Min),
            1 => Some(IntrTimerType::Idle),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Requested interrupt delivery mode. Wire values 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IntrMode {
    /// Try MSI-X, then MSI, then INTx.
    Any = 0,
    /// Try MSI, then INTx. MSI-X is deliberately excluded.
    Msi = 1,
    /// INTx only.
    Intx = 2,
}

impl IntrMode {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(IntrMode::Any),
            1 => Some(IntrMode::Msi),
            2 => Some(IntrMode::Intx),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        self as u8
    }
}

bitflags! {
    /// The interrupt mechanisms a platform reports as available.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IntrSupport: u8 {
        const MSIX = 1 << 0;
        const MSI = 1 << 1;
        const INTX = 1 << 2;
    }
}

/// A concrete interrupt delivery mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntrMechanism {
    Msix,
    Msi,
    Intx,
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrResolution {
    pub mechanism: IntrMechanism,
    /// True iff the most-preferred mechanism for the requested mode was
    /// available, i.e. no fallback step was taken. Diagnostics only; the
    /// mechanism field is authoritative either way.
    pub matched_request: bool,
}

/// Resolve a requested mode against the supported-mechanism set.
///
/// Pure and total: INTx is the universal fallback and is used even when the
/// caller's `supported` set omits it, so resolution never fails. `Msi` never
/// escalates to MSI-X and `Intx` never escalates at all — a narrow request is
/// a constraint, not a hint.
pub fn resolve(requested: IntrMode, supported: IntrSupport) -> IntrResolution {
    let resolution = match requested {
        IntrMode::Any => {
            if supported.contains(IntrSupport::MSIX) {
                IntrResolution {
                    mechanism: IntrMechanism::Msix,
                    matched_request: true,
                }
            } else if supported.contains(IntrSupport::MSI) {
                IntrResolution {
                    mechanism: IntrMechanism::Msi,
                    matched_request: false,
                }
            } else {
                IntrResolution {
                    mechanism: IntrMechanism::Intx,
                    matched_request: false,
                }
            }
        }
        IntrMode::Msi => {
            if supported.contains(IntrSupport::MSI) {
                IntrResolution {
                    mechanism: IntrMechanism::Msi,
                    matched_request: true,
                }
            } else {
                IntrResolution {
                    mechanism: IntrMechanism::Intx,
                    matched_request: false,
                }
            }
        }
        IntrMode::Intx => IntrResolution {
            mechanism: IntrMechanism::Intx,
            matched_request: true,
        },
    };

    if !resolution.matched_request {
        tracing::debug!(
            ?requested,
            mechanism = ?resolution.mechanism,
            "interrupt mode fell back"
        );
    }
    resolution
}
