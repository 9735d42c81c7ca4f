use venic_enet_config::{resolve, IntrMechanism, IntrMode, IntrSupport};

const MODES: [IntrMode; 3] = [IntrMode::Any, IntrMode::Msi, IntrMode::Intx];

fn all_support_subsets() -> impl Iterator<Item = IntrSupport> {
    (0u8..8).map(IntrSupport::from_bits_retain)
}

/// What the wire contract promises for each (mode, support) pair.
fn expected(requested: IntrMode, supported: IntrSupport) -> IntrMechanism {
    match requested {
        IntrMode::Any => {
            if supported.contains(IntrSupport::MSIX) {
                IntrMechanism::Msix
            } else if supported.contains(IntrSupport::MSI) {
                IntrMechanism::Msi
            } else {
                IntrMechanism::Intx
            }
        }
        IntrMode::Msi => {
            if supported.contains(IntrSupport::MSI) {
                IntrMechanism::Msi
            } else {
                IntrMechanism::Intx
            }
        }
        IntrMode::Intx => IntrMechanism::Intx,
    }
}

#[test]
fn resolver_is_total_over_all_inputs() {
    for mode in MODES {
        for supported in all_support_subsets() {
            let r = resolve(mode, supported);
            assert_eq!(
                r.mechanism,
                expected(mode, supported),
                "mode={mode:?} supported={supported:?}"
            );
        }
    }
}

#[test]
fn resolver_is_idempotent() {
    for mode in MODES {
        for supported in all_support_subsets() {
            assert_eq!(resolve(mode, supported), resolve(mode, supported));
        }
    }
}

#[test]
fn matched_request_reports_first_choice_availability() {
    for supported in all_support_subsets() {
        assert_eq!(
            resolve(IntrMode::Any, supported).matched_request,
            supported.contains(IntrSupport::MSIX)
        );
        assert_eq!(
            resolve(IntrMode::Msi, supported).matched_request,
            supported.contains(IntrSupport::MSI)
        );
        assert!(resolve(IntrMode::Intx, supported).matched_request);
    }
}

// The four concrete fallback cases the device contract pins down.

#[test]
fn any_with_only_intx_resolves_intx() {
    let r = resolve(IntrMode::Any, IntrSupport::INTX);
    assert_eq!(r.mechanism, IntrMechanism::Intx);
}

#[test]
fn any_with_everything_resolves_msix() {
    let r = resolve(
        IntrMode::Any,
        IntrSupport::MSIX | IntrSupport::MSI | IntrSupport::INTX,
    );
    assert_eq!(r.mechanism, IntrMechanism::Msix);
}

#[test]
fn msi_without_msi_skips_msix_and_resolves_intx() {
    let r = resolve(IntrMode::Msi, IntrSupport::MSIX | IntrSupport::INTX);
    assert_eq!(r.mechanism, IntrMechanism::Intx);
}

#[test]
fn intx_with_everything_still_resolves_intx() {
    let r = resolve(
        IntrMode::Intx,
        IntrSupport::MSIX | IntrSupport::MSI | IntrSupport::INTX,
    );
    assert_eq!(r.mechanism, IntrMechanism::Intx);
}
