use proptest::prelude::*;
use venic_enet_config::{DecodeError, EnetConfig, EnetFeatures, ENET_CONFIG_SIZE};

fn arb_config() -> impl Strategy<Value = EnetConfig> {
    (
        (
            any::<u32>(),
            any::<u32>(),
            any::<u32>(),
            any::<u16>(),
            any::<u16>(),
            any::<u8>(),
            any::<u8>(),
        ),
        (
            proptest::array::uniform16(any::<u8>()),
            any::<u32>(),
            any::<u16>(),
            any::<u16>(),
            any::<u16>(),
            any::<u64>(),
        ),
    )
        .prop_map(
            |(
                (flags, wq_desc_count, rq_desc_count, mtu, intr_timer_legacy, timer_type, mode),
                (devname, intr_timer_usec, loop_tag, vf_rq_count, num_arfs, mem_paddr),
            )| EnetConfig {
                // Arbitrary bits on purpose: unknown flag bits and
                // out-of-range enum bytes must round-trip too.
                flags: EnetFeatures::from_bits_retain(flags),
                wq_desc_count,
                rq_desc_count,
                mtu,
                intr_timer_legacy,
                intr_timer_type: timer_type,
                intr_mode: mode,
                devname,
                intr_timer_usec,
                loop_tag,
                vf_rq_count,
                num_arfs,
                mem_paddr,
            },
        )
}

proptest! {
    #[test]
    fn encode_decode_round_trips(cfg in arb_config()) {
        let bytes = cfg.encode();
        prop_assert_eq!(bytes.len(), ENET_CONFIG_SIZE);
        prop_assert_eq!(EnetConfig::decode(&bytes).unwrap(), cfg);
    }

    #[test]
    fn every_short_prefix_fails_too_short(cfg in arb_config(), len in 0..ENET_CONFIG_SIZE) {
        let bytes = cfg.encode();
        prop_assert_eq!(
            EnetConfig::decode(&bytes[..len]),
            Err(DecodeError::TooShort { len, min: ENET_CONFIG_SIZE })
        );
    }

    #[test]
    fn single_flag_set_clear_is_isolated(cfg in arb_config(), bit in 0u32..18) {
        // Walk the real catalog only; positions 12, 13 and 15 are unassigned.
        let Some(flag) = EnetFeatures::from_bits(1 << bit) else {
            return Ok(());
        };

        let mut set = cfg;
        set.set_feature(flag);
        prop_assert!(set.has_feature(flag));
        prop_assert_eq!(set.flags.bits() & !flag.bits(), cfg.flags.bits() & !flag.bits());

        let mut cleared = cfg;
        cleared.clear_feature(flag);
        prop_assert!(!cleared.has_feature(flag));
        prop_assert_eq!(
            cleared.flags.bits() & !flag.bits(),
            cfg.flags.bits() & !flag.bits()
        );
    }

    #[test]
    fn install_load_round_trips_through_region(cfg in arb_config()) {
        let mut region = vec![0u8; ENET_CONFIG_SIZE];
        cfg.install(region.as_mut_slice());
        prop_assert_eq!(EnetConfig::load(region.as_slice()), cfg);
    }
}
