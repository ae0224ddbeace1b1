use half16::Half;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, max_global_rejects: 65_536, ..ProptestConfig::default() })]

    #[test]
    fn abs_clears_only_the_sign_bit(bits in proptest::num::u16::ANY) {
        prop_assert_eq!(Half::from_bits(bits).abs().to_bits(), bits & 0x7FFF);
    }

    #[test]
    fn neg_flips_only_the_sign_bit(bits in proptest::num::u16::ANY) {
        let h = Half::from_bits(bits);
        prop_assume!(!h.is_nan());
        prop_assert_eq!((-h).to_bits(), bits ^ 0x8000);
    }

    #[test]
    fn zero_is_the_additive_identity(bits in proptest::num::u16::ANY) {
        let h = Half::from_bits(bits);
        prop_assume!(!h.is_nan());
        prop_assert_eq!(Half::ZERO + h, h);
    }

    #[test]
    fn narrowing_kernels_agree(value in proptest::num::f32::ANY) {
        // f32 -> f64 is exact, so both kernels must round identically
        prop_assert_eq!(
            Half::from_f64(value as f64).to_bits(),
            Half::from_f32(value).to_bits()
        );
    }

    #[test]
    fn ordering_is_a_trichotomy(a in proptest::num::u16::ANY, b in proptest::num::u16::ANY) {
        let x = Half::from_bits(a);
        let y = Half::from_bits(b);
        prop_assume!(!x.is_nan() && !y.is_nan());
        let holds = [x < y, x == y, x > y];
        prop_assert_eq!(holds.iter().filter(|&&c| c).count(), 1);
    }

    #[test]
    fn comparisons_match_the_wide_view(a in proptest::num::u16::ANY, b in proptest::num::u16::ANY) {
        let x = Half::from_bits(a);
        let y = Half::from_bits(b);
        prop_assert_eq!(x < y, x.to_f64() < y.to_f64());
        prop_assert_eq!(x == y, x.to_f64() == y.to_f64());
        prop_assert_eq!(x >= y, x.to_f64() >= y.to_f64());
    }

    #[test]
    fn next_up_is_the_least_greater_value(bits in proptest::num::u16::ANY) {
        let h = Half::from_bits(bits);
        prop_assume!(h.is_finite());
        let up = h.next_up();
        prop_assert!(up > h);
        prop_assert_eq!(up.next_down(), h);
    }

    #[test]
    fn sqrt_agrees_with_the_f64_path(bits in proptest::num::u16::ANY) {
        let h = Half::from_bits(bits);
        prop_assume!(h.is_finite() && h.is_sign_positive());
        prop_assert_eq!(
            h.sqrt().to_bits(),
            Half::from_f64(h.to_f64().sqrt()).to_bits()
        );
    }
}
