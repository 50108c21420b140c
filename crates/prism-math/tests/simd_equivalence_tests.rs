// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! The `f32` lane type chosen for this target must agree with the portable
//! emulation. On targets without a hardware backend both sides are the same
//! type and the tests pass trivially.

use proptest::prelude::*;

use prism_math::simd::{F32x4, Mask4, Portable4};
use prism_math::{active_backend, Backend, Simd4};

fn hw(lanes: [f32; 4]) -> F32x4 {
    F32x4::from_array(lanes)
}

fn sw(lanes: [f32; 4]) -> Portable4<f32> {
    Portable4::from_array(lanes)
}

fn close(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-6 * scale
}

fn lanes() -> impl Strategy<Value = [f32; 4]> {
    prop::array::uniform4(-1.0e3f32..1.0e3)
}

#[test]
fn backend_matches_target() {
    let backend = active_backend::<f32>();
    if cfg!(all(feature = "simd", target_arch = "x86_64")) {
        assert_eq!(backend, Backend::Sse2);
    } else if cfg!(all(feature = "simd", target_arch = "aarch64")) {
        assert_eq!(backend, Backend::Neon);
    }
    assert_eq!(F32x4::BACKEND, backend);
}

#[test]
fn partial_loads_zero_fill_upper_lanes() {
    let src = [1.0f32, 2.0, 3.0, 4.0];
    assert_eq!(F32x4::load1(&src).to_array(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(F32x4::load2(&src).to_array(), [1.0, 2.0, 0.0, 0.0]);
    assert_eq!(F32x4::load3(&src).to_array(), [1.0, 2.0, 3.0, 0.0]);
    assert_eq!(F32x4::load4(&src).to_array(), src);
}

#[test]
fn partial_stores_leave_tail_untouched() {
    let v = hw([1.0, 2.0, 3.0, 4.0]);
    let mut dst = [9.0f32; 4];
    v.store3(&mut dst);
    assert_eq!(dst, [1.0, 2.0, 3.0, 9.0]);
    let mut dst = [9.0f32; 4];
    v.store1(&mut dst);
    assert_eq!(dst, [1.0, 9.0, 9.0, 9.0]);
}

#[test]
fn comparisons_require_every_lane() {
    let a = hw([1.0, 2.0, 3.0, 4.0]);
    let b = hw([2.0, 3.0, 4.0, 4.0]);
    assert!(a.all_le(b));
    assert!(!a.all_lt(b));
    assert_eq!(a.cmp_lt(b).bitmask(), 0b0111);
    assert!(a.cmp_lt(b).any());
    assert!(!a.cmp_lt(b).all());
}

#[test]
fn select_picks_per_lane() {
    let a = hw([1.0, 2.0, 3.0, 4.0]);
    let b = hw([-1.0, -2.0, -3.0, -4.0]);
    let mask = <F32x4 as Simd4>::Mask::from_lanes([true, false, true, false]);
    assert_eq!(F32x4::select(mask, a, b).to_array(), [1.0, -2.0, 3.0, -4.0]);
}

#[test]
fn shuffle_reorders_lanes() {
    let v = hw([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(v.shuffle::<3, 2, 1, 0>().to_array(), [4.0, 3.0, 2.0, 1.0]);
    assert_eq!(v.shuffle::<0, 0, 2, 2>().to_array(), [1.0, 1.0, 3.0, 3.0]);
}

#[test]
fn cross3_clears_w() {
    let x = hw([1.0, 0.0, 0.0, 7.0]);
    let y = hw([0.0, 1.0, 0.0, 7.0]);
    assert_eq!(x.cross3(y).to_array(), [0.0, 0.0, 1.0, 0.0]);
}

fn bits(lanes: [f32; 4]) -> [u32; 4] {
    lanes.map(f32::to_bits)
}

#[test]
fn special_values_select_identical_lanes() {
    let cases = [
        (
            [f32::NAN, -0.0, f32::INFINITY, f32::NEG_INFINITY],
            [1.0, 0.0, f32::NEG_INFINITY, f32::NAN],
        ),
        ([0.0, -0.0, f32::NAN, 2.5], [-0.0, 0.0, f32::NAN, -f32::NAN]),
        (
            [-f32::NAN, f32::INFINITY, -1.0, f32::MIN_POSITIVE],
            [f32::NEG_INFINITY, f32::INFINITY, -0.0, 0.0],
        ),
    ];
    let mask = [true, false, true, false];
    for (a, b) in cases {
        let (ha, hb, sa, sb) = (hw(a), hw(b), sw(a), sw(b));
        assert_eq!(bits(ha.min(hb).to_array()), bits(sa.min(sb).to_array()));
        assert_eq!(bits(ha.max(hb).to_array()), bits(sa.max(sb).to_array()));
        assert_eq!(bits(hb.min(ha).to_array()), bits(sb.min(sa).to_array()));
        assert_eq!(bits(hb.max(ha).to_array()), bits(sb.max(sa).to_array()));
        assert_eq!(bits(ha.abs().to_array()), bits(sa.abs().to_array()), "abs {a:?}");
        assert_eq!(bits(ha.neg().to_array()), bits(sa.neg().to_array()), "neg {a:?}");
        let picked_hw = F32x4::select(Mask4::from_lanes(mask), ha, hb);
        let picked_sw = Portable4::select(Mask4::from_lanes(mask), sa, sb);
        assert_eq!(bits(picked_hw.to_array()), bits(picked_sw.to_array()));
        assert_eq!(ha.cmp_lt(hb).to_lanes(), sa.cmp_lt(sb).to_lanes());
        assert_eq!(ha.cmp_eq(hb).to_lanes(), sa.cmp_eq(sb).to_lanes());
    }
}

#[test]
fn unordered_min_max_return_second_operand() {
    let nan = hw([f32::NAN; 4]);
    let one = hw([1.0; 4]);
    assert_eq!(nan.min(one).to_array(), [1.0; 4]);
    assert_eq!(nan.max(one).to_array(), [1.0; 4]);
    assert!(one.min(nan).to_array().iter().all(|c| c.is_nan()));
    assert_eq!(bits(hw([0.0; 4]).min(hw([-0.0; 4])).to_array()), bits([-0.0; 4]));
    assert_eq!(bits(hw([-0.0; 4]).max(hw([0.0; 4])).to_array()), bits([0.0; 4]));
}

proptest! {
    #[test]
    fn lane_wise_arithmetic_is_identical(a in lanes(), b in lanes()) {
        let (ha, hb, sa, sb) = (hw(a), hw(b), sw(a), sw(b));
        prop_assert_eq!(ha.add(hb).to_array(), sa.add(sb).to_array());
        prop_assert_eq!(ha.sub(hb).to_array(), sa.sub(sb).to_array());
        prop_assert_eq!(ha.mul(hb).to_array(), sa.mul(sb).to_array());
        prop_assert_eq!(ha.min(hb).to_array(), sa.min(sb).to_array());
        prop_assert_eq!(ha.max(hb).to_array(), sa.max(sb).to_array());
        prop_assert_eq!(ha.neg().to_array(), sa.neg().to_array());
        prop_assert_eq!(ha.abs().to_array(), sa.abs().to_array());
        prop_assert_eq!(ha.abs().sqrt().to_array(), sa.abs().sqrt().to_array());
        prop_assert_eq!(ha.scale(b[0]).to_array(), sa.scale(b[0]).to_array());
        prop_assert_eq!(ha.mul_add(hb, ha).to_array(), sa.mul_add(sb, sa).to_array());
    }

    #[test]
    fn division_is_identical(a in lanes(), b in prop::array::uniform4(1.0f32..100.0)) {
        prop_assert_eq!(hw(a).div(hw(b)).to_array(), sw(a).div(sw(b)).to_array());
        prop_assert_eq!(hw(b).rsqrt().to_array(), sw(b).rsqrt().to_array());
    }

    #[test]
    fn reductions_agree(a in lanes(), b in lanes()) {
        let (ha, hb, sa, sb) = (hw(a), hw(b), sw(a), sw(b));
        prop_assert!(close(ha.sum(), sa.sum()));
        prop_assert!(close(ha.dot4(hb), sa.dot4(sb)));
        prop_assert!(close(ha.dot3(hb), sa.dot3(sb)));
        prop_assert_eq!(ha.min_element(), sa.min_element());
        prop_assert_eq!(ha.max_element(), sa.max_element());
        let hc = ha.cross3(hb).to_array();
        let sc = sa.cross3(sb).to_array();
        for (h, s) in hc.iter().zip(sc.iter()) {
            prop_assert!(close(*h, *s), "{:?} vs {:?}", hc, sc);
        }
    }

    #[test]
    fn masks_agree(a in lanes(), b in lanes()) {
        let (ha, hb, sa, sb) = (hw(a), hw(b), sw(a), sw(b));
        prop_assert_eq!(ha.cmp_lt(hb).to_lanes(), sa.cmp_lt(sb).to_lanes());
        prop_assert_eq!(ha.cmp_le(hb).to_lanes(), sa.cmp_le(sb).to_lanes());
        prop_assert_eq!(ha.cmp_gt(hb).to_lanes(), sa.cmp_gt(sb).to_lanes());
        prop_assert_eq!(ha.cmp_ge(hb).to_lanes(), sa.cmp_ge(sb).to_lanes());
        prop_assert_eq!(ha.cmp_eq(ha).bitmask(), 0b1111);
        prop_assert_eq!(ha.all_near_eq(hb), sa.all_near_eq(sb));
    }
}
