//! NEON backend implementation (ARM64)
//!
//! This backend provides 4-lane (128-bit) SIMD operations using ARM NEON instructions.
//! Available on all ARM64 CPUs (Apple Silicon, AWS Graviton, Raspberry Pi 4+, etc.).
//!
//! **Note**: NEON is mandatory for ARM64, so no runtime detection is needed.

use crate::backends::BackendType;
use crate::traits::{SimdInt, SimdMask, SimdVector};
use core::arch::aarch64::*;

/// NEON vector wrapper (4 lanes of f32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonVector(float32x4_t);

/// NEON mask wrapper (4 full-width lanes)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask(uint32x4_t);

/// NEON integer vector wrapper (4 lanes of i32)
///
/// Kept as `uint32x4_t` so that shifts are logical; add and subtract are the
/// same instruction for both signednesses.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonInt(uint32x4_t);

const _: () = assert!(<NeonVector as SimdVector>::LANES == <NeonInt as SimdInt>::LANES);

impl SimdInt for NeonInt {
    const LANES: usize = 4;
    type FloatVec = NeonVector;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        unsafe { NeonInt(vdupq_n_u32(value as u32)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonInt(vaddq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonInt(vsubq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonInt(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonInt(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        // vbic computes a & !b
        unsafe { NeonInt(vbicq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            // For variable shift, use vshlq_u32 with positive count (left shift)
            let shift_vec = vdupq_n_s32(count as i32);
            NeonInt(vshlq_u32(self.0, shift_vec))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            // Negative count shifts right
            let shift_vec = vdupq_n_s32(-(count as i32));
            NeonInt(vshlq_u32(self.0, shift_vec))
        }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vceqq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn to_f32(self) -> NeonVector {
        unsafe { NeonVector(vcvtq_f32_s32(vreinterpretq_s32_u32(self.0))) }
    }
}

impl SimdVector for NeonVector {
    type Mask = NeonMask;
    type IntBits = NeonInt;

    const LANES: usize = 4;
    const BACKEND: BackendType = BackendType::Neon;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { NeonVector(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonVector(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_f32(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonVector(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonVector(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonVector(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonVector(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonVector(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { NeonVector(vsqrtq_f32(self.0)) }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().and(rhs.to_bits()))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().or(rhs.to_bits()))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe {
            let bits = veorq_u32(vreinterpretq_u32_f32(self.0), vreinterpretq_u32_f32(rhs.0));
            NeonVector(vreinterpretq_f32_u32(bits))
        }
    }

    #[inline(always)]
    fn and_not(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().and_not(rhs.to_bits()))
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ne(self, rhs: Self) -> Self::Mask {
        // NaN lanes fail vceq and therefore come out set
        unsafe { NeonMask(vmvnq_u32(vceqq_f32(self.0, rhs.0))) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        // NEON: vbslq_f32(mask, true_val, false_val)
        unsafe { NeonVector(vbslq_f32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn from_mask(mask: Self::Mask) -> Self {
        unsafe { NeonVector(vreinterpretq_f32_u32(mask.0)) }
    }

    #[inline(always)]
    fn truncate_to_int(self) -> Self::IntBits {
        unsafe { NeonInt(vreinterpretq_u32_s32(vcvtq_s32_f32(self.0))) }
    }

    #[inline(always)]
    fn from_int_cast(int_vec: Self::IntBits) -> Self {
        int_vec.to_f32()
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { NeonInt(vreinterpretq_u32_f32(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { NeonVector(vreinterpretq_f32_u32(bits.0)) }
    }
}

impl SimdMask for NeonMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(self.0) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { NeonMask(vmvnq_u32(self.0)) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonMask(veorq_u32(self.0, rhs.0)) }
    }
}
