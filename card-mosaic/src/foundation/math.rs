pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Rounded `num / den` for a non-zero `den`, saturated to `u8`.
pub(crate) fn div_round_u8(num: u32, den: u32) -> u8 {
    debug_assert!(den > 0);
    ((num + den / 2) / den.max(1)).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
