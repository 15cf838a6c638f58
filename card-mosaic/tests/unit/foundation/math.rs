use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
}

#[test]
fn div_round_rounds_half_up_and_saturates() {
    assert_eq!(div_round_u8(10, 4), 3);
    assert_eq!(div_round_u8(9, 4), 2);
    assert_eq!(div_round_u8(200 * 40 * 255, 40 * 255), 200);
    assert_eq!(div_round_u8(u32::from(u16::MAX), 1), 255);
}
