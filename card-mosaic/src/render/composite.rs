use crate::assets::cards::CardImage;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::math::{div_round_u8, mul_div255_u8};
use crate::layout::placement::MosaicLayout;
use crate::render::canvas::Canvas;

/// One straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Straight-alpha source-over.
///
/// `out.a = sa + da * (1 - sa)` and `out.c = (sc * sa + dc * da * (1 - sa)) / out.a`. A source
/// over a fully transparent destination comes out unchanged.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 || dst[3] == 0 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let out_a = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    let src_w = u32::from(sa) * 255;
    let dst_w = u32::from(dst[3]) * u32::from(inv);
    let den = u32::from(out_a) * 255;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * src_w + u32::from(dst[i]) * dst_w;
        out[i] = div_round_u8(num, den);
    }
    out[3] = out_a;
    out
}

/// Composite `card` with its top-left corner at `(x, y)`.
///
/// Rows and columns falling past the right or bottom edge are clipped.
pub fn draw_card(canvas: &mut Canvas, card: &CardImage, x: u32, y: u32) {
    let canvas_w = canvas.width();
    let canvas_h = canvas.height();
    if x >= canvas_w || y >= canvas_h {
        return;
    }

    let visible_w = card.width().min(canvas_w - x) as usize;
    let visible_h = card.height().min(canvas_h - y) as usize;
    let card_stride = card.width() as usize * 4;
    let canvas_stride = canvas_w as usize * 4;
    let src = card.pixels();
    let dst = canvas.pixels_mut();

    for row in 0..visible_h {
        let s0 = row * card_stride;
        let d0 = (y as usize + row) * canvas_stride + x as usize * 4;
        let src_row = &src[s0..s0 + visible_w * 4];
        let dst_row = &mut dst[d0..d0 + visible_w * 4];
        for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
}

/// Allocate a transparent canvas and paint every placement in layout order.
///
/// Later placements cover earlier ones where they overlap.
#[tracing::instrument(skip_all, fields(placements = layout.placements.len()))]
pub fn composite(layout: &MosaicLayout, cards: &[CardImage]) -> MosaicResult<Canvas> {
    let mut canvas = Canvas::new(layout.canvas)?;
    for p in &layout.placements {
        let card = cards.get(p.card).ok_or_else(|| {
            MosaicError::validation(format!(
                "placement references card {} but only {} are loaded",
                p.card,
                cards.len()
            ))
        })?;
        draw_card(&mut canvas, card, p.x, p.y);
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
