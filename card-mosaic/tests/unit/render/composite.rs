use super::*;
use crate::foundation::core::{CanvasSize, CardSize};
use crate::layout::columns::ColumnGeometry;
use crate::layout::placement::Placement;

fn solid_card(name: &str, w: u32, h: u32, px: [u8; 4]) -> CardImage {
    CardImage::from_rgba(name, image::RgbaImage::from_pixel(w, h, image::Rgba(px)), h).unwrap()
}

fn layout(canvas: CanvasSize, card: CardSize, placements: Vec<Placement>) -> MosaicLayout {
    MosaicLayout {
        canvas,
        geometry: ColumnGeometry::new(canvas.width, card, 0).unwrap(),
        placements,
        skipped: 0,
    }
}

fn at(card: usize, x: u32, y: u32) -> Placement {
    Placement {
        column: 0,
        card,
        x,
        y,
    }
}

#[test]
fn over_identities() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    assert_eq!(over([0, 0, 0, 0], [50, 0, 0, 128]), [50, 0, 0, 128]);
}

#[test]
fn over_half_alpha_blends() {
    // ~50% white over opaque black
    assert_eq!(over([0, 0, 0, 255], [255, 255, 255, 128]), [128, 128, 128, 255]);

    // ~50% red over opaque blue
    assert_eq!(over([0, 0, 255, 255], [255, 0, 0, 128]), [128, 0, 127, 255]);

    // ~50% red over ~50% blue
    assert_eq!(over([0, 0, 255, 128], [255, 0, 0, 128]), [170, 0, 85, 192]);
}

#[test]
fn translucent_card_onto_empty_canvas_is_unchanged() {
    for alpha in [1u8, 3, 40, 128, 254] {
        let src = [200, 100, 50, alpha];
        let cards = vec![solid_card("c", 1, 1, src)];
        let canvas = CanvasSize::new(1, 1).unwrap();
        let card = cards[0].size();
        let out = composite(&layout(canvas, card, vec![at(0, 0, 0)]), &cards).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), src);

        let img = out.into_rgba_image().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, src);
    }
}

#[test]
fn draw_card_clips_right_and_bottom() {
    let size = CanvasSize::new(4, 4).unwrap();
    let mut canvas = Canvas::new(size).unwrap();
    let card = solid_card("c", 4, 4, [255, 0, 0, 255]);
    draw_card(&mut canvas, &card, 2, 2);

    for y in 0..4 {
        for x in 0..4 {
            let want = if x >= 2 && y >= 2 {
                [255, 0, 0, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(canvas.pixel(x, y).unwrap(), want, "({x},{y})");
        }
    }

    draw_card(&mut canvas, &card, 4, 0);
    draw_card(&mut canvas, &card, 0, 4);
    assert_eq!(canvas.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn new_canvas_is_transparent() {
    let canvas = Canvas::new(CanvasSize::new(3, 2).unwrap()).unwrap();
    assert_eq!(canvas.pixels().len(), 3 * 2 * 4);
    assert!(canvas.pixels().iter().all(|&b| b == 0));
    assert_eq!(canvas.pixel(3, 0), None);
}

#[test]
fn later_placements_occlude_earlier_ones() {
    let red = solid_card("red", 2, 2, [255, 0, 0, 255]);
    let green = solid_card("green", 2, 2, [0, 255, 0, 255]);
    let cards = vec![red, green];
    let canvas = CanvasSize::new(3, 2).unwrap();
    let card = CardSize {
        width: 2,
        height: 2,
    };

    let out = composite(&layout(canvas, card, vec![at(0, 0, 0), at(1, 1, 0)]), &cards).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [255, 0, 0, 255]);
    assert_eq!(out.pixel(1, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(2, 1).unwrap(), [0, 255, 0, 255]);

    let out = composite(&layout(canvas, card, vec![at(1, 1, 0), at(0, 0, 0)]), &cards).unwrap();
    assert_eq!(out.pixel(1, 0).unwrap(), [255, 0, 0, 255]);
}

#[test]
fn transparent_regions_show_what_is_beneath() {
    let mut img = image::RgbaImage::from_pixel(2, 1, image::Rgba([0, 0, 255, 255]));
    img.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));
    let holey = CardImage::from_rgba("holey", img, 1).unwrap();
    let base = solid_card("base", 2, 1, [255, 255, 0, 255]);
    let cards = vec![base, holey];
    let canvas = CanvasSize::new(2, 1).unwrap();
    let card = CardSize {
        width: 2,
        height: 1,
    };

    let out = composite(&layout(canvas, card, vec![at(0, 0, 0), at(1, 0, 0)]), &cards).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), [0, 0, 255, 255]);
    assert_eq!(out.pixel(1, 0).unwrap(), [255, 255, 0, 255]);
}

#[test]
fn composite_leaves_cards_untouched() {
    let cards = vec![solid_card("c", 2, 2, [10, 20, 30, 200])];
    let before = cards[0].pixels().to_vec();
    let canvas = CanvasSize::new(2, 2).unwrap();
    let card = cards[0].size();
    composite(&layout(canvas, card, vec![at(0, 0, 0), at(0, 0, 0)]), &cards).unwrap();
    assert_eq!(cards[0].pixels(), before.as_slice());
}

#[test]
fn composite_rejects_unknown_card() {
    let cards = vec![solid_card("c", 1, 1, [0, 0, 0, 255])];
    let canvas = CanvasSize::new(1, 1).unwrap();
    let card = cards[0].size();
    let err = composite(&layout(canvas, card, vec![at(3, 0, 0)]), &cards).unwrap_err();
    assert!(matches!(err, MosaicError::Validation(_)));
}

#[test]
fn rgba_image_export_matches_canvas() {
    let cards = vec![solid_card("c", 1, 1, [12, 34, 56, 90])];
    let canvas = CanvasSize::new(2, 1).unwrap();
    let card = cards[0].size();
    let out = composite(&layout(canvas, card, vec![at(0, 0, 0)]), &cards).unwrap();
    let pixels = out.pixels().to_vec();
    let img = out.into_rgba_image().unwrap();
    assert_eq!(img.as_raw(), &pixels);
    assert_eq!(img.get_pixel(0, 0).0, [12, 34, 56, 90]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
}

#[test]
fn wider_card_is_clipped_at_last_column() {
    let narrow = solid_card("narrow", 2, 1, [255, 0, 0, 255]);
    let wide = solid_card("wide", 4, 1, [0, 255, 0, 255]);
    let cards = vec![narrow, wide];
    let canvas = CanvasSize::new(6, 2).unwrap();
    let geometry = ColumnGeometry::new(6, cards[0].size(), 0).unwrap();
    assert_eq!(geometry.offsets, vec![0, 2, 4]);

    let last = *geometry.offsets.last().unwrap();
    let mosaic = MosaicLayout {
        canvas,
        geometry,
        placements: vec![at(0, 0, 0), at(1, last, 0)],
        skipped: 0,
    };
    let out = composite(&mosaic, &cards).unwrap();

    assert_eq!(out.pixel(0, 0).unwrap(), [255, 0, 0, 255]);
    assert_eq!(out.pixel(2, 0).unwrap(), [0, 0, 0, 0]);
    assert_eq!(out.pixel(4, 0).unwrap(), [0, 255, 0, 255]);
    assert_eq!(out.pixel(5, 0).unwrap(), [0, 255, 0, 255]);
    // The overhang must not wrap onto the next row.
    for x in 0..6 {
        assert_eq!(out.pixel(x, 1).unwrap(), [0, 0, 0, 0], "x={x}");
    }
}
