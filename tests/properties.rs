//! Compositing properties checked through the public API.

use proptest::prelude::*;
use span_paint::{
    get_solid_color_painter, get_span_color_painter, get_span_mask_painter, get_span_painter,
    paint_glyph, paint_over, paint_over_clipped, paint_over_with_mask, Compositor, Glyph, IRect,
    Pixmap, PixmapLayout, PixmapMut, PlotterConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const MAX_W: usize = 17;
const MAX_PIXEL: usize = 5;

fn row_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MAX_W * MAX_PIXEL)
}

fn specialized_n() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1usize), Just(3), Just(4)]
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_full_opacity_overwrite() {
    init_logging();
    for (n, da) in [(1usize, false), (1, true), (3, false), (3, true), (4, true), (6, true)] {
        let mut color: Vec<u8> = (0..n as u8).map(|i| 40 + i * 30).collect();
        color.push(255);
        let painter = get_solid_color_painter(n, &color, da).unwrap();
        let stride = n + da as usize;
        let mut dst: Vec<u8> = (0..stride * 9).map(|i| (i * 7) as u8).collect();
        painter.paint(&mut dst, 9);
        for px in dst.chunks_exact(stride) {
            assert_eq!(&px[..n], &color[..n]);
            if da {
                assert_eq!(px[n], 255);
            }
        }
    }
}

#[test]
fn test_mask_monotonicity_example() {
    let painter = get_span_color_painter(1, false, &[100, 255]).unwrap();
    let mut dst = [50u8; 4];
    painter.paint(&mut dst, &[0, 128, 255, 0], 4);
    assert_eq!(dst, [50, 75, 100, 50]);
}

#[test]
fn test_run_decode_example() {
    init_logging();
    let glyph = Glyph::new(6, 1, vec![Some(0)], vec![0x05, 0x16]).unwrap();
    let mut buf = [0u8; 6];
    let mut dst = PixmapMut::new(PixmapLayout::new(0, 0, 6, 1, 1, true), &mut buf).unwrap();
    paint_glyph(&[], &mut dst, 0, 0, &glyph, 6, 1, 0, 0).unwrap();
    assert_eq!(buf, [0, 0, 255, 255, 255, 0]);
}

#[test]
fn test_zero_weight_is_noop() {
    let src = [10u8, 0, 200, 0, 33, 0];
    let before = [1u8, 2, 3, 4, 5, 6];

    let mut dst = before;
    get_span_painter(true, true, 1, 255)
        .unwrap()
        .paint(&mut dst, &src, 3);
    assert_eq!(dst, before);

    let mut dst = before;
    get_span_painter(true, false, 1, 0)
        .unwrap()
        .paint(&mut dst, &src, 3);
    assert_eq!(dst, before);

    let mut dst = before;
    get_span_mask_painter(true, true, 1)
        .unwrap()
        .paint(&mut dst, &[255, 1, 255, 1, 255, 1], &[0, 0, 0], 3);
    assert_eq!(dst, before);
}

#[test]
fn test_idempotent_under_zero_coverage() {
    let glyph = Glyph::new(4, 1, vec![Some(0)], vec![0x0D]).unwrap();
    let before: Vec<u8> = (0..12).map(|i| i * 19).collect();
    let mut buf = before.clone();
    let src = [255u8; 12];
    let mask = [0u8; 4];
    for _ in 0..3 {
        get_span_color_painter(3, false, &[9, 9, 9, 255])
            .unwrap()
            .paint(&mut buf, &mask, 4);
        get_span_mask_painter(false, false, 3)
            .unwrap()
            .paint(&mut buf, &src, &mask, 4);
        let mut dst = PixmapMut::new(PixmapLayout::new(0, 0, 4, 1, 3, false), &mut buf).unwrap();
        paint_glyph(&[9, 9, 9, 255], &mut dst, 0, 0, &glyph, 4, 1, 0, 0).unwrap();
    }
    assert_eq!(buf, before);
}

#[test]
fn test_opaque_paint_over_is_copy() {
    let src_buf: Vec<u8> = (0..3 * 4 * 3).map(|i| (i * 5) as u8).collect();
    let src = Pixmap::new(PixmapLayout::new(0, 0, 4, 3, 3, false), &src_buf).unwrap();
    let mut dst_buf = vec![77u8; src_buf.len()];
    let mut dst = PixmapMut::new(PixmapLayout::new(0, 0, 4, 3, 3, false), &mut dst_buf).unwrap();
    paint_over(&mut dst, &src, 255).unwrap();
    assert_eq!(dst_buf, src_buf);
}

#[test]
fn test_mask_paint_rgba() {
    let src_buf = [200u8, 100, 50, 255, 40, 40, 40, 128];
    let src = Pixmap::new(PixmapLayout::new(0, 0, 2, 1, 4, true), &src_buf).unwrap();
    let mask_buf = [255u8, 255];
    let mask = Pixmap::new(PixmapLayout::new(0, 0, 2, 1, 1, false), &mask_buf).unwrap();
    let mut dst_buf = [0u8; 8];
    let mut dst = PixmapMut::new(PixmapLayout::new(0, 0, 2, 1, 4, true), &mut dst_buf).unwrap();
    paint_over_with_mask(&mut dst, &src, &mask).unwrap();
    // Translucent source over a transparent destination keeps its own values.
    assert_eq!(dst_buf, src_buf);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_span_over_families_agree(
        n in specialized_n(),
        da in any::<bool>(),
        sa in any::<bool>(),
        alpha in any::<u8>(),
        w in 0..=MAX_W,
        src in row_bytes(),
        dst in row_bytes(),
    ) {
        let fast = PlotterConfig::all().span_painter(da, sa, n, alpha).unwrap();
        let slow = PlotterConfig::generic_only().span_painter(da, sa, n, alpha).unwrap();
        let (mut a, mut b) = (dst.clone(), dst);
        fast.paint(&mut a, &src, w);
        slow.paint(&mut b, &src, w);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_span_mask_families_agree(
        n in specialized_n(),
        da in any::<bool>(),
        sa in any::<bool>(),
        w in 0..=MAX_W,
        src in row_bytes(),
        mask in prop::collection::vec(any::<u8>(), MAX_W),
        dst in row_bytes(),
    ) {
        let fast = PlotterConfig::all().span_mask_painter(da, sa, n).unwrap();
        let slow = PlotterConfig::generic_only().span_mask_painter(da, sa, n).unwrap();
        let (mut a, mut b) = (dst.clone(), dst);
        fast.paint(&mut a, &src, &mask, w);
        slow.paint(&mut b, &src, &mask, w);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_span_color_families_agree(
        n in specialized_n(),
        da in any::<bool>(),
        color in prop::collection::vec(any::<u8>(), MAX_PIXEL),
        w in 0..=MAX_W,
        mask in prop::collection::vec(any::<u8>(), MAX_W),
        dst in row_bytes(),
    ) {
        let fast = PlotterConfig::all().span_color_painter(n, da, &color).unwrap();
        let slow = PlotterConfig::generic_only().span_color_painter(n, da, &color).unwrap();
        let (mut a, mut b) = (dst.clone(), dst);
        fast.paint(&mut a, &mask, w);
        slow.paint(&mut b, &mask, w);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_solid_color_families_agree(
        n in specialized_n(),
        da in any::<bool>(),
        color in prop::collection::vec(any::<u8>(), MAX_PIXEL),
        w in 0..=MAX_W,
        dst in row_bytes(),
    ) {
        let fast = PlotterConfig::all().solid_color_painter(n, &color, da).unwrap();
        let slow = PlotterConfig::generic_only().solid_color_painter(n, &color, da).unwrap();
        let (mut a, mut b) = (dst.clone(), dst);
        fast.paint(&mut a, w);
        slow.paint(&mut b, w);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_glyph_families_agree(
        n in specialized_n(),
        da in any::<bool>(),
        color in prop::collection::vec(any::<u8>(), MAX_PIXEL),
        stream in prop::collection::vec(any::<u8>(), 1..40),
        skip_x in 0..8usize,
        dst in row_bytes(),
    ) {
        let glyph = Glyph::new(MAX_W + 8, 1, vec![Some(0)], stream).unwrap();
        let channels = n + da as usize;
        let layout = PixmapLayout::new(0, 0, MAX_W as u32, 1, channels, da);
        let (mut a, mut b) = (dst.clone(), dst);
        let mut pa = PixmapMut::new(layout, &mut a).unwrap();
        Compositor::new(PlotterConfig::all())
            .paint_glyph(&color, &mut pa, 0, 0, &glyph, MAX_W, 1, skip_x, 0)
            .unwrap();
        let mut pb = PixmapMut::new(layout, &mut b).unwrap();
        Compositor::new(PlotterConfig::generic_only())
            .paint_glyph(&color, &mut pb, 0, 0, &glyph, MAX_W, 1, skip_x, 0)
            .unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_decoded_spans_fit_width(
        stream in prop::collection::vec(any::<u8>(), 0..64),
        skip_x in 0..32usize,
        w in 0..64usize,
    ) {
        let total: usize = span_paint::RunDecoder::new(&stream, skip_x, w)
            .map(|s| s.len())
            .sum();
        prop_assert!(total <= w);
    }

    #[test]
    fn prop_clip_before_or_after_intersection(
        sx in -4..4i32,
        sy in -4..4i32,
        clip in (-6..8i32, -6..8i32, 0..10u32, 0..10u32),
        alpha in any::<u8>(),
        src_buf in prop::collection::vec(any::<u8>(), 5 * 5 * 2),
    ) {
        let src = Pixmap::new(PixmapLayout::new(sx, sy, 5, 5, 2, true), &src_buf).unwrap();
        let dst_layout = PixmapLayout::new(0, 0, 6, 6, 1, false);
        let clip = IRect::from_origin_size(clip.0, clip.1, clip.2, clip.3);

        let mut a = vec![90u8; 36];
        let mut dst = PixmapMut::new(dst_layout, &mut a).unwrap();
        paint_over_clipped(&mut dst, &src, alpha, clip).unwrap();

        let pre = clip
            .intersect(&dst_layout.bounds())
            .intersect(&src.layout().bounds());
        let mut b = vec![90u8; 36];
        let mut dst = PixmapMut::new(dst_layout, &mut b).unwrap();
        paint_over_clipped(&mut dst, &src, alpha, pre).unwrap();

        prop_assert_eq!(a, b);
    }
}
