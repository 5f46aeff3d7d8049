//! Rendering the canonical anvil record.

use quickdraw_core::Point;
use quickdraw_render::{render_strokes, Animation, Rgb, StrokeStyle};
use quickdraw_test_utils::anvil_fixture;

fn anvil_strokes() -> Vec<Vec<Point>> {
    anvil_fixture()
        .image_data
        .iter()
        .map(|s| s.points().collect())
        .collect()
}

#[test]
fn anvil_animation_has_32_frames() {
    let anim = Animation::from_strokes(&anvil_strokes(), &StrokeStyle::default()).unwrap();
    assert_eq!(anim.frame_count(), 32);
    let blank = quickdraw_render::Canvas::new(Rgb::WHITE);
    assert_ne!(anim.frames()[0], blank);
    assert_ne!(anim.frames()[0], anim.frames()[31]);
}

#[test]
fn custom_background_is_used() {
    let style = StrokeStyle::default().bg_color([10, 20, 30]);
    let image = render_strokes(&anvil_strokes(), &style).unwrap();
    assert_eq!(image.pixel(0, 0), Some(Rgb(10, 20, 30)));
}
