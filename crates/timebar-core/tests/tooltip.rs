// File: crates/timebar-core/tests/tooltip.rs
// Purpose: Validate flip-anchor tooltip placement and content formatting.

use timebar_core::format::{format_currency, format_grouped};
use timebar_core::tooltip::tooltip_content;
use timebar_core::{normalize, place_tooltip, Offset, Point, Size, Viewport};

fn place(x: f64, y: f64) -> timebar_core::TooltipPosition {
    place_tooltip(Point::new(x, y), Viewport::new(800.0, 600.0), Size::new(100.0, 50.0), Offset::new(20.0, 20.0))
}

#[test]
fn flips_to_right_anchor_near_right_edge() {
    // 750 + 20 + 100 = 870 > 800
    let pos = place(750.0, 50.0);
    assert_eq!(pos.left(), None);
    assert_eq!(pos.right(), Some(70.0));
    assert_eq!(pos.top(), Some(70.0));
    assert_eq!(pos.bottom(), None);
}

#[test]
fn anchors_left_and_top_when_it_fits() {
    let pos = place(50.0, 50.0);
    assert_eq!(pos.left(), Some(70.0));
    assert_eq!(pos.top(), Some(70.0));
    assert_eq!(pos.right(), None);
    assert_eq!(pos.bottom(), None);
}

#[test]
fn flips_to_bottom_anchor_near_bottom_edge() {
    // 560 + 20 + 50 = 630 > 600
    let pos = place(100.0, 560.0);
    assert_eq!(pos.top(), None);
    assert_eq!(pos.bottom(), Some(60.0));
    assert_eq!(pos.left(), Some(120.0));
}

#[test]
fn exactly_touching_the_edge_does_not_flip() {
    // 680 + 20 + 100 = 800, not greater than 800
    let pos = place(680.0, 530.0);
    assert_eq!(pos.left(), Some(700.0));
    assert_eq!(pos.top(), Some(550.0));
}

#[test]
fn exactly_one_anchor_per_axis_across_the_viewport() {
    let viewport = Viewport::new(800.0, 600.0);
    let size = Size::new(100.0, 50.0);
    for x in (0..=800).step_by(40) {
        for y in (0..=600).step_by(40) {
            let pos = place(x as f64, y as f64);
            assert!(pos.left().is_some() ^ pos.right().is_some());
            assert!(pos.top().is_some() ^ pos.bottom().is_some());

            let frame = pos.resolve(viewport, size);
            assert!(frame.right <= viewport.width + 1e-9, "clipped right at ({x}, {y})");
            assert!(frame.bottom <= viewport.height + 1e-9, "clipped bottom at ({x}, {y})");
            assert!((frame.width() - 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn flipped_box_sits_on_the_other_side_of_the_pointer() {
    let frame = place(750.0, 580.0).resolve(Viewport::new(800.0, 600.0), Size::new(100.0, 50.0));
    assert_eq!(frame.right, 730.0);
    assert_eq!(frame.bottom, 560.0);
}

#[test]
fn content_shows_quarter_and_currency() {
    let records = normalize([("1947-01-01", 243.1), ("2015-07-01", 18064.7), ("1990-10-01", 5872.701)]).unwrap();
    assert_eq!(tooltip_content(&records[0]), "1947 Q1\n$243.1");
    assert_eq!(tooltip_content(&records[1]), "2015 Q3\n$18,064.7");
    assert_eq!(tooltip_content(&records[2]), "1990 Q4\n$5,872.7");
}

#[test]
fn grouping_handles_boundaries() {
    assert_eq!(format_grouped(0.0, 0), "0");
    assert_eq!(format_grouped(999.95, 1), "1,000.0");
    assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
    assert_eq!(format_grouped(19_056.6, 1), "19,056.6");
    assert_eq!(format_grouped(-1_000_000.25, 2), "-1,000,000.25");
    assert_eq!(format_grouped(12.5, 2), "12.50");
    assert_eq!(format_currency(-1500.0), "-$1,500.0");
    assert_eq!(format_currency(-0.01), "$0.0");
}
