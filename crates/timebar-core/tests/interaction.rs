// File: crates/timebar-core/tests/interaction.rs
// Purpose: Validate pointer enter/leave transitions, hit testing and the SVG document they produce.

use timebar_core::{normalize, BarChart, ChartError, ChartOptions, PointerEvent, Point, Record, Viewport};

fn records() -> Vec<Record> {
    normalize([
        ("1949-10-01", 267.2),
        ("1950-01-01", 275.8),
        ("1950-04-01", 284.9),
        ("1950-07-01", 304.3),
    ])
    .unwrap()
}

fn chart() -> BarChart {
    BarChart::new(&records(), Viewport::new(800.0, 600.0), ChartOptions::default()).unwrap()
}

#[test]
fn enter_then_leave_toggles_visibility() {
    let mut chart = chart();
    assert!(!chart.tooltip().visible);

    chart.pointer_enter(1, Point::new(300.0, 400.0)).unwrap();
    let tip = chart.tooltip();
    assert!(tip.visible);
    assert_eq!(tip.bar, Some(1));
    assert_eq!(tip.content, "1950 Q1\n$275.8");
    assert_eq!(tip.date.map(|d| d.to_string()).as_deref(), Some("1950-01-01"));
    let pos = tip.position.expect("placed");
    assert_eq!(pos.left(), Some(320.0));
    assert_eq!(pos.top(), Some(420.0));

    chart.pointer_leave();
    assert!(!chart.tooltip().visible);
}

#[test]
fn event_dispatch_matches_direct_handlers() {
    let mut chart = chart();
    chart.handle_pointer(PointerEvent::Enter { bar: 3, pointer: Point::new(790.0, 590.0) }).unwrap();
    let pos = chart.tooltip().position.unwrap();
    assert_eq!(pos.right(), Some(30.0));
    assert_eq!(pos.bottom(), Some(30.0));

    chart.handle_pointer(PointerEvent::Leave).unwrap();
    assert!(!chart.tooltip().visible);
}

#[test]
fn unknown_bar_is_an_error_and_leaves_state_untouched() {
    let mut chart = chart();
    let err = chart.pointer_enter(9, Point::new(10.0, 10.0)).unwrap_err();
    assert!(matches!(err, ChartError::UnknownBar(9)));
    assert!(!chart.tooltip().visible);
    assert!(chart.tooltip().position.is_none());
}

#[test]
fn hit_test_finds_bar_under_pointer() {
    let chart = chart();
    let origin = chart.plot_origin();
    for (i, bar) in chart.bars().iter().enumerate() {
        let inside = Point::new(origin.x + bar.x + bar.width / 2.0, origin.y + bar.y + bar.height / 2.0);
        assert_eq!(chart.bar_at(inside), Some(i));
    }
    // Above the tallest bar and in the margin.
    assert_eq!(chart.bar_at(Point::new(origin.x + 1.0, origin.y - 10.0)), None);
    assert_eq!(chart.bar_at(Point::new(5.0, 5.0)), None);
}

#[test]
fn svg_exposes_bars_axes_and_tooltip() {
    let mut chart = chart();
    let svg = chart.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("id=\"title\""));
    assert!(svg.contains("United States GDP"));
    assert!(svg.contains("id=\"x-axis\""));
    assert!(svg.contains("id=\"y-axis\""));
    assert_eq!(svg.matches("class=\"bar\"").count(), 4);
    assert!(svg.contains("data-date=\"1950-04-01\" data-gdp=\"284.9\""));
    assert!(svg.contains(">1950</text>"));
    assert!(svg.contains("<g id=\"tooltip\" visibility=\"hidden\"/>"));

    chart.pointer_enter(0, Point::new(750.0, 50.0)).unwrap();
    let svg = chart.to_svg();
    assert!(svg.contains("<g id=\"tooltip\" visibility=\"visible\" data-date=\"1949-10-01\" data-right=\"70\" data-top=\"70\">"));
    assert!(!svg.contains("data-left="));
    assert!(svg.contains(">1949 Q4</text>"));
    assert!(svg.contains(">$267.2</text>"));
}

#[test]
fn labels_off_omits_text() {
    let options = ChartOptions { draw_labels: false, ..ChartOptions::default() };
    let chart = BarChart::new(&records(), Viewport::new(800.0, 600.0), options).unwrap();
    let svg = chart.to_svg();
    assert!(!svg.contains("<text"));
    assert_eq!(svg.matches("class=\"bar\"").count(), 4);
}

#[test]
fn theme_lookup_drives_bar_fill() {
    let light = timebar_core::theme::find("LIGHT");
    assert_eq!(light.name, "light");
    assert_eq!(timebar_core::theme::find("no-such-theme").name, "dark");

    let options = ChartOptions { theme: light, ..ChartOptions::default() };
    let chart = BarChart::new(&records(), Viewport::new(800.0, 600.0), options).unwrap();
    assert!(chart.to_svg().contains("class=\"bar\" x=\"0\""));
    assert!(chart.to_svg().contains("fill=\"rgb(32,120,200)\""));
}
