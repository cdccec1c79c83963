use std::{cell::Cell, rc::Rc};

use crate::{config, prelude::*};

tab_enum! {
    enum Range {
        Day,
        Week,
        Month = "This month",
    }
}

const FRAME_DT: f32 = 1.0 / 60.0;

fn frame(width: f32) -> Rect {
    Rect::from_xywh(0.0, 0.0, width, 52.0)
}

#[test]
fn host_loop_follows_proposals() {
    let selected = Rc::new(Cell::new(Range::Day));
    let sink = selected.clone();
    let style = config::style_from_json(r##"{ "indicator_color": "#2563EB" }"##).unwrap();
    let mut row = TabRow::new(Range::ALL.iter().copied(), move |range: Range| sink.set(range))
        .style(style);

    row.render(&selected.get(), frame(308.0));
    assert!(row.tap(Point::new(254.0, 26.0)));
    assert_eq!(selected.get(), Range::Month);

    let mut frames = 0;
    row.render(&selected.get(), frame(308.0));
    while row.tick(FRAME_DT) {
        frames += 1;
        row.render(&selected.get(), frame(308.0));
    }

    assert!(frames > 1);
    assert_eq!(row.indicator().edges(), Some(row.bounds()[2]));
}

#[test]
fn resize_keeps_the_indicator_on_its_tab() {
    let mut row = TabRow::new(Range::ALL.iter().copied(), |_: Range| {});
    row.render(&Range::Week, frame(308.0));

    row.render(&Range::Week, frame(608.0));

    assert_eq!(row.indicator().edges(), Some(TabBounds::new(204.0, 404.0)));
    assert!(!row.tick(FRAME_DT));
}

#[test]
fn labels_come_from_the_identifier() {
    let mut row = TabRow::new(Range::ALL.iter().copied(), |_: Range| {});
    let scene = row.render(&Range::Day, frame(308.0));

    let labels: Vec<_> = scene.texts().map(|(_, text)| text.content.clone()).collect();
    assert_eq!(labels, ["Day", "Week", "This month"]);
}

#[test]
fn styled_colors_reach_the_scene() {
    let style = config::style_from_json(
        r##"{ "background_color": "#101010", "selected_text_color": "#FF0000" }"##,
    )
    .unwrap();
    let mut row = TitledTabRow::new(["A", "B"], |_: usize| {}).style(style);
    let scene = row.render(0, frame(208.0));

    let (_, background) = scene.shapes().next().unwrap();
    assert_eq!(background.fill, Color::srgb_u32(0x10_10_10));

    let (_, first) = scene.texts().next().unwrap();
    assert_eq!(first.color, Color::srgb_u32(0xFF_00_00));
}
