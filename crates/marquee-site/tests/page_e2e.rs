#![forbid(unsafe_code)]

//! Headless end-to-end checks for the assembled page.

use marquee_core::capability::CapabilitySnapshot;
use marquee_core::geometry::Position;
use marquee_fx::quality::QualityProfile;
use marquee_render::frame::Frame;
use marquee_runtime::Model;
use marquee_site::app::{HEADER_HEIGHT, Msg, PageModel, PageOptions, SectionId};
use marquee_site::content;
use std::time::Duration;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 32;

fn page() -> PageModel {
    let mut model = PageModel::new(PageOptions {
        quality: QualityProfile::from_snapshot(&CapabilitySnapshot::unconstrained()),
        no_fx: false,
        seed: 11,
        frame_step: Duration::from_millis(20),
    });
    model.update(Msg::Resize {
        width: WIDTH,
        height: HEIGHT,
    });
    model
}

fn settle(model: &mut PageModel, ticks: usize) {
    for _ in 0..ticks {
        model.update(Msg::Tick);
    }
}

fn rendered(model: &PageModel) -> Vec<String> {
    let mut frame = Frame::new(WIDTH, HEIGHT);
    model.view(&mut frame);
    (0..HEIGHT).map(|y| frame.buffer.row_text(y)).collect()
}

fn page_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

/// Column (in cells, not bytes) where `needle` starts; rows can hold
/// multi-byte glyphs, so `str::find` byte offsets are not columns.
fn char_find(row: &str, needle: &str) -> Option<usize> {
    row.find(needle).map(|byte_idx| row[..byte_idx].chars().count())
}

#[test]
fn hero_renders_under_the_sticky_nav() {
    let mut model = page();
    settle(&mut model, 2);
    let rows = rendered(&model);

    // Nav row carries the brand and every section label.
    assert!(rows[0].contains(content::EVENT_NAME));
    for id in SectionId::ALL {
        assert!(rows[0].contains(id.label()), "nav misses {}", id.label());
    }
    // Hero content starts below the header.
    assert!(page_contains(&rows[HEADER_HEIGHT as usize..], content::TAGLINE));
}

#[test]
fn prize_figure_settles_to_the_true_text() {
    let mut model = page();
    // Far past the reveal duration.
    settle(&mut model, 200);
    let rows = rendered(&model);
    assert!(
        page_contains(&rows, content::PRIZE_AMOUNT),
        "prize must equal its original text after completion"
    );
}

#[test]
fn nav_underline_tracks_the_scrolled_section() {
    let mut model = page();
    settle(&mut model, 2);
    model.update(Msg::ScrollTo(SectionId::Tracks));
    settle(&mut model, 300);
    assert_eq!(model.active_section(), Some(SectionId::Tracks));

    let rows = rendered(&model);
    let label_x = char_find(&rows[0], "TRACKS").expect("TRACKS in nav");
    let indicator_row = &rows[1];
    let under: String = indicator_row
        .chars()
        .skip(label_x)
        .take("TRACKS".len())
        .collect();
    assert!(
        under.chars().all(|c| c == '─'),
        "underline must sit beneath the active label, got {under:?}"
    );
}

#[test]
fn every_frame_announces_the_true_content() {
    let mut model = page();
    settle(&mut model, 3);
    let mut frame = Frame::new(WIDTH, HEIGHT);
    model.view(&mut frame);
    let announced = frame.announcements();
    assert!(announced.iter().any(|a| a == content::PRIZE_AMOUNT));
    for (_, value) in content::STATS {
        assert!(announced.iter().any(|a| a == value), "missing {value}");
    }
}

#[test]
fn magnet_shifts_the_hovered_register_button() {
    use marquee_core::geometry::Rect;
    use marquee_site::sections::hero::{Hero, REGISTER_LABEL};

    let mut model = page();
    settle(&mut model, 2);

    // The hero starts at page row 0, so page space == screen space minus
    // the header while scroll is 0.
    let (register, _) = Hero::button_rects(Rect::new(0, 0, WIDTH, 64));
    let screen_y = register.top() + HEADER_HEIGHT;
    let baseline_x = char_find(&rendered(&model)[screen_y as usize], REGISTER_LABEL.trim())
        .expect("register button visible");

    // Hover the left edge: the magnet pulls the button toward the pointer.
    model.update(Msg::PointerMoved(Position::new(register.left(), screen_y)));
    settle(&mut model, 2);
    let hovered_x = char_find(&rendered(&model)[screen_y as usize], REGISTER_LABEL.trim())
        .expect("register button still visible");
    assert!(
        hovered_x < baseline_x,
        "expected a leftward shift, got {baseline_x} -> {hovered_x}"
    );
}

#[test]
fn register_click_paths_land_on_problems() {
    use marquee_core::geometry::Rect;
    use marquee_site::sections::hero::Hero;

    // Clicking the hero CTA scrolls to the problems section.
    let mut model = page();
    settle(&mut model, 2);
    let (register, _) = Hero::button_rects(Rect::new(0, 0, WIDTH, 64));
    model.update(Msg::Click(Position::new(
        register.left() + 1,
        register.top() + HEADER_HEIGHT,
    )));
    settle(&mut model, 400);
    assert_eq!(model.active_section(), Some(SectionId::Problems));

    // So does the nav CTA, from anywhere on the page.
    let mut model = page();
    settle(&mut model, 2);
    model.update(Msg::Click(Position::new(WIDTH - 4, 0)));
    settle(&mut model, 400);
    assert_eq!(model.active_section(), Some(SectionId::Problems));
}

#[test]
fn no_fx_page_never_draws_stars() {
    let mut model = PageModel::new(PageOptions {
        quality: QualityProfile::from_snapshot(&CapabilitySnapshot::unconstrained()),
        no_fx: true,
        seed: 11,
        frame_step: Duration::from_millis(20),
    });
    model.update(Msg::Resize {
        width: WIDTH,
        height: HEIGHT,
    });
    settle(&mut model, 5);
    let rows = rendered(&model);
    for row in &rows {
        assert!(!row.contains('✦') && !row.contains('·') && !row.contains('•'));
    }
}

#[test]
fn resize_reflows_and_keeps_scroll_in_bounds() {
    let mut model = page();
    model.update(Msg::ScrollBottom);
    settle(&mut model, 300);
    // A much taller viewport shrinks max scroll; the page must clamp.
    model.update(Msg::Resize {
        width: 60,
        height: 200,
    });
    settle(&mut model, 3);
    let mut frame = Frame::new(60, 200);
    model.view(&mut frame);
    // Footer note is somewhere on screen: the page still renders sanely.
    let rows: Vec<String> = (0..200).map(|y| frame.buffer.row_text(y)).collect();
    assert!(page_contains(&rows, content::FOOTER_NOTE));
}
