//! Screen-space geometry of the menu. Pure arithmetic over [`Config`]; no
//! host calls happen here.

use crate::config::Config;
use crate::core::space::{Point, Rect, Size};

/* ------------------------------ offsets ------------------------------ */
const SUBTITLE_Y_OFFSET: f32 = 0.061;
const ROW_Y_OFFSET: f32 = 0.0895;
// Row i > 0 sits (row0_y / 7.6) * i below row 0.
const ROW_STEP_DIVISOR: f32 = 7.6;
// Checkbox and list glyphs use their own flat per-row step.
const GLYPH_ROW_STEP: f32 = 0.03;
const TEXT_X_INSET: f32 = 0.10;
const ROW_TEXT_Y_OFFSET: f32 = 0.0115;
const BAR_TEXT_Y_OFFSET: f32 = 0.010;
const PAGE_COUNTER_X_OFFSET: f32 = 0.08;
const CHECKBOX_X_OFFSET: f32 = 0.095;
const LIST_RIGHT_ARROW_X_OFFSET: f32 = 0.098;
const LIST_LABEL_Y_OFFSET: f32 = 0.0109;
const LIST_LABEL_PAD: f32 = 0.0025 * 2.55;
const LIST_LEFT_ARROW_PAD: f32 = 0.0050 * 2.5;
const DESCRIPTION_Y_OFFSET: f32 = 0.0165;

/* ------------------------------- title ------------------------------- */
const TITLE_X_DIVISOR: f32 = 2.5;
const TITLE_Y_HEADER_FACTOR: f32 = 12.05;

/* ------------------------------- glare ------------------------------- */
const GLARE_X_FACTOR: f32 = 3.118;
const GLARE_Y_FACTOR: f32 = 4.182;
const GLARE_W_FACTOR: f32 = 4.5;
const GLARE_H_FACTOR: f32 = 11.15;

pub fn header_rect(cfg: &Config) -> Rect {
    Rect::centered(cfg.anchor, Size::new(cfg.width, cfg.header.height))
}

pub fn title_anchor(cfg: &Config) -> Point {
    Point::new(
        cfg.anchor.x / TITLE_X_DIVISOR,
        cfg.anchor.y / (cfg.header.height * TITLE_Y_HEADER_FACTOR),
    )
}

/// The glare movie is authored full-screen, so its rect is scaled well past
/// the header it decorates.
pub fn glare_rect(cfg: &Config) -> Rect {
    Rect {
        x: cfg.anchor.x * GLARE_X_FACTOR,
        y: cfg.anchor.y * GLARE_Y_FACTOR,
        w: cfg.width * GLARE_W_FACTOR,
        h: cfg.header.height * GLARE_H_FACTOR,
    }
}

pub fn subtitle_rect(cfg: &Config) -> Rect {
    Rect::centered(
        cfg.anchor.offset(0.0, SUBTITLE_Y_OFFSET),
        Size::new(cfg.width, cfg.subtitle.height),
    )
}

pub fn subtitle_text_anchor(cfg: &Config) -> Point {
    subtitle_rect(cfg)
        .center()
        .offset(-TEXT_X_INSET, -BAR_TEXT_Y_OFFSET)
}

pub fn page_counter_anchor(cfg: &Config) -> Point {
    subtitle_rect(cfg)
        .center()
        .offset(PAGE_COUNTER_X_OFFSET, -BAR_TEXT_Y_OFFSET)
}

/// Vertical center of row `index`.
pub fn row_y(cfg: &Config, index: usize) -> f32 {
    let base = cfg.anchor.y + ROW_Y_OFFSET;
    if index == 0 {
        return base;
    }
    base + (base / ROW_STEP_DIVISOR) * index as f32
}

pub fn row_rect(cfg: &Config, index: usize) -> Rect {
    Rect {
        x: cfg.anchor.x,
        y: row_y(cfg, index),
        w: cfg.width,
        h: cfg.button.height,
    }
}

pub fn row_text_anchor(cfg: &Config, index: usize) -> Point {
    Point::new(cfg.anchor.x - TEXT_X_INSET, row_y(cfg, index) - ROW_TEXT_Y_OFFSET)
}

/// Vertical center used by a row's checkbox and list glyphs.
pub fn glyph_row_y(cfg: &Config, index: usize) -> f32 {
    cfg.anchor.y + ROW_Y_OFFSET + GLYPH_ROW_STEP * index as f32
}

pub fn checkbox_rect(cfg: &Config, index: usize) -> Rect {
    Rect::centered(
        Point::new(cfg.anchor.x + CHECKBOX_X_OFFSET, glyph_row_y(cfg, index)),
        cfg.checkbox.size,
    )
}

/// Width measure of a list label: lowercased, first space removed, counted
/// in characters.
pub fn label_length(label: &str) -> usize {
    let lower = label.to_lowercase();
    let chars = lower.chars().count();
    if lower.contains(' ') { chars - 1 } else { chars }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListLayout {
    pub right_arrow: Rect,
    pub left_arrow: Rect,
    /// Absent when the label is empty.
    pub label: Option<Point>,
}

/// Arrows and label of a list row. The left arrow and the label slide left as
/// the selected label gets longer.
pub fn list_layout(cfg: &Config, index: usize, label: &str) -> ListLayout {
    let size = cfg.list.size;
    let right = Point::new(cfg.anchor.x + LIST_RIGHT_ARROW_X_OFFSET, glyph_row_y(cfg, index));
    let half_span = size.w * (label_length(label) as f32 / 2.0);

    ListLayout {
        right_arrow: Rect::centered(right, size),
        left_arrow: Rect::centered(Point::new(right.x - (half_span + LIST_LEFT_ARROW_PAD), right.y), size),
        label: (!label.is_empty()).then(|| {
            Point::new(right.x - (half_span + LIST_LABEL_PAD), right.y - LIST_LABEL_Y_OFFSET)
        }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DescriptionLayout {
    pub mini_bar: Rect,
    pub bar: Rect,
    pub text: Point,
}

/// The description panel hangs below the last row, so it depends on the
/// item count rather than on which row is focused.
pub fn description_layout(cfg: &Config, item_count: usize) -> DescriptionLayout {
    let d = &cfg.description;
    let last = item_count.saturating_sub(1) as f32;
    let mini_y = cfg.anchor.y + ROW_Y_OFFSET + GLYPH_ROW_STEP * last + DESCRIPTION_Y_OFFSET;
    let bar_y = mini_y + (d.height / 2.0 + d.mini_bar_height / 2.0);

    DescriptionLayout {
        mini_bar: Rect {
            x: cfg.anchor.x,
            y: mini_y,
            w: cfg.width,
            h: d.mini_bar_height,
        },
        bar: Rect {
            x: cfg.anchor.x,
            y: bar_y,
            w: cfg.width,
            h: d.height,
        },
        text: Point::new(cfg.anchor.x - TEXT_X_INSET, bar_y - BAR_TEXT_Y_OFFSET),
    }
}
