use ndarray::{s, Axis};

use crate::shared::color::Color;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Paints the half-open span `[x1, x2) × [y1, y2)`, clipped to the frame.
///
/// Only the first three channels are written; an alpha channel, if any, is
/// left as captured.
pub(super) fn fill_span(frame: &mut Frame, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let w = frame.width() as i32;
    let h = frame.height() as i32;
    let (x1, x2) = (x1.clamp(0, w), x2.clamp(0, w));
    let (y1, y2) = (y1.clamp(0, h), y2.clamp(0, h));
    if x2 <= x1 || y2 <= y1 {
        return;
    }

    let mut view = frame.as_ndarray_mut();
    let mut patch = view.slice_mut(s![y1 as usize..y2 as usize, x1 as usize..x2 as usize, ..]);
    let channels = patch.len_of(Axis(2));
    for (c, value) in color.channels().iter().enumerate().take(channels) {
        patch.index_axis_mut(Axis(2), c).fill(*value);
    }
}

pub(super) fn fill_rect(frame: &mut Frame, rect: &Rect, color: Color) {
    fill_span(frame, rect.x(), rect.y(), rect.right(), rect.bottom(), color);
}

/// Draws an unfilled border of `thickness` pixels.
///
/// Each stroke is centred on the edge line: `thickness / 2` pixels fall
/// outside the line and the rest inside, so the right and bottom strokes
/// straddle `x + width` and `y + height`.
pub(super) fn stroke_rect(frame: &mut Frame, rect: &Rect, color: Color, thickness: u32) {
    if thickness == 0 {
        return;
    }
    let t = thickness as i32;
    let lo = t / 2;
    let hi = t - lo;
    let (left, top, right, bottom) = (rect.x(), rect.y(), rect.right(), rect.bottom());
    let before = |v: i32| v.saturating_sub(lo);
    let after = |v: i32| v.saturating_add(hi);
    let (outer_left, outer_right) = (before(left), after(right));
    let (outer_top, outer_bottom) = (before(top), after(bottom));

    fill_span(frame, outer_left, before(top), outer_right, after(top), color);
    fill_span(frame, outer_left, before(bottom), outer_right, after(bottom), color);
    fill_span(frame, before(left), outer_top, after(left), outer_bottom, color);
    fill_span(frame, before(right), outer_top, after(right), outer_bottom, color);
}
