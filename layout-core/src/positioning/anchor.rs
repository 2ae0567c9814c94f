//! Anchor positioning for tooltips/menus (`spec.md` §4.10): pins one
//! of nine named points of the element to an anchor point on a named
//! target, plus a user offset.

use layout_style::AnchorPoint;

/// Computes the `(dx, dy)` delta to add to the self node's current
/// `(x, y)` so that its `self_anchor` point co-locates with the
/// target's `anchor_point` plus the user offset. Returns `None` when
/// the target is absent (no-op per spec.md §7).
#[allow(clippy::too_many_arguments)]
pub fn resolve_anchor_delta(
    target: Option<(f64, f64, f64, f64)>,
    anchor_point: AnchorPoint,
    self_rect: (f64, f64, f64, f64),
    self_anchor: AnchorPoint,
    offset_x: f64,
    offset_y: f64,
) -> Option<(f64, f64)> {
    let (tx, ty, tw, th) = target?;
    let (t_off_x, t_off_y) = anchor_point.offset(tw, th);
    let target_point = (tx + t_off_x, ty + t_off_y);

    let (sx, sy, sw, sh) = self_rect;
    let (s_off_x, s_off_y) = self_anchor.offset(sw, sh);
    let self_point = (sx + s_off_x, sy + s_off_y);

    Some((
        (target_point.0 - self_point.0) + offset_x,
        (target_point.1 - self_point.1) + offset_y,
    ))
}
