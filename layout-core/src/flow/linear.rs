//! Vertical and horizontal flow layout (`spec.md` §4.5). Both axes
//! share one implementation; "main"/"cross" swap between `(y, height)`
//! and `(x, width)` depending on `Axis`, matching the teacher's own
//! main/cross abstraction (`azul-layout::new::geometry::RectSize::main/cross`).

use layout_style::{BoxModel, Edges, JustifyContent, SelfAlign};

use super::Axis;

/// One in-flow child's inputs to the linear layouter.
pub struct LinearChild {
    pub box_model: BoxModel,
    /// Current main-axis content size (before this layouter runs);
    /// used as the flex basis when no explicit `flexBasis` is given.
    pub current_main: f64,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub flex_basis: Option<f64>,
    pub min_main: Option<f64>,
    pub max_main: Option<f64>,
    pub align_self: Option<SelfAlign>,
    /// Current cross-axis outer size, used for alignment (this
    /// layouter never resizes the cross axis).
    pub cross_size: f64,
}

/// The resolved main-axis size and the `(main, cross)` position
/// (relative to the container's world origin) for one child.
#[derive(Debug, Copy, Clone, Default)]
pub struct LinearResult {
    pub main_size: f64,
    pub main_pos: f64,
    pub cross_pos: f64,
}

struct FlexItem {
    index: usize,
    base_size: f64,
    target: f64,
    grow: f64,
    shrink: f64,
    min: Option<f64>,
    max: Option<f64>,
    margin_main: f64,
}

/// Runs the flow algorithm and returns one `LinearResult` per input
/// child, in input order.
pub fn run_linear_layout(
    axis: Axis,
    content_main: f64,
    content_cross: f64,
    padding: &Edges<f64>,
    border: &Edges<f64>,
    gap: f64,
    align_items: SelfAlign,
    justify_content: JustifyContent,
    children: &[LinearChild],
    max_grow_iterations: u32,
) -> Vec<LinearResult> {
    let n = children.len();
    let mut main_sizes = vec![0.0_f64; n];
    let mut is_flex = vec![false; n];
    let mut total_fixed = 0.0_f64;
    let mut flex_items: Vec<FlexItem> = Vec::new();

    for (i, child) in children.iter().enumerate() {
        let margin_main = margin_main_sum(axis, &child.box_model);
        if child.flex_grow > 0.0 || child.flex_shrink > 0.0 {
            is_flex[i] = true;
            let base_size = child.flex_basis.unwrap_or(child.current_main);
            flex_items.push(FlexItem {
                index: i,
                base_size,
                target: base_size,
                grow: child.flex_grow,
                shrink: child.flex_shrink,
                min: child.min_main,
                max: child.max_main,
                margin_main,
            });
        } else {
            main_sizes[i] = child.current_main;
            total_fixed += child.current_main + margin_main;
        }
    }

    let total_gaps = gap * (n.saturating_sub(1)) as f64;
    let flex_sum: f64 = flex_items.iter().map(|f| f.base_size + f.margin_main).sum();
    let available = content_main - total_fixed - total_gaps - flex_sum;

    if available > 0.0 && flex_items.iter().any(|f| f.grow > 0.0) {
        grow_flex_items(&mut flex_items, available, max_grow_iterations);
    } else if available < 0.0 && flex_items.iter().any(|f| f.shrink > 0.0) {
        shrink_flex_items(&mut flex_items, available);
    }

    for item in &flex_items {
        main_sizes[item.index] = item.target.max(0.0);
    }

    let actual_total: f64 = children
        .iter()
        .enumerate()
        .map(|(i, c)| main_sizes[i] + margin_main_sum(axis, &c.box_model))
        .sum::<f64>()
        + total_gaps;

    let remaining = (content_main - actual_total).max(0.0);
    let (start_offset, space_between, space_around) = match justify_content {
        JustifyContent::Start => (0.0, 0.0, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0, 0.0),
        JustifyContent::End => (remaining, 0.0, 0.0),
        JustifyContent::SpaceBetween => {
            let gap_extra = if n > 1 { remaining / (n - 1) as f64 } else { 0.0 };
            (0.0, gap_extra, 0.0)
        }
        JustifyContent::SpaceAround => {
            let around = if n > 0 { remaining / n as f64 } else { 0.0 };
            (0.0, 0.0, around)
        }
    };

    let (pad_start, pad_end, border_start, border_end) = axis_start_end(axis, padding, border);
    let mut main_cursor = pad_start + border_start + start_offset;
    if matches!(justify_content, JustifyContent::SpaceAround) {
        main_cursor += space_around / 2.0;
    }

    let mut results = Vec::with_capacity(n);
    for (i, child) in children.iter().enumerate() {
        let (margin_lead, margin_trail) = margin_lead_trail(axis, &child.box_model);
        main_cursor += margin_lead;

        let align = child.align_self.unwrap_or(align_items);
        let cross_lead = cross_lead_margin(axis, &child.box_model);
        let cross_pos = match align {
            SelfAlign::Start => {
                let (pad_c_start, border_c_start) = cross_start(axis, padding, border);
                pad_c_start + border_c_start + cross_lead
            }
            SelfAlign::Center => {
                let (pad_c_start, border_c_start) = cross_start(axis, padding, border);
                pad_c_start + border_c_start + (content_cross - child.cross_size) / 2.0 + cross_lead
            }
            SelfAlign::End => {
                let (pad_c_start, border_c_start) = cross_start(axis, padding, border);
                let cross_margin_trail = cross_trail_margin(axis, &child.box_model);
                pad_c_start + border_c_start + content_cross - child.cross_size - cross_margin_trail
            }
        };

        results.push(LinearResult {
            main_size: main_sizes[i],
            main_pos: main_cursor,
            cross_pos,
        });

        main_cursor += main_sizes[i] + margin_trail;
        if i + 1 < n {
            main_cursor += gap;
            match justify_content {
                JustifyContent::SpaceBetween => main_cursor += space_between,
                JustifyContent::SpaceAround => main_cursor += space_around,
                _ => {}
            }
        }
    }

    results
}

fn grow_flex_items(items: &mut [FlexItem], available: f64, max_iterations: u32) {
    let mut active: Vec<usize> = (0..items.len()).filter(|&i| items[i].grow > 0.0).collect();
    let mut remaining_space = available;
    let mut remaining_grow: f64 = active.iter().map(|&i| items[i].grow).sum();

    let mut iterations = 0;
    loop {
        if remaining_space <= 0.1 || remaining_grow <= 0.0 || active.is_empty() {
            break;
        }
        iterations += 1;
        if iterations > max_iterations {
            log::warn!(
                target: "layout_core::flow::linear",
                "flex grow distribution hit the {} iteration cap with an active set of {}",
                max_iterations,
                active.len()
            );
            break;
        }
        let mut applied_this_pass = 0.0_f64;
        let mut still_active = Vec::new();

        for &i in &active {
            let delta = (items[i].grow / remaining_grow) * remaining_space;
            let tentative = items[i].target + delta;
            let clamped = crate::percent::clamp_opt(tentative, items[i].min, items[i].max);

            let applied = clamped - items[i].target;
            items[i].target = clamped;
            applied_this_pass += applied;
            remaining_space -= applied;

            if (clamped - tentative).abs() > f64::EPSILON {
                remaining_grow -= items[i].grow;
            } else {
                still_active.push(i);
            }
        }

        active = still_active;

        if applied_this_pass < 0.01 {
            break;
        }
    }
}

fn shrink_flex_items(items: &mut [FlexItem], available: f64) {
    let denom: f64 = items
        .iter()
        .filter(|i| i.shrink > 0.0)
        .map(|i| i.shrink * i.base_size)
        .sum();
    if denom <= 0.0 {
        return;
    }
    let deficit = available.abs();
    for item in items.iter_mut() {
        if item.shrink <= 0.0 {
            continue;
        }
        let reduction = deficit * (item.shrink * item.base_size) / denom;
        let mut target = (item.base_size - reduction).max(0.0);
        if let Some(min) = item.min {
            target = target.max(min);
        }
        item.target = target;
    }
}

fn margin_main_sum(axis: Axis, model: &BoxModel) -> f64 {
    match axis {
        Axis::Vertical => model.margin.vertical(),
        Axis::Horizontal => model.margin.horizontal(),
    }
}

fn margin_lead_trail(axis: Axis, model: &BoxModel) -> (f64, f64) {
    match axis {
        Axis::Vertical => (model.margin.top, model.margin.bottom),
        Axis::Horizontal => (model.margin.left, model.margin.right),
    }
}

fn cross_lead_margin(axis: Axis, model: &BoxModel) -> f64 {
    match axis {
        Axis::Vertical => model.margin.left,
        Axis::Horizontal => model.margin.top,
    }
}

fn cross_trail_margin(axis: Axis, model: &BoxModel) -> f64 {
    match axis {
        Axis::Vertical => model.margin.right,
        Axis::Horizontal => model.margin.bottom,
    }
}

fn axis_start_end(axis: Axis, padding: &Edges<f64>, border: &Edges<f64>) -> (f64, f64, f64, f64) {
    match axis {
        Axis::Vertical => (padding.top, padding.bottom, border.top, border.bottom),
        Axis::Horizontal => (padding.left, padding.right, border.left, border.right),
    }
}

fn cross_start(axis: Axis, padding: &Edges<f64>, border: &Edges<f64>) -> (f64, f64) {
    match axis {
        Axis::Vertical => (padding.left, border.left),
        Axis::Horizontal => (padding.top, border.top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(main: f64, grow: f64, shrink: f64, basis: Option<f64>, min: Option<f64>) -> LinearChild {
        LinearChild {
            box_model: BoxModel::default(),
            current_main: main,
            flex_grow: grow,
            flex_shrink: shrink,
            flex_basis: basis,
            min_main: min,
            max_main: None,
            align_self: None,
            cross_size: 0.0,
        }
    }

    #[test]
    fn flex_grow_distributes_proportionally() {
        let children = vec![
            child(0.0, 1.0, 1.0, Some(0.0), None),
            child(0.0, 2.0, 1.0, Some(0.0), None),
        ];
        let results = run_linear_layout(
            Axis::Horizontal,
            500.0,
            0.0,
            &Edges::default(),
            &Edges::default(),
            0.0,
            SelfAlign::Start,
            JustifyContent::Start,
            &children,
            64,
        );
        assert!((results[0].main_size - 166.67).abs() < 0.1);
        assert!((results[1].main_size - 333.33).abs() < 0.1);
        assert!((results[1].main_pos - 166.67).abs() < 0.1);
    }

    #[test]
    fn flex_shrink_with_min_clamp() {
        let children = vec![
            child(100.0, 0.0, 1.0, None, Some(40.0)),
            child(100.0, 0.0, 1.0, None, Some(40.0)),
            child(100.0, 0.0, 1.0, None, Some(40.0)),
        ];
        let results = run_linear_layout(
            Axis::Horizontal,
            200.0,
            0.0,
            &Edges::default(),
            &Edges::default(),
            0.0,
            SelfAlign::Start,
            JustifyContent::Start,
            &children,
            64,
        );
        for r in &results {
            assert!((r.main_size - 66.7).abs() < 0.2);
        }
    }

    #[test]
    fn space_between_anchors_first_and_last() {
        let children = vec![child(50.0, 0.0, 0.0, None, None), child(50.0, 0.0, 0.0, None, None)];
        let results = run_linear_layout(
            Axis::Horizontal,
            300.0,
            0.0,
            &Edges::default(),
            &Edges::default(),
            0.0,
            SelfAlign::Start,
            JustifyContent::SpaceBetween,
            &children,
            64,
        );
        assert!((results[0].main_pos - 0.0).abs() < 0.01);
        let last_trailing_edge = results[1].main_pos + results[1].main_size;
        assert!((last_trailing_edge - 300.0).abs() < 0.01);
    }
}
