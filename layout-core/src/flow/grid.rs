//! Fixed-column-count grid approximation (`spec.md` §4.6): uniform
//! cell sizing, no track templates/spans/named lines (explicit
//! Non-goal — this is a CSS Grid *approximation*, not the full spec).

use layout_style::{BoxModel, Edges, JustifyContent, SelfAlign};

pub struct GridChild {
    pub box_model: BoxModel,
    pub outer_width: f64,
    pub outer_height: f64,
    pub justify_self: SelfAlign,
    pub align_self: Option<SelfAlign>,
}

#[derive(Debug, Copy, Clone, Default)]
pub struct GridResult {
    pub x: f64,
    pub y: f64,
}

/// Returns `(max_cell_width, max_cell_height, rows)`.
pub fn cell_metrics(children: &[GridChild], columns: u32) -> (f64, f64, u32) {
    let max_w = children.iter().map(|c| c.outer_width).fold(0.0_f64, f64::max);
    let max_h = children.iter().map(|c| c.outer_height).fold(0.0_f64, f64::max);
    let columns = columns.max(1);
    let rows = (children.len() as u32 + columns - 1) / columns.max(1);
    (max_w, max_h, rows.max(if children.is_empty() { 0 } else { 1 }))
}

pub fn run_grid_layout(
    content_width: f64,
    padding: &Edges<f64>,
    border: &Edges<f64>,
    gap: f64,
    columns: u32,
    justify_content: JustifyContent,
    children: &[GridChild],
) -> Vec<GridResult> {
    let columns = columns.max(1);
    let (max_cell_width, max_cell_height, _rows) = cell_metrics(children, columns);

    let extra_width =
        (content_width - columns as f64 * max_cell_width - (columns.saturating_sub(1)) as f64 * gap).max(0.0);

    let (start_offset_x, extra_column_gap) = match justify_content {
        JustifyContent::Start => (0.0, 0.0),
        JustifyContent::Center => (extra_width / 2.0, 0.0),
        JustifyContent::End => (extra_width, 0.0),
        JustifyContent::SpaceBetween => {
            let g = if columns > 1 { extra_width / (columns - 1) as f64 } else { 0.0 };
            (0.0, g)
        }
        JustifyContent::SpaceAround => (extra_width / columns as f64 / 2.0, extra_width / columns as f64),
    };

    let origin_x = padding.left + border.left + start_offset_x;
    let origin_y = padding.top + border.top;

    let mut results = Vec::with_capacity(children.len());
    for (i, child) in children.iter().enumerate() {
        let row = i as u32 / columns;
        let col = i as u32 % columns;
        let cell_x = origin_x + col as f64 * (max_cell_width + gap + extra_column_gap);
        let cell_y = origin_y + row as f64 * (max_cell_height + gap);

        let x = match child.justify_self {
            SelfAlign::Start => cell_x + child.box_model.margin.left,
            SelfAlign::Center => cell_x + (max_cell_width - child.outer_width) / 2.0 + child.box_model.margin.left,
            SelfAlign::End => {
                cell_x + max_cell_width - child.outer_width + child.box_model.margin.left
            }
        };

        let align = child.align_self.unwrap_or(SelfAlign::Start);
        let y = match align {
            SelfAlign::Start => cell_y + child.box_model.margin.top,
            SelfAlign::Center => cell_y + (max_cell_height - child.outer_height) / 2.0 + child.box_model.margin.top,
            SelfAlign::End => cell_y + max_cell_height - child.outer_height + child.box_model.margin.top,
        };

        results.push(GridResult { x, y });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(w: f64, h: f64) -> GridChild {
        GridChild {
            box_model: BoxModel::default(),
            outer_width: w,
            outer_height: h,
            justify_self: SelfAlign::Start,
            align_self: None,
        }
    }

    #[test]
    fn places_children_in_row_major_order() {
        let children = vec![child(50.0, 30.0), child(50.0, 30.0), child(50.0, 30.0)];
        let results = run_grid_layout(
            300.0,
            &Edges::default(),
            &Edges::default(),
            10.0,
            2,
            JustifyContent::Start,
            &children,
        );
        assert_eq!(results[0].x, 0.0);
        assert_eq!(results[1].x, 60.0);
        assert_eq!(results[2].y, 40.0);
        assert_eq!(results[2].x, 0.0);
    }
}
