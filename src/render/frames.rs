// render/frames.rs

use crate::paging::engine::StepRecord;
use std::fmt::Write;

/// One trace row: the reference, its outcome, and the frame cells. The cell
/// holding the referenced page is starred; unfilled slots render empty.
pub fn step_row(step: &StepRecord, capacity: usize) -> String {
    let mut row = format!(
        "page {:>3} -> {}  ",
        step.page,
        if step.hit { "hit  " } else { "fault" }
    );
    for &f in &step.frames {
        if f == step.page {
            write!(row, "[{f:>3}*]").unwrap();
        } else {
            write!(row, "[{f:>3} ]").unwrap();
        }
    }
    for _ in step.frames.len()..capacity {
        row.push_str("[    ]");
    }
    row
}

/// Full trace, one row per reference.
pub fn render(steps: &[StepRecord], capacity: usize) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&step_row(step, capacity));
        out.push('\n');
    }
    out
}
