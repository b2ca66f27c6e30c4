// render/gantt.rs

use crate::sched::timeline::Interval;
use std::fmt::Write;

/// Characters of chart width per simulated time unit.
const UNIT_WIDTH: usize = 4;

/// One-line description of a single block, for stepped playback.
pub fn step_line(iv: &Interval) -> String {
    if iv.is_idle() {
        format!("{:>4} -> {:<4}  (idle)", iv.start, iv.end)
    } else {
        format!("{:>4} -> {:<4}  {}", iv.start, iv.end, iv.name)
    }
}

/// Render a full timeline as a bar chart with a time ruler underneath.
/// Block widths are proportional to duration; idle blocks are filled with
/// dots. Expects gap-free input (`timeline::with_idle_gaps` output).
pub fn render(chart: &[Interval]) -> String {
    if chart.is_empty() {
        return String::new();
    }

    let mut border = String::from("+");
    let mut labels = String::from("|");
    for iv in chart {
        let w = (iv.duration() as usize) * UNIT_WIDTH;
        let fill = if iv.is_idle() { '.' } else { ' ' };
        border.push_str(&"-".repeat(w));
        border.push('+');
        labels.push_str(&center(&iv.name, w, fill));
        labels.push('|');
    }

    // Start time of each block under its left edge, final end time at the
    // right edge.
    let mut ruler = vec![b' '; border.len()];
    let mut offset = 0;
    for iv in chart {
        write_at(&mut ruler, offset, &iv.start.to_string());
        offset += (iv.duration() as usize) * UNIT_WIDTH + 1;
    }
    let last_end = chart[chart.len() - 1].end.to_string();
    let end_pos = border.len().saturating_sub(last_end.len());
    write_at(&mut ruler, end_pos, &last_end);

    let mut out = String::new();
    writeln!(out, "{border}").unwrap();
    writeln!(out, "{labels}").unwrap();
    writeln!(out, "{border}").unwrap();
    writeln!(out, "{}", String::from_utf8_lossy(&ruler).trim_end()).unwrap();
    out
}

fn center(name: &str, width: usize, fill: char) -> String {
    let name: String = name.chars().take(width).collect();
    let pad = width - name.chars().count();
    let left = pad / 2;
    let mut s = String::with_capacity(width);
    for _ in 0..left {
        s.push(fill);
    }
    s.push_str(&name);
    for _ in 0..pad - left {
        s.push(fill);
    }
    s
}

fn write_at(buf: &mut [u8], pos: usize, s: &str) {
    for (i, b) in s.bytes().enumerate() {
        if pos + i < buf.len() {
            buf[pos + i] = b;
        }
    }
}
