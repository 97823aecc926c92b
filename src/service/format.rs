use crate::model::{
    mastery::MasteryCounts,
    rune::{RuneAggregates, RuneCategory},
    summary::{BuildSummary, LineKey},
};

/// Turns aggregated counts into the final display lines.
///
/// Category order is fixed (Red, Yellow, Blue, Quint, masteries). Empty
/// categories emit no line. A category with a single distinct rune shows the
/// name without a count, even when stacked across the full row. All lines
/// are left-padded to the longest line for right alignment in monospace
/// rendering.
pub fn format_build(aggregates: &RuneAggregates, counts: &MasteryCounts) -> BuildSummary {
    let mut lines = Vec::new();

    for category in RuneCategory::DISPLAY_ORDER {
        let entries = aggregates.entries(category);
        let line = match entries {
            [] => continue,
            [single] => format!("{} {}", single.display_name, category.plural()),
            many => {
                let joined = many
                    .iter()
                    .map(|entry| format!("{}x {}", entry.count, entry.display_name))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} {}", joined, category.plural())
            }
        };
        lines.push((LineKey::Category(category), line));
    }

    lines.push((
        LineKey::Masteries,
        format!("{}/{}/{}", counts.offense, counts.defense, counts.utility),
    ));

    justify_right(&mut lines);
    BuildSummary { lines }
}

/// Left-pads every line with spaces to the width of the longest one. Line
/// order is untouched.
fn justify_right(lines: &mut [(LineKey, String)]) {
    let width = lines.iter().map(|(_, line)| line.len()).max().unwrap_or(0);
    for (_, line) in lines.iter_mut() {
        let padded = format!("{:>width$}", line);
        *line = padded;
    }
}
