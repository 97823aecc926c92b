use super::rune::RuneCategory;

/// Key a summary line is addressable by at the output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKey {
    Category(RuneCategory),
    Masteries,
}

impl LineKey {
    pub const ALL: [LineKey; 5] = [
        LineKey::Category(RuneCategory::Red),
        LineKey::Category(RuneCategory::Yellow),
        LineKey::Category(RuneCategory::Blue),
        LineKey::Category(RuneCategory::Quint),
        LineKey::Masteries,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            LineKey::Category(RuneCategory::Red) => "red.txt",
            LineKey::Category(RuneCategory::Yellow) => "yellow.txt",
            LineKey::Category(RuneCategory::Blue) => "blue.txt",
            LineKey::Category(RuneCategory::Quint) => "quint.txt",
            LineKey::Masteries => "masteries.txt",
        }
    }
}

/// The finished build summary: one right-justified line per non-empty rune
/// category plus the mastery line, in fixed display order. The only data
/// handed to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub lines: Vec<(LineKey, String)>,
}

impl BuildSummary {
    pub fn line(&self, key: LineKey) -> Option<&str> {
        self.lines
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, line)| line.as_str())
    }
}
