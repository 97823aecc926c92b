use super::ids::RuneId;

/// One saved rune loadout; only the page flagged `current` applies to the
/// active match.
#[derive(Debug, Clone)]
pub struct RunePage {
    pub is_current: bool,
    pub slots: Vec<RuneSlot>,
}

/// A filled slot on a rune page. The v1.2 payload embeds the rune name; the
/// v1.3 payload only carries the id, in which case the name is resolved via
/// static data before aggregation.
#[derive(Debug, Clone)]
pub struct RuneSlot {
    pub slot_index: u8,
    pub rune_id: RuneId,
    pub rune_name: Option<String>,
}

/// Display category of a rune, determined by its slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneCategory {
    Red,
    Yellow,
    Blue,
    Quint,
}

impl RuneCategory {
    pub const DISPLAY_ORDER: [RuneCategory; 4] =
        [RuneCategory::Red, RuneCategory::Yellow, RuneCategory::Blue, RuneCategory::Quint];

    pub fn plural(&self) -> &'static str {
        match self {
            RuneCategory::Red => "Reds",
            RuneCategory::Yellow => "Yellows",
            RuneCategory::Blue => "Blues",
            RuneCategory::Quint => "Quints",
        }
    }
}

/// Count of one distinct rune within its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneAggregate {
    pub rune_id: RuneId,
    pub display_name: String,
    pub count: u32,
}

/// Per-category rune counts for the current page, in first-seen order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RuneAggregates {
    red: Vec<RuneAggregate>,
    yellow: Vec<RuneAggregate>,
    blue: Vec<RuneAggregate>,
    quint: Vec<RuneAggregate>,
}

impl RuneAggregates {
    pub fn entries(&self, category: RuneCategory) -> &[RuneAggregate] {
        match category {
            RuneCategory::Red => &self.red,
            RuneCategory::Yellow => &self.yellow,
            RuneCategory::Blue => &self.blue,
            RuneCategory::Quint => &self.quint,
        }
    }

    pub fn push(&mut self, category: RuneCategory, aggregate: RuneAggregate) {
        let bucket = match category {
            RuneCategory::Red => &mut self.red,
            RuneCategory::Yellow => &mut self.yellow,
            RuneCategory::Blue => &mut self.blue,
            RuneCategory::Quint => &mut self.quint,
        };
        bucket.push(aggregate);
    }

    /// Looks a rune id up across all categories. A rune id is counted in the
    /// category of its first-seen slot, so the search must not be limited to
    /// the category of the slot at hand.
    pub fn find_mut(&mut self, id: RuneId) -> Option<&mut RuneAggregate> {
        self.red
            .iter_mut()
            .chain(self.yellow.iter_mut())
            .chain(self.blue.iter_mut())
            .chain(self.quint.iter_mut())
            .find(|aggregate| aggregate.rune_id == id)
    }
}
