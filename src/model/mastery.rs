use std::collections::HashSet;

use super::ids::MasteryId;

#[derive(Debug, Clone)]
pub struct MasteryPage {
    pub is_current: bool,
    pub talents: Vec<MasteryTalent>,
}

#[derive(Debug, Clone)]
pub struct MasteryTalent {
    pub mastery_id: MasteryId,
    pub rank: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryTree {
    Offense,
    Defense,
    Utility,
}

impl MasteryTree {
    pub const ALL: [MasteryTree; 3] = [MasteryTree::Offense, MasteryTree::Defense, MasteryTree::Utility];

    pub fn name(&self) -> &'static str {
        match self {
            MasteryTree::Offense => "Offense",
            MasteryTree::Defense => "Defense",
            MasteryTree::Utility => "Utility",
        }
    }
}

/// Static mapping from mastery tree to the ids it contains, fetched from the
/// static-data API once per run.
#[derive(Debug, Clone, Default)]
pub struct MasteryTreeCatalog {
    offense: HashSet<MasteryId>,
    defense: HashSet<MasteryId>,
    utility: HashSet<MasteryId>,
}

impl MasteryTreeCatalog {
    pub fn new(offense: HashSet<MasteryId>, defense: HashSet<MasteryId>, utility: HashSet<MasteryId>) -> Self {
        Self {
            offense,
            defense,
            utility,
        }
    }

    pub fn tree_ids(&self, tree: MasteryTree) -> &HashSet<MasteryId> {
        match tree {
            MasteryTree::Offense => &self.offense,
            MasteryTree::Defense => &self.defense,
            MasteryTree::Utility => &self.utility,
        }
    }
}

/// Summed ranks per tree on the current mastery page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasteryCounts {
    pub offense: u32,
    pub defense: u32,
    pub utility: u32,
}

impl MasteryCounts {
    pub fn add(&mut self, tree: MasteryTree, rank: u32) {
        match tree {
            MasteryTree::Offense => self.offense += rank,
            MasteryTree::Defense => self.defense += rank,
            MasteryTree::Utility => self.utility += rank,
        }
    }
}
