use std::fmt;

use crate::model::{
    ids::MasteryId,
    mastery::{MasteryTree, MasteryTreeCatalog},
    rune::RuneCategory,
};

/// Maps a rune slot index to its display category. Slot indices outside
/// 1..=30 never occur in valid API data and are rejected.
pub fn classify_rune_slot(slot_index: u8) -> Result<RuneCategory, InvalidSlotIndex> {
    match slot_index {
        1..=9 => Ok(RuneCategory::Red),
        10..=18 => Ok(RuneCategory::Yellow),
        19..=27 => Ok(RuneCategory::Blue),
        28..=30 => Ok(RuneCategory::Quint),
        _ => Err(InvalidSlotIndex(slot_index)),
    }
}

/// Resolves the tree a mastery id belongs to. `None` means the id is in no
/// known tree and must not be counted.
pub fn classify_mastery(id: MasteryId, catalog: &MasteryTreeCatalog) -> Option<MasteryTree> {
    MasteryTree::ALL
        .into_iter()
        .find(|tree| catalog.tree_ids(*tree).contains(&id))
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidSlotIndex(pub u8);

impl fmt::Display for InvalidSlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid rune slot index: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slot_ranges_map_to_categories() {
        assert_eq!(classify_rune_slot(5), Ok(RuneCategory::Red));
        assert_eq!(classify_rune_slot(14), Ok(RuneCategory::Yellow));
        assert_eq!(classify_rune_slot(23), Ok(RuneCategory::Blue));
        assert_eq!(classify_rune_slot(29), Ok(RuneCategory::Quint));
    }

    #[test]
    fn slot_range_boundaries() {
        assert_eq!(classify_rune_slot(1), Ok(RuneCategory::Red));
        assert_eq!(classify_rune_slot(9), Ok(RuneCategory::Red));
        assert_eq!(classify_rune_slot(10), Ok(RuneCategory::Yellow));
        assert_eq!(classify_rune_slot(18), Ok(RuneCategory::Yellow));
        assert_eq!(classify_rune_slot(19), Ok(RuneCategory::Blue));
        assert_eq!(classify_rune_slot(27), Ok(RuneCategory::Blue));
        assert_eq!(classify_rune_slot(28), Ok(RuneCategory::Quint));
        assert_eq!(classify_rune_slot(30), Ok(RuneCategory::Quint));
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        assert_eq!(classify_rune_slot(0), Err(InvalidSlotIndex(0)));
        assert_eq!(classify_rune_slot(31), Err(InvalidSlotIndex(31)));
    }

    #[test]
    fn mastery_resolves_to_its_tree() {
        let catalog = MasteryTreeCatalog::new(
            HashSet::from([4111.into(), 4112.into()]),
            HashSet::from([4211.into()]),
            HashSet::from([4311.into()]),
        );

        assert_eq!(classify_mastery(4112.into(), &catalog), Some(MasteryTree::Offense));
        assert_eq!(classify_mastery(4211.into(), &catalog), Some(MasteryTree::Defense));
        assert_eq!(classify_mastery(4311.into(), &catalog), Some(MasteryTree::Utility));
        assert_eq!(classify_mastery(9999.into(), &catalog), None);
    }
}
