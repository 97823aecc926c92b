use crate::model::{
    mastery::{MasteryCounts, MasteryPage, MasteryTreeCatalog},
    rune::{RuneAggregate, RuneAggregates, RunePage},
};

use super::{
    abbreviate::abbreviate,
    classify::{classify_mastery, classify_rune_slot, InvalidSlotIndex},
};

/// Groups and counts the runes on the current page by display category.
///
/// No current page (or no pages at all) yields empty aggregates; that is the
/// "no active loadout" case, not an error. A rune id appearing in several
/// slots is counted once, in the category of its first-seen slot, even when a
/// later slot would classify differently.
pub fn aggregate_runes(pages: &[RunePage]) -> Result<RuneAggregates, InvalidSlotIndex> {
    let mut aggregates = RuneAggregates::default();

    let Some(page) = pages.iter().find(|page| page.is_current) else {
        return Ok(aggregates);
    };

    for slot in &page.slots {
        let category = classify_rune_slot(slot.slot_index)?;

        if let Some(existing) = aggregates.find_mut(slot.rune_id) {
            existing.count += 1;
            continue;
        }

        // Names are resolved by the data manager before aggregation; the raw
        // id is a last resort for payloads it could not resolve.
        let display_name = match &slot.rune_name {
            Some(name) => abbreviate(name),
            None => slot.rune_id.to_string(),
        };
        aggregates.push(
            category,
            RuneAggregate {
                rune_id: slot.rune_id,
                display_name,
                count: 1,
            },
        );
    }

    Ok(aggregates)
}

/// Sums talent ranks per mastery tree on the current page. Ids in no known
/// tree are skipped; no current page yields all-zero counts.
pub fn aggregate_masteries(pages: &[MasteryPage], catalog: &MasteryTreeCatalog) -> MasteryCounts {
    let mut counts = MasteryCounts::default();

    let Some(page) = pages.iter().find(|page| page.is_current) else {
        return counts;
    };

    for talent in &page.talents {
        if let Some(tree) = classify_mastery(talent.mastery_id, catalog) {
            counts.add(tree, talent.rank);
        }
    }

    counts
}
