use std::collections::HashSet;

use json::JsonValue;

use crate::model::{ids::MasteryId, mastery::MasteryTreeCatalog};

use super::ParsingError;

/// Parses the static-data mastery tree payload
/// (`mastery?masteryListData=tree`) into the catalog of ids per tree.
pub fn parse_mastery_tree(json: &JsonValue) -> Result<MasteryTreeCatalog, ParsingError> {
    if let JsonValue::Object(obj) = json {
        if let JsonValue::Object(tree_obj) = &obj["tree"] {
            let offense = parse_tree_ids(&tree_obj["Offense"])?;
            let defense = parse_tree_ids(&tree_obj["Defense"])?;
            let utility = parse_tree_ids(&tree_obj["Utility"])?;

            return Ok(MasteryTreeCatalog::new(offense, defense, utility));
        }
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_tree_ids(rows_json: &JsonValue) -> Result<HashSet<MasteryId>, ParsingError> {
    let JsonValue::Array(rows) = rows_json else {
        return Err(ParsingError::InvalidType("tree rows".into()));
    };

    let mut ids = HashSet::new();
    for row_json in rows {
        if let JsonValue::Object(row_obj) = row_json {
            let JsonValue::Array(items) = &row_obj["masteryTreeItems"] else {
                return Err(ParsingError::InvalidType("masteryTreeItems".into()));
            };

            for item_json in items {
                // Gaps in a tree row are encoded as nulls.
                if item_json.is_null() {
                    continue;
                }
                if let JsonValue::Object(item_obj) = item_json {
                    let id = item_obj["masteryId"]
                        .as_i64()
                        .ok_or(ParsingError::InvalidType("masteryId".into()))?;
                    ids.insert(id.into());
                } else {
                    return Err(ParsingError::InvalidType("tree item entry".into()));
                }
            }
        } else {
            return Err(ParsingError::InvalidType("tree row entry".into()));
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use crate::model::mastery::MasteryTree;

    use super::*;

    #[test]
    fn parses_tree_rows_and_skips_null_gaps() {
        let json = json::parse(
            r#"{
                "type": "mastery",
                "tree": {
                    "Offense": [
                        {"masteryTreeItems": [{"masteryId": 4111}, null, {"masteryId": 4113}]}
                    ],
                    "Defense": [
                        {"masteryTreeItems": [{"masteryId": 4211}]}
                    ],
                    "Utility": [
                        {"masteryTreeItems": [null]}
                    ]
                }
            }"#,
        )
        .unwrap();

        let catalog = parse_mastery_tree(&json).unwrap();
        assert_eq!(catalog.tree_ids(MasteryTree::Offense).len(), 2);
        assert!(catalog.tree_ids(MasteryTree::Offense).contains(&4113.into()));
        assert_eq!(catalog.tree_ids(MasteryTree::Defense).len(), 1);
        assert!(catalog.tree_ids(MasteryTree::Utility).is_empty());
    }

    #[test]
    fn rejects_payload_without_tree() {
        let json = json::parse(r#"{"type": "mastery"}"#).unwrap();
        assert!(parse_mastery_tree(&json).is_err());
    }
}
