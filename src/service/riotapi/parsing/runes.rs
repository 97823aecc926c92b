use json::JsonValue;

use crate::model::rune::{RunePage, RuneSlot};

use super::ParsingError;

pub fn parse_rune_pages(json: &JsonValue) -> Result<Vec<RunePage>, ParsingError> {
    if let JsonValue::Object(obj) = json {
        if let JsonValue::Array(pages_json) = &obj["pages"] {
            let mut pages = Vec::new();

            for page_json in pages_json {
                if let JsonValue::Object(page_obj) = page_json {
                    let is_current = page_obj["current"].as_bool().unwrap_or(false);

                    // Unused pages come without a slots field at all.
                    let slots = match &page_obj["slots"] {
                        JsonValue::Array(slots_json) => slots_json
                            .iter()
                            .map(parse_slot)
                            .collect::<Result<Vec<_>, _>>()?,
                        _ => Vec::new(),
                    };

                    pages.push(RunePage { is_current, slots });
                } else {
                    return Err(ParsingError::InvalidType("rune page entry".into()));
                }
            }

            return Ok(pages);
        }
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_slot(slot_json: &JsonValue) -> Result<RuneSlot, ParsingError> {
    if let JsonValue::Object(slot_obj) = slot_json {
        let slot_index = slot_obj["runeSlotId"]
            .as_u8()
            .ok_or(ParsingError::InvalidType("runeSlotId".into()))?;

        // v1.2 embeds the full rune object, v1.3 only carries the id.
        let (rune_id, rune_name) = if let JsonValue::Object(rune_obj) = &slot_obj["rune"] {
            let id = rune_obj["id"].as_i64().ok_or(ParsingError::InvalidType("rune id".into()))?;
            (id, rune_obj["name"].as_str().map(str::to_string))
        } else {
            let id = slot_obj["runeId"]
                .as_i64()
                .ok_or(ParsingError::InvalidType("runeId".into()))?;
            (id, None)
        };

        return Ok(RuneSlot {
            slot_index,
            rune_id: rune_id.into(),
            rune_name,
        });
    }

    Err(ParsingError::InvalidType("rune slot entry".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v12_pages_with_embedded_rune_names() {
        let json = json::parse(
            r#"{
                "summonerId": 20132258,
                "pages": [
                    {"id": 1, "name": "AD page", "current": true, "slots": [
                        {"runeSlotId": 1, "rune": {"id": 5245, "name": "Greater Mark of Attack Damage", "tier": 3}},
                        {"runeSlotId": 10, "rune": {"id": 5317, "name": "Greater Seal of Armor", "tier": 3}}
                    ]},
                    {"id": 2, "name": "Empty page", "current": false}
                ]
            }"#,
        )
        .unwrap();

        let pages = parse_rune_pages(&json).unwrap();
        assert_eq!(pages.len(), 2);

        assert!(pages[0].is_current);
        assert_eq!(pages[0].slots.len(), 2);
        assert_eq!(pages[0].slots[0].slot_index, 1);
        assert_eq!(pages[0].slots[0].rune_id, 5245.into());
        assert_eq!(
            pages[0].slots[0].rune_name.as_deref(),
            Some("Greater Mark of Attack Damage")
        );

        assert!(!pages[1].is_current);
        assert!(pages[1].slots.is_empty());
    }

    #[test]
    fn parses_v13_slots_without_names() {
        let json = json::parse(
            r#"{"pages": [{"current": true, "slots": [{"runeSlotId": 19, "runeId": 5289}]}]}"#,
        )
        .unwrap();

        let pages = parse_rune_pages(&json).unwrap();
        assert_eq!(pages[0].slots[0].rune_id, 5289.into());
        assert!(pages[0].slots[0].rune_name.is_none());
    }

    #[test]
    fn rejects_payload_without_pages() {
        let json = json::parse(r#"{"summonerId": 1}"#).unwrap();
        assert!(parse_rune_pages(&json).is_err());
    }
}
