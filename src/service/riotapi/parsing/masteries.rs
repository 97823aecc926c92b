use json::JsonValue;

use crate::model::mastery::{MasteryPage, MasteryTalent};

use super::ParsingError;

pub fn parse_mastery_pages(json: &JsonValue) -> Result<Vec<MasteryPage>, ParsingError> {
    if let JsonValue::Object(obj) = json {
        if let JsonValue::Array(pages_json) = &obj["pages"] {
            let mut pages = Vec::new();

            for page_json in pages_json {
                if let JsonValue::Object(page_obj) = page_json {
                    let is_current = page_obj["current"].as_bool().unwrap_or(false);

                    let talents = match &page_obj["talents"] {
                        JsonValue::Array(talents_json) => talents_json
                            .iter()
                            .map(parse_talent)
                            .collect::<Result<Vec<_>, _>>()?,
                        _ => Vec::new(),
                    };

                    pages.push(MasteryPage { is_current, talents });
                } else {
                    return Err(ParsingError::InvalidType("mastery page entry".into()));
                }
            }

            return Ok(pages);
        }
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_talent(talent_json: &JsonValue) -> Result<MasteryTalent, ParsingError> {
    if let JsonValue::Object(talent_obj) = talent_json {
        let mastery_id = talent_obj["id"]
            .as_i64()
            .ok_or(ParsingError::InvalidType("talent id".into()))?;
        let rank = talent_obj["rank"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("talent rank".into()))?;

        return Ok(MasteryTalent {
            mastery_id: mastery_id.into(),
            rank,
        });
    }

    Err(ParsingError::InvalidType("talent entry".into()))
}
