use json::JsonValue;

use super::ParsingError;

/// Parses a static-data `rune/{id}` payload down to the rune name.
pub fn parse_rune_name(json: &JsonValue) -> Result<String, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
        return Ok(name.to_string());
    }

    Err(ParsingError::InvalidType("root".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rune_name() {
        let json =
            json::parse(r#"{"id": 5289, "name": "Greater Glyph of Magic Resist", "tier": 3}"#).unwrap();
        assert_eq!(parse_rune_name(&json).unwrap(), "Greater Glyph of Magic Resist");
    }

    #[test]
    fn rejects_payload_without_name() {
        let json = json::parse(r#"{"id": 5289}"#).unwrap();
        assert!(parse_rune_name(&json).is_err());
    }
}
