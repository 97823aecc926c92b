use json::JsonValue;

use crate::model::summoner::{Region, Summoner};

use super::ParsingError;

pub fn parse_summoner(json: &JsonValue, region: Region) -> Result<Summoner, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let id = obj["id"].as_u64().ok_or(ParsingError::InvalidType("id".into()))?;
        let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;

        return Ok(Summoner {
            id: id.into(),
            name: name.to_string(),
            region,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summoner_payload() {
        let json = json::parse(r#"{"id": 20132258, "name": "Froggen", "summonerLevel": 30}"#).unwrap();
        let summoner = parse_summoner(&json, Region::Euw).unwrap();

        assert_eq!(summoner.name, "Froggen");
        assert_eq!(summoner.id.to_string(), "20132258");
        assert_eq!(summoner.region, Region::Euw);
    }

    #[test]
    fn rejects_non_object_payload() {
        let json = json::parse(r#"[1, 2, 3]"#).unwrap();
        assert!(parse_summoner(&json, Region::Na).is_err());
    }
}
