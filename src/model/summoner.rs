use std::{fmt::Display, str::FromStr};

use super::ids::SummonerId;

#[derive(Debug, Clone)]
pub struct Summoner {
    pub id: SummonerId,
    pub name: String,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Euw,
    Eune,
    Na,
    Tr,
    Ru,
    Oce,
    Las,
    Lan,
    Br,
}

impl Region {
    /// Lowercase form used in stats and static-data API paths.
    pub fn api_name(&self) -> &'static str {
        match self {
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Na => "na",
            Region::Tr => "tr",
            Region::Ru => "ru",
            Region::Oce => "oce",
            Region::Las => "las",
            Region::Lan => "lan",
            Region::Br => "br",
        }
    }

    /// Platform identifier used by the spectator endpoint.
    pub fn platform_id(&self) -> &'static str {
        match self {
            Region::Euw => "EUW1",
            Region::Eune => "EUN1",
            Region::Na => "NA1",
            Region::Tr => "TR1",
            Region::Ru => "RU",
            Region::Oce => "OC1",
            Region::Las => "LA2",
            Region::Lan => "LA1",
            Region::Br => "BR1",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_name().to_uppercase())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euw" => Ok(Region::Euw),
            "eune" => Ok(Region::Eune),
            "na" => Ok(Region::Na),
            "tr" => Ok(Region::Tr),
            "ru" => Ok(Region::Ru),
            "oce" => Ok(Region::Oce),
            "las" => Ok(Region::Las),
            "lan" => Ok(Region::Lan),
            "br" => Ok(Region::Br),
            other => Err(format!(
                "Unknown region '{}'. Valid values are: EUW, EUNE, NA, TR, RU, OCE, LAS, LAN, BR",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("EUW".parse::<Region>().unwrap(), Region::Euw);
        assert_eq!("oce".parse::<Region>().unwrap(), Region::Oce);
        assert!("moon".parse::<Region>().is_err());
    }

    #[test]
    fn platform_ids_match_spectator_format() {
        assert_eq!(Region::Euw.platform_id(), "EUW1");
        assert_eq!(Region::Las.platform_id(), "LA2");
    }
}
