use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    fmt,
    rc::Rc,
};

use json::JsonValue;
use reqwest::{blocking::Client, StatusCode};

use crate::model::{
    ids::{RuneId, SummonerId},
    summoner::Region,
};

/// Blocking client for the stats, static-data and spectator APIs. Responses
/// are cached per request type; a run never issues the same request twice.
pub struct ApiClient {
    client: Client,
    api_key: String,
    region: Region,
    summoner_name: String,
    summoner_id: Option<SummonerId>,
    cache: RefCell<HashMap<RequestType, Rc<JsonValue>>>,
}

impl ApiClient {
    pub fn new(api_key: String, region: Region, summoner_name: &str) -> Result<Self, ClientInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            api_key,
            region,
            summoner_name: summoner_name.to_string(),
            summoner_id: None,
            cache: RefCell::from(HashMap::new()),
        })
    }

    /// Set once the summoner lookup has resolved; the other stats requests
    /// are keyed by summoner id.
    pub fn set_summoner_id(&mut self, id: SummonerId) {
        self.summoner_id = Some(id);
    }

    fn stats_base_url(&self) -> String {
        format!("https://prod.api.pvp.net/api/lol/{}/v1.2/", self.region.api_name())
    }

    fn static_data_base_url(&self) -> String {
        format!(
            "https://global.api.pvp.net/api/lol/static-data/{}/v1.2/",
            self.region.api_name()
        )
    }

    pub fn request(&self, request_type: RequestType, cache: bool) -> Result<Rc<JsonValue>, RequestError> {
        match self.cache.borrow_mut().entry(request_type) {
            Entry::Occupied(oe) => Ok(oe.get().clone()),
            Entry::Vacant(ve) => {
                // Get url
                let url = match request_type {
                    RequestType::SummonerByName => {
                        format!("{}summoner/by-name/{}", self.stats_base_url(), self.summoner_name)
                    }
                    RequestType::RunePages => match &self.summoner_id {
                        Some(id) => format!("{}summoner/{}/runes", self.stats_base_url(), id),
                        None => return Err(RequestError::SummonerNeeded),
                    },
                    RequestType::MasteryPages => match &self.summoner_id {
                        Some(id) => format!("{}summoner/{}/masteries", self.stats_base_url(), id),
                        None => return Err(RequestError::SummonerNeeded),
                    },
                    RequestType::MasteryTree => {
                        format!("{}mastery?masteryListData=tree", self.static_data_base_url())
                    }
                    RequestType::RuneById(rune_id) => {
                        format!("{}rune/{}", self.static_data_base_url(), rune_id)
                    }
                    RequestType::CurrentGame => match &self.summoner_id {
                        Some(id) => format!(
                            "https://prod.api.pvp.net/observer-mode/rest/consumer/getSpectatorGameInfo/{}/{}",
                            self.region.platform_id(),
                            id
                        ),
                        None => return Err(RequestError::SummonerNeeded),
                    },
                };

                // Send request
                let response = self
                    .client
                    .get(url)
                    .query(&[("api_key", self.api_key.as_str())])
                    .send()?;
                if !response.status().is_success() {
                    return Err(RequestError::InvalidResponse(request_type, response.status()));
                }

                // Return json
                let text = response.text()?;
                let json = json::parse(text.as_str())?;

                let rc_json = Rc::new(json);
                if cache {
                    ve.insert(rc_json.clone());
                }
                Ok(rc_json)
            }
        }
    }
}

#[derive(Debug, PartialEq, Hash, Eq, Clone, Copy)]
pub enum RequestType {
    SummonerByName,
    RunePages,
    MasteryPages,
    MasteryTree,
    RuneById(RuneId),
    CurrentGame,
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    SummonerNeeded,
    InvalidResponse(RequestType, StatusCode),
    ParsingFailed(json::Error),
}

impl RequestError {
    /// The spectator endpoint answers 404 for a summoner who is not in a
    /// game; the summoner endpoint answers 404 for an unknown name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RequestError::InvalidResponse(_, status) if *status == StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::SummonerNeeded => write!(f, "Summoner information is needed for this request."),
            RequestError::InvalidResponse(req_type, status) => write!(
                f,
                "The server returned an invalid response for request {:?}: HTTP {}",
                req_type, status
            ),
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}
