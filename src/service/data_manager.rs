use std::fmt;

use once_cell::sync::OnceCell;

use crate::model::{
    ids::RuneId,
    mastery::{MasteryPage, MasteryTreeCatalog},
    rune::RunePage,
    summoner::{Region, Summoner},
};

use super::riotapi::{
    client::{ApiClient, ClientInitError, RequestError, RequestType},
    parsing::{
        masteries::parse_mastery_pages, mastery_tree::parse_mastery_tree, runes::parse_rune_pages,
        static_data::parse_rune_name, summoner::parse_summoner, ParsingError,
    },
};

/// Fetches and caches all remote data for one run. Every fetch happens at
/// most once; a failed fetch is terminal for the run.
pub struct DataManager {
    client: ApiClient,
    summoner: OnceCell<Summoner>,
    rune_pages_cache: OnceCell<Vec<RunePage>>,
    mastery_pages_cache: OnceCell<Vec<MasteryPage>>,
    catalog_cache: OnceCell<MasteryTreeCatalog>,
}

impl DataManager {
    pub fn new(api_key: String, region: Region, summoner_name: &str) -> Result<Self, DataManagerInitError> {
        let mut client = ApiClient::new(api_key, region, summoner_name)?;
        let summoner = DataManager::retrieve_summoner(&client, summoner_name, region)?;
        client.set_summoner_id(summoner.id.clone());

        Ok(Self {
            client,
            summoner: OnceCell::from(summoner),
            rune_pages_cache: OnceCell::new(),
            mastery_pages_cache: OnceCell::new(),
            catalog_cache: OnceCell::new(),
        })
    }

    pub fn get_summoner(&self) -> &Summoner {
        self.summoner.get().unwrap()
    }

    /// Probes the spectator endpoint. A 404 means the summoner is not in a
    /// game right now; that is the reset case, not a failure.
    pub fn is_game_active(&self) -> DataRetrievalResult<bool> {
        match self.client.request(RequestType::CurrentGame, false) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(DataRetrievalError::GameProbeFailed(err.into())),
        }
    }

    pub fn get_rune_pages(&self) -> DataRetrievalResult<&Vec<RunePage>> {
        self.rune_pages_cache.get_or_try_init(|| {
            let runes_json = self
                .client
                .request(RequestType::RunePages, true)
                .map_err(|err| DataRetrievalError::RuneFetchFailed(err.into()))?;
            let mut pages = parse_rune_pages(&runes_json)
                .map_err(|err| DataRetrievalError::RuneFetchFailed(err.into()))?;
            self.resolve_missing_names(&mut pages)?;
            Ok(pages)
        })
    }

    pub fn get_mastery_pages(&self) -> DataRetrievalResult<&Vec<MasteryPage>> {
        self.mastery_pages_cache.get_or_try_init(|| {
            let masteries_json = self
                .client
                .request(RequestType::MasteryPages, true)
                .map_err(|err| DataRetrievalError::MasteryFetchFailed(err.into()))?;
            let pages = parse_mastery_pages(&masteries_json)
                .map_err(|err| DataRetrievalError::MasteryFetchFailed(err.into()))?;
            Ok(pages)
        })
    }

    pub fn get_mastery_tree_catalog(&self) -> DataRetrievalResult<&MasteryTreeCatalog> {
        self.catalog_cache.get_or_try_init(|| {
            let tree_json = self
                .client
                .request(RequestType::MasteryTree, true)
                .map_err(|err| DataRetrievalError::StaticDataFetchFailed(err.into()))?;
            let catalog = parse_mastery_tree(&tree_json)
                .map_err(|err| DataRetrievalError::StaticDataFetchFailed(err.into()))?;
            Ok(catalog)
        })
    }

    pub fn get_rune_name(&self, id: RuneId) -> DataRetrievalResult<String> {
        let rune_json = self
            .client
            .request(RequestType::RuneById(id), true)
            .map_err(|err| DataRetrievalError::StaticDataFetchFailed(err.into()))?;
        let name =
            parse_rune_name(&rune_json).map_err(|err| DataRetrievalError::StaticDataFetchFailed(err.into()))?;
        Ok(name)
    }

    /// Older payload versions omit the rune name from the slots; fill the
    /// gaps from static data. Only the current page matters downstream.
    fn resolve_missing_names(&self, pages: &mut [RunePage]) -> DataRetrievalResult<()> {
        for page in pages.iter_mut().filter(|page| page.is_current) {
            for slot in page.slots.iter_mut() {
                if slot.rune_name.is_none() {
                    slot.rune_name = Some(self.get_rune_name(slot.rune_id)?);
                }
            }
        }
        Ok(())
    }

    fn retrieve_summoner(client: &ApiClient, name: &str, region: Region) -> DataRetrievalResult<Summoner> {
        let not_found = || DataRetrievalError::SummonerNotFound {
            name: name.to_string(),
            region,
        };

        let summoner_json = client
            .request(RequestType::SummonerByName, true)
            .map_err(|_| not_found())?;
        let summoner = parse_summoner(&summoner_json, region).map_err(|_| not_found())?;
        Ok(summoner)
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
    SummonerNotFound(DataRetrievalError),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "Client setup failed: {}", err),
            DataManagerInitError::SummonerNotFound(err) => write!(f, "{}", err),
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<DataRetrievalError> for DataManagerInitError {
    fn from(error: DataRetrievalError) -> Self {
        Self::SummonerNotFound(error)
    }
}

#[derive(Debug)]
pub enum DataRetrievalError {
    SummonerNotFound { name: String, region: Region },
    RuneFetchFailed(FetchFailure),
    MasteryFetchFailed(FetchFailure),
    StaticDataFetchFailed(FetchFailure),
    GameProbeFailed(FetchFailure),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::SummonerNotFound { name, region } => {
                write!(f, "Unable to get any info on summoner: {} on region: {}.", name, region)
            }
            DataRetrievalError::RuneFetchFailed(err) => write!(f, "Unable to retrieve runes: {}", err),
            DataRetrievalError::MasteryFetchFailed(err) => write!(f, "Unable to retrieve masteries: {}", err),
            DataRetrievalError::StaticDataFetchFailed(err) => {
                write!(f, "Unable to retrieve static data: {}", err)
            }
            DataRetrievalError::GameProbeFailed(err) => {
                write!(f, "Unable to probe for an active game: {}", err)
            }
        }
    }
}

#[derive(Debug)]
pub enum FetchFailure {
    Request(RequestError),
    Parsing(ParsingError),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchFailure::Request(err) => write!(f, "{}", err),
            FetchFailure::Parsing(err) => write!(f, "{}", err),
        }
    }
}

impl From<RequestError> for FetchFailure {
    fn from(error: RequestError) -> Self {
        FetchFailure::Request(error)
    }
}

impl From<ParsingError> for FetchFailure {
    fn from(error: ParsingError) -> Self {
        FetchFailure::Parsing(error)
    }
}
