//! Deck provider backed by the deckofcardsapi.com REST API.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::card::Card;
use crate::error::ProviderError;

use super::{DeckHandle, DeckProvider};

/// Deck provider that talks to a deckofcardsapi.com compatible service.
///
/// Every endpoint answers with a JSON body carrying a `success` flag; a
/// `false` flag is reported as [`ProviderError::Rejected`], while connection
/// and decoding failures become [`ProviderError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpDeckProvider {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HttpDeckProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl HttpDeckProvider {
    /// The public deck API.
    pub const DEFAULT_BASE_URL: &'static str = "https://deckofcardsapi.com/api/deck/";

    /// Creates a provider for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a provider that sends requests through an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    /// Returns the API root requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ProviderError> {
        let response = request.send().await.map_err(|err| {
            warn!("deck api request failed: {err}");
            ProviderError::Transport(err.to_string())
        })?;

        response.json().await.map_err(|err| {
            warn!("deck api response could not be decoded: {err}");
            ProviderError::Transport(err.to_string())
        })
    }
}

#[async_trait]
impl DeckProvider for HttpDeckProvider {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, ProviderError> {
        let request = self
            .client
            .post(self.url("new/shuffle/"))
            .form(&[("deck_count", deck_count.to_string())]);
        let response: DeckResponse = self.send(request).await?;
        let response = response.ensure_success()?;

        let id = response
            .deck_id
            .ok_or_else(|| ProviderError::Transport("response carried no deck_id".into()))?;
        debug!("created remote deck {id}");
        Ok(DeckHandle::new(id))
    }

    async fn reshuffle(&self, deck: &DeckHandle) -> Result<(), ProviderError> {
        let request = self.client.get(self.url(&format!("{deck}/shuffle/")));
        let response: DeckResponse = self.send(request).await?;
        response.ensure_success().map(|_| ())
    }

    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>, ProviderError> {
        let request = self
            .client
            .post(self.url(&format!("{deck}/draw/")))
            .form(&[("count", count.to_string())]);
        let response: DeckResponse = self.send(request).await?;
        response.ensure_success()?.into_cards()
    }
}

#[derive(Debug, Deserialize)]
struct DeckResponse {
    success: bool,
    #[serde(default)]
    deck_id: Option<String>,
    #[serde(default)]
    cards: Vec<CardDto>,
    #[serde(default)]
    error: Option<String>,
}

impl DeckResponse {
    fn ensure_success(self) -> Result<Self, ProviderError> {
        if self.success {
            Ok(self)
        } else {
            Err(ProviderError::Rejected(
                self.error
                    .unwrap_or_else(|| "request was not successful".into()),
            ))
        }
    }

    fn into_cards(self) -> Result<Vec<Card>, ProviderError> {
        self.cards.into_iter().map(Card::try_from).collect()
    }
}

#[derive(Debug, Deserialize)]
struct CardDto {
    value: String,
    suit: String,
    #[serde(default)]
    image: Option<String>,
}

impl TryFrom<CardDto> for Card {
    type Error = ProviderError;

    fn try_from(dto: CardDto) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: dto.value.parse()?,
            suit: dto.suit.parse()?,
            image: dto.image,
        })
    }
}
