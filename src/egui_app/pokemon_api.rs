//! Pokémon API Client
//!
//! Typed wrappers for the `/pokemons` resource. List-shaped endpoints return
//! `PokemonPayload` so callers can normalize array and page answers the same
//! way.

use reqwest::Method;

use crate::egui_app::api_client::{ApiClient, ApiError};
use crate::egui_app::catalog::ResolvedQuery;
use crate::shared::pokemon::{NewPokemon, Pokemon};
use crate::shared::page::PokemonPayload;

/// Pokémon API client
#[derive(Clone)]
pub struct PokemonApi {
    client: ApiClient,
}

impl PokemonApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /pokemons?page=&size=`
    pub async fn list(&self, page: u32, size: u32) -> Result<PokemonPayload, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/pokemons")
            .query(&[("page", page), ("size", size)]);
        self.client.send_json(request).await
    }

    /// `GET /pokemons/{id}`
    pub async fn get(&self, id: i64) -> Result<Pokemon, ApiError> {
        let request = self.client.request(Method::GET, &format!("/pokemons/{}", id));
        self.client.send_json(request).await
    }

    /// `GET /pokemons/number/{n}`
    pub async fn get_by_number(&self, number: i32) -> Result<Pokemon, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/pokemons/number/{}", number));
        self.client.send_json(request).await
    }

    /// `GET /pokemons/type/{type}`
    pub async fn by_type(&self, type_name: &str) -> Result<PokemonPayload, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/pokemons/type/{}", type_name));
        self.client.send_json(request).await
    }

    /// `GET /pokemons/search?name=`
    pub async fn search(&self, name: &str) -> Result<PokemonPayload, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/pokemons/search")
            .query(&[("name", name)]);
        self.client.send_json(request).await
    }

    /// `GET /pokemons/range?start=&end=`
    pub async fn range(&self, start: i32, end: i32) -> Result<PokemonPayload, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/pokemons/range")
            .query(&[("start", start), ("end", end)]);
        self.client.send_json(request).await
    }

    /// `GET /pokemons/my-pokemons`
    pub async fn my_pokemons(&self) -> Result<PokemonPayload, ApiError> {
        let request = self.client.request(Method::GET, "/pokemons/my-pokemons");
        self.client.send_json(request).await
    }

    /// `POST /pokemons`
    pub async fn create(&self, pokemon: &NewPokemon) -> Result<Pokemon, ApiError> {
        let request = self.client.request(Method::POST, "/pokemons").json(pokemon);
        self.client.send_json(request).await
    }

    /// `PUT /pokemons/{id}`
    pub async fn update(&self, id: i64, pokemon: &NewPokemon) -> Result<Pokemon, ApiError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/pokemons/{}", id))
            .json(pokemon);
        self.client.send_json(request).await
    }

    /// `DELETE /pokemons/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/pokemons/{}", id));
        self.client.send_no_content(request).await
    }

    /// Run whichever endpoint the catalog controller resolved.
    pub async fn fetch_catalog(&self, query: &ResolvedQuery) -> Result<PokemonPayload, ApiError> {
        match query {
            ResolvedQuery::Search { name } => self.search(name).await,
            ResolvedQuery::ByType { pokemon_type } => self.by_type(pokemon_type.as_str()).await,
            ResolvedQuery::Page { page, size } => self.list(*page, *size).await,
        }
    }
}
