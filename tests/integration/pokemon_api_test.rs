//! `/pokemons` endpoint wrappers.

use pokedex::egui_app::catalog::ResolvedQuery;
use pokedex::shared::page::ResultSet;
use pokedex::shared::{NewPokemon, Pokemon, PokemonType};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

#[tokio::test]
async fn test_list_sends_page_and_size() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .and(query_param("page", "2"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![bulbasaur()], 2, 8, 151)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let results = ResultSet::from(backend.pokemon_api().list(2, 20).await.unwrap());
    assert_eq!(results.total_pages(), Some(8));
    assert_eq!(results.total_elements(), Some(151));
    assert_eq!(results.items[0].total_stats(), 318);
}

#[tokio::test]
async fn test_search_and_type_return_bare_arrays() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/search"))
        .and(query_param("name", "mr. mime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![pokemon(122, "Mr. Mime", &["Psychic", "Fairy"])]))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemons/type/Fire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            pokemon(4, "Charmander", &["Fire"]),
            pokemon(5, "Charmeleon", &["Fire"]),
        ]))
        .expect(1)
        .mount(&backend.server)
        .await;

    let api = backend.pokemon_api();
    let search = ResultSet::from(api.search("mr. mime").await.unwrap());
    assert_eq!(search.items[0].name, "Mr. Mime");
    assert_eq!(search.page_info, None);

    let by_type = ResultSet::from(api.fetch_catalog(&ResolvedQuery::ByType { pokemon_type: PokemonType::Fire }).await.unwrap());
    assert_eq!(by_type.summary(), "Showing 2 Pokémon");
}

#[tokio::test]
async fn test_get_by_number_and_range() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/number/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon(25, "Pikachu", &["Electric"])))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemons/range"))
        .and(query_param("start", "1"))
        .and(query_param("end", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            pokemon(1, "Bulbasaur", &["Grass"]),
            pokemon(2, "Ivysaur", &["Grass"]),
            pokemon(3, "Venusaur", &["Grass"]),
        ]))
        .mount(&backend.server)
        .await;

    let api = backend.pokemon_api();
    assert_eq!(api.get_by_number(25).await.unwrap().display_number(), "#025");
    assert_eq!(ResultSet::from(api.range(1, 3).await.unwrap()).len(), 3);
}

#[tokio::test]
async fn test_create_update_delete() {
    let backend = TestBackend::signed_in("jwt").await;
    let bulba: Pokemon = serde_json::from_value(bulbasaur()).unwrap();
    let body = NewPokemon::from(&bulba);

    Mock::given(method("POST"))
        .and(path("/pokemons"))
        .and(body_partial_json(serde_json::json!({ "name": "Bulbasaur", "specialAttack": 65 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(bulbasaur()))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/pokemons/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulbasaur()))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/pokemons/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    let api = backend.pokemon_api();
    assert_eq!(api.create(&body).await.unwrap().id, 1);
    assert_eq!(api.update(1, &body).await.unwrap().name, "Bulbasaur");
    api.delete(1).await.unwrap();
}

#[tokio::test]
async fn test_delete_forbidden_surfaces_backend_message() {
    let backend = TestBackend::signed_in("jwt").await;
    Mock::given(method("DELETE"))
        .and(path("/pokemons/7"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(error_body(403, "Forbidden", "You can only delete your own Pokemon")),
        )
        .mount(&backend.server)
        .await;

    let err = backend.pokemon_api().delete(7).await.unwrap_err();
    assert_eq!(err.message(), "You can only delete your own Pokemon");
    assert!(err.is_unauthorized());
}
