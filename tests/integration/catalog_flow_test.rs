//! Catalog controller driven against a mock backend.

use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use pokedex::egui_app::catalog::{CatalogController, Completion, FetchRequest, ResolvedQuery};
use pokedex::egui_app::PokemonApi;
use pokedex::shared::PokemonType;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

const DEBOUNCE: Duration = Duration::from_millis(300);

async fn run(api: &PokemonApi, catalog: &mut CatalogController, request: FetchRequest) -> Completion {
    let outcome = api.fetch_catalog(&request.query).await;
    catalog.complete(request.seq, outcome)
}

async fn mount_first_page(backend: &TestBackend) {
    Mock::given(method("GET"))
        .and(path("/pokemons"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![pokemon(1, "Bulbasaur", &["Grass"]), pokemon(4, "Charmander", &["Fire"])],
            0,
            8,
            151,
        )))
        .mount(&backend.server)
        .await;
}

#[tokio::test]
async fn test_initial_load_shows_paged_results() {
    let backend = TestBackend::start().await;
    mount_first_page(&backend).await;
    let api = backend.pokemon_api();

    let mut catalog = CatalogController::new(20, DEBOUNCE);
    let request = catalog.start().unwrap();
    assert_eq!(run(&api, &mut catalog, request).await, Completion::Applied);

    assert_eq!(catalog.result_summary(), "Showing 2 Pokémon of 151");
    let pages = catalog.pagination().unwrap();
    assert_eq!(pages.window, 0..5);
    assert!(!pages.has_prev());
    assert!(pages.has_next());
}

#[tokio::test]
async fn test_typing_fetches_once_after_debounce() {
    let backend = TestBackend::start().await;
    mount_first_page(&backend).await;
    Mock::given(method("GET"))
        .and(path("/pokemons/search"))
        .and(query_param("name", "char"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![pokemon(4, "Charmander", &["Fire"])]))
        .expect(1)
        .mount(&backend.server)
        .await;
    let api = backend.pokemon_api();

    let mut catalog = CatalogController::new(20, DEBOUNCE);
    let request = catalog.start().unwrap();
    run(&api, &mut catalog, request).await;

    let t0 = Instant::now();
    for (i, text) in ["c", "ch", "cha", "char"].into_iter().enumerate() {
        let at = t0 + Duration::from_millis(100 * i as u64);
        catalog.on_search_input(text, at);
        assert!(catalog.tick(at).is_none());
    }

    let request = catalog.tick(t0 + Duration::from_millis(300 + DEBOUNCE.as_millis() as u64)).unwrap();
    assert_eq!(request.query, ResolvedQuery::Search { name: "char".into() });
    assert_eq!(run(&api, &mut catalog, request).await, Completion::Applied);

    assert_eq!(catalog.results().items[0].name, "Charmander");
    assert!(catalog.pagination().is_none());
}

#[tokio::test]
async fn test_slow_superseded_response_is_discarded() {
    let backend = TestBackend::start().await;
    mount_first_page(&backend).await;
    Mock::given(method("GET"))
        .and(path("/pokemons/type/Water"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vec![pokemon(7, "Squirtle", &["Water"])])
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemons/type/Fire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![pokemon(4, "Charmander", &["Fire"])]))
        .mount(&backend.server)
        .await;
    let api = backend.pokemon_api();

    let mut catalog = CatalogController::new(20, DEBOUNCE);
    let request = catalog.start().unwrap();
    run(&api, &mut catalog, request).await;

    let water = catalog.toggle_type(PokemonType::Water).unwrap();
    let fire = catalog.toggle_type(PokemonType::Fire).unwrap();

    let slow = {
        let api = api.clone();
        tokio::spawn(async move { (water.seq, api.fetch_catalog(&water.query).await) })
    };
    let fast = {
        let api = api.clone();
        tokio::spawn(async move { (fire.seq, api.fetch_catalog(&fire.query).await) })
    };

    let (seq, outcome) = fast.await.unwrap();
    assert_eq!(catalog.complete(seq, outcome), Completion::Applied);
    let (seq, outcome) = slow.await.unwrap();
    assert_eq!(catalog.complete(seq, outcome), Completion::Stale);

    assert_eq!(catalog.results().items[0].name, "Charmander");
    assert_eq!(catalog.query().selected_type, Some(PokemonType::Fire));
}

#[tokio::test]
async fn test_failure_keeps_results_and_retry_recovers() {
    let backend = TestBackend::start().await;
    mount_first_page(&backend).await;
    Mock::given(method("GET"))
        .and(path("/pokemons/type/Grass"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemons/type/Grass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![pokemon(1, "Bulbasaur", &["Grass"])]))
        .mount(&backend.server)
        .await;
    let api = backend.pokemon_api();

    let mut catalog = CatalogController::new(20, DEBOUNCE);
    let request = catalog.start().unwrap();
    run(&api, &mut catalog, request).await;

    let request = catalog.toggle_type(PokemonType::Grass).unwrap();
    assert_matches!(run(&api, &mut catalog, request).await, Completion::Failed(_));
    assert_eq!(catalog.error().and_then(|e| e.status()), Some(503));
    assert_eq!(catalog.results().len(), 2);

    let request = catalog.retry();
    assert_eq!(request.query, ResolvedQuery::ByType { pokemon_type: PokemonType::Grass });
    assert_eq!(run(&api, &mut catalog, request).await, Completion::Applied);
    assert!(catalog.error().is_none());
    assert_eq!(catalog.result_summary(), "Showing 1 Pokémon");
}

#[tokio::test]
async fn test_empty_search_result() {
    let backend = TestBackend::start().await;
    mount_first_page(&backend).await;
    Mock::given(method("GET"))
        .and(path("/pokemons/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
        .mount(&backend.server)
        .await;
    let api = backend.pokemon_api();

    let mut catalog = CatalogController::new(20, DEBOUNCE);
    let request = catalog.start().unwrap();
    run(&api, &mut catalog, request).await;

    let t0 = Instant::now();
    catalog.on_search_input("missingno", t0);
    let request = catalog.tick(t0 + DEBOUNCE).unwrap();
    run(&api, &mut catalog, request).await;

    assert!(catalog.is_empty_result());
    assert!(catalog.has_filters());

    let request = catalog.clear_filters().unwrap();
    assert_eq!(request.query, ResolvedQuery::Page { page: 0, size: 20 });
}
