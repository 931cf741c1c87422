//! Properties of the catalog controller's pure parts.

use std::time::{Duration, Instant};

use pokedex::egui_app::catalog::{
    page_window, CatalogController, Completion, Debouncer, ResolvedQuery, PAGE_WINDOW,
};
use pokedex::shared::{PokemonPayload, PokemonType};
use proptest::prelude::*;

const DEBOUNCE_MS: u64 = 500;

fn any_type() -> impl Strategy<Value = PokemonType> {
    prop::sample::select(PokemonType::ALL.to_vec())
}

proptest! {
    #[test]
    fn page_window_stays_in_bounds(total in 1u32..500, current_seed in any::<u32>()) {
        let current = current_seed % total;
        let window = page_window(current, total);

        prop_assert!(window.contains(&current));
        prop_assert!(window.end <= total);
        prop_assert_eq!(window.len() as u32, total.min(PAGE_WINDOW));
    }

    /// Keystrokes closer together than the window collapse into one commit of the last text.
    #[test]
    fn debouncer_emits_last_value_once(gaps in prop::collection::vec(0u64..DEBOUNCE_MS, 1..20)) {
        let mut debouncer = Debouncer::new(Duration::from_millis(DEBOUNCE_MS));
        let t0 = Instant::now();
        let mut at = t0;

        for (i, gap) in gaps.iter().enumerate() {
            at += Duration::from_millis(*gap);
            debouncer.schedule(i, at);
            prop_assert_eq!(debouncer.poll(at), None);
        }

        let fire = at + Duration::from_millis(DEBOUNCE_MS);
        prop_assert_eq!(debouncer.poll(fire), Some(gaps.len() - 1));
        prop_assert_eq!(debouncer.poll(fire), None);
    }

    /// A non-empty committed search always wins over the type filter.
    #[test]
    fn search_takes_precedence_over_type(name in "[a-z]{1,12}", pokemon_type in any_type()) {
        let mut catalog = CatalogController::new(20, Duration::from_millis(DEBOUNCE_MS));
        catalog.start();
        catalog.toggle_type(pokemon_type);

        let t0 = Instant::now();
        catalog.on_search_input(name.clone(), t0);
        let request = catalog.tick(t0 + Duration::from_millis(DEBOUNCE_MS));

        prop_assert_eq!(request.map(|r| r.query), Some(ResolvedQuery::Search { name }));
    }

    /// Only the most recently issued request is ever applied.
    #[test]
    fn only_latest_request_applies(types in prop::collection::vec(any_type(), 1..10)) {
        let mut catalog = CatalogController::new(20, Duration::from_millis(DEBOUNCE_MS));
        let mut issued: Vec<u64> = catalog.start().into_iter().map(|r| r.seq).collect();
        for pokemon_type in types {
            issued.extend(catalog.toggle_type(pokemon_type).map(|r| r.seq));
        }

        let (latest, older) = issued.split_last().unwrap();
        for seq in older {
            let completion = catalog.complete(*seq, Ok(PokemonPayload::List(Vec::new())));
            prop_assert_eq!(completion, Completion::Stale);
        }
        let completion = catalog.complete(*latest, Ok(PokemonPayload::List(Vec::new())));
        prop_assert_eq!(completion, Completion::Applied);
    }
}
