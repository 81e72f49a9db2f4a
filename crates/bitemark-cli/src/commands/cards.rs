//! Card command handlers

use anyhow::Result;
use tracing::debug;

use bitemark_core::{BookmarkStore, CardDisplayModel, Catalog, PosterResolver};

use super::find_card;
use crate::output::Output;

/// Render every card after applying bookmarks and toggles
///
/// `bookmarks` are added to a fresh store first, then each of `toggles` is
/// flipped through its card, in order.
pub fn list(
    catalog: &Catalog,
    resolver: &dyn PosterResolver,
    bookmarks: &[String],
    toggles: &[String],
    only_bookmarked: bool,
    output: &Output,
) -> Result<()> {
    let mut store = BookmarkStore::new();

    for id in bookmarks {
        let card = find_card(catalog, id)?;
        store.add_bookmark(card.id());
    }

    for id in toggles {
        let card = find_card(catalog, id)?;
        card.toggle_bookmark(&mut store);
    }

    debug!(bookmarks = store.len(), "rendering cards");
    let cards = render(catalog, &store, resolver, only_bookmarked);
    output.print_cards(&cards);
    Ok(())
}

/// Show a single card and activate it
pub fn show(
    catalog: &Catalog,
    resolver: &dyn PosterResolver,
    id: &str,
    output: &Output,
) -> Result<()> {
    let card = find_card(catalog, id)?;
    let store = BookmarkStore::new();

    output.print_card(&card.display_model(&store, resolver));
    card.on_activate(output);
    Ok(())
}

/// Display models for the catalog against the current store
pub fn render(
    catalog: &Catalog,
    store: &BookmarkStore,
    resolver: &dyn PosterResolver,
    only_bookmarked: bool,
) -> Vec<CardDisplayModel> {
    catalog
        .cards()
        .iter()
        .map(|card| card.display_model(store, resolver))
        .filter(|model| !only_bookmarked || model.is_bookmarked)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitemark_core::{Restaurant, RestaurantId};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Restaurant::new("r1", "Luigi's", "luigi").with_tags(["Italian", "Pizza"]),
            Restaurant::new("r2", "Sakura", "sakura"),
        ])
        .unwrap()
    }

    fn resolver(key: &str) -> String {
        format!("https://img.test/{}", key)
    }

    #[test]
    fn test_render_filters_bookmarked() {
        let catalog = catalog();
        let mut store = BookmarkStore::new();
        store.add_bookmark(&RestaurantId::from("r2"));

        let all = render(&catalog, &store, &resolver, false);
        assert_eq!(all.len(), 2);
        assert!(!all[0].is_bookmarked);
        assert!(all[1].is_bookmarked);

        let bookmarked = render(&catalog, &store, &resolver, true);
        assert_eq!(bookmarked.len(), 1);
        assert_eq!(bookmarked[0].id, RestaurantId::from("r2"));
        assert_eq!(bookmarked[0].poster_url, "https://img.test/sakura");
    }

    #[test]
    fn test_list_rejects_unknown_id() {
        let output = Output::new(crate::output::OutputFormat::Quiet);
        let result = list(
            &catalog(),
            &resolver,
            &[],
            &["missing".to_string()],
            false,
            &output,
        );
        assert!(result.is_err());
    }
}
