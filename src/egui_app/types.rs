/**
 * Shared Types Module
 *
 * App view enum used by navigation and the main panel.
 */

/// Current app view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppView {
    /// Welcome page with navigation
    #[default]
    Home,
    /// Login/register screen
    Auth,
    /// Searchable, filterable catalog
    Catalog,
    /// Single record
    Detail,
    /// Signed-in user's own records
    Collection,
    /// Add or edit a record
    PokemonForm,
    /// Account details
    Profile,
}

impl AppView {
    /// Views that need a stored token.
    pub fn requires_auth(&self) -> bool {
        matches!(self, AppView::Collection | AppView::PokemonForm | AppView::Profile)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Auth => "Login",
            AppView::Catalog => "Pokédex",
            AppView::Detail => "Details",
            AppView::Collection => "My Collection",
            AppView::PokemonForm => "Add Pokémon",
            AppView::Profile => "Profile",
        }
    }
}
