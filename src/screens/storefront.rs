/*!
 * Storefront home screen.
 *
 * Static demo catalog plus two pieces of selection state: the highlighted
 * category button and the active bottom-navigation tab. Nothing here is
 * persisted or fetched.
 */

use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::SelectionError;

/// Product categories shown as horizontal buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Category {
    #[default]
    Tractors,
    Implements,
    SpareParts,
    Accessories,
    Services,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Tractors,
            Self::Implements,
            Self::SpareParts,
            Self::Accessories,
            Self::Services,
        ]
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tractors => "Tractors",
            Self::Implements => "Implements",
            Self::SpareParts => "Spare Parts",
            Self::Accessories => "Accessories",
            Self::Services => "Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| SelectionError::InvalidSelection {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum NavTab {
    #[default]
    Home,
    News,
    Category,
    Account,
    Cart,
}

impl NavTab {
    /// All tabs in display order
    pub fn all() -> &'static [NavTab] {
        &[Self::Home, Self::News, Self::Category, Self::Account, Self::Cart]
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::News => "News",
            Self::Category => "Category",
            Self::Account => "Account",
            Self::Cart => "Cart",
        }
    }
}

impl fmt::Display for NavTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for NavTab {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| SelectionError::InvalidSelection {
                kind: "nav tab",
                value: s.to_string(),
            })
    }
}

/// A card in the "Still looking for these?" strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub label: String,
    pub image_url: &'static str,
}

/// Static demo content of the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontCatalog {
    pub brand: &'static str,
    pub search_placeholder: &'static str,
    pub promo_headline: &'static str,
    pub promo_subtext: &'static str,
    pub promo_images: &'static [&'static str],
    pub personalized_title: &'static str,
    pub product_images: &'static [&'static str],
}

const PROMO_IMAGES: &[&str] = &[
    "https://via.placeholder.com/120x90.png?text=Tractor+1",
    "https://via.placeholder.com/120x90.png?text=Tractor+2",
    "https://via.placeholder.com/120x90.png?text=Tractor+3",
];

const PRODUCT_IMAGES: &[&str] = &[
    "https://via.placeholder.com/120x140.png?text=Product+1",
    "https://via.placeholder.com/120x140.png?text=Product+2",
    "https://via.placeholder.com/120x140.png?text=Product+3",
    "https://via.placeholder.com/120x140.png?text=Product+4",
    "https://via.placeholder.com/120x140.png?text=Product+5",
];

impl StorefrontCatalog {
    /// The demo catalog
    pub fn demo() -> Self {
        Self {
            brand: "Tractree",
            search_placeholder: "Search tractors, accessories...",
            promo_headline: "Freedom Sale - Up to 60% Off",
            promo_subtext: "ICICI / BOB offers",
            promo_images: PROMO_IMAGES,
            personalized_title: "Still looking for these?",
            product_images: PRODUCT_IMAGES,
        }
    }

    /// Product cards labelled `Product 1`..`Product N`
    pub fn product_cards(&self) -> Vec<ProductCard> {
        self.product_images
            .iter()
            .enumerate()
            .map(|(idx, url)| ProductCard {
                label: format!("Product {}", idx + 1),
                image_url: *url,
            })
            .collect()
    }
}

impl Default for StorefrontCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

/// Storefront screen state
#[derive(Debug, Clone, Default)]
pub struct StorefrontScreen {
    catalog: StorefrontCatalog,
    active_category: Category,
    active_nav: NavTab,
}

impl StorefrontScreen {
    /// Fresh screen: Tractors and Home selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &StorefrontCatalog {
        &self.catalog
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn active_nav_tab(&self) -> NavTab {
        self.active_nav
    }

    /// Whether the button for `category` is highlighted
    pub fn is_category_active(&self, category: Category) -> bool {
        self.active_category == category
    }

    /// Whether the label for `tab` is highlighted
    pub fn is_nav_tab_active(&self, tab: NavTab) -> bool {
        self.active_nav == tab
    }

    pub fn select_category(&mut self, category: Category) {
        debug!("Category selected: {}", category);
        self.active_category = category;
    }

    pub fn select_nav_tab(&mut self, tab: NavTab) {
        debug!("Nav tab selected: {}", tab);
        self.active_nav = tab;
    }

    /// Select a category by label; unknown labels leave the state unchanged
    pub fn select_category_named(&mut self, name: &str) -> Result<(), SelectionError> {
        let category = name.parse::<Category>().inspect_err(|e| warn!("{}", e))?;
        self.select_category(category);
        Ok(())
    }

    /// Select a nav tab by label; unknown labels leave the state unchanged
    pub fn select_nav_tab_named(&mut self, name: &str) -> Result<(), SelectionError> {
        let tab = name.parse::<NavTab>().inspect_err(|e| warn!("{}", e))?;
        self.select_nav_tab(tab);
        Ok(())
    }
}
