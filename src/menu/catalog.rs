use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::entry::{EntryId, MenuEntry, Price};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read menu file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse menu file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a menu file. Entries get their ids at load time.
#[derive(Debug, Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuFileItem>,
}

#[derive(Debug, Deserialize)]
struct MenuFileItem {
    name: String,
    price: Price,
    #[serde(default, alias = "image_ref")]
    image: String,
    category: String,
}

/// The fixed, read-only collection of menu entries.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Build a catalog from entries, keeping their order.
    ///
    /// Entries whose id already appears earlier are dropped so ids stay unique.
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        let mut unique: Vec<MenuEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|e| e.id == entry.id) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// The built-in menu.
    pub fn seed() -> Self {
        let item = |name: &str, cents: u64, image: &str, category: &str| {
            MenuEntry::new(name, Price::from_cents(cents), image, category)
        };

        Self::new(vec![
            item("Burger", 1099, "burger", "Category A"),
            item("Item 2", 899, "item2", "Category B"),
            item("Item 3", 1299, "item3", "Category A"),
            item("Item 4", 999, "item4", "Category C"),
            item("Item 5", 1199, "item5", "Category B"),
            item("Item 6", 799, "item6", "Category C"),
        ])
    }

    /// Load a catalog from a JSON menu file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a catalog from JSON of the form `{"items": [{"name", "price", "image", "category"}]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: MenuFile = serde_json::from_str(json)?;
        let entries = file
            .items
            .into_iter()
            .map(|item| MenuEntry::new(item.name, item.price, item.image, item.category))
            .collect();
        Ok(Self::new(entries))
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }

    /// Entries in `category`, in catalog order. Unknown categories yield nothing.
    pub fn items_in(&self, category: &str) -> Vec<&MenuEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Categories paired with their entries, for list rendering.
    pub fn sections(&self) -> Vec<(&str, Vec<&MenuEntry>)> {
        self.categories()
            .into_iter()
            .map(|category| (category, self.items_in(category)))
            .collect()
    }

    /// Find an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&MenuEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_seed_categories() {
        let catalog = MenuCatalog::seed();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.categories(),
            vec!["Category A", "Category B", "Category C"]
        );
    }

    #[test]
    fn test_items_in_preserves_seed_order() {
        let catalog = MenuCatalog::seed();
        let items = catalog.items_in("Category A");
        assert_eq!(names(&items), vec!["Burger", "Item 3"]);
        assert_eq!(items[0].price, Price::from_cents(1099));
        assert_eq!(items[1].image_ref, "item3");
    }

    #[test]
    fn test_items_in_unknown_or_empty_category() {
        let catalog = MenuCatalog::seed();
        assert!(catalog.items_in("Category Z").is_empty());
        assert!(catalog.items_in("").is_empty());
    }

    #[test]
    fn test_every_entry_listed_exactly_once_in_its_category() {
        let catalog = MenuCatalog::seed();
        for entry in catalog.entries() {
            let count = catalog
                .items_in(&entry.category)
                .iter()
                .filter(|e| e.id == entry.id)
                .count();
            assert_eq!(count, 1, "{} listed {} times", entry.name, count);
        }
    }

    #[test]
    fn test_categories_have_no_duplicates() {
        let catalog = MenuCatalog::seed();
        let categories = catalog.categories();
        let mut deduped = categories.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), categories.len());
    }

    #[test]
    fn test_sections_cover_catalog() {
        let catalog = MenuCatalog::seed();
        let sections = catalog.sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1].0, "Category B");
        assert_eq!(names(&sections[1].1), vec!["Item 2", "Item 5"]);
        let total: usize = sections.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = MenuCatalog::seed();
        let burger = &catalog.entries()[0];
        assert_eq!(catalog.get(burger.id).map(|e| e.name.as_str()), Some("Burger"));
        assert!(!catalog.contains(EntryId::new()));
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let entry = MenuEntry::new("Tea", Price::from_cents(300), "tea", "Drinks");
        let catalog = MenuCatalog::new(vec![entry.clone(), entry]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MenuCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.sections().is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"
{
  "items": [
    {"name": "Soup", "price": 6.5, "image": "soup", "category": "Starters"},
    {"name": "Steak", "price": "$24.00", "image_ref": "steak", "category": "Mains"},
    {"name": "Salad", "price": 7, "category": "Starters"}
  ]
}
"#;
        let catalog = MenuCatalog::from_json(json).unwrap();
        assert_eq!(catalog.categories(), vec!["Starters", "Mains"]);
        let starters = catalog.items_in("Starters");
        assert_eq!(names(&starters), vec!["Soup", "Salad"]);
        assert_eq!(starters[0].price.cents(), 650);
        assert_eq!(starters[1].image_ref, "");
        assert_eq!(catalog.items_in("Mains")[0].image_ref, "steak");
    }

    #[test]
    fn test_from_json_missing_items_is_empty() {
        let catalog = MenuCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let json = r#"{"items": [{"name": "Refund", "price": -1, "category": "X"}]}"#;
        assert!(matches!(
            MenuCatalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("menu.json");
        std::fs::write(
            &path,
            r#"{"items": [{"name": "Pie", "price": "4.25", "image": "pie", "category": "Dessert"}]}"#,
        )
        .unwrap();

        let catalog = MenuCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].price.to_string(), "$4.25");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = MenuCatalog::load("/nonexistent/menu.json");
        assert!(matches!(result, Err(CatalogError::Read(_))));
    }
}
