//! Catalog assembly, serialization and consistency checks

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::data::FoodRow;
use crate::error::{CatalogError, CatalogResult};
use crate::types::{
    Availability, Category, ChemoSafety, Collection, FodmapLevel, FoodItem, IbdScore,
    MedicalScores,
};

pub const CATALOG_NAME: &str = "Taiwan Hong Kong Medical Food Database";
pub const CATALOG_VERSION: &str = "1.0.0";

const MEDICAL_FOCUS: [&str; 4] = ["IBD", "化療", "過敏", "IBS"];
const REGIONS: [&str; 2] = ["Taiwan", "Hong Kong"];
const MEDICAL_GUIDELINES: [&str; 4] = [
    "American Gastroenterological Association (IBD)",
    "Johns Hopkins Chemotherapy Nutrition",
    "Stanford Allergy Guidelines",
    "International Foundation for Gastrointestinal Disorders (IBS)",
];

/// Catalog header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub version: String,
    pub created: String,
    pub total_items: usize,
    pub medical_focus: Vec<String>,
    pub regions: Vec<String>,
    pub medical_guidelines: Vec<String>,
}

/// Human-readable descriptions for each score axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringLegend {
    pub ibd_scores: BTreeMap<String, String>,
    pub chemo_safety: BTreeMap<String, String>,
    pub fodmap_levels: BTreeMap<String, String>,
}

impl ScoringLegend {
    pub fn new() -> Self {
        Self {
            ibd_scores: IbdScore::ALL
                .iter()
                .map(|s| (s.value().to_string(), s.description().to_string()))
                .collect(),
            chemo_safety: ChemoSafety::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), s.description().to_string()))
                .collect(),
            fodmap_levels: FodmapLevel::ALL
                .iter()
                .map(|l| (l.as_str().to_string(), l.description().to_string()))
                .collect(),
        }
    }
}

impl Default for ScoringLegend {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: Metadata,
    /// Collection name to number of rows taken from it
    pub categories: BTreeMap<Collection, usize>,
    /// Food category to number of items
    #[serde(default)]
    pub category_breakdown: BTreeMap<Category, usize>,
    pub medical_scoring: ScoringLegend,
    pub foods: Vec<FoodItem>,
}

/// Build the full catalog from the literal tables.
///
/// Identifiers and timestamps are fresh on every call; everything else is
/// fixed by the tables in [`crate::data`].
pub fn generate() -> Catalog {
    let created = chrono::Utc::now().to_rfc3339();

    let collections = Collection::ALL
        .iter()
        .map(|&collection| {
            let items = collection
                .rows()
                .iter()
                .map(|row| build_item(row, collection, &created))
                .collect::<Vec<_>>();
            debug!("Built {} rows for {}", items.len(), collection);
            (collection, items)
        })
        .collect::<Vec<_>>();

    Catalog::from_collections(collections, created)
}

fn build_item(row: &FoodRow, collection: Collection, created: &str) -> FoodItem {
    FoodItem {
        id: Uuid::new_v4().to_string(),
        name_zh: row.name_zh.to_string(),
        name_en: row.name_en.to_string(),
        category: row.category,
        collection,
        medical_scores: MedicalScores {
            ibd_score: row.ibd_score,
            ibd_risk_factors: row.ibd_risk_factors.iter().map(|s| s.to_string()).collect(),
            chemo_safety: row.chemo_safety,
            major_allergens: row.major_allergens.iter().map(|s| s.to_string()).collect(),
            fodmap_level: row.fodmap_level,
        },
        availability: Availability::default(),
        cooking_methods: Vec::new(),
        alternatives: Vec::new(),
        created: created.to_string(),
        medical_validated: true,
    }
}

impl Catalog {
    /// Concatenate built collections in the given order and derive every count
    /// from what was actually built.
    pub fn from_collections(collections: Vec<(Collection, Vec<FoodItem>)>, created: String) -> Self {
        let mut categories = BTreeMap::new();
        let mut foods = Vec::new();

        for (collection, items) in collections {
            *categories.entry(collection).or_insert(0) += items.len();
            foods.extend(items);
        }

        let category_breakdown = count_categories(&foods);

        Self {
            metadata: Metadata {
                name: CATALOG_NAME.to_string(),
                version: CATALOG_VERSION.to_string(),
                created,
                total_items: foods.len(),
                medical_focus: MEDICAL_FOCUS.iter().map(|s| s.to_string()).collect(),
                regions: REGIONS.iter().map(|s| s.to_string()).collect(),
                medical_guidelines: MEDICAL_GUIDELINES.iter().map(|s| s.to_string()).collect(),
            },
            categories,
            category_breakdown,
            medical_scoring: ScoringLegend::new(),
            foods,
        }
    }

    /// Serialize as indented JSON
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the catalog to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn write_to(&self, path: &Path) -> CatalogResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Catalog written to: {}", path.display());
        Ok(())
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Recompute counts from `foods` and compare them with the stored maps
    pub fn check(&self) -> CheckReport {
        let mut report = CheckReport::default();

        if self.metadata.total_items != self.foods.len() {
            report.errors.push(format!(
                "metadata.total_items is {} but {} foods are listed",
                self.metadata.total_items,
                self.foods.len()
            ));
        }

        let actual = count_collections(&self.foods);
        for collection in Collection::ALL {
            let stored = self.categories.get(&collection).copied().unwrap_or(0);
            let found = actual.get(&collection).copied().unwrap_or(0);
            if stored != found {
                report.errors.push(format!(
                    "categories.{} is {} but {} foods belong to it",
                    collection, stored, found
                ));
            }
        }

        let stored_sum: usize = self.categories.values().sum();
        if stored_sum != self.metadata.total_items {
            report.errors.push(format!(
                "category counts sum to {} but metadata.total_items is {}",
                stored_sum, self.metadata.total_items
            ));
        }

        if !self.category_breakdown.is_empty() {
            let actual = count_categories(&self.foods);
            for category in Category::ALL {
                let stored = self.category_breakdown.get(&category).copied().unwrap_or(0);
                let found = actual.get(&category).copied().unwrap_or(0);
                if stored != found {
                    report.errors.push(format!(
                        "category_breakdown.{} is {} but {} foods have that category",
                        category, stored, found
                    ));
                }
            }
        }

        let mut seen_ids = HashMap::new();
        for food in &self.foods {
            if let Some(previous) = seen_ids.insert(food.id.as_str(), food.name_en.as_str()) {
                report.errors.push(format!(
                    "id {} is shared by '{}' and '{}'",
                    food.id, previous, food.name_en
                ));
            }
        }

        report.warnings.extend(duplicate_names(&self.foods, |f| f.name_en.as_str(), "name_en"));
        report.warnings.extend(duplicate_names(&self.foods, |f| f.name_zh.as_str(), "name_zh"));

        for warning in &report.warnings {
            warn!("{}", warning);
        }

        report
    }

    /// Count and score distributions
    pub fn summary(&self) -> CatalogSummary {
        let mut ibd_scores = BTreeMap::new();
        let mut chemo_safety = BTreeMap::new();
        let mut fodmap_levels = BTreeMap::new();

        for food in &self.foods {
            let scores = &food.medical_scores;
            *ibd_scores.entry(scores.ibd_score).or_insert(0) += 1;
            *chemo_safety.entry(scores.chemo_safety).or_insert(0) += 1;
            *fodmap_levels.entry(scores.fodmap_level).or_insert(0) += 1;
        }

        CatalogSummary {
            collections: self.categories.clone(),
            total_items: self.metadata.total_items,
            ibd_scores,
            chemo_safety,
            fodmap_levels,
        }
    }
}

fn count_collections(foods: &[FoodItem]) -> BTreeMap<Collection, usize> {
    let mut counts = BTreeMap::new();
    for food in foods {
        *counts.entry(food.collection).or_insert(0) += 1;
    }
    counts
}

fn count_categories(foods: &[FoodItem]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for food in foods {
        *counts.entry(food.category).or_insert(0) += 1;
    }
    counts
}

fn duplicate_names<'a>(
    foods: &'a [FoodItem],
    key: impl Fn(&'a FoodItem) -> &'a str,
    field: &str,
) -> Vec<String> {
    let mut seen: BTreeMap<&str, Vec<Collection>> = BTreeMap::new();
    for food in foods {
        seen.entry(key(food)).or_default().push(food.collection);
    }

    seen.into_iter()
        .filter(|(_, collections)| collections.len() > 1)
        .map(|(name, collections)| {
            let sources = collections
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("duplicate {} '{}' in {}", field, name, sources)
        })
        .collect()
}

/// Outcome of [`Catalog::check`]
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Count or identity inconsistencies
    pub errors: Vec<String>,
    /// Repeated names; allowed but worth a look
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub collections: BTreeMap<Collection, usize>,
    pub total_items: usize,
    pub ibd_scores: BTreeMap<IbdScore, usize>,
    pub chemo_safety: BTreeMap<ChemoSafety, usize>,
    pub fodmap_levels: BTreeMap<FodmapLevel, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_built_collections() {
        let catalog = generate();
        for collection in Collection::ALL {
            assert_eq!(catalog.categories[&collection], collection.rows().len());
        }
        assert_eq!(catalog.metadata.total_items, catalog.foods.len());
    }

    #[test]
    fn test_from_collections_derives_counts_from_input() {
        let catalog = generate();
        let proteins: Vec<FoodItem> = catalog
            .foods
            .iter()
            .filter(|f| f.collection == Collection::CommonProteins)
            .take(3)
            .cloned()
            .collect();

        let small = Catalog::from_collections(
            vec![(Collection::CommonProteins, proteins)],
            "2024-01-01T00:00:00+00:00".to_string(),
        );

        assert_eq!(small.metadata.total_items, 3);
        assert_eq!(small.categories.len(), 1);
        assert_eq!(small.categories[&Collection::CommonProteins], 3);
        assert!(small.check().is_consistent());
    }

    #[test]
    fn test_check_flags_stale_counts() {
        let mut catalog = generate();
        catalog.foods.pop();

        let report = catalog.check();
        assert!(!report.is_consistent());
        assert!(report.errors.iter().any(|e| e.contains("total_items")));
        assert!(report.errors.iter().any(|e| e.contains("snacks_beverages")));
    }

    #[test]
    fn test_check_reports_duplicate_names_as_warnings() {
        let catalog = generate();
        let report = catalog.check();

        assert!(report.is_consistent());
        // "Taro" is listed both as a vegetable and as a starch
        assert!(report.warnings.iter().any(|w| w.contains("'Taro'")));
    }

    #[test]
    fn test_legend_covers_every_score() {
        let legend = ScoringLegend::new();
        assert_eq!(legend.ibd_scores.len(), 4);
        assert_eq!(legend.ibd_scores["4"], "完美 - IBD 友善食物");
        assert_eq!(legend.chemo_safety.len(), 3);
        assert_eq!(legend.fodmap_levels.len(), 3);
    }

    #[test]
    fn test_summary_totals_match() {
        let summary = generate().summary();
        assert_eq!(summary.ibd_scores.values().sum::<usize>(), summary.total_items);
        assert_eq!(summary.chemo_safety.values().sum::<usize>(), summary.total_items);
        assert_eq!(summary.fodmap_levels.values().sum::<usize>(), summary.total_items);
    }
}
