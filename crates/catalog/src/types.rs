//! Food item model and medical classification types

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MainDish,
    Snack,
    Soup,
    Beverage,
    Dessert,
    Vegetable,
    Fruit,
    Protein,
    Grain,
    Condiment,
    Dairy,
    Nuts,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::MainDish,
        Category::Snack,
        Category::Soup,
        Category::Beverage,
        Category::Dessert,
        Category::Vegetable,
        Category::Fruit,
        Category::Protein,
        Category::Grain,
        Category::Condiment,
        Category::Dairy,
        Category::Nuts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MainDish => "main_dish",
            Category::Snack => "snack",
            Category::Soup => "soup",
            Category::Beverage => "beverage",
            Category::Dessert => "dessert",
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Protein => "protein",
            Category::Grain => "grain",
            Category::Condiment => "condiment",
            Category::Dairy => "dairy",
            Category::Nuts => "nuts",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source collection a catalog row was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    TaiwanStaples,
    HongkongClassics,
    CommonProteins,
    VegetablesFruits,
    GrainsStarches,
    SnacksBeverages,
}

impl Collection {
    /// Collections in catalog order.
    pub const ALL: [Collection; 6] = [
        Collection::TaiwanStaples,
        Collection::HongkongClassics,
        Collection::CommonProteins,
        Collection::VegetablesFruits,
        Collection::GrainsStarches,
        Collection::SnacksBeverages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::TaiwanStaples => "taiwan_staples",
            Collection::HongkongClassics => "hongkong_classics",
            Collection::CommonProteins => "common_proteins",
            Collection::VegetablesFruits => "vegetables_fruits",
            Collection::GrainsStarches => "grains_starches",
            Collection::SnacksBeverages => "snacks_beverages",
        }
    }

    /// Human-readable label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Collection::TaiwanStaples => "Taiwan Staples",
            Collection::HongkongClassics => "Hong Kong Classics",
            Collection::CommonProteins => "Common Proteins",
            Collection::VegetablesFruits => "Vegetables/Fruits",
            Collection::GrainsStarches => "Grains/Starches",
            Collection::SnacksBeverages => "Snacks/Beverages",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IBD friendliness score, 4 is best. Serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IbdScore {
    Poor = 1,
    Fair = 2,
    Good = 3,
    Excellent = 4,
}

impl IbdScore {
    pub const ALL: [IbdScore; 4] = [
        IbdScore::Excellent,
        IbdScore::Good,
        IbdScore::Fair,
        IbdScore::Poor,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            IbdScore::Excellent => "完美 - IBD 友善食物",
            IbdScore::Good => "好 - 通常安全",
            IbdScore::Fair => "普通 - 需要注意",
            IbdScore::Poor => "差 - 可能引發症狀",
        }
    }
}

impl TryFrom<u8> for IbdScore {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(IbdScore::Poor),
            2 => Ok(IbdScore::Fair),
            3 => Ok(IbdScore::Good),
            4 => Ok(IbdScore::Excellent),
            other => Err(CatalogError::InvalidScore(other)),
        }
    }
}

impl From<IbdScore> for u8 {
    fn from(score: IbdScore) -> Self {
        score.value()
    }
}

/// Safety during chemotherapy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemoSafety {
    Safe,
    Caution,
    Avoid,
}

impl ChemoSafety {
    pub const ALL: [ChemoSafety; 3] = [ChemoSafety::Safe, ChemoSafety::Caution, ChemoSafety::Avoid];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChemoSafety::Safe => "safe",
            ChemoSafety::Caution => "caution",
            ChemoSafety::Avoid => "avoid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChemoSafety::Safe => "化療期間安全",
            ChemoSafety::Caution => "需要注意食品安全",
            ChemoSafety::Avoid => "化療期間應避免",
        }
    }
}

/// FODMAP load, relevant for IBS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FodmapLevel {
    Low,
    Medium,
    High,
}

impl FodmapLevel {
    pub const ALL: [FodmapLevel; 3] = [FodmapLevel::Low, FodmapLevel::Medium, FodmapLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            FodmapLevel::Low => "low",
            FodmapLevel::Medium => "medium",
            FodmapLevel::High => "high",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FodmapLevel::Low => "IBS 友善 - 低 FODMAP",
            FodmapLevel::Medium => "適量攝取",
            FodmapLevel::High => "IBS 患者應限制",
        }
    }
}

/// Medical classification of a single food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalScores {
    pub ibd_score: IbdScore,
    #[serde(default)]
    pub ibd_risk_factors: Vec<String>,
    pub chemo_safety: ChemoSafety,
    #[serde(default)]
    pub major_allergens: Vec<String>,
    pub fodmap_level: FodmapLevel,
}

/// Regional availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub taiwan: bool,
    pub hong_kong: bool,
    pub seasonal: Option<String>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            taiwan: true,
            hong_kong: true,
            seasonal: None,
        }
    }
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name_zh: String,
    pub name_en: String,
    pub category: Category,
    pub collection: Collection,
    pub medical_scores: MedicalScores,
    pub availability: Availability,
    #[serde(default)]
    pub cooking_methods: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub created: String,
    pub medical_validated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ibd_score_serializes_as_integer() {
        let json = serde_json::to_string(&IbdScore::Good).unwrap();
        assert_eq!(json, "3");

        let parsed: IbdScore = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, IbdScore::Poor);
    }

    #[test]
    fn test_ibd_score_rejects_out_of_range() {
        assert!(serde_json::from_str::<IbdScore>("0").is_err());
        assert!(serde_json::from_str::<IbdScore>("5").is_err());
    }

    #[test]
    fn test_enum_names_match_wire_format() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for collection in Collection::ALL {
            let json = serde_json::to_string(&collection).unwrap();
            assert_eq!(json, format!("\"{}\"", collection.as_str()));
        }
        assert_eq!(serde_json::to_string(&ChemoSafety::Caution).unwrap(), "\"caution\"");
        assert_eq!(serde_json::to_string(&FodmapLevel::Medium).unwrap(), "\"medium\"");
    }
}
