//! Literal catalog tables
//!
//! One table per [`Collection`]. Collection sizes are whatever these tables
//! hold; counts in the generated catalog are derived from them.

use crate::types::Category::{self, *};
use crate::types::ChemoSafety::{self, *};
use crate::types::Collection;
use crate::types::FodmapLevel::{self, *};
use crate::types::IbdScore::{self, *};

/// A literal catalog row before identity and timestamps are attached
#[derive(Debug, Clone, Copy)]
pub struct FoodRow {
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pub category: Category,
    pub ibd_score: IbdScore,
    pub ibd_risk_factors: &'static [&'static str],
    pub chemo_safety: ChemoSafety,
    pub major_allergens: &'static [&'static str],
    pub fodmap_level: FodmapLevel,
}

#[allow(clippy::too_many_arguments)]
const fn row(
    name_zh: &'static str,
    name_en: &'static str,
    category: Category,
    ibd_score: IbdScore,
    ibd_risk_factors: &'static [&'static str],
    chemo_safety: ChemoSafety,
    major_allergens: &'static [&'static str],
    fodmap_level: FodmapLevel,
) -> FoodRow {
    FoodRow {
        name_zh,
        name_en,
        category,
        ibd_score,
        ibd_risk_factors,
        chemo_safety,
        major_allergens,
        fodmap_level,
    }
}

impl Collection {
    /// Literal rows belonging to this collection, in catalog order.
    pub fn rows(&self) -> &'static [FoodRow] {
        match self {
            Collection::TaiwanStaples => TAIWAN_STAPLES,
            Collection::HongkongClassics => HONGKONG_CLASSICS,
            Collection::CommonProteins => COMMON_PROTEINS,
            Collection::VegetablesFruits => VEGETABLES_FRUITS,
            Collection::GrainsStarches => GRAINS_STARCHES,
            Collection::SnacksBeverages => SNACKS_BEVERAGES,
        }
    }
}

static TAIWAN_STAPLES: &[FoodRow] = &[
    row("牛肉麵", "Beef Noodle Soup", MainDish, Fair, &["high_sodium", "gluten"], Safe, &["gluten"], High),
    row("滷肉飯", "Braised Pork Rice", MainDish, Good, &["high_fat"], Safe, &[], Low),
    row("小籠包", "Xiaolongbao", MainDish, Fair, &["gluten", "high_fat"], Caution, &["gluten"], Medium),
    row("蚵仔煎", "Oyster Omelet", MainDish, Fair, &["shellfish"], Caution, &["eggs", "shellfish"], Low),
    row("臭豆腐", "Stinky Tofu", Snack, Fair, &["fermented"], Avoid, &["soy"], Medium),
    row("雞排", "Fried Chicken Cutlet", Protein, Poor, &["deep_fried", "high_fat"], Caution, &[], Low),
    row("胡椒餅", "Pepper Bun", Snack, Fair, &["gluten", "high_fat"], Safe, &["gluten"], Medium),
    row("刈包", "Gua Bao", MainDish, Good, &[], Safe, &["gluten"], Low),
    row("肉圓", "Ba-wan", MainDish, Fair, &["starch", "high_fat"], Safe, &[], Medium),
    row("鹹酥雞", "Taiwanese Popcorn Chicken", Protein, Poor, &["deep_fried"], Caution, &[], Low),
    row("四神湯", "Four Spirits Soup", Soup, Excellent, &[], Safe, &[], Low),
    row("蛤蜊湯", "Clam Soup", Soup, Good, &[], Caution, &["shellfish"], Low),
    row("冬瓜排骨湯", "Winter Melon Pork Rib Soup", Soup, Excellent, &[], Safe, &[], Low),
    row("玉米濃湯", "Corn Soup", Soup, Good, &[], Safe, &["dairy"], Medium),
    row("酸辣湯", "Hot and Sour Soup", Soup, Poor, &["spicy", "acidic"], Avoid, &[], High),
    row("豆漿", "Soy Milk", Beverage, Good, &[], Safe, &["soy"], Low),
    row("燒餅", "Sesame Flatbread", Grain, Good, &["gluten"], Safe, &["gluten", "sesame"], Low),
    row("油條", "Chinese Cruller", Snack, Poor, &["deep_fried", "gluten"], Avoid, &["gluten"], Low),
    row("蛋餅", "Taiwanese Egg Crepe", MainDish, Good, &[], Safe, &["eggs", "gluten"], Low),
    row("蘿蔔糕", "Turnip Cake", MainDish, Good, &[], Safe, &[], Low),
    row("珍珠奶茶", "Bubble Tea", Beverage, Fair, &["high_sugar", "dairy"], Caution, &["dairy"], High),
    row("冬瓜茶", "Winter Melon Tea", Beverage, Good, &["high_sugar"], Safe, &[], Low),
    row("青草茶", "Herbal Tea", Beverage, Excellent, &[], Safe, &[], Low),
    row("愛玉", "Aiyu Jelly", Dessert, Excellent, &[], Safe, &[], Low),
    row("仙草", "Grass Jelly", Dessert, Excellent, &[], Safe, &[], Low),
    row("滷白菜", "Braised Chinese Cabbage", Vegetable, Excellent, &[], Safe, &[], Medium),
    row("地瓜葉", "Sweet Potato Leaves", Vegetable, Excellent, &[], Safe, &[], Low),
    row("空心菜", "Water Spinach", Vegetable, Excellent, &[], Safe, &[], Low),
    row("高麗菜", "Cabbage", Vegetable, Excellent, &[], Safe, &[], Medium),
    row("青江菜", "Bok Choy", Vegetable, Excellent, &[], Safe, &[], Low),
    row("虱目魚", "Milkfish", Protein, Excellent, &[], Safe, &[], Low),
    row("白帶魚", "Largehead Hairtail", Protein, Excellent, &[], Safe, &[], Low),
    row("吳郭魚", "Tilapia", Protein, Excellent, &[], Safe, &[], Low),
    row("蝦仁", "Shrimp", Protein, Good, &[], Caution, &["shellfish"], Low),
    row("花枝", "Squid", Protein, Good, &[], Caution, &["shellfish"], Low),
    row("紅豆湯", "Red Bean Soup", Dessert, Good, &["high_fiber"], Safe, &[], High),
    row("綠豆湯", "Mung Bean Soup", Dessert, Good, &["high_fiber"], Safe, &[], Medium),
    row("芋圓", "Taro Balls", Dessert, Good, &["starch"], Safe, &[], Low),
    row("湯圓", "Tang Yuan", Dessert, Fair, &["high_sugar", "glutinous"], Safe, &[], Low),
    row("鳳梨酥", "Pineapple Cake", Dessert, Fair, &["high_sugar", "high_fat"], Safe, &["gluten", "eggs"], Medium),
    row("醬瓜", "Pickled Cucumber", Condiment, Fair, &["high_sodium"], Safe, &[], Low),
    row("豆瓣醬", "Doubanjiang", Condiment, Poor, &["fermented", "spicy"], Avoid, &["soy"], Low),
    row("甜辣醬", "Sweet Chili Sauce", Condiment, Poor, &["spicy", "high_sugar"], Caution, &[], Low),
    row("花生醬", "Peanut Butter", Condiment, Fair, &["high_fat"], Avoid, &["peanuts"], Low),
    row("芒果", "Mango", Fruit, Excellent, &[], Safe, &[], Medium),
    row("火龍果", "Dragon Fruit", Fruit, Excellent, &[], Safe, &[], Low),
    row("釋迦", "Sugar Apple", Fruit, Excellent, &[], Safe, &[], Low),
    row("蓮霧", "Wax Apple", Fruit, Excellent, &[], Safe, &[], Low),
    row("番石榴", "Guava", Fruit, Good, &["high_fiber"], Safe, &[], Low),
    row("白米飯", "White Rice", Grain, Excellent, &[], Safe, &[], Low),
];

static HONGKONG_CLASSICS: &[FoodRow] = &[
    row("港式奶茶", "Hong Kong Milk Tea", Beverage, Good, &["high_caffeine"], Safe, &["dairy"], Low),
    row("菠蘿包", "Pineapple Bun", Snack, Fair, &["high_sugar", "high_fat"], Safe, &["gluten", "eggs"], Low),
    row("雞蛋仔", "Egg Waffles", Snack, Fair, &["high_sugar"], Safe, &["eggs", "gluten"], Low),
    row("港式燒臘", "Hong Kong BBQ", Protein, Fair, &["high_sodium", "preservatives"], Caution, &[], Low),
    row("叉燒", "Char Siu", Protein, Fair, &["high_sugar", "high_sodium"], Caution, &[], Low),
    row("蝦餃", "Har Gow", MainDish, Good, &[], Caution, &["shellfish"], Low),
    row("燒賣", "Siu Mai", MainDish, Good, &[], Safe, &[], Low),
    row("叉燒包", "Char Siu Bao", MainDish, Good, &[], Safe, &["gluten"], Low),
    row("腸粉", "Cheong Fun", MainDish, Excellent, &[], Safe, &[], Low),
    row("流沙包", "Molten Custard Bun", Dessert, Fair, &["high_sugar", "high_fat"], Safe, &["eggs", "dairy"], Low),
    row("煲仔飯", "Clay Pot Rice", MainDish, Good, &[], Safe, &[], Low),
    row("魚蛋河", "Fish Ball Noodle Soup", MainDish, Good, &["processed"], Caution, &[], Low),
    row("雲吞麵", "Wonton Noodles", MainDish, Good, &[], Safe, &["gluten"], Medium),
    row("牛腩河", "Beef Brisket Noodles", MainDish, Fair, &["high_fat"], Safe, &[], Low),
    row("車仔麵", "Cart Noodles", MainDish, Fair, &["high_sodium", "processed"], Caution, &["gluten"], Medium),
    row("楊枝甘露", "Mango Pomelo Sago", Dessert, Good, &["high_sugar"], Safe, &["dairy"], Medium),
    row("雙皮奶", "Double Skin Milk", Dessert, Good, &[], Safe, &["dairy"], Low),
    row("龜苓膏", "Gui Ling Gao", Dessert, Excellent, &[], Safe, &[], Low),
    row("豆腐花", "Tofu Pudding", Dessert, Excellent, &[], Safe, &["soy"], Low),
    row("芝麻糊", "Black Sesame Soup", Dessert, Good, &[], Safe, &["sesame"], Low),
    row("白灼蝦", "Blanched Shrimp", Protein, Excellent, &[], Caution, &["shellfish"], Low),
    row("清蒸魚", "Steamed Fish", Protein, Excellent, &[], Safe, &[], Low),
    row("椒鹽九肚魚", "Salt and Pepper Fish", Protein, Fair, &["deep_fried"], Caution, &[], Low),
    row("薑蔥龍躉", "Ginger Scallion Grouper", Protein, Excellent, &[], Safe, &[], Low),
    row("蒜蓉粉絲蒸扇貝", "Steamed Scallops", Protein, Good, &[], Caution, &["shellfish"], Low),
    row("白切雞", "White Cut Chicken", Protein, Excellent, &[], Safe, &[], Low),
    row("油麥菜", "A-choy", Vegetable, Excellent, &[], Safe, &[], Low),
    row("芥蘭", "Chinese Broccoli", Vegetable, Excellent, &[], Safe, &[], Medium),
    row("菜心", "Choy Sum", Vegetable, Excellent, &[], Safe, &[], Low),
    row("西洋菜", "Watercress", Vegetable, Excellent, &[], Safe, &[], Low),
    row("揚州炒飯", "Yang Chow Fried Rice", MainDish, Good, &["high_sodium"], Safe, &["eggs"], Low),
    row("福建炒飯", "Fujian Fried Rice", MainDish, Good, &["high_sodium"], Safe, &["eggs"], Low),
    row("生炒糯米飯", "Sticky Rice", MainDish, Fair, &["glutinous"], Safe, &[], Low),
    row("瑤柱蛋白炒飯", "Scallop Egg White Fried Rice", MainDish, Good, &[], Safe, &["eggs"], Low),
    row("撈麵", "Lo Mein", MainDish, Good, &["high_sodium"], Safe, &["gluten"], Low),
    row("伊麵", "Yi Mein", MainDish, Good, &[], Safe, &["gluten"], Low),
    row("米線", "Rice Vermicelli", Grain, Excellent, &[], Safe, &[], Low),
    row("瀨粉", "Lai Fun", Grain, Excellent, &[], Safe, &[], Low),
    row("咖喱魚蛋", "Curry Fish Balls", Snack, Fair, &["spicy", "processed"], Caution, &[], Low),
    row("臭豆腐", "Stinky Tofu HK Style", Snack, Fair, &["fermented"], Avoid, &["soy"], Medium),
    row("雞蛋仔", "Bubble Waffles", Snack, Fair, &["high_sugar"], Safe, &["eggs", "gluten"], Low),
    row("格仔餅", "Waffle", Snack, Fair, &["high_sugar", "high_fat"], Safe, &["gluten", "eggs"], Low),
    row("燉蛋", "Steamed Egg Custard", Protein, Excellent, &[], Safe, &["eggs"], Low),
    row("冰糖燕窩", "Bird's Nest Soup", Dessert, Excellent, &[], Safe, &[], Low),
    row("雪耳蓮子", "White Fungus Lotus Seed Soup", Dessert, Excellent, &[], Safe, &[], Low),
    row("合桃露", "Walnut Soup", Dessert, Good, &[], Safe, &["nuts"], Low),
    row("XO醬", "XO Sauce", Condiment, Poor, &["spicy", "high_sodium"], Avoid, &["shellfish"], Low),
    row("蠔油", "Oyster Sauce", Condiment, Fair, &["high_sodium"], Safe, &["shellfish"], Low),
    row("生抽", "Light Soy Sauce", Condiment, Fair, &["high_sodium"], Safe, &["soy"], Low),
    row("老抽", "Dark Soy Sauce", Condiment, Fair, &["high_sodium"], Safe, &["soy"], Low),
];

static COMMON_PROTEINS: &[FoodRow] = &[
    row("白斬雞", "Poached Chicken", Protein, Excellent, &[], Safe, &[], Low),
    row("口水雞", "Sichuan Chicken", Protein, Poor, &["spicy"], Avoid, &[], Low),
    row("宮保雞丁", "Kung Pao Chicken", Protein, Poor, &["spicy"], Avoid, &["peanuts"], Low),
    row("蒸蛋", "Steamed Eggs", Protein, Excellent, &[], Safe, &["eggs"], Low),
    row("炒蛋", "Scrambled Eggs", Protein, Good, &["high_fat"], Safe, &["eggs"], Low),
    row("白切肉", "Boiled Pork", Protein, Excellent, &[], Safe, &[], Low),
    row("紅燒肉", "Braised Pork Belly", Protein, Fair, &["high_fat"], Caution, &[], Low),
    row("糖醋里肌", "Sweet and Sour Pork", Protein, Fair, &["high_sugar", "deep_fried"], Caution, &[], Low),
    row("蒜泥白肉", "Garlic Pork", Protein, Good, &[], Safe, &[], Low),
    row("叉燒肉", "BBQ Pork", Protein, Fair, &["high_sugar", "preservatives"], Caution, &[], Low),
    row("清蒸石斑", "Steamed Grouper", Protein, Excellent, &[], Safe, &[], Low),
    row("糖醋魚", "Sweet and Sour Fish", Protein, Fair, &["high_sugar", "deep_fried"], Caution, &[], Low),
    row("紅燒魚", "Braised Fish", Protein, Good, &["high_sodium"], Safe, &[], Low),
    row("魚片粥", "Fish Porridge", MainDish, Excellent, &[], Safe, &[], Low),
    row("生魚片", "Sashimi", Protein, Good, &["raw"], Avoid, &[], Low),
    row("蒜蓉蒸蝦", "Garlic Steamed Shrimp", Protein, Excellent, &[], Caution, &["shellfish"], Low),
    row("椒鹽蝦", "Salt and Pepper Shrimp", Protein, Fair, &["deep_fried"], Caution, &["shellfish"], Low),
    row("清蒸螃蟹", "Steamed Crab", Protein, Good, &[], Caution, &["shellfish"], Low),
    row("蛤蜊", "Clams", Protein, Good, &[], Caution, &["shellfish"], Low),
    row("生蠔", "Oysters", Protein, Fair, &["raw"], Avoid, &["shellfish"], Low),
    row("麻婆豆腐", "Mapo Tofu", Protein, Poor, &["spicy"], Avoid, &["soy"], Low),
    row("清蒸豆腐", "Steamed Tofu", Protein, Excellent, &[], Safe, &["soy"], Low),
    row("煎豆腐", "Pan-fried Tofu", Protein, Good, &[], Safe, &["soy"], Low),
    row("豆干", "Dried Tofu", Protein, Good, &["processed"], Safe, &["soy"], Low),
    row("豆皮", "Tofu Skin", Protein, Good, &[], Safe, &["soy"], Low),
];

static VEGETABLES_FRUITS: &[FoodRow] = &[
    row("菠菜", "Spinach", Vegetable, Good, &["oxalates"], Safe, &[], Low),
    row("小白菜", "Baby Bok Choy", Vegetable, Excellent, &[], Safe, &[], Low),
    row("萵苣", "Lettuce", Vegetable, Excellent, &[], Safe, &[], Low),
    row("韭菜", "Chinese Chives", Vegetable, Fair, &["high_fiber"], Safe, &[], High),
    row("芹菜", "Celery", Vegetable, Good, &["high_fiber"], Safe, &[], Medium),
    row("紅蘿蔔", "Carrots", Vegetable, Excellent, &[], Safe, &[], Low),
    row("白蘿蔔", "Daikon Radish", Vegetable, Excellent, &[], Safe, &[], Low),
    row("馬鈴薯", "Potatoes", Vegetable, Excellent, &[], Safe, &[], Low),
    row("地瓜", "Sweet Potatoes", Vegetable, Good, &["high_fiber"], Safe, &[], Medium),
    row("芋頭", "Taro", Vegetable, Excellent, &[], Safe, &[], Low),
    row("冬瓜", "Winter Melon", Vegetable, Excellent, &[], Safe, &[], Low),
    row("苦瓜", "Bitter Melon", Vegetable, Good, &["bitter"], Safe, &[], Low),
    row("絲瓜", "Luffa", Vegetable, Excellent, &[], Safe, &[], Low),
    row("南瓜", "Pumpkin", Vegetable, Excellent, &[], Safe, &[], Low),
    row("小黃瓜", "Cucumber", Vegetable, Excellent, &[], Safe, &[], Low),
    row("香菇", "Shiitake Mushrooms", Vegetable, Excellent, &[], Safe, &[], Low),
    row("金針菇", "Enoki Mushrooms", Vegetable, Excellent, &[], Safe, &[], Low),
    row("杏鮑菇", "King Oyster Mushrooms", Vegetable, Excellent, &[], Safe, &[], Low),
    row("木耳", "Black Fungus", Vegetable, Excellent, &[], Safe, &[], Low),
    row("白木耳", "White Fungus", Vegetable, Excellent, &[], Safe, &[], Low),
    row("蘋果", "Apple", Fruit, Excellent, &[], Safe, &[], Medium),
    row("香蕉", "Banana", Fruit, Excellent, &[], Safe, &[], Medium),
    row("葡萄", "Grapes", Fruit, Good, &["high_sugar"], Safe, &[], Medium),
    row("橘子", "Orange", Fruit, Good, &["citric_acid"], Safe, &[], Medium),
    row("梨子", "Pear", Fruit, Excellent, &[], Safe, &[], Medium),
    row("鳳梨", "Pineapple", Fruit, Fair, &["acidic", "enzyme"], Caution, &[], Medium),
    row("木瓜", "Papaya", Fruit, Excellent, &[], Safe, &[], Low),
    row("香瓜", "Cantaloupe", Fruit, Excellent, &[], Safe, &[], Low),
    row("西瓜", "Watermelon", Fruit, Excellent, &[], Safe, &[], Low),
    row("奇異果", "Kiwi", Fruit, Good, &["acidic"], Safe, &[], Medium),
    row("草莓", "Strawberries", Fruit, Good, &["seeds"], Safe, &[], Low),
    row("藍莓", "Blueberries", Fruit, Excellent, &[], Safe, &[], Low),
    row("葡萄乾", "Raisins", Fruit, Fair, &["high_sugar"], Safe, &[], Medium),
    row("核桃", "Walnuts", Nuts, Good, &["high_fat"], Safe, &["nuts"], Low),
    row("杏仁", "Almonds", Nuts, Good, &["high_fat"], Safe, &["nuts"], Low),
];

static GRAINS_STARCHES: &[FoodRow] = &[
    row("白粥", "White Rice Porridge", Grain, Excellent, &[], Safe, &[], Low),
    row("小米粥", "Millet Porridge", Grain, Excellent, &[], Safe, &[], Low),
    row("燕麥粥", "Oatmeal", Grain, Good, &["high_fiber"], Safe, &[], Medium),
    row("糙米", "Brown Rice", Grain, Fair, &["high_fiber"], Safe, &[], Medium),
    row("紫米", "Purple Rice", Grain, Good, &["high_fiber"], Safe, &[], Medium),
    row("白麵條", "White Noodles", Grain, Good, &["gluten"], Safe, &["gluten"], Low),
    row("全麥麵條", "Whole Wheat Noodles", Grain, Fair, &["high_fiber", "gluten"], Safe, &["gluten"], High),
    row("拉麵", "Ramen", Grain, Fair, &["high_sodium", "gluten"], Caution, &["gluten"], Medium),
    row("烏龍麵", "Udon", Grain, Good, &["gluten"], Safe, &["gluten"], Low),
    row("蕎麥麵", "Soba Noodles", Grain, Good, &[], Safe, &[], Low),
    row("白吐司", "White Toast", Grain, Good, &["gluten"], Safe, &["gluten"], Low),
    row("全麥吐司", "Whole Wheat Bread", Grain, Fair, &["high_fiber", "gluten"], Safe, &["gluten"], Medium),
    row("法國麵包", "French Bread", Grain, Good, &["gluten"], Safe, &["gluten"], Low),
    row("貝果", "Bagel", Grain, Good, &["gluten"], Safe, &["gluten"], Low),
    row("玉米", "Corn", Grain, Good, &["high_fiber"], Safe, &[], Medium),
    row("地瓜", "Sweet Potato", Grain, Good, &["high_fiber"], Safe, &[], Medium),
    row("芋頭", "Taro", Grain, Excellent, &[], Safe, &[], Low),
    row("薏仁", "Job's Tears", Grain, Good, &[], Safe, &[], Low),
    row("蓮藕粉", "Lotus Root Starch", Grain, Excellent, &[], Safe, &[], Low),
    row("粄條", "Flat Rice Noodles", Grain, Excellent, &[], Safe, &[], Low),
];

static SNACKS_BEVERAGES: &[FoodRow] = &[
    row("烏龍茶", "Oolong Tea", Beverage, Excellent, &[], Safe, &[], Low),
    row("綠茶", "Green Tea", Beverage, Excellent, &[], Safe, &[], Low),
    row("蜂蜜水", "Honey Water", Beverage, Good, &["high_sugar"], Safe, &[], Low),
    row("檸檬水", "Lemon Water", Beverage, Good, &["citric_acid"], Safe, &[], Low),
    row("椰子水", "Coconut Water", Beverage, Excellent, &[], Safe, &[], Low),
    row("鮮奶", "Fresh Milk", Beverage, Good, &[], Safe, &["dairy"], Medium),
    row("優格", "Yogurt", Beverage, Good, &["probiotics"], Safe, &["dairy"], Low),
    row("起司", "Cheese", Dairy, Fair, &["high_fat"], Safe, &["dairy"], Low),
    row("餅乾", "Crackers", Snack, Fair, &["processed"], Safe, &["gluten"], Low),
    row("洋芋片", "Potato Chips", Snack, Poor, &["deep_fried", "high_sodium"], Avoid, &[], Low),
    row("蝦餅", "Shrimp Crackers", Snack, Fair, &["processed"], Caution, &["shellfish"], Low),
    row("海苔", "Seaweed", Snack, Excellent, &[], Safe, &[], Low),
    row("堅果", "Mixed Nuts", Snack, Good, &["high_fat"], Safe, &["nuts"], Low),
    row("仙貝", "Rice Crackers", Snack, Good, &[], Safe, &[], Low),
    row("麻糬", "Mochi", Dessert, Good, &["glutinous"], Safe, &[], Low),
    row("布丁", "Pudding", Dessert, Good, &["high_sugar"], Safe, &["eggs", "dairy"], Low),
    row("果凍", "Jelly", Dessert, Good, &["artificial"], Safe, &[], Low),
    row("雞湯", "Chicken Soup", Soup, Excellent, &[], Safe, &[], Low),
    row("蔬菜湯", "Vegetable Soup", Soup, Excellent, &[], Safe, &[], Low),
    row("味噌湯", "Miso Soup", Soup, Good, &["high_sodium"], Safe, &["soy"], Low),
];
