use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

/// Store aisle a shopping-list line belongs to.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    Vegetables,
    Fruit,
    Protein,
    Dairy,
    Grains,
    NutsAndSeeds,
    OilsAndFats,
    SpicesAndHerbs,
    Pantry,
    Other,
}

/// Stateless mapping from ingredient names to store categories.
///
/// Matching is keyword-based over the lowercased name. The check order
/// resolves overlaps deliberately: "Paprika" is produce before it is a
/// spice, "Butter" is dairy before it is a fat.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(ingredient_name: &str) -> ShoppingCategory {
        let normalized = ingredient_name.trim().to_lowercase();

        if Self::is_vegetable(&normalized) {
            return ShoppingCategory::Vegetables;
        }
        if Self::is_fruit(&normalized) {
            return ShoppingCategory::Fruit;
        }
        if Self::is_protein(&normalized) {
            return ShoppingCategory::Protein;
        }
        if Self::is_dairy(&normalized) {
            return ShoppingCategory::Dairy;
        }
        if Self::is_grain(&normalized) {
            return ShoppingCategory::Grains;
        }
        if Self::is_nut_or_seed(&normalized) {
            return ShoppingCategory::NutsAndSeeds;
        }
        if Self::is_oil_or_fat(&normalized) {
            return ShoppingCategory::OilsAndFats;
        }
        if Self::is_spice_or_herb(&normalized) {
            return ShoppingCategory::SpicesAndHerbs;
        }
        if Self::is_pantry(&normalized) {
            return ShoppingCategory::Pantry;
        }

        ShoppingCategory::Other
    }

    fn contains_any(name: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| name.contains(keyword))
    }

    fn is_vegetable(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "spinat",
                "grünkohl",
                "rucola",
                "brokkoli",
                "blumenkohl",
                "karotte",
                "rote bete",
                "süßkartoffel",
                "zucchini",
                "paprika",
                "tomate",
                "gurke",
                "zwiebel",
                "knoblauch",
                "lauch",
                "sellerie",
                "salat",
            ],
        )
    }

    fn is_fruit(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "apfel", "äpfel", "banane", "beere", "zitrone", "limette", "orange", "avocado",
                "mango", "ananas",
            ],
        )
    }

    fn is_protein(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "hähnchen",
                "pute",
                "rindfleisch",
                "lachs",
                "thunfisch",
                "forelle",
                "makrele",
                "garnele",
                "eier",
                "tofu",
                "tempeh",
                "linse",
                "kichererbse",
                "bohne",
            ],
        )
    }

    fn is_dairy(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "milch",
                "joghurt",
                "käse",
                "quark",
                "sahne",
                "butter",
                "mozzarella",
                "parmesan",
                "feta",
            ],
        )
    }

    fn is_grain(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "reis",
                "pasta",
                "nudel",
                "brot",
                "haferflocken",
                "quinoa",
                "bulgur",
                "couscous",
                "kartoffel",
                "mehl",
            ],
        )
    }

    fn is_nut_or_seed(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "mandel",
                "walnuss",
                "haselnuss",
                "cashew",
                "sonnenblumenkern",
                "kürbiskern",
                "leinsamen",
                "chia",
                "sesam",
            ],
        )
    }

    fn is_oil_or_fat(name: &str) -> bool {
        Self::contains_any(
            name,
            &["olivenöl", "kokosöl", "avocadoöl", "leinöl", "ghee", "öl"],
        )
    }

    fn is_spice_or_herb(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "salz",
                "pfeffer",
                "kurkuma",
                "ingwer",
                "zimt",
                "oregano",
                "basilikum",
                "petersilie",
                "dill",
                "thymian",
                "rosmarin",
            ],
        )
    }

    fn is_pantry(name: &str) -> bool {
        Self::contains_any(
            name,
            &[
                "essig",
                "senf",
                "honig",
                "ahornsirup",
                "vanille",
                "backpulver",
                "natron",
                "brühe",
                "kokosmilch",
                "tomatenmark",
            ],
        )
    }
}
