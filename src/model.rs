use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Radar-chart labels, in the order the page's chart literal lists its values.
pub const GRAPH_LABELS: [&str; 5] = ["Manpower", "Airpower", "Land Power", "Naval Power", "Financials"];

/// Chart values keep the literal's number form: `10` stays an integer.
pub type GraphData = IndexMap<String, serde_json::Number>;

/// A stat value: a single reading, or a primary reading plus a secondary one
/// (e.g. a count and its per-capita figure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Single(String),
    Pair(String, String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub quantity: Quantity,
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    #[serde(flatten)]
    pub stats: IndexMap<String, StatEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull_types_descriptions: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtAGlance {
    pub graph_data: Option<GraphData>,
    pub graph_info: String,
    pub country_info: String,
    pub quick_facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub ranks: IndexMap<String, String>,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capital {
    pub capital_name: String,
    pub capital_population: String,
    pub average_monthly_temperatures: IndexMap<String, String>,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndUseProducts {
    pub description: String,
    pub products: Vec<String>,
}

/// One country's extracted profile. Panels missing from the page stay `None`
/// and are left out of the serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "at-a-glance", default, skip_serializing_if = "Option::is_none")]
    pub at_a_glance: Option<AtAGlance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Capital>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<CategoryStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<CategoryStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manpower: Option<CategoryStats>,
    #[serde(rename = "air-power", default, skip_serializing_if = "Option::is_none")]
    pub air_power: Option<CategoryStats>,
    #[serde(rename = "land forces", default, skip_serializing_if = "Option::is_none")]
    pub land_forces: Option<CategoryStats>,
    #[serde(rename = "naval forces", default, skip_serializing_if = "Option::is_none")]
    pub naval_forces: Option<CategoryStats>,
    #[serde(rename = "end-use products", default, skip_serializing_if = "Option::is_none")]
    pub end_use_products: Option<EndUseProducts>,
    #[serde(rename = "natural resources", default, skip_serializing_if = "Option::is_none")]
    pub natural_resources: Option<CategoryStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistics: Option<CategoryStats>,
    pub comparable_powers: Vec<String>,
    pub neighbouring_powers: Vec<String>,
}

impl Report {
    /// Number of panel sections present (power lists not counted).
    pub fn section_count(&self) -> usize {
        let categories = [
            &self.financials,
            &self.geography,
            &self.manpower,
            &self.air_power,
            &self.land_forces,
            &self.naval_forces,
            &self.natural_resources,
            &self.logistics,
        ];
        categories.iter().filter(|c| c.is_some()).count()
            + usize::from(self.at_a_glance.is_some())
            + usize::from(self.overview.is_some())
            + usize::from(self.capital.is_some())
            + usize::from(self.end_use_products.is_some())
    }
}

// ── Tests ──
