use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::portion::portion_weight_grams;
use crate::error::Result;
use crate::models::Product;

/// One row of the scored product CSV.
///
/// Numeric columns are read as text: exports leave blanks and `N/A`
/// where a value could not be obtained.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Product Name")]
    name: String,

    #[serde(rename = "PLU", default)]
    plu: Option<String>,

    #[serde(rename = "UOM", default)]
    uom: Option<String>,

    #[serde(rename = "Step", default)]
    step: Option<String>,

    #[serde(rename = "Property Clarification", default)]
    clarification: Option<String>,

    #[serde(rename = "Weight", default)]
    weight: Option<String>,

    #[serde(rename = "Nutrients Protein", default)]
    protein: Option<String>,

    #[serde(rename = "Nutrients Fat", default)]
    fat: Option<String>,

    #[serde(rename = "Nutrients Carbs", default)]
    carbs: Option<String>,

    #[serde(rename = "Nutrients Calories", default)]
    calories: Option<String>,

    #[serde(rename = "Score", default)]
    score: Option<String>,

    #[serde(rename = "Desirability", default)]
    desirability: Option<String>,

    #[serde(rename = "Subcategory ID", default)]
    subcategory_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubcategoryRow {
    #[serde(rename = "Subcategory ID")]
    id: String,

    #[serde(rename = "Desirability", default)]
    desirability: Option<String>,
}

/// Parse a numeric cell; blank or non-numeric cells yield `None`.
fn number(cell: &Option<String>) -> Option<f64> {
    cell.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.replace(',', ".").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl CatalogRow {
    fn label(&self) -> String {
        match &self.plu {
            Some(plu) if !plu.is_empty() => format!("{} (PLU {})", self.name, plu),
            _ => self.name.clone(),
        }
    }

    /// Explicit weight if usable, otherwise derived from unit and pack text.
    fn resolve_weight(&self) -> Option<f64> {
        number(&self.weight).filter(|w| *w >= 0.0).or_else(|| {
            portion_weight_grams(
                self.uom.as_deref().unwrap_or_default(),
                number(&self.step),
                self.clarification.as_deref().unwrap_or_default(),
            )
        })
    }

    fn into_product(self, desirability_map: &HashMap<String, f64>) -> Option<Product> {
        let Some(weight) = self.resolve_weight() else {
            warn!(product = %self.label(), "dropping product with unknown portion weight");
            return None;
        };

        let desirability = number(&self.desirability).or_else(|| {
            self.subcategory_id
                .as_ref()
                .and_then(|id| desirability_map.get(id.trim()).copied())
        });

        let mut product = Product::new(
            self.name.trim(),
            weight,
            number(&self.protein).unwrap_or(0.0),
            number(&self.fat).unwrap_or(0.0),
            number(&self.carbs).unwrap_or(0.0),
            number(&self.calories).unwrap_or(0.0),
            number(&self.score).unwrap_or(0.0),
        );
        product.desirability = desirability;

        if !product.is_valid() {
            warn!(product = %self.label(), "dropping product with negative values");
            return None;
        }
        if !product.has_macros() {
            debug!(product = %product.name, "skipping product without macros");
            return None;
        }
        Some(product)
    }
}

/// Load macro-bearing products from a scored catalog CSV.
///
/// Rows that cannot be parsed, have no resolvable weight, or carry no
/// protein, fat or carbs are skipped. Desirability comes from the row's own
/// column, else from `desirability_map` by subcategory id.
pub fn load_catalog<P: AsRef<Path>>(
    path: P,
    desirability_map: &HashMap<String, f64>,
) -> Result<Vec<Product>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut products = Vec::new();

    for (line, row) in reader.deserialize::<CatalogRow>().enumerate() {
        match row {
            Ok(row) => products.extend(row.into_product(desirability_map)),
            Err(e) => warn!(row = line + 1, error = %e, "skipping unreadable catalog row"),
        }
    }

    debug!(count = products.len(), "catalog loaded");
    Ok(products)
}

/// Load `Subcategory ID -> Desirability` from a subcategory CSV.
/// Unreadable rows are skipped like in [`load_catalog`].
pub fn load_desirability_map<P: AsRef<Path>>(path: P) -> Result<HashMap<String, f64>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut map = HashMap::new();

    for (line, row) in reader.deserialize::<SubcategoryRow>().enumerate() {
        match row {
            Ok(row) => {
                if let Some(value) = number(&row.desirability) {
                    map.insert(row.id.trim().to_string(), value);
                }
            }
            Err(e) => warn!(row = line + 1, error = %e, "skipping unreadable subcategory row"),
        }
    }

    Ok(map)
}
