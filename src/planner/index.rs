use std::collections::BTreeMap;

use crate::error::{MenuError, Result};
use crate::models::{CategoryTag, Product};

/// Products partitioned by category tag, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    buckets: BTreeMap<CategoryTag, Vec<Product>>,
}

impl CategoryIndex {
    pub fn new<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let mut buckets: BTreeMap<CategoryTag, Vec<Product>> = BTreeMap::new();
        for tag in CategoryTag::ALL {
            buckets.insert(tag, Vec::new());
        }
        for product in products {
            buckets.entry(product.category).or_default().push(product);
        }
        Self { buckets }
    }

    /// Products bearing `tag`; empty if none.
    pub fn bucket(&self, tag: CategoryTag) -> &[Product] {
        self.buckets.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bucket sizes for every tag, including empty ones.
    pub fn counts(&self) -> Vec<(CategoryTag, usize)> {
        CategoryTag::ALL
            .into_iter()
            .map(|tag| (tag, self.bucket(tag).len()))
            .collect()
    }

    /// Total products across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every drawable bucket must hold a product that can make progress.
    ///
    /// A bucket of only zero-weight products is treated as empty: its draws
    /// never reduce the remaining budget.
    pub fn ensure_drawable(&self) -> Result<()> {
        for tag in CategoryTag::DRAWABLE {
            let usable = self
                .bucket(tag)
                .iter()
                .any(|p| p.portion_weight_grams > 0.0);
            if !usable {
                return Err(MenuError::Precondition(tag));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("Chicken", 150.0, 31.0, 3.6, 0.0, 165.0, 8.0),
            Product::new("Rice", 200.0, 2.7, 0.3, 28.0, 130.0, 6.0),
            Product::new("Oil", 15.0, 0.0, 100.0, 0.0, 884.0, 4.0),
            Product::new("Even", 100.0, 10.0, 10.0, 10.0, 170.0, 5.0),
        ]
    }

    #[test]
    fn test_partition() {
        let index = CategoryIndex::new(products());
        assert_eq!(index.len(), 4);
        assert_eq!(index.bucket(CategoryTag::Protein)[0].name, "Chicken");
        assert_eq!(index.bucket(CategoryTag::Carbs)[0].name, "Rice");
        assert_eq!(index.bucket(CategoryTag::Fat)[0].name, "Oil");
        assert_eq!(index.bucket(CategoryTag::Mixed)[0].name, "Even");
        assert!(index.ensure_drawable().is_ok());
    }

    #[test]
    fn test_counts_include_empty() {
        let index = CategoryIndex::new(products().into_iter().take(1));
        let counts = index.counts();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[0], (CategoryTag::Protein, 1));
        assert_eq!(counts[1], (CategoryTag::Fat, 0));
    }

    #[test]
    fn test_ensure_drawable_empty_bucket() {
        let without_oil: Vec<Product> =
            products().into_iter().filter(|p| p.name != "Oil").collect();
        let index = CategoryIndex::new(without_oil);
        let err = index.ensure_drawable().unwrap_err();
        assert!(matches!(err, MenuError::Precondition(CategoryTag::Fat)));
    }

    #[test]
    fn test_ensure_drawable_zero_weight_bucket() {
        let mut items = products();
        items[2].portion_weight_grams = 0.0;
        let index = CategoryIndex::new(items);
        assert!(matches!(
            index.ensure_drawable(),
            Err(MenuError::Precondition(CategoryTag::Fat))
        ));
    }
}
