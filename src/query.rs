/// The query pipeline: pure search and sort over the product list
///
/// Both functions are total over any well-formed product list. The
/// pipeline always runs in a fixed order — filter first, then sort —
/// and the whole thing is recomputed from the full list on every
/// state-affecting input, so the derived list can never go stale.

use crate::state::data::{Product, SortColumn, SortDirection, SortSpec};

/// Filter products by a case-insensitive substring match on the title.
///
/// The term is trimmed first; an empty or whitespace-only term returns
/// the full list in its original order.
pub fn filter(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Sort products in place according to the active sort spec.
///
/// The sort is stable, so equal keys keep their prior relative order.
/// String columns (title, category) compare case-insensitively; numeric
/// columns (id, price) compare numerically.
pub fn sort(products: &mut [Product], spec: SortSpec) {
    products.sort_by(|a, b| {
        let ordering = match spec.column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortColumn::Price => a.price.total_cmp(&b.price),
            SortColumn::Category => category_key(a).cmp(&category_key(b)),
        };

        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Sort key for the category column.
///
/// A product without a category sorts as the empty string, so it comes
/// before every named category in ascending order. This is a deliberate
/// choice: the absence of a category is treated as "less than" any name.
fn category_key(product: &Product) -> String {
    product
        .category
        .as_ref()
        .map(|category| category.name.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: None,
            description: None,
            images: Vec::new(),
        }
    }

    fn with_category(mut p: Product, name: &str) -> Product {
        p.category = Some(Category {
            name: name.to_string(),
        });
        p
    }

    #[test]
    fn test_empty_term_is_identity() {
        let products = vec![product(3, "Zed", 10.0), product(1, "apple", 5.0)];

        let filtered = filter(&products, "");
        assert_eq!(filtered, products);

        // Whitespace-only behaves the same as empty
        let filtered = filter(&products, "   ");
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring_on_title() {
        let products = vec![
            product(1, "Wireless Mouse", 25.0),
            product(2, "USB Keyboard", 40.0),
            product(3, "Mousepad XL", 12.0),
        ];

        let filtered = filter(&products, "MOUSE");
        let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Wireless Mouse", "Mousepad XL"]);
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let products = vec![
            product(5, "b-match", 1.0),
            product(2, "a-match", 1.0),
            product(9, "no", 1.0),
            product(1, "c-match", 1.0),
        ];

        let filtered = filter(&products, "match");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 2, 1]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        // "Zed" sorts after "apple" despite uppercase Z < lowercase a in ASCII
        let mut products = vec![product(3, "Zed", 10.0), product(1, "apple", 5.0)];

        sort(&mut products, SortSpec::ascending(SortColumn::Title));

        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Zed"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut products = vec![
            product(4, "same", 1.0),
            product(2, "same", 2.0),
            product(7, "same", 3.0),
        ];

        sort(&mut products, SortSpec::ascending(SortColumn::Title));

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 7]);
    }

    #[test]
    fn test_numeric_sort_on_price_descending() {
        let mut products = vec![
            product(1, "a", 9.5),
            product(2, "b", 100.0),
            product(3, "c", 20.0),
        ];

        sort(
            &mut products,
            SortSpec {
                column: SortColumn::Price,
                direction: SortDirection::Descending,
            },
        );

        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100.0, 20.0, 9.5]);
    }

    #[test]
    fn test_missing_category_sorts_before_named_categories() {
        let mut products = vec![
            with_category(product(1, "a", 1.0), "Shoes"),
            product(2, "b", 1.0),
            with_category(product(3, "c", 1.0), "apparel"),
        ];

        sort(&mut products, SortSpec::ascending(SortColumn::Category));

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        // No category first, then "apparel" before "Shoes" (case-insensitive)
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_composes_after_filter() {
        let products = vec![
            product(3, "Pen Blue", 3.0),
            product(1, "Pencil", 1.0),
            product(2, "Notebook", 5.0),
            product(4, "Pen Red", 2.0),
        ];

        let mut derived = filter(&products, "pen");
        sort(&mut derived, SortSpec::ascending(SortColumn::Price));

        let titles: Vec<&str> = derived.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Pencil", "Pen Red", "Pen Blue"]);
    }
}
