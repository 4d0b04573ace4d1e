//! Row predicates for the list views.
//!
//! All active dimensions are combined with AND; an unset dimension matches
//! every row.

use rust_decimal::Decimal;

use crate::domain::{Category, DeliveryStatus, Order, PaymentStatus, Product};

/// A predicate over table rows.
pub trait RowFilter<T> {
    fn matches(&self, row: &T) -> bool;
}

/// Inclusive price bounds. Constructed bounds are always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    pub fn new(a: Decimal, b: Decimal) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Lowercased search needle; blank input means no search.
fn needle(search: &str) -> Option<String> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    search: Option<String>,
    pub category: Option<Category>,
    pub price_range: Option<PriceRange>,
}

impl ProductFilter {
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Matches name or SKU, case-insensitively.
    pub fn set_search(&mut self, search: &str) {
        self.search = needle(search);
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }
}

impl RowFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map_or(true, |n| contains_ci(&product.name, n) || contains_ci(&product.sku, n));
        let matches_category = self.category.map_or(true, |c| product.category == c);
        let matches_price = self.price_range.map_or(true, |r| r.contains(product.price));

        matches_search && matches_category && matches_price
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    search: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_status: Option<DeliveryStatus>,
}

impl OrderFilter {
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Matches order id or client name, case-insensitively.
    pub fn set_search(&mut self, search: &str) {
        self.search = needle(search);
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn with_delivery_status(mut self, status: DeliveryStatus) -> Self {
        self.delivery_status = Some(status);
        self
    }
}

impl RowFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map_or(true, |n| contains_ci(&order.id, n) || contains_ci(&order.client_name, n));
        let matches_payment = self.payment_status.map_or(true, |s| order.payment_status == s);
        let matches_delivery = self.delivery_status.map_or(true, |s| order.delivery_status == s);

        matches_search && matches_payment && matches_delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;
    use rust_decimal_macros::dec;

    fn names(filter: &ProductFilter) -> Vec<String> {
        seed::products()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn test_search_hits_name_or_sku() {
        assert_eq!(names(&ProductFilter::default().with_search("CHAIR")), ["Office Chair"]);
        assert_eq!(names(&ProductFilter::default().with_search("cloth-")), ["Cotton T-Shirt"]);
        assert_eq!(names(&ProductFilter::default().with_search("   ")).len(), 3);
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let filter = ProductFilter::default()
            .with_search("t")
            .with_category(Category::Electronics)
            .with_price_range(PriceRange::new(dec!(200), dec!(100)));
        assert_eq!(names(&filter), ["Wireless Headphones"]);

        let filter = filter.with_price_range(PriceRange::new(dec!(0), dec!(129.98)));
        assert!(names(&filter).is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange::new(dec!(29.99), dec!(129.99));
        assert!(range.contains(dec!(29.99)));
        assert!(range.contains(dec!(129.99)));
        assert!(!range.contains(dec!(130)));
        assert_eq!(range.min(), dec!(29.99));
    }

    #[test]
    fn test_order_filter() {
        let filter = OrderFilter::default()
            .with_search("ord-00")
            .with_delivery_status(DeliveryStatus::Shipped);
        let ids: Vec<_> = seed::orders().into_iter().filter(|o| filter.matches(o)).map(|o| o.id).collect();
        assert_eq!(ids, ["ORD-002", "ORD-003"]);

        let filter = OrderFilter::default().with_search("smith").with_payment_status(PaymentStatus::Paid);
        assert!(!seed::orders().iter().any(|o| filter.matches(o)));
    }
}
