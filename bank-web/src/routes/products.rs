//! Product catalog route handlers.
//!
//! Static demo offers. Rates here are display copy for the demo, not
//! inputs to the calculators.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;

/// One product offer.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Headline APR or APY, where one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_pct: Option<f64>,
    pub description: &'static str,
}

/// Product catalog response.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

const PRODUCTS: &[Product] = &[
    Product {
        id: "loan-mortgage-30",
        name: "30-Year Fixed Mortgage",
        category: "loans",
        rate_pct: Some(6.5),
        description: "Fixed rate for the life of the loan, 3% minimum down.",
    },
    Product {
        id: "loan-auto-new",
        name: "New Auto Loan",
        category: "loans",
        rate_pct: Some(7.0),
        description: "Terms from 36 to 72 months on new vehicles.",
    },
    Product {
        id: "loan-personal",
        name: "Personal Loan",
        category: "loans",
        rate_pct: Some(11.9),
        description: "Unsecured, 12 to 60 month terms, no origination fee.",
    },
    Product {
        id: "card-cashback",
        name: "Everyday Cashback Card",
        category: "cards",
        rate_pct: Some(24.9),
        description: "2% back on groceries and gas, no annual fee.",
    },
    Product {
        id: "card-travel",
        name: "Travel Rewards Card",
        category: "cards",
        rate_pct: Some(21.9),
        description: "3x points on travel and dining, $95 annual fee.",
    },
    Product {
        id: "ins-home",
        name: "Homeowners Insurance",
        category: "insurance",
        rate_pct: None,
        description: "Bundled dwelling and liability coverage.",
    },
    Product {
        id: "ins-auto",
        name: "Auto Insurance",
        category: "insurance",
        rate_pct: None,
        description: "Liability, collision, and comprehensive options.",
    },
    Product {
        id: "inv-brokerage",
        name: "Self-Directed Brokerage",
        category: "investments",
        rate_pct: None,
        description: "Commission-free trades on stocks and ETFs.",
    },
    Product {
        id: "inv-cd-12",
        name: "12-Month Certificate of Deposit",
        category: "investments",
        rate_pct: Some(4.35),
        description: "Fixed APY, $500 minimum deposit.",
    },
];

/// List the full product catalog.
pub async fn list_products() -> Json<ProductsResponse> {
    Json(ProductsResponse {
        products: PRODUCTS.to_vec(),
    })
}

/// List products in one category.
pub async fn get_category(
    Path(category): Path<String>,
) -> Result<Json<ProductsResponse>, AppError> {
    let products: Vec<Product> = PRODUCTS
        .iter()
        .filter(|p| p.category == category)
        .copied()
        .collect();

    if products.is_empty() {
        return Err(AppError::NotFound(format!(
            "Unknown product category: {}",
            category
        )));
    }

    Ok(Json(ProductsResponse { products }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_categories() {
        for product in PRODUCTS {
            assert!(matches!(
                product.category,
                "loans" | "cards" | "insurance" | "investments"
            ));
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<&str> = PRODUCTS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PRODUCTS.len());
    }
}
