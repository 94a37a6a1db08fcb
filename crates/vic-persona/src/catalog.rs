//! Curated product catalog, embedded at compile time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vic_core::random::{self, RandomSource};

use crate::error::Result;

const EMBEDDED_CATALOG: &str = include_str!("../resources/products.json");

/// Style used when a category has no list for the requested one
pub const FALLBACK_STYLE: &str = "minimalist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub brand: String,
    pub description: String,
    pub url: String,
}

impl Product {
    /// Markdown block used in chat replies
    pub fn render(&self) -> String {
        format!(
            "**{}** — {}\n{}\n{} — [Shop Here]({})\n\n",
            self.brand, self.name, self.description, self.price, self.url
        )
    }
}

/// Styled product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Outerwear,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Outerwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Outerwear => "outerwear",
        }
    }
}

type StyledProducts = HashMap<String, Vec<Product>>;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    tops: StyledProducts,
    bottoms: StyledProducts,
    shoes: StyledProducts,
    outerwear: StyledProducts,
    accessories: Vec<Product>,
}

impl Catalog {
    /// The catalog shipped with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn category(&self, category: Category) -> &StyledProducts {
        match category {
            Category::Tops => &self.tops,
            Category::Bottoms => &self.bottoms,
            Category::Shoes => &self.shoes,
            Category::Outerwear => &self.outerwear,
        }
    }

    /// Products for `style`, or the minimalist list when there is none
    pub fn products_by_style(&self, category: Category, style: &str) -> &[Product] {
        let lists = self.category(category);
        lists
            .get(style)
            .or_else(|| lists.get(FALLBACK_STYLE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn accessories(&self) -> &[Product] {
        &self.accessories
    }

    /// A shuffled mix across every styled category, at most `count` long
    pub fn mixed(&self, count: usize, style: &str, rng: &dyn RandomSource) -> Vec<Product> {
        let mut pool: Vec<Product> = Category::ALL
            .iter()
            .flat_map(|category| self.products_by_style(*category, style).iter().cloned())
            .collect();
        random::shuffle(rng, &mut pool);
        pool.truncate(count);
        pool
    }
}
