use chrono::Utc;

use crate::models::{Category, Product};

/// The built-in sample catalog used when nothing usable is persisted.
pub fn seed_catalog() -> Vec<Product> {
    let now = Utc::now();
    let product = |id: &str,
                   name: &str,
                   price: f64,
                   description: &str,
                   short_description: &str,
                   category: Category,
                   sizes: &[&str],
                   image: &str,
                   featured: bool| Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        short_description: short_description.to_string(),
        category,
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        images: vec![image.to_string()],
        featured,
        has_discount: None,
        discount_percentage: None,
        created_at: now,
    };

    vec![
        product(
            "1",
            "AURA Essential Hoodie",
            89.0,
            "Premium heavyweight cotton hoodie with minimalist AURA branding. Features a relaxed oversized fit, kangaroo pocket, and ribbed cuffs. Made from 100% organic cotton for ultimate comfort.",
            "Premium heavyweight cotton hoodie with relaxed fit",
            Category::Hoodie,
            &["S", "M", "L", "XL", "XXL"],
            "/assets/hoodie-1.jpg",
            true,
        ),
        product(
            "2",
            "AURA Shadow Hoodie",
            95.0,
            "Charcoal gray hoodie crafted from premium French terry cotton. The subtle tonal AURA embroidery adds a refined touch. Double-layered hood and reinforced stitching throughout.",
            "Charcoal gray French terry cotton hoodie",
            Category::Hoodie,
            &["S", "M", "L", "XL"],
            "/assets/hoodie-2.jpg",
            true,
        ),
        product(
            "3",
            "AURA Cream Hoodie",
            99.0,
            "Luxurious cream-colored hoodie made from premium brushed fleece. Features drop shoulders and a boxy silhouette. The warm neutral tone pairs perfectly with any outfit.",
            "Luxurious cream brushed fleece hoodie",
            Category::Hoodie,
            &["M", "L", "XL", "XXL"],
            "/assets/hoodie-3.jpg",
            true,
        ),
        product(
            "4",
            "Milton Essential Sweatpants",
            75.0,
            "Classic Milton sweatpants in deep black. Crafted from heavyweight fleece with tapered leg design. Features elastic waistband with drawstring, side pockets, and ribbed ankle cuffs.",
            "Classic heavyweight fleece sweatpants",
            Category::Pants,
            &["S", "M", "L", "XL", "XXL"],
            "/assets/pants-1.jpg",
            true,
        ),
        product(
            "5",
            "Milton Shadow Sweatpants",
            79.0,
            "Premium charcoal Milton sweatpants with subtle MILTON branding. Made from ultra-soft cotton blend with a relaxed straight-leg fit. Perfect for everyday comfort.",
            "Premium charcoal cotton blend sweatpants",
            Category::Pants,
            &["S", "M", "L", "XL"],
            "/assets/pants-2.jpg",
            false,
        ),
    ]
}
