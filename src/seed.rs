//! Sample catalogue loaded at startup: four regions, three artisans and
//! the toys they make.

use rust_decimal::Decimal;

use crate::{
    models::{NewProduct, NewRegion, NewUser},
    storage::Storage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub regions: usize,
    pub artisans: usize,
    pub products: usize,
}

const REGIONS: [(&str, &str, &str); 4] = [
    (
        "North India",
        "Discover wooden toys from Varanasi, cloth dolls from Punjab, and colorful puppets from Rajasthan.",
        "/images/regions/north-india.svg",
    ),
    (
        "South India",
        "Explore Channapatna toys from Karnataka, Kondapalli toys from Andhra Pradesh, and leather puppets.",
        "/images/regions/south-india.svg",
    ),
    (
        "East India",
        "Discover clay dolls from West Bengal, bamboo toys from Assam, and painted wooden figures.",
        "/images/regions/east-india.svg",
    ),
    (
        "West India",
        "Explore wooden toys from Gujarat, clay figures from Maharashtra, and tribal art toys.",
        "/images/regions/west-india.svg",
    ),
];

struct SeedArtisan {
    username: &'static str,
    name: &'static str,
    phone: &'static str,
    address: &'static str,
    bio: &'static str,
    region: &'static str,
}

const ARTISANS: [SeedArtisan; 3] = [
    SeedArtisan {
        username: "ramesh_kumar",
        name: "Ramesh Kumar",
        phone: "+919876543210",
        address: "Channapatna, Karnataka",
        bio: "Ramesh has been crafting Channapatna toys for over 30 years, carrying forward the legacy of his grandfather.",
        region: "South India",
    },
    SeedArtisan {
        username: "laxmi_devi",
        name: "Laxmi Devi",
        phone: "+919876543211",
        address: "Krishnanagar, West Bengal",
        bio: "Known for her intricate clay figurines depicting rural Bengali life.",
        region: "East India",
    },
    SeedArtisan {
        username: "mohan_singh",
        name: "Mohan Singh",
        phone: "+919876543212",
        address: "Jaisalmer, Rajasthan",
        bio: "A puppeteer who creates traditional kathputli puppets telling stories of Rajasthani folklore.",
        region: "North India",
    },
];

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: i64,
    category: &'static str,
    region: &'static str,
    material: &'static str,
    image_url: &'static str,
    /// Index into `ARTISANS`.
    artisan: usize,
    stock: i32,
    history: &'static str,
    cultural_significance: &'static str,
    featured: bool,
}

const PRODUCTS: [SeedProduct; 9] = [
    SeedProduct {
        name: "Channapatna Wooden Horse",
        description: "Traditional lacquered wooden toy from the toy town of Karnataka, featuring natural colors.",
        price: 1250,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/products/channapatna-wooden-horse.png",
        artisan: 0,
        stock: 15,
        history: "Channapatna toys date back to the reign of Tipu Sultan, who invited Persian artisans to train local craftsmen.",
        cultural_significance: "GI-tagged toys made with ivory wood and natural dyes, safe for children.",
        featured: true,
    },
    SeedProduct {
        name: "Bengali Clay Doll",
        description: "Hand-painted terracotta doll representing rural life traditions from Bengal.",
        price: 850,
        category: "Clay Crafts",
        region: "East India",
        material: "Clay",
        image_url: "/images/toys/clay-doll.svg",
        artisan: 1,
        stock: 20,
        history: "Krishnanagar has made lifelike clay dolls for several centuries.",
        cultural_significance: "The dolls depict rural life, folklore and deities and feature in local festivals.",
        featured: true,
    },
    SeedProduct {
        name: "Kathputli String Puppet",
        description: "Traditional Rajasthani string puppet with intricate detailing and vibrant costume.",
        price: 1750,
        category: "Puppets & Dolls",
        region: "North India",
        material: "Cloth and Wood",
        image_url: "/images/toys/kathputli.svg",
        artisan: 2,
        stock: 10,
        history: "Kathputli puppetry originated in Rajasthan over a thousand years ago among nomadic performers.",
        cultural_significance: "A form of theatrical storytelling that preserves Rajasthani folklore.",
        featured: true,
    },
    SeedProduct {
        name: "Kondapalli Bullock Cart",
        description: "Handcrafted wooden toy from Andhra Pradesh made with softwood and natural colors.",
        price: 2100,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/wooden-bullock-cart.svg",
        artisan: 0,
        stock: 8,
        history: "Kondapalli toys have been crafted near Vijayawada for over 400 years.",
        cultural_significance: "Carved from Tella Poniki softwood and displayed during festivals.",
        featured: true,
    },
    SeedProduct {
        name: "Wooden Baby Rattle",
        description: "Handcrafted baby rattle made with natural wood and non-toxic colors.",
        price: 550,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/wooden-rattle.svg",
        artisan: 0,
        stock: 25,
        history: "Wooden rattles have been part of Indian childhood for centuries.",
        cultural_significance: "Rattles are believed to aid the sensory development of babies.",
        featured: false,
    },
    SeedProduct {
        name: "Wooden Train Set",
        description: "Colorful wooden train set with engine and two compartments.",
        price: 1250,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/wooden-train.svg",
        artisan: 0,
        stock: 12,
        history: "Train toys became popular with the arrival of the railways.",
        cultural_significance: "A blend of modern influence with traditional craftsmanship.",
        featured: false,
    },
    SeedProduct {
        name: "Spinning Top",
        description: "Traditional lacquered wooden spinning top with vibrant colors.",
        price: 350,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/spinning-top.svg",
        artisan: 0,
        stock: 30,
        history: "Spinning tops, or lattu, are mentioned in ancient Indian texts.",
        cultural_significance: "Traditionally used to teach children about motion through play.",
        featured: false,
    },
    SeedProduct {
        name: "Wooden Elephant",
        description: "Intricately carved and painted wooden elephant figurine.",
        price: 850,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/wooden-elephant.svg",
        artisan: 0,
        stock: 15,
        history: "Elephant figurines have been carved for centuries and are associated with Lord Ganesha.",
        cultural_significance: "Considered auspicious and often given as gifts.",
        featured: false,
    },
    SeedProduct {
        name: "Miniature Dollhouse",
        description: "Hand-crafted wooden dollhouse with furniture and figurines.",
        price: 1950,
        category: "Wooden Toys",
        region: "South India",
        material: "Wood",
        image_url: "/images/toys/dollhouse.svg",
        artisan: 0,
        stock: 5,
        history: "Miniature houses depict traditional rural homes and their architecture.",
        cultural_significance: "Used to teach children about domestic life and social structures.",
        featured: false,
    },
];

/// Loads the sample catalogue into `storage`. Meant for an empty store:
/// products reference artisans by the ids created here.
pub fn load_sample_data(storage: &dyn Storage) -> SeedSummary {
    for (name, description, image_url) in REGIONS {
        storage.create_region(NewRegion {
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        });
    }

    let artisan_ids: Vec<i32> = ARTISANS
        .iter()
        .map(|artisan| {
            storage
                .create_user(NewUser {
                    username: artisan.username.to_string(),
                    password: "password123".to_string(),
                    name: artisan.name.to_string(),
                    email: format!("{}@example.com", first_name(artisan.name)),
                    phone_number: Some(artisan.phone.to_string()),
                    address: Some(artisan.address.to_string()),
                    is_artisan: true,
                    bio: Some(artisan.bio.to_string()),
                    region: Some(artisan.region.to_string()),
                })
                .id
        })
        .collect();

    let mut products = 0;
    for product in &PRODUCTS {
        let Some(&artisan_id) = artisan_ids.get(product.artisan) else {
            tracing::warn!(product = product.name, "seed product has no artisan, skipped");
            continue;
        };
        storage.create_product(NewProduct {
            name: product.name.to_string(),
            description: product.description.to_string(),
            price: Decimal::from(product.price),
            category: product.category.to_string(),
            region: product.region.to_string(),
            material: product.material.to_string(),
            image_url: product.image_url.to_string(),
            artisan_id,
            stock: product.stock,
            history: Some(product.history.to_string()),
            cultural_significance: Some(product.cultural_significance.to_string()),
            featured: product.featured,
        });
        products += 1;
    }

    let summary = SeedSummary {
        regions: REGIONS.len(),
        artisans: artisan_ids.len(),
        products,
    };
    tracing::info!(
        regions = summary.regions,
        artisans = summary.artisans,
        products = summary.products,
        "sample data loaded"
    );
    summary
}

fn first_name(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn loads_the_whole_catalogue() {
        let store = MemStorage::new();
        let summary = load_sample_data(&store);

        assert_eq!(
            summary,
            SeedSummary {
                regions: 4,
                artisans: 3,
                products: 9
            }
        );
        assert_eq!(store.get_artisans().len(), 3);
        assert_eq!(store.get_featured_products().len(), 4);
        assert_eq!(
            store
                .get_user_by_username("laxmi_devi")
                .map(|u| u.email),
            Some("laxmi@example.com".to_string())
        );
    }

    #[test]
    fn every_product_region_names_a_seeded_region() {
        let store = MemStorage::new();
        load_sample_data(&store);

        for product in store.get_products() {
            assert!(
                store.get_region_by_name(&product.region).is_some(),
                "{} points at unknown region {}",
                product.name,
                product.region
            );
        }
        let ramesh = store
            .get_user_by_username("ramesh_kumar")
            .expect("seeded artisan");
        assert_eq!(store.get_products_by_artisan(ramesh.id).len(), 7);
    }
}
