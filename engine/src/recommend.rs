use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use core::{BucketMap, MaxHeap, PrefixTree};
use tracing::debug;

use crate::normalize::normalize_name;
use crate::{Interaction, InteractionKind, Product, ProductId, SearchBy, UserId};

pub const DEFAULT_DECAY_FACTOR: f64 = 0.95;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// In-memory collaborative recommender.
///
/// Interactions are held in a pair of mirrored maps (user keyed and product
/// keyed); the catalog is held alongside in a details map, a category map,
/// and a prefix tree over normalized product names. All state lives for the
/// lifetime of one engine instance; nothing is persisted.
pub struct RecommendationEngine {
    user_to_product: BucketMap<UserId, BucketMap<ProductId, Interaction>>,
    product_to_user: BucketMap<ProductId, BucketMap<UserId, Interaction>>,
    product_details: BucketMap<ProductId, Product>,
    category_to_products: BucketMap<String, HashSet<ProductId>>,
    name_index: PrefixTree<ProductId>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            user_to_product: BucketMap::new(),
            product_to_user: BucketMap::new(),
            product_details: BucketMap::new(),
            category_to_products: BucketMap::new(),
            name_index: PrefixTree::new(),
        }
    }

    /// Register a product: details map, name index, category set. Re-adding
    /// an id overwrites the stored details.
    pub fn add_product(&mut self, id: &str, name: &str, category: &str) {
        debug!(product = id, name, category, "add product");
        self.product_details.insert(
            id.to_string(),
            Product {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
            },
        );
        self.name_index.insert(&normalize_name(name), id.to_string());
        if !self.category_to_products.contains(&category.to_string()) {
            self.category_to_products.insert(category.to_string(), HashSet::new());
        }
        if let Some(set) = self.category_to_products.get_mut(&category.to_string()) {
            set.insert(id.to_string());
        }
    }

    /// Record an interaction stamped with the current time.
    pub fn add_interaction(&mut self, user: &str, product: &str, score: f64, kind: InteractionKind) {
        self.add_interaction_at(user, product, score, kind, now_secs());
    }

    /// Record an interaction with an explicit timestamp. The pair of mirrored
    /// maps stays symmetric, and a repeated (user, product) pair overwrites
    /// the previous interaction rather than accumulating.
    pub fn add_interaction_at(
        &mut self,
        user: &str,
        product: &str,
        score: f64,
        kind: InteractionKind,
        timestamp: f64,
    ) {
        debug!(user, product, score, %kind, "add interaction");
        let interaction = Interaction { score, kind, timestamp };

        if !self.user_to_product.contains(&user.to_string()) {
            self.user_to_product.insert(user.to_string(), BucketMap::new());
        }
        if let Some(products) = self.user_to_product.get_mut(&user.to_string()) {
            products.insert(product.to_string(), interaction);
        }

        if !self.product_to_user.contains(&product.to_string()) {
            self.product_to_user.insert(product.to_string(), BucketMap::new());
        }
        if let Some(users) = self.product_to_user.get_mut(&product.to_string()) {
            users.insert(user.to_string(), interaction);
        }
    }

    /// Mean of per-product averaged scores over the two users' shared
    /// product set; 0 when they share nothing (or a user is unknown).
    ///
    /// The value is deliberately not normalized against catalog size or score
    /// range, so it scales with absolute interaction scores.
    pub fn compute_similarity(&self, user1: &str, user2: &str) -> f64 {
        let (Some(p1), Some(p2)) = (
            self.user_to_product.get(&user1.to_string()),
            self.user_to_product.get(&user2.to_string()),
        ) else {
            return 0.0;
        };

        let mut total = 0.0;
        let mut common = 0usize;
        for (product, i1) in p1.iter() {
            if let Some(i2) = p2.get(product) {
                total += (i1.score + i2.score) / 2.0;
                common += 1;
            }
        }
        if common == 0 {
            0.0
        } else {
            total / common as f64
        }
    }

    /// Top-k products for `user`, scored across every other user: each
    /// candidate's interaction score is attenuated by `decay_factor` per day
    /// of age and weighted by the pairwise similarity, summed per product,
    /// then ranked through a max-heap. Products the user already interacted
    /// with are never recommended. An unknown user gets an empty list.
    pub fn get_recommendations(
        &self,
        user: &str,
        k: usize,
        decay_factor: f64,
    ) -> Vec<(ProductId, f64)> {
        if !self.user_to_product.contains(&user.to_string()) {
            return Vec::new();
        }
        let seen = self.interacted_products(user);
        let now = now_secs();

        let mut totals: HashMap<ProductId, f64> = HashMap::new();
        for (other, products) in self.user_to_product.iter() {
            if other.as_str() == user {
                continue;
            }
            let similarity = self.compute_similarity(user, other);
            for (product, interaction) in products.iter() {
                if seen.contains(product) {
                    continue;
                }
                let age = (now - interaction.timestamp).max(0.0);
                let weighted = interaction.score * decay_factor.powf(age / SECONDS_PER_DAY);
                *totals.entry(product.clone()).or_insert(0.0) += weighted * similarity;
            }
        }
        debug!(user, candidates = totals.len(), "scored recommendation candidates");

        let mut heap = MaxHeap::new();
        for (product, total) in totals {
            heap.push(total, product);
        }
        let mut out = Vec::with_capacity(k.min(heap.len()));
        for _ in 0..k.min(heap.len()) {
            if let Some((total, product)) = heap.pop() {
                out.push((product, total));
            }
        }
        out
    }

    /// Look up products by name prefix or by exact category. Misses yield an
    /// empty list. Results are sorted by product id.
    pub fn search_products(&self, query: &str, search_by: SearchBy) -> Vec<(ProductId, String)> {
        let ids: Vec<ProductId> = match search_by {
            SearchBy::Name => self
                .name_index
                .search(&normalize_name(query))
                .into_iter()
                .collect(),
            SearchBy::Category => self
                .category_to_products
                .get(&query.to_string())
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
        };
        let mut out: Vec<(ProductId, String)> = ids
            .into_iter()
            .filter_map(|id| {
                let name = self.product_details.get(&id)?.name.clone();
                Some((id, name))
            })
            .collect();
        out.sort();
        out
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.product_details.get(&id.to_string())
    }

    /// Every user with at least one recorded interaction.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.user_to_product.keys()
    }

    /// Every product with at least one recorded interaction.
    pub fn products_with_interactions(&self) -> impl Iterator<Item = &ProductId> {
        self.product_to_user.keys()
    }

    /// All interactions recorded for `user`, empty for an unknown user.
    pub fn interactions_of_user(&self, user: &str) -> impl Iterator<Item = (&ProductId, &Interaction)> {
        self.user_to_product
            .get(&user.to_string())
            .into_iter()
            .flat_map(|m| m.iter())
    }

    /// All interactions recorded on `product`, empty for an unknown product.
    pub fn interactions_on_product(
        &self,
        product: &str,
    ) -> impl Iterator<Item = (&UserId, &Interaction)> {
        self.product_to_user
            .get(&product.to_string())
            .into_iter()
            .flat_map(|m| m.iter())
    }

    fn interacted_products(&self, user: &str) -> HashSet<ProductId> {
        self.interactions_of_user(user)
            .map(|(product, _)| product.clone())
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
