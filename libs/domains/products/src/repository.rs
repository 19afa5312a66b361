use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductEntry};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Products whose title or description contains `query`, ignoring case.
    /// `query` is matched literally.
    async fn search(&self, query: &str) -> ProductResult<Vec<Product>>;

    async fn get(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Appends `entry` to its sub-collection; `NotFound` if no product matched
    async fn push_entry(&self, id: Uuid, entry: ProductEntry) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn search(&self, query: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| p.matches(query)).cloned().collect())
    }

    async fn get(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn push_entry(&self, id: Uuid, entry: ProductEntry) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        match entry {
            ProductEntry::Comment(comment) => product.comments.push(comment),
            ProductEntry::Message(message) => product.messages.push(message),
            ProductEntry::Review(review) => product.reviews.push(review),
        }
        Ok(())
    }
}
