//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductEntry};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>("products"),
        }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
        }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": id.to_string() }
    }

    /// Case-insensitive literal substring match on title or description
    fn search_filter(query: &str) -> Document {
        let pattern = regex::escape(query);
        doc! {
            "$or": [
                { "title": { "$regex": &pattern, "$options": "i" } },
                { "description": { "$regex": &pattern, "$options": "i" } },
            ]
        }
    }

    fn push_update(entry: &ProductEntry) -> ProductResult<Document> {
        let value = match entry {
            ProductEntry::Comment(comment) => to_bson(comment)?,
            ProductEntry::Message(message) => to_bson(message)?,
            ProductEntry::Review(review) => to_bson(review)?,
        };
        let mut push = Document::new();
        push.insert(entry.field(), value);
        Ok(doc! { "$push": push })
    }

    async fn find_sorted(&self, filter: Document) -> ProductResult<Vec<Product>> {
        // UUID v7 strings sort by creation time.
        let cursor = self.collection.find(filter).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;
        tracing::info!("Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        self.find_sorted(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> ProductResult<Vec<Product>> {
        self.find_sorted(Self::search_filter(query)).await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.collection.find_one(Self::id_filter(id)).await?)
    }

    #[instrument(skip(self, entry), fields(field = entry.field()))]
    async fn push_entry(&self, id: Uuid, entry: ProductEntry) -> ProductResult<()> {
        let result = self
            .collection
            .update_one(Self::id_filter(id), Self::push_update(&entry)?)
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }
        tracing::debug!("Appended to {}", entry.field());
        Ok(())
    }
}
