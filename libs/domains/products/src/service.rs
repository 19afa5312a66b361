use axum_helpers::errors::validation_message;
use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    Comment, CreateProduct, Message, NewComment, NewMessage, NewReview, Product, ProductEntry,
    Review,
};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

fn validate<T: Validate>(input: &T) -> ProductResult<()> {
    input
        .validate()
        .map_err(|e| ProductError::Validation(validation_message(&e)))
}

/// Ids that are not UUIDs cannot name a product, so they are reported as
/// not found rather than as bad input.
fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| ProductError::NotFound(id.to_string()))
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip_all)]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        validate(&input)?;
        self.repository.create(Product::new(input)).await
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Blank queries are rejected instead of matching every product.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: Option<&str>) -> ProductResult<Vec<Product>> {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return Err(ProductError::Validation(
                "Search query is required".to_string(),
            ));
        }
        self.repository.search(query).await
    }

    #[instrument(skip(self, input), fields(product_id = %product_id))]
    pub async fn add_comment(&self, product_id: &str, input: NewComment) -> ProductResult<()> {
        validate(&input)?;
        let id = parse_id(product_id)?;

        let comment = Comment {
            text: input.text.trim().to_string(),
            created_at: Utc::now(),
        };
        self.repository
            .push_entry(id, ProductEntry::Comment(comment))
            .await
    }

    /// `sender` is the caller's verified role.
    #[instrument(skip(self, input), fields(product_id = %product_id, sender = %sender))]
    pub async fn add_message(
        &self,
        product_id: &str,
        sender: &str,
        input: NewMessage,
    ) -> ProductResult<()> {
        validate(&input)?;
        let id = parse_id(product_id)?;

        let message = Message {
            sender: sender.to_string(),
            text: input.text.trim().to_string(),
            created_at: Utc::now(),
        };
        self.repository
            .push_entry(id, ProductEntry::Message(message))
            .await
    }

    #[instrument(skip(self, input), fields(product_id = %product_id))]
    pub async fn add_review(&self, product_id: &str, input: NewReview) -> ProductResult<()> {
        validate(&input)?;
        let id = parse_id(product_id)?;

        let rating = input.rating.ok_or_else(|| {
            ProductError::Validation("Review text and rating are required".to_string())
        })?;
        let review = Review {
            text: input.text.trim().to_string(),
            rating,
            created_at: Utc::now(),
        };
        self.repository
            .push_entry(id, ProductEntry::Review(review))
            .await
    }

    async fn get_product(&self, product_id: &str) -> ProductResult<Product> {
        let id = parse_id(product_id)?;
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()))
    }

    pub async fn list_comments(&self, product_id: &str) -> ProductResult<Vec<Comment>> {
        Ok(self.get_product(product_id).await?.comments)
    }

    pub async fn list_messages(&self, product_id: &str) -> ProductResult<Vec<Message>> {
        Ok(self.get_product(product_id).await?.messages)
    }

    pub async fn list_reviews(&self, product_id: &str) -> ProductResult<Vec<Review>> {
        Ok(self.get_product(product_id).await?.reviews)
    }
}
