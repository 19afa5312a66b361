use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product listing with its embedded, append-only sub-collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", with = "database::mongodb::uuid_string")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Name of an uploaded asset, served from `/uploads/<file>`
    pub file: String,
    pub seller_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            file: input.file.trim().to_string(),
            seller_name: input.seller_name.trim().to_string(),
            created_at: Utc::now(),
            comments: Vec::new(),
            messages: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Role of the authenticated sender, `buyer` or `seller`
    pub sender: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub text: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

/// One item appended to a product's sub-collection
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEntry {
    Comment(Comment),
    Message(Message),
    Review(Review),
}

impl ProductEntry {
    /// Name of the embedded array this entry is pushed onto
    pub fn field(&self) -> &'static str {
        match self {
            ProductEntry::Comment(_) => "comments",
            ProductEntry::Message(_) => "messages",
            ProductEntry::Review(_) => "reviews",
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProduct {
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    #[schema(example = "Handwoven basket")]
    pub title: String,
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    pub description: String,
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    #[schema(example = "0192b3c4d5e6f7a8b9c0d1e2f3a4b5c6.jpg")]
    pub file: String,
    #[validate(custom(function = "axum_helpers::not_blank", message = "All fields are required"))]
    pub seller_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewComment {
    #[validate(custom(function = "axum_helpers::not_blank", message = "Comment text is required"))]
    pub text: String,
}

/// Message body. The sender is taken from the caller's token.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewMessage {
    #[validate(custom(function = "axum_helpers::not_blank", message = "Message text is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct NewReview {
    #[validate(custom(
        function = "axum_helpers::not_blank",
        message = "Review text and rating are required"
    ))]
    pub text: String,
    #[validate(
        required(message = "Review text and rating are required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring of the title or description
    pub query: Option<String>,
}
