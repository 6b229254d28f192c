//! Thread read model with nested comments.

use serde_json::Value;

use crate::domain::comment::Comment;
use crate::domain::foundation::{
    string_field, verify_payload, EntityError, FieldType, PayloadViolation,
};

/// A thread as presented on fetch paths: scalar fields joined with the
/// author's username, plus an ordered comment list.
///
/// # Invariants
///
/// - Scalar fields are validated at construction and never change
/// - `comments` defaults to an empty sequence; hydration replaces the whole
///   sequence and only accepts validated [`Comment`] values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    id: String,
    title: String,
    body: String,
    date: String,
    username: String,
    comments: Vec<Comment>,
}

impl Thread {
    const NAMESPACE: &'static str = "THREAD";
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("id", FieldType::String),
        ("title", FieldType::String),
        ("body", FieldType::String),
        ("date", FieldType::String),
        ("username", FieldType::String),
    ];

    /// Constructs from already-typed storage columns, with no comments.
    pub fn new(id: String, title: String, body: String, date: String, username: String) -> Self {
        Self {
            id,
            title,
            body,
            date,
            username,
            comments: Vec::new(),
        }
    }

    /// Validates a field mapping and constructs the value object.
    ///
    /// When the mapping carries a `comments` key it must be a sequence
    /// (`THREAD.COMMENTS_NOT_ARRAY`) whose members each validate as a comment
    /// (`THREAD.COMMENTS_CONTAINS_INVALID_MEMBER`).
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        verify_payload(Self::NAMESPACE, payload, Self::FIELDS)?;

        let mut thread = Self::new(
            string_field(payload, "id"),
            string_field(payload, "title"),
            string_field(payload, "body"),
            string_field(payload, "date"),
            string_field(payload, "username"),
        );

        if let Some(comments) = payload.get("comments") {
            let items = comments.as_array().ok_or_else(|| {
                EntityError::new(Self::NAMESPACE, PayloadViolation::CommentsNotArray)
            })?;
            thread.comments = items
                .iter()
                .map(Comment::from_payload)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| {
                    EntityError::new(Self::NAMESPACE, PayloadViolation::CommentsInvalidMember)
                })?;
        }

        Ok(thread)
    }

    /// Attaches the comment list, returning the hydrated thread.
    ///
    /// Consuming builder step: the scalar thread is constructed first, then
    /// hydrated exactly once on the fetch path.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
