use serde::{Deserialize, Serialize};

use super::common::Metadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A message stored in a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    pub role: Role,
    /// Content parts in the order the server stored them.
    pub content: Vec<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Message {
    /// Concatenated value of every text part.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                MessageContent::Text { text } => Some(text.value.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// One part of a message body, selected by its `type` tag.
///
/// An unknown tag is a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextContent },
    ImageFile { image_file: ImageFile },
    ImageUrl { image_url: ImageUrl },
}

impl MessageContent {
    pub fn text<S: Into<String>>(value: S) -> Self {
        Self::Text {
            text: TextContent {
                value: value.into(),
                annotations: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<serde_json::Value>>,
}

/// What a new message is made of: plain text or explicit parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageInput {
    Text(String),
    Parts(Vec<MessageContent>),
}

impl From<&str> for MessageInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<MessageContent>> for MessageInput {
    fn from(parts: Vec<MessageContent>) -> Self {
        Self::Parts(parts)
    }
}

/// Body of `POST /v1/threads/{id}/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub role: Role,
    pub content: MessageInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateMessageRequest {
    pub fn new<C: Into<MessageInput>>(role: Role, content: C) -> Self {
        Self {
            role,
            content: content.into(),
            attachments: None,
            metadata: None,
        }
    }

    pub fn user<C: Into<MessageInput>>(content: C) -> Self {
        Self::new(Role::User, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// Filters for `GET /v1/threads/{id}/messages`. Unset filters are left out
/// of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Cursor: return messages after this message id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Cursor: return messages before this message id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl ListMessagesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn after<S: Into<String>>(mut self, cursor: S) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before<S: Into<String>>(mut self, cursor: S) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn run_id<S: Into<String>>(mut self, run_id: S) -> Self {
        self.run_id = Some(run_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn wire_message() -> serde_json::Value {
        json!({
            "id": "01JCKB6X5KQ8W3",
            "object": "thread.message",
            "thread_id": "t-1",
            "role": "assistant",
            "content": [
                {"type": "text", "text": {"value": "Hello ", "annotations": []}},
                {"type": "image_url", "image_url": {"url": "https://example.com/cat.png", "detail": "low"}},
                {"type": "text", "text": {"value": "there", "annotations": []}}
            ],
            "status": "completed",
            "created_at": 1731503720,
            "metadata": {"key": "value"}
        })
    }

    #[test]
    fn message_round_trip_keeps_part_order() {
        let message: Message = serde_json::from_value(wire_message()).unwrap();
        assert_eq!(message.content.len(), 3);
        assert!(matches!(message.content[1], MessageContent::ImageUrl { .. }));
        assert_eq!(message.text(), "Hello there");
        assert_eq!(serde_json::to_value(&message).unwrap(), wire_message());
    }

    #[test]
    fn encoding_re_emits_the_tag() {
        let value = serde_json::to_value(MessageContent::text("hi")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": {"value": "hi"}}));
    }

    #[test]
    fn missing_annotations_are_not_invented() {
        let wire = json!({"type": "text", "text": {"value": "hi"}});
        let content: MessageContent = serde_json::from_value(wire.clone()).unwrap();
        match &content {
            MessageContent::Text { text } => assert!(text.annotations.is_none()),
            other => panic!("unexpected content: {other:?}"),
        }
        assert_eq!(serde_json::to_value(&content).unwrap(), wire);
    }

    #[test]
    fn unknown_content_tag_fails() {
        let mut wire = wire_message();
        wire["content"][0] = json!({"type": "video", "video": {"url": "x"}});
        let err = serde_json::from_value::<Message>(wire).unwrap_err();
        assert!(err.to_string().contains("unknown variant `video`"));
    }

    #[test]
    fn unknown_role_fails() {
        let mut wire = wire_message();
        wire["role"] = json!("narrator");
        assert!(serde_json::from_value::<Message>(wire).is_err());
    }

    #[test]
    fn create_request_accepts_text_or_parts() {
        assert_eq!(
            serde_json::to_value(CreateMessageRequest::user("New Message")).unwrap(),
            json!({"role": "user", "content": "New Message"})
        );
        let parts = CreateMessageRequest::user(vec![MessageContent::text("a")]);
        let value = serde_json::to_value(&parts).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(serde_json::from_value::<CreateMessageRequest>(value).unwrap(), parts);
    }

    #[test]
    fn list_query_skips_unset_filters() {
        let query = ListMessagesQuery::new().limit(10).order(Order::Desc);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"limit": 10, "order": "desc"})
        );
    }
}
