use serde::Serialize;
use std::collections::HashMap;

/// Dialog-action response returned to the conversational runtime.
///
/// The field names on the wire (`sessionAttributes`, `dialogAction`,
/// `fulfillmentState`, `contentType`) are part of the runtime's schema and
/// must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub session_attributes: HashMap<String, String>,
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
    pub fulfillment_state: FulfillmentState,
    pub message: Message,
}

/// The handler only ever closes the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialogActionType {
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    PlainText,
}

impl FulfillmentResponse {
    /// Success response: `Close` / `Fulfilled` with a plain-text message.
    pub fn close_fulfilled(content: impl Into<String>) -> Self {
        Self::close(FulfillmentState::Fulfilled, content)
    }

    /// Failure response: `Close` / `Failed` with a plain-text message.
    pub fn close_failed(content: impl Into<String>) -> Self {
        Self::close(FulfillmentState::Failed, content)
    }

    fn close(state: FulfillmentState, content: impl Into<String>) -> Self {
        Self {
            session_attributes: HashMap::new(),
            dialog_action: DialogAction {
                action_type: DialogActionType::Close,
                fulfillment_state: state,
                message: Message {
                    content_type: ContentType::PlainText,
                    content: content.into(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fulfilled_response_matches_runtime_schema() {
        let response = FulfillmentResponse::close_fulfilled("all good");
        let value = serde_json::to_value(&response).expect("response must serialize");

        assert_eq!(
            value,
            json!({
                "sessionAttributes": {},
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Fulfilled",
                    "message": {
                        "contentType": "PlainText",
                        "content": "all good"
                    }
                }
            })
        );
    }

    #[test]
    fn failed_response_keeps_close_action() {
        let response = FulfillmentResponse::close_failed("sorry");
        let value = serde_json::to_value(&response).expect("response must serialize");

        assert_eq!(value["dialogAction"]["type"], "Close");
        assert_eq!(value["dialogAction"]["fulfillmentState"], "Failed");
        assert_eq!(value["dialogAction"]["message"]["content"], "sorry");
    }
}
