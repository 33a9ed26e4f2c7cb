use serde::{Deserialize, Serialize};

use super::tool::{FunctionCall, FunctionCallOutput};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    InputText { text: String },
    InputImage { image_url: String, detail: String },
}

/// One entry of the conversation sent as `input`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputItem {
    Message {
        role: Role,
        content: Vec<ContentPart>,
    },
    FunctionCall(FunctionCall),
    FunctionCallOutput(FunctionCallOutput),
}

impl InputItem {
    /// User message carrying the prompt followed by every invoice image.
    pub fn user_with_images(prompt: &str, image_urls: &[String], detail: &str) -> Self {
        let mut content = vec![ContentPart::InputText {
            text: prompt.to_string(),
        }];
        content.extend(image_urls.iter().map(|url| ContentPart::InputImage {
            image_url: url.clone(),
            detail: detail.to_string(),
        }));

        InputItem::Message {
            role: Role::User,
            content,
        }
    }

    pub fn call_output(call_id: &str, output: String) -> Self {
        InputItem::FunctionCallOutput(FunctionCallOutput {
            call_id: call_id.to_string(),
            output,
        })
    }
}
