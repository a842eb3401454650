//! Static tool catalog advertised through `tools/list`.

use serde::Serialize;
use serde_json::Value;

use crate::schema::{ArgumentValidator, SchemaValidationError};

pub const ANALYZE_YOUTUBE: &str = "analyze_youtube";

/// Declarative description of one tool, as returned by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn analyze_youtube_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: ANALYZE_YOUTUBE.into(),
        description: "Analyze a YouTube video's transcript and visual content using Gemini API"
            .into(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "youtube_url": {
                    "type": "string",
                    "description": "The YouTube URL to analyze"
                },
                "prompt": {
                    "type": "string",
                    "description": "The analysis prompt/question about the video"
                }
            },
            "required": ["youtube_url", "prompt"]
        }),
    }
}

pub struct CatalogEntry {
    pub descriptor: ToolDescriptor,
    pub validator: ArgumentValidator,
}

/// Tool descriptors with their compiled argument validators, in
/// advertisement order. Immutable once built.
pub struct ToolCatalog {
    entries: Vec<CatalogEntry>,
}

impl ToolCatalog {
    pub fn new(descriptors: Vec<ToolDescriptor>) -> Result<Self, SchemaValidationError> {
        let entries = descriptors
            .into_iter()
            .map(|descriptor| {
                let validator = ArgumentValidator::compile(&descriptor.input_schema)?;
                Ok(CatalogEntry { descriptor, validator })
            })
            .collect::<Result<Vec<_>, SchemaValidationError>>()?;
        Ok(Self { entries })
    }

    pub fn baseline() -> Result<Self, SchemaValidationError> {
        Self::new(vec![analyze_youtube_descriptor()])
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.descriptor.name == name)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
