use crate::ErrorLocation;
use crate::error::model_error::ModelError;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceVisibility {
    Private,
    Public,
    Trackable,
    Identifiable,
}

impl Default for TraceVisibility {
    fn default() -> Self {
        TraceVisibility::Private
    }
}

impl Display for TraceVisibility {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        let value = match self {
            TraceVisibility::Private => "private",
            TraceVisibility::Public => "public",
            TraceVisibility::Trackable => "trackable",
            TraceVisibility::Identifiable => "identifiable",
        };
        formatter.write_str(value)
    }
}

/// A GPS trace file plus the metadata `gpx/create` requires.
#[derive(Debug, Clone, PartialEq)]
pub struct GpxUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
    pub description: String,
    pub tags: Vec<String>,
    pub visibility: TraceVisibility,
}

impl GpxUpload {
    /// Tags as the API expects them: one comma-separated string.
    pub fn tags_field(&self) -> String {
        self.tags.join(",")
    }
}

/// Builder for creating validated GpxUpload instances.
#[derive(Debug, Default)]
pub struct GpxUploadBuilder {
    file_name: Option<String>,
    contents: Option<Vec<u8>>,
    description: Option<String>,
    tags: Vec<String>,
    visibility: TraceVisibility,
}

impl GpxUploadBuilder {
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_contents(mut self, contents: impl Into<Vec<u8>>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_visibility(mut self, visibility: TraceVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Build the GpxUpload with validation.
    #[track_caller]
    pub fn build(self) -> Result<GpxUpload, ModelError> {
        let file_name = self.file_name.ok_or_else(|| ModelError::Validation {
            message: String::from("File name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if file_name.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("File name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let contents = self.contents.ok_or_else(|| ModelError::Validation {
            message: String::from("Trace contents are required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if contents.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Trace contents cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let description = self.description.ok_or_else(|| ModelError::Validation {
            message: String::from("Description is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if description.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Description cannot be blank"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(tag) = self.tags.iter().find(|tag| tag.contains(',')) {
            return Err(ModelError::Validation {
                message: format!("Tag cannot contain a comma: {tag}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(GpxUpload {
            file_name,
            contents,
            description,
            tags: self.tags,
            visibility: self.visibility,
        })
    }
}
