//! The structured prompt returned by the generation service.
//!
//! Every field is optional: the response schema sent to the service is advisory, and a
//! scene must still complete when the service leaves parts of the record out.

use derive_builder::Builder;
use derive_getters::Getters;
use lumiere_error::JsonError;
use serde::{Deserialize, Deserializer, Serialize};

/// Visual treatment of the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct AnimationStyle {
    /// Overall look, e.g. "watercolor storybook"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    visual_style: Option<String>,
    /// Dominant colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color_palette: Option<String>,
    /// Lighting mood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lighting: Option<String>,
}

/// Where and when the scene takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Setting {
    /// Physical location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    /// Time of day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_of_day: Option<String>,
    /// Surroundings and atmosphere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    environment: Option<String>,
}

/// A character appearing in the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Character {
    /// Character name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// How the character looks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    appearance: Option<String>,
    /// Facial expression or emotional state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expression: Option<String>,
    /// Placement within the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
}

/// Camera framing and motion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Camera {
    /// Shot type, e.g. "wide"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shot_type: Option<String>,
    /// Camera movement, e.g. "slow pan left"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    movement: Option<String>,
    /// Camera angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    angle: Option<String>,
}

/// What happens during the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Action {
    /// Narrative description of the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// How things move on screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    motion: Option<String>,
}

/// Sound design for the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct Audio {
    /// Narrator voice-over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    narration: Option<String>,
    /// Spoken lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dialogue: Option<String>,
    /// Background music
    #[serde(default, skip_serializing_if = "Option::is_none")]
    music: Option<String>,
    /// Sound effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sound_effects: Option<String>,
}

/// Production metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct PromptMetadata {
    /// Target clip length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

/// A schema-constrained description of one animated scene.
///
/// # Examples
///
/// ```
/// use lumiere_core::{CameraBuilder, StructuredPrompt};
///
/// let prompt = StructuredPrompt::builder()
///     .page_number("1")
///     .scene_summary("A fox wakes in the meadow")
///     .camera(CameraBuilder::default().shot_type("wide").build().unwrap())
///     .build()
///     .unwrap();
///
/// let json = prompt.to_pretty_json().unwrap();
/// assert_eq!(StructuredPrompt::from_json(&json).unwrap(), prompt);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct StructuredPrompt {
    /// Page number, stored as text whether the service sent a number or a string
    #[serde(
        default,
        deserialize_with = "number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    page_number: Option<String>,
    /// One-paragraph summary of the scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scene_summary: Option<String>,
    /// Visual treatment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    animation_style: Option<AnimationStyle>,
    /// Location and time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    setting: Option<Setting>,
    /// Characters on screen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    characters: Vec<Character>,
    /// Camera work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera: Option<Camera>,
    /// Scene action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    /// Sound design
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio: Option<Audio>,
    /// Production metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<PromptMetadata>,
    /// Story title read from the cover illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extracted_title: Option<String>,
    /// Story author read from the cover illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extracted_author: Option<String>,
}

impl StructuredPrompt {
    /// Creates a new builder for `StructuredPrompt`.
    pub fn builder() -> StructuredPromptBuilder {
        StructuredPromptBuilder::default()
    }

    /// Renders the prompt as indented JSON, the form users copy out of a scene.
    pub fn to_pretty_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self).map_err(|e| JsonError::new(e.to_string()))
    }

    /// Parses a prompt from JSON text.
    pub fn from_json(json: &str) -> Result<Self, JsonError> {
        serde_json::from_str(json).map_err(|e| JsonError::new(e.to_string()))
    }

    /// Extracted title, if the service returned a non-blank one.
    pub fn title_hint(&self) -> Option<&str> {
        non_blank(self.extracted_title.as_deref())
    }

    /// Extracted author, if the service returned a non-blank one.
    pub fn author_hint(&self) -> Option<&str> {
        non_blank(self.extracted_author.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_accepts_number_or_string() {
        let from_number = StructuredPrompt::from_json(r#"{"page_number": 2}"#).unwrap();
        let from_string = StructuredPrompt::from_json(r#"{"page_number": "2"}"#).unwrap();
        assert_eq!(from_number.page_number().as_deref(), Some("2"));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn blank_hints_are_ignored() {
        let prompt = StructuredPrompt::builder()
            .extracted_title("   ")
            .extracted_author(" Ada ")
            .build()
            .unwrap();
        assert_eq!(prompt.title_hint(), None);
        assert_eq!(prompt.author_hint(), Some("Ada"));
    }
}
