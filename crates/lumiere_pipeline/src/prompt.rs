//! Generation request assembly.

use lumiere_core::{GenerationRequest, ImagePayload, Project, SceneId};
use serde_json::{Value, json};

const SYSTEM_FRAMING: &str = "You are an animation director adapting an illustrated story \
into a sequence of short animated scenes. Describe each scene so that a video model can \
render it. All content must be age-appropriate and suitable for young children.";

const JSON_CLOSING: &str =
    "Respond only with a JSON object that matches the provided response schema.";

/// Builds generation requests for individual scenes.
///
/// Pure and deterministic: the same project, scene, feedback and image always yield
/// the same request.
///
/// # Examples
///
/// ```
/// use lumiere_core::{Project, SceneId};
/// use lumiere_pipeline::PromptBuilder;
///
/// let mut project = Project::new("The Fox", "Ada");
/// project.story_text = "The fox woke.".to_string();
/// project.total_pages = 1;
///
/// let request = PromptBuilder::build(&project, SceneId::End, None, None);
/// assert!(request.instruction.contains("The fox woke."));
/// assert!(request.image.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Assembles the instruction, schema and image for one scene.
    ///
    /// Non-blank `feedback` adds a regeneration directive quoting it verbatim.
    pub fn build(
        project: &Project,
        scene_id: SceneId,
        feedback: Option<&str>,
        image: Option<&ImagePayload>,
    ) -> GenerationRequest {
        let mut sections = vec![
            SYSTEM_FRAMING.to_string(),
            format!(
                "Full story text for context:\n\"\"\"\n{}\n\"\"\"",
                project.story_text.trim()
            ),
            Self::scene_task(project, scene_id, image.is_some()),
        ];

        if let Some(feedback) = feedback.filter(|f| !f.trim().is_empty()) {
            sections.push(format!(
                "This is a regeneration. The previous version of this scene was not \
                 accepted. Revise it according to this feedback:\n\"\"\"\n{}\n\"\"\"",
                feedback
            ));
        }

        sections.push(JSON_CLOSING.to_string());

        GenerationRequest {
            instruction: sections.join("\n\n"),
            schema: Self::output_schema(scene_id),
            image: image.cloned(),
        }
    }

    fn scene_task(project: &Project, scene_id: SceneId, has_image: bool) -> String {
        match scene_id {
            SceneId::Cover => "Task: design the opening sequence of the story from the \
                attached cover illustration. Read the title and the author printed on the \
                cover and return them as extracted_title and extracted_author."
                .to_string(),
            SceneId::End => "Task: design the closing scene that concludes the story. \
                No illustration is provided; draw on the story as a whole."
                .to_string(),
            SceneId::Page(n) => {
                let text = project
                    .scene(&scene_id)
                    .and_then(|scene| scene.text())
                    .unwrap_or_default();
                let mut task = format!(
                    "Task: design the animated scene for page {} of {}. Page text:\n\"\"\"\n{}\n\"\"\"",
                    n, project.total_pages, text
                );
                if has_image {
                    task.push_str(
                        "\nAnalyse the page text together with the attached illustration \
                         for this page.",
                    );
                }
                task
            }
        }
    }

    /// Response schema for a scene, in the generation service's OpenAPI subset.
    ///
    /// The cover schema adds `extracted_title` and `extracted_author`.
    pub fn output_schema(scene_id: SceneId) -> Value {
        let string = || json!({"type": "STRING"});
        let object = |properties: Value| json!({"type": "OBJECT", "properties": properties});

        let mut properties = json!({
            "page_number": string(),
            "scene_summary": string(),
            "animation_style": object(json!({
                "visual_style": string(),
                "color_palette": string(),
                "lighting": string(),
            })),
            "setting": object(json!({
                "location": string(),
                "time_of_day": string(),
                "environment": string(),
            })),
            "characters": {
                "type": "ARRAY",
                "items": object(json!({
                    "name": string(),
                    "appearance": string(),
                    "expression": string(),
                    "position": string(),
                })),
            },
            "camera": object(json!({
                "shot_type": string(),
                "movement": string(),
                "angle": string(),
            })),
            "action": object(json!({
                "description": string(),
                "motion": string(),
            })),
            "audio": object(json!({
                "narration": string(),
                "dialogue": string(),
                "music": string(),
                "sound_effects": string(),
            })),
            "metadata": object(json!({
                "duration_seconds": {"type": "NUMBER"},
                "notes": string(),
            })),
        });

        let mut required = vec!["scene_summary", "animation_style", "camera", "action"];

        if scene_id == SceneId::Cover
            && let Some(map) = properties.as_object_mut()
        {
            map.insert("extracted_title".to_string(), string());
            map.insert("extracted_author".to_string(), string());
            required.extend(["extracted_title", "extracted_author"]);
        }

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": required,
        })
    }
}
