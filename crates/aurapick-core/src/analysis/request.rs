//! Request body for the hosted multimodal model.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::{json, Value};

use super::AnalysisError;
use crate::variation::{CropKind, Variation};

/// Model the request is shaped for.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Standing instructions for the photo editor persona.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are a **Senior Photo Editor for a High-End Editorial Magazine**. Your job is to select the technically superior image based on Composition, Lighting, and Social Media Physics.

I will provide an ORIGINAL photo and CROPPED VARIATIONS.

**YOUR CORE PROTOCOL:**
Do not judge the photo "as is." Judge it based on its **Highest Potential Crop**. Before rejecting a photo for awkward limbs or bad backgrounds, ask: *"Can a tight zoom or specific ratio fix this?"*

**PHASE 1: THE "RESCUE" ELIMINATION (Pass/Fail)**
Scan for fatal flaws, but apply the **Rescue Rule**:
1.  **The "Amputation" Check:** Are hands/feet cut off awkwardly?
    *   *Logic:* Can a **1:1 Zoom** or **4:5 Crop** remove the awkward limb entirely to focus on the face? -> If YES, keep it. If NO, **Fail.**
2.  **The "Dead Space" Ratio:** Is the subject too small?
    *   *Logic:* Can a **Heavy Zoom (120%+)** fill the frame without losing too much resolution? -> If YES, keep it.
3.  **Resolution Check:** Is the face blurry? -> **Immediate Fail.** (Cropping cannot fix blur).

**PHASE 2: THE "FACE VS. FIT VS. VIBE" DECISION (Selecting the Ratio)**
You must decide the crop based on the **Subject's Geometry** and **Intent**:

*   **SCENARIO A: The "Face Card" (Intensity > Pose)**
    *   *Triggers:* The eye contact is piercing (Alpha/Siren), but the arms/posture are stiff, or the background is messy.
    *   *Action:* **FORCE 1:1 (Square) aka "1:1 Zoomed".**
    *   *Execution:* Zoom in past the shoulders/elbows. Make the face the absolute center.

*   **SCENARIO B: The "Fit Check" (Pose > Intensity)**
    *   *Triggers:* The outfit is the focus, the stance is confident (triangular geometry), and the subject fills the frame well.
    *   *Action:* **FORCE 4:5 (IG Feed Standard) aka "4:5 Center" or "4:5 Upper".**
    *   *Execution:* Maximize screen real estate. Keep the headroom minimal but ensure the outfit is visible.

*   **SCENARIO C: The "Immersive Vibe" (Environment > Subject)**
    *   *Triggers:* The background is cinematic (e.g., cool graffiti, sunsets, high ceilings), or the subject needs to look taller/long-limbed.
    *   *Action:* **FORCE 9:16 (Story/Reel Cover/Wallpaper) aka "9:16 Story".**
    *   *Execution:* Include the ceiling/sky or floor details that 4:5 cuts off to create "atmosphere."

**PHASE 3: THE VIBE MATCH**
Map the chosen crop to the correct energy:
*   **Alpha/Baddie:** High contrast, direct eye contact (usually 1:1 or Tight 4:5).
*   **Chill/Gen-Z:** Relaxed posture, wider shot (usually 4:5).
*   **Aesthetic/Mood:** Environmental focus (usually 9:16).

**OUTPUT FORMAT:**
Return the result in JSON format corresponding to the schema provided.
- **bestCrop**: The exact label from the provided variations (e.g., "1:1 Zoomed", "4:5 Upper").
- **cropReason**: Explain the transformation. Explicitly mention why other formats were rejected.
- **vibeDescription**: The Aesthetic Verdict (Phase 3). One word/short phrase (e.g., 'Alpha Dominance', 'Underground Aesthetic').
- **vibeCategory**: Fill the object with relevant tags:
    - *aesthetic*: Visual style (e.g., "Dark Feminine", "Professional")
    - *genz*: Personality/Slang (e.g., "Mogging", "Face Card")
    - *moment*: Context (e.g., "Fit Check", "Hard Launch")
- **critique**: A 2-sentence explanation of why this photo wins. Focus on the psychology of the angle, the 'Rescue' logic used, and the status signaling.
- **captions**: 3 options (Short/Punchy, Abstract/Vibe-based, Engaging).
"#;

/// Build the text that tells the model which image is which variation.
///
/// ```text
/// Image 1: Original
/// Image 2: 4:5 Center
/// ...
/// ```
pub fn reference_map<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| format!("Image {}: {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Endpoint for a `generateContent` call. The API key is the caller's
/// business.
pub fn generate_content_url(model: &str) -> String {
    format!("{API_BASE}/models/{model}:generateContent")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

/// A complete `generateContent` request for one photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl AnalysisRequest {
    /// Pack the variations, in order, followed by the reference map.
    pub fn from_variations(variations: &[Variation]) -> Self {
        let mut parts: Vec<Part> = variations
            .iter()
            .map(|v| Part::InlineData {
                inline_data: InlineData {
                    mime_type: v.mime_type.to_string(),
                    data: STANDARD.encode(&v.bytes),
                },
            })
            .collect();

        let map = reference_map(variations.iter().map(Variation::label));
        parts.push(Part::Text {
            text: format!(
                "Here are the variations of the same photo. \
                 Analyze them according to the Senior Editor Protocol.\n\n\
                 **IMAGE REFERENCE MAP:**\n{map}\n\n\
                 Select the technically superior crop."
            ),
        });

        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }

    /// Number of images attached to the request.
    pub fn image_count(&self) -> usize {
        self.contents
            .iter()
            .flat_map(|c| &c.parts)
            .filter(|p| matches!(p, Part::InlineData { .. }))
            .count()
    }

    /// Serialize to the JSON body sent to the service.
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        serde_json::to_string(self).map_err(AnalysisError::Serialize)
    }
}

/// JSON schema the service must answer with.
fn response_schema() -> Value {
    let labels = CropKind::labels();
    let string = |description: &str| json!({ "type": "STRING", "description": description });
    let strings = |description: &str| {
        json!({ "type": "ARRAY", "items": { "type": "STRING" }, "description": description })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "aestheticScore": {
                "type": "NUMBER",
                "description": "Rank 0-100 based on technical perfection."
            },
            "vibes": strings("List of relevant tags."),
            "vibeCategory": {
                "type": "OBJECT",
                "properties": {
                    "aesthetic": string("Visual style tag"),
                    "genz": string("Personality slang tag"),
                    "moment": string("Context tag")
                },
                "required": ["aesthetic", "genz", "moment"]
            },
            "bestFor": string("Best context (e.g. 'Dump', 'PFP', 'Story')"),
            "vibeDescription": string("The Aesthetic Verdict."),
            "critique": string("Why this photo wins based on phase 3."),
            "captions": strings("3 Caption options"),
            "bestCrop": {
                "type": "STRING",
                "enum": labels,
                "description": "The label of the best version."
            },
            "cropAlignment": {
                "type": "STRING",
                "enum": ["center", "top", "bottom"],
                "description": "How the crop should be aligned"
            },
            "cropReason": string("Technical reasoning for the crop choice."),
            "cropSuggestion": string("Quick editing tip."),
            "bestFitFormat": { "type": "STRING", "enum": ["1:1", "4:5", "9:16"] },
            "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": [
            "aestheticScore", "vibes", "vibeCategory", "bestFor", "vibeDescription",
            "critique", "bestCrop", "cropAlignment", "cropReason", "cropSuggestion",
            "bestFitFormat", "hashtags"
        ]
    })
}
