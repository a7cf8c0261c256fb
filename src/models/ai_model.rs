use serde::Serialize;

use crate::entities::sea_orm_active_enums::AiModel;

/// Descriptor for one text-to-image model offered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiModelDetail {
    pub name: String,
    pub description: String,
    pub supported_styles: Vec<String>,
    pub limitations: Vec<String>,
}

impl AiModel {
    /// Every model, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Dalle2,
        Self::Imagen,
        Self::Midjourney,
        Self::StableDiffusion,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dalle2 => "DALL·E 2",
            Self::Imagen => "Imagen",
            Self::Midjourney => "Midjourney",
            Self::StableDiffusion => "Stable Diffusion",
        }
    }

    #[must_use]
    pub fn detail(self) -> AiModelDetail {
        let (description, styles, limitations): (&str, &[&str], &[&str]) = match self {
            Self::Dalle2 => (
                "A sophisticated AI by OpenAI for generating digital images from natural language descriptions.",
                &["cartoon", "realistic", "fantasy"],
                &["May produce unrealistic images for complex queries."],
            ),
            Self::Imagen => (
                "Google's state-of-the-art text-to-image AI model offering photorealistic image generation.",
                &["photorealism", "painting"],
                &["Limited to certain styles and subjects."],
            ),
            Self::Midjourney => (
                "An independent research lab’s AI specializing in creating vivid images and art.",
                &["abstract", "conceptual art"],
                &["Generates images with a distinctive stylistic signature."],
            ),
            Self::StableDiffusion => (
                "An AI model by Stability AI that excels at generating highly detailed images.",
                &["digital art", "concept art"],
                &["Occasional artifacts in generated images."],
            ),
        };

        AiModelDetail {
            name: self.display_name().to_string(),
            description: description.to_string(),
            supported_styles: styles.iter().map(|s| (*s).to_string()).collect(),
            limitations: limitations.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The fixed catalog served by `GET /ai/models/`.
#[must_use]
pub fn catalog() -> Vec<AiModelDetail> {
    AiModel::ALL.iter().map(|m| m.detail()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_stable_entries() {
        let names: Vec<String> = catalog().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["DALL·E 2", "Imagen", "Midjourney", "Stable Diffusion"]
        );
        assert_eq!(catalog(), catalog());
    }

    #[test]
    fn test_every_entry_is_filled_in() {
        for detail in catalog() {
            assert!(!detail.description.is_empty());
            assert!(!detail.supported_styles.is_empty());
            assert!(!detail.limitations.is_empty());
        }
    }

    #[test]
    fn test_descriptions_are_verbatim() {
        assert_eq!(
            AiModel::Midjourney.detail().description,
            "An independent research lab’s AI specializing in creating vivid images and art."
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&AiModel::StableDiffusion).unwrap(),
            "\"STABLEDIFFUSION\""
        );
        let parsed: AiModel = serde_json::from_str("\"DALLE2\"").unwrap();
        assert_eq!(parsed, AiModel::Dalle2);
    }
}
