//! Page copy: hero text, parallax sections, contact cards and footer.
//!
//! The built-in copy can be replaced by a JSON file (see `config`).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Display data for one parallax section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionProps {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub fact_number: Option<String>,
    #[serde(default)]
    pub fact_text: Option<String>,
}

impl SectionProps {
    pub fn has_fact(&self) -> bool {
        self.fact_number.is_some() || self.fact_text.is_some()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title_lead: String,
    pub title_highlight: String,
    pub title_tail: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub title: String,
    pub body: String,
    pub action: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub heading: String,
    pub blurb: String,
    pub cards: Vec<ContactCard>,
    pub programs_link: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub brand_highlight: String,
    pub brand_rest: String,
    pub blurb: String,
    pub socials: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, bevy::prelude::Component)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub hero: HeroContent,
    pub sections: Vec<SectionProps>,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl PageContent {
    pub fn from_json(path: &Path) -> Result<Self, ContentError> {
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: display.clone(),
            source,
        })?;
        Self::parse(&json).map_err(|source| ContentError::Parse {
            path: display,
            source,
        })
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            hero: HeroContent {
                title_lead: "Preserving Our".into(),
                title_highlight: "Forests".into(),
                title_tail: "For Future Generations".into(),
                subtitle: "Discover the beauty and importance of sustainable forest management \
                           through an immersive journey"
                    .into(),
            },
            sections: vec![
                SectionProps {
                    id: "about".into(),
                    title: "Sustainable Forest Management".into(),
                    description: "Sustainable forest management is the stewardship and use of \
                                  forests in a way that maintains their biodiversity, \
                                  productivity, regeneration capacity, vitality, and potential \
                                  to fulfill relevant ecological, economic, and social functions."
                        .into(),
                    image_src: "images/forest_sunlight.png".into(),
                    image_alt: "Sunlight streaming through a dense forest".into(),
                    reverse: false,
                    fact_number: Some("17%".into()),
                    fact_text: Some(
                        "Of global greenhouse gas emissions are absorbed by forests each year, \
                         making them crucial in our fight against climate change."
                            .into(),
                    ),
                },
                SectionProps {
                    id: "sustainability".into(),
                    title: "Preserving Biodiversity".into(),
                    description: "Forests are home to more than 80% of the world's terrestrial \
                                  biodiversity. Conservation efforts are essential to protect \
                                  countless species that depend on these ecosystems for survival."
                        .into(),
                    image_src: "images/forest_green.png".into(),
                    image_alt: "Lush green forest canopy".into(),
                    reverse: true,
                    fact_number: Some("80%".into()),
                    fact_text: Some(
                        "Of Earth's land animals and plants live in forests, and many cannot \
                         survive elsewhere."
                            .into(),
                    ),
                },
                SectionProps {
                    id: "gallery".into(),
                    title: "The Beauty of Nature".into(),
                    description: "Forests provide us with breathtaking landscapes, clean air, \
                                  and opportunities for recreation and spiritual renewal. They \
                                  are vital for our physical and mental wellbeing."
                        .into(),
                    image_src: "images/forest_aerial.png".into(),
                    image_alt: "Aerial view of a vast forest".into(),
                    reverse: false,
                    fact_number: Some("1 in 4".into()),
                    fact_text: Some(
                        "Modern medicines are derived from rainforest plants, highlighting \
                         their importance to human health and medical advancement."
                            .into(),
                    ),
                },
            ],
            contact: ContactContent {
                heading: "Join Our Mission".into(),
                blurb: "Be part of the global movement to protect and sustain our forests for \
                        future generations."
                    .into(),
                cards: vec![
                    ContactCard {
                        title: "Support Conservation".into(),
                        body: "Your contribution helps protect vital forest ecosystems and the \
                               biodiversity they contain."
                            .into(),
                        action: "Donate Now".into(),
                    },
                    ContactCard {
                        title: "Get Involved".into(),
                        body: "Volunteer for reforestation projects and community education \
                               initiatives."
                            .into(),
                        action: "Volunteer".into(),
                    },
                ],
                programs_link: "Learn More About Our Programs".into(),
            },
            footer: FooterContent {
                brand_highlight: "Forest".into(),
                brand_rest: "Sustain".into(),
                blurb: "Dedicated to the preservation and sustainable management of forest \
                        ecosystems worldwide."
                    .into(),
                socials: vec![
                    "Twitter".into(),
                    "Facebook".into(),
                    "Instagram".into(),
                    "LinkedIn".into(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_has_the_three_anchored_sections() {
        let content = PageContent::default();
        let ids: Vec<&str> = content.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["about", "sustainability", "gallery"]);
        assert!(content
            .sections
            .iter()
            .find(|s| s.id == "sustainability")
            .unwrap()
            .reverse);
        assert!(content.sections.iter().all(SectionProps::has_fact));
    }

    #[test]
    fn section_props_use_camel_case_and_optional_fields() {
        let json = r#"{
            "id": "about",
            "title": "T",
            "description": "D",
            "imageSrc": "images/a.png",
            "imageAlt": "A"
        }"#;
        let props: SectionProps = serde_json::from_str(json).unwrap();
        assert_eq!(props.image_src, "images/a.png");
        assert!(!props.reverse);
        assert!(!props.has_fact());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = PageContent::from_json(Path::new("/nonexistent/forest.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/forest.json"));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let dir = std::env::temp_dir().join("forest_page_content_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ \"hero\": ").unwrap();

        let err = PageContent::from_json(&path).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }
}
