//! Page copy for every published version of the site.
//!
//! Each version is a JSON document under `content/`, embedded at compile time
//! and deserialized on demand. Versions differ only in copy, images and the
//! accent colour used for headings.

use serde::Deserialize;
use thiserror::Error;

const VERSIONS: &[(&str, &str)] = &[
    ("classic", include_str!("../content/classic.json")),
    ("compact", include_str!("../content/compact.json")),
];

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("unknown page version `{0}`")]
    UnknownVersion(String),
    #[error("content for version `{version}` is malformed: {message}")]
    Malformed { version: String, message: String },
    #[error("statistic value `{0}` is not a whole number")]
    InvalidStat(String),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    /// Tailwind colour family used for headings and accents, e.g. `blue`.
    pub accent: String,
    pub logo: String,
    pub nav_links: Vec<NavLink>,
    pub hero: Hero,
    pub profile: Profile,
    pub banner: String,
    pub digital: Digital,
    pub industry: HistoryEntry,
    #[serde(default)]
    pub industries: Vec<Industry>,
    pub axis_label: String,
    pub honors: Honors,
    pub history: HistoryEntry,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Profile {
    pub title: String,
    pub title_en: String,
    pub paragraphs: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Digital {
    pub title: String,
    pub title_en: String,
    pub background: String,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    /// Display value such as `10+`.
    pub value: String,
    pub label: String,
}

impl Stat {
    /// Counter target for this statistic, ignoring a trailing `+`.
    pub fn number(&self) -> Result<u32, ContentError> {
        let trimmed = self.value.trim();
        trimmed
            .strip_suffix('+')
            .unwrap_or(trimmed)
            .trim()
            .parse::<u32>()
            .map_err(|_| ContentError::InvalidStat(self.value.clone()))
    }

    pub fn has_plus(&self) -> bool {
        self.value.trim().ends_with('+')
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Industry {
    pub year: String,
    pub title: String,
    pub description: String,
    pub img_src: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Honors {
    pub caption: String,
    pub image: String,
    pub title: String,
    pub title_en: String,
    pub intro: String,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HistoryEntry {
    pub section_title: String,
    pub section_title_en: String,
    /// Shows the "learn more" button next to the section title.
    #[serde(default)]
    pub more: bool,
    pub general_text: String,
    pub year: String,
    pub event_title: String,
    pub event_description: String,
    pub event_img_src: String,
}

pub fn versions() -> impl Iterator<Item = &'static str> {
    VERSIONS.iter().map(|(name, _)| *name)
}

pub fn load(version: &str) -> Result<SiteContent, ContentError> {
    let (_, raw) = VERSIONS
        .iter()
        .find(|(name, _)| *name == version)
        .ok_or_else(|| ContentError::UnknownVersion(version.to_string()))?;
    parse(version, raw)
}

fn parse(version: &str, raw: &str) -> Result<SiteContent, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Malformed {
        version: version.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(value: &str) -> Stat {
        Stat { value: value.to_string(), label: "label".to_string() }
    }

    #[test]
    fn test_every_embedded_version_loads() {
        for version in versions() {
            let content = load(version).unwrap_or_else(|e| panic!("{version}: {e}"));
            assert!(!content.nav_links.is_empty());
            assert!(!content.digital.stats.is_empty());
            for s in &content.digital.stats {
                assert!(s.number().is_ok(), "{version}: bad stat {}", s.value);
            }
        }
    }

    #[test]
    fn test_classic_matches_published_page() {
        let content = load("classic").unwrap();
        assert_eq!(content.nav_links.len(), 7);
        assert_eq!(content.hero.subtitle, "SANCAITONGCHENG");
        assert_eq!(content.honors.left.len(), 4);
        assert_eq!(content.honors.right.len(), 5);
        assert!(content.industry.more);
        assert!(!content.history.more);
    }

    #[test]
    fn test_images_are_served_from_assets() {
        for version in versions() {
            let c = load(version).unwrap();
            let mut images = vec![&c.logo, &c.hero.image, &c.digital.background, &c.honors.image];
            images.push(&c.industry.event_img_src);
            images.push(&c.history.event_img_src);
            images.extend(c.industries.iter().map(|i| &i.img_src));
            for image in images {
                assert!(image.starts_with("/assets/"), "{version}: {image}");
            }
        }
    }

    #[test]
    fn test_unknown_version() {
        assert_eq!(
            load("nope"),
            Err(ContentError::UnknownVersion("nope".to_string()))
        );
    }

    #[test]
    fn test_malformed_content() {
        let err = parse("broken", "{ \"accent\": ").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { ref version, .. } if version == "broken"));
    }

    #[test]
    fn test_stat_number() {
        assert_eq!(stat("10+").number(), Ok(10));
        assert_eq!(stat(" 1+ ").number(), Ok(1));
        assert_eq!(stat("2000").number(), Ok(2000));
        assert_eq!(stat("0").number(), Ok(0));
        assert_eq!(
            stat("many+").number(),
            Err(ContentError::InvalidStat("many+".to_string()))
        );
        assert!(stat("-3").number().is_err());
    }

    #[test]
    fn test_stat_plus_suffix() {
        assert!(stat("10+").has_plus());
        assert!(!stat("10").has_plus());
    }
}
