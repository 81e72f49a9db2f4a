//! Static image URL resolution
//!
//! Poster keys from the catalog are turned into URLs on the static image
//! host: `{base_url}/{quality}/poster/{key}.png`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::PosterResolver;
use crate::config::Config;

/// Image quality served by the static host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Sd,
    Hd,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Sd => "sd",
            ImageQuality::Hd => "hd",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sd" => Ok(ImageQuality::Sd),
            "hd" => Ok(ImageQuality::Hd),
            other => Err(format!("unknown image quality '{}' (expected sd or hd)", other)),
        }
    }
}

/// Resolves poster keys against a static image host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticImageResolver {
    base_url: String,
    quality: ImageQuality,
}

impl StaticImageResolver {
    pub fn new(base_url: impl Into<String>, quality: ImageQuality) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, quality }
    }

    /// Build a resolver from the configured host and quality
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.image_base_url, config.image_quality)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn quality(&self) -> ImageQuality {
        self.quality
    }

    /// URL of a poster image
    pub fn poster_url(&self, key: &str) -> String {
        format!("{}/{}/poster/{}.png", self.base_url, self.quality, key)
    }
}

impl PosterResolver for StaticImageResolver {
    fn resolve(&self, key: &str) -> String {
        self.poster_url(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        let resolver = StaticImageResolver::new("https://images.example.com", ImageQuality::Hd);
        assert_eq!(
            resolver.resolve("luigi"),
            "https://images.example.com/hd/poster/luigi.png"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let resolver = StaticImageResolver::new("http://localhost:3000/images//", ImageQuality::Sd);
        assert_eq!(resolver.base_url(), "http://localhost:3000/images");
        assert_eq!(
            resolver.poster_url("x"),
            "http://localhost:3000/images/sd/poster/x.png"
        );
    }

    #[test]
    fn test_quality_parse() {
        assert_eq!("SD".parse::<ImageQuality>(), Ok(ImageQuality::Sd));
        assert_eq!(" hd ".parse::<ImageQuality>(), Ok(ImageQuality::Hd));
        assert!("4k".parse::<ImageQuality>().is_err());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            image_base_url: "https://cdn.test/".to_string(),
            image_quality: ImageQuality::Hd,
            ..Config::default()
        };

        let resolver = StaticImageResolver::from_config(&config);
        assert_eq!(resolver.base_url(), "https://cdn.test");
        assert_eq!(resolver.quality(), ImageQuality::Hd);
    }
}
