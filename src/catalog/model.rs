use serde::Deserialize;

/// A case study shown on the home grid and in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
    pub hero_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    /// External link to a live prototype
    #[serde(default)]
    pub live_url: Option<String>,
    pub description: String,
    pub role: String,
    pub duration: String,
    pub challenge: String,
    pub solution: String,
    pub interaction_notes: String,
    pub outcome: String,
}

/// What the detail view puts in its hero slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroMedia<'a> {
    Video { src: &'a str, poster: &'a str },
    Image { src: &'a str },
}

impl Project {
    /// Video with the hero image as poster when a video exists, otherwise the hero image.
    pub fn hero_media(&self) -> HeroMedia<'_> {
        match &self.video_url {
            Some(src) => HeroMedia::Video {
                src,
                poster: &self.hero_url,
            },
            None => HeroMedia::Image {
                src: &self.hero_url,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub name: String,
    pub role: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with every non-digit stripped from the phone number.
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("tel:{}", digits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Site copy that surrounds the catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteInfo {
    pub brand: String,
    pub hero: Hero,
    pub contact: ContactInfo,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}
