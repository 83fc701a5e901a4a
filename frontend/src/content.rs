use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Purple,
    Teal,
    Orange,
    Pink,
    Green,
}

impl Accent {
    pub fn css_var(self) -> &'static str {
        match self {
            Accent::Purple => "var(--accent-purple)",
            Accent::Teal => "var(--accent-teal)",
            Accent::Orange => "var(--accent-orange)",
            Accent::Pink => "var(--accent-pink)",
            Accent::Green => "var(--accent-green)",
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub summary: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
    pub accent: Accent,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct About {
    pub subtitle: String,
    pub paragraphs: Vec<String>,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: String,
    pub label: String,
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
    pub accent: Accent,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub accent: Accent,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectType {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub channels: Vec<ContactChannel>,
    pub socials: Vec<SocialLink>,
    pub project_types: Vec<ProjectType>,
}

/// Everything the page displays. Pure data, no behaviour.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub owner: Owner,
    pub about: About,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub contact: Contact,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled content, or an empty page if it fails to parse.
    pub fn bundled() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to parse bundled site content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert_eq!(content.owner.full_name(), "Ebubechukwu Odikpo");
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.about.skills[0].percent, 95);
        assert!(content.projects.iter().all(|p| p.url.starts_with("https://")));
    }

    #[test]
    fn test_location_has_no_link() {
        let content = SiteContent::bundled();
        let location = content
            .contact
            .channels
            .iter()
            .find(|c| c.label == "Location")
            .unwrap();
        assert_eq!(location.href, None);
        assert_eq!(location.accent.css_var(), "var(--accent-pink)");
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(SiteContent::parse("{\"owner\": 3}").is_err());
    }
}
