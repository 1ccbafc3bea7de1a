use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BlogPost {
    pub name: String,
    pub date: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    /// A project is click-to-open only when its link is present and non-blank.
    pub fn link_url(&self) -> Option<&str> {
        let link = self.link.as_deref()?.trim();
        if link.is_empty() { None } else { Some(link) }
    }
}
