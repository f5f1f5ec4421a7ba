//! Portfolio content shown on the page.

use serde::{Deserialize, Serialize};

/// The person the portfolio belongs to and what is shown about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Name shown in the hero block.
    pub name: String,
    /// Line typed out under the name.
    pub tagline: String,
    /// Page sections in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled page section reachable from the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, also used to match nav links.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A timeline item or project card inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub heading: String,
    /// Dates, stack or other secondary line.
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub body: String,
}

impl Entry {
    fn new(heading: &str, meta: &str, body: &str) -> Self {
        Self {
            heading: heading.to_string(),
            meta: meta.to_string(),
            body: body.to_string(),
        }
    }
}

impl Section {
    fn new(id: &str, title: &str, entries: Vec<Entry>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            entries,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "Hybrid Mobile Developer".to_string(),
            sections: vec![
                Section::new(
                    "about",
                    "About",
                    vec![Entry::new(
                        "Hello there",
                        "",
                        "I build cross-platform mobile apps and the tooling around them.",
                    )],
                ),
                Section::new(
                    "experience",
                    "Experience",
                    vec![
                        Entry::new(
                            "Senior Mobile Developer",
                            "2022 - Present",
                            "Shipping hybrid apps to millions of users.",
                        ),
                        Entry::new(
                            "Mobile Developer",
                            "2019 - 2022",
                            "Built offline-first field service apps.",
                        ),
                    ],
                ),
                Section::new(
                    "projects",
                    "Projects",
                    vec![
                        Entry::new(
                            "Pocket Ledger",
                            "Flutter · SQLite",
                            "A budgeting app with encrypted local sync.",
                        ),
                        Entry::new(
                            "Trailhead",
                            "React Native · Maps",
                            "Offline hiking maps with route recording.",
                        ),
                    ],
                ),
                Section::new(
                    "contact",
                    "Contact",
                    vec![Entry::new("Say hi", "", "hello@example.com")],
                ),
            ],
        }
    }
}
