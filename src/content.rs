//! Fixed site content.
//!
//! Everything the page shows is defined here as `'static` data: the
//! portfolio gallery, the skill and service cards, the experience
//! timeline, navigation targets and contact details. Nothing in this
//! module is mutated after definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::Icon;

/// Name shown in the header, hero, modal copy and footer.
pub const DESIGNER_NAME: &str = "Julian D Costa";
pub const DESIGNER_TITLE: &str = "Graphics Designer";

pub const CONTACT_EMAIL: &str = "juliandcosta.bd@gmail.com";
pub const CONTACT_PHONE: &str = "01844692914";

pub const COPYRIGHT_YEAR: u16 = 2025;

/// Gallery filter value. `All` is a sentinel meaning "no restriction";
/// no portfolio item carries it as a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[default]
    All,
    Logo,
    Branding,
    Print,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl ProjectCategory {
    /// Filter buttons, in display order.
    pub const ALL_FILTERS: [Self; 5] = [
        Self::All,
        Self::Logo,
        Self::Branding,
        Self::Print,
        Self::SocialMedia,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Logo => "Logo",
            Self::Branding => "Branding",
            Self::Print => "Print",
            Self::SocialMedia => "Social Media",
        }
    }

    /// Whether `item` is visible under this filter.
    #[must_use]
    pub fn admits(self, item: &PortfolioItem) -> bool {
        self == Self::All || self == item.category
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
}

pub static PROJECTS: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        title: "Corporate Identity",
        category: ProjectCategory::Branding,
        image: "https://images.unsplash.com/photo-1586717791821-3f44a563eb4c?auto=format&fit=crop&q=80&w=800",
    },
    PortfolioItem {
        id: 2,
        title: "Event Logo Design",
        category: ProjectCategory::Logo,
        image: "https://images.unsplash.com/photo-1626785774573-4b799315345d?auto=format&fit=crop&q=80&w=800",
    },
    PortfolioItem {
        id: 3,
        title: "Professional Brochure",
        category: ProjectCategory::Print,
        image: "https://images.unsplash.com/photo-1544465544-1b71aee9dfa3?auto=format&fit=crop&q=80&w=800",
    },
    PortfolioItem {
        id: 4,
        title: "Large Format Banner",
        category: ProjectCategory::Print,
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=800",
    },
    PortfolioItem {
        id: 5,
        title: "Social Media Kit",
        category: ProjectCategory::SocialMedia,
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=800",
    },
    PortfolioItem {
        id: 6,
        title: "Merit Certificate",
        category: ProjectCategory::Print,
        image: "https://images.unsplash.com/photo-1589330694653-ded6df03f754?auto=format&fit=crop&q=80&w=800",
    },
];

/// The gallery items visible under `filter`, in their original order.
#[must_use]
pub fn visible_projects(filter: ProjectCategory) -> Vec<&'static PortfolioItem> {
    PROJECTS.iter().filter(|item| filter.admits(item)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

pub static SKILLS: [Skill; 4] = [
    Skill {
        name: "Adobe Illustrator",
        icon: Icon::Palette,
    },
    Skill {
        name: "Adobe Photoshop",
        icon: Icon::Box,
    },
    Skill {
        name: "Branding",
        icon: Icon::Layout,
    },
    Skill {
        name: "Print Design",
        icon: Icon::Layers,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static SERVICES: [Service; 3] = [
    Service {
        title: "Logo Design",
        description: "Professional and memorable logo creation tailored to represent your brand identity uniquely.",
        icon: Icon::Palette,
    },
    Service {
        title: "Branding Solutions",
        description: "Complete branding systems including visual identity, typography, and color guidelines.",
        icon: Icon::Layers,
    },
    Service {
        title: "Social Media Design",
        description: "Creative and engaging designs for social platforms to boost your online presence.",
        icon: Icon::Monitor,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 1] = [Experience {
    role: "Graphics Designer",
    company: "Chattogram Catholic Archdiocese",
    period: "2023 – Present",
    description: "Currently serving as the lead designer for organizational branding materials, youth initiatives, event banners, certificates, and promotional visuals. Responsible for maintaining consistent visual identity across all communication channels.",
    tags: &["Branding", "Event Design", "Promotional Materials"],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Same-document anchors; every entry targets a section id on the page.
pub static NAV_LINKS: [NavLink; 7] = [
    NavLink {
        label: "Home",
        href: "#",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Portfolio",
        href: "#portfolio",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Facebook",
        icon: Icon::Facebook,
        href: "#",
    },
    SocialLink {
        name: "LinkedIn",
        icon: Icon::Linkedin,
        href: "#",
    },
    SocialLink {
        name: "Instagram",
        icon: Icon::Instagram,
        href: "#",
    },
    SocialLink {
        name: "Twitter",
        icon: Icon::Twitter,
        href: "#",
    },
];

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn no_project_is_tagged_with_the_sentinel() {
        assert!(PROJECTS
            .iter()
            .all(|item| item.category != ProjectCategory::All));
    }

    #[test]
    fn all_filter_shows_every_project_in_order() {
        let visible = visible_projects(ProjectCategory::All);
        assert_eq!(visible.len(), 6);
        let ids: Vec<u32> = visible.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn each_category_filter_matches_a_plain_filter() {
        for filter in [
            ProjectCategory::Logo,
            ProjectCategory::Branding,
            ProjectCategory::Print,
            ProjectCategory::SocialMedia,
        ] {
            let visible = visible_projects(filter);
            let expected: Vec<&PortfolioItem> = PROJECTS
                .iter()
                .filter(|item| item.category == filter)
                .collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn filtered_lists_preserve_original_order() {
        for filter in ProjectCategory::ALL_FILTERS {
            let ids: Vec<u32> = visible_projects(filter).iter().map(|i| i.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted, "{filter} filter reordered items");
        }
    }

    #[test]
    fn print_filter_shows_the_three_print_pieces() {
        let visible = visible_projects(ProjectCategory::Print);
        let summary: Vec<(u32, &str)> = visible.iter().map(|i| (i.id, i.title)).collect();
        assert_eq!(
            summary,
            vec![
                (3, "Professional Brochure"),
                (4, "Large Format Banner"),
                (6, "Merit Certificate"),
            ]
        );
    }

    #[test]
    fn category_serialises_to_its_display_label() {
        for filter in ProjectCategory::ALL_FILTERS {
            let json = serde_json::to_value(filter).unwrap();
            assert_eq!(json, serde_json::Value::String(filter.label().to_string()));
        }
    }

    #[test]
    fn social_media_label_round_trips() {
        let parsed: ProjectCategory = serde_json::from_str("\"Social Media\"").unwrap();
        assert_eq!(parsed, ProjectCategory::SocialMedia);
    }

    #[test]
    fn every_image_reference_is_a_valid_url() {
        for item in &PROJECTS {
            let title = item.title;
            assert!(Url::parse(item.image).is_ok(), "bad image url on {title}");
        }
    }

    #[test]
    fn contact_links_parse_as_uris() {
        assert!(Url::parse(&format!("mailto:{CONTACT_EMAIL}")).is_ok());
        assert!(Url::parse(&format!("tel:{CONTACT_PHONE}")).is_ok());
    }

    #[test]
    fn nav_links_target_page_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }
}
