//! Static copy for the about page and the site footer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_HEADLINE: &str = "TURSA — building software & IoT that ship";

pub const ABOUT_INTRO: &str = "We’re a team of five engineers and builders who enjoy turning ambitious \
ideas into shipped products—from modular keyboards to retail IoT and pet wellness platforms. \
We design for reliability, explainability, and delightful UX.";

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "What we do",
        body: "Full-stack product development across web, mobile, firmware, and light ML. \
We love typed APIs, small services, and clean UIs.",
    },
    AboutCard {
        title: "How we work",
        body: "Short iterations, demo-driven, strong docs. We prototype quickly, validate early, and optimize later.",
    },
    AboutCard {
        title: "Tech",
        body: "React/Next.js, Spring Boot, Firebase/Supabase, Raspberry Pi/ESP32, QMK, Python data/ETL, and pragmatic cloud.",
    },
];

pub const FOOTER_DESCRIPTION: &str =
    "We build useful software & IoT—clean UIs, reliable backends, and hardware that ships.";

/// Footer "Resources" column. These point nowhere yet.
pub const RESOURCE_LINKS: &[&str] = &["Case studies", "Docs", "Privacy"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    /// Key of the inline icon in the layout template
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: "github", href: "#" },
    SocialLink { label: "Twitter/X", icon: "x", href: "#" },
    SocialLink { label: "LinkedIn", icon: "linkedin", href: "#" },
];
