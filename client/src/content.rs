//! Static site content.
//!
//! Everything the sections render lives here as `&'static` records so copy
//! edits never touch component code. Order in each list is render order.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Deeraj RM";
pub const OWNER_INITIALS: &str = "DRM";
pub const OWNER_ROLE: &str = "Visual Storyteller";
pub const SITE_TITLE: &str = "Deeraj RM \u{2014} Visual Storyteller";

/// Scene rendered by the embedded 3D viewer in the hero. Passed through as-is.
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";
/// Module script that defines the `<spline-viewer>` custom element.
pub const SCENE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

pub const PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=1200&auto=format&fit=crop";

/// Stable in-page anchors, one per section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Home,
    About,
    Work,
    Skills,
    Testimonials,
    Contact,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 6] = [
        SectionAnchor::Home,
        SectionAnchor::About,
        SectionAnchor::Work,
        SectionAnchor::Skills,
        SectionAnchor::Testimonials,
        SectionAnchor::Contact,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Home => "home",
            SectionAnchor::About => "about",
            SectionAnchor::Work => "work",
            SectionAnchor::Skills => "skills",
            SectionAnchor::Testimonials => "testimonials",
            SectionAnchor::Contact => "contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: SectionAnchor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "About", anchor: SectionAnchor::About },
    NavLink { label: "Work", anchor: SectionAnchor::Work },
    NavLink { label: "Skills", anchor: SectionAnchor::Skills },
    NavLink { label: "Impact", anchor: SectionAnchor::Testimonials },
    NavLink { label: "Contact", anchor: SectionAnchor::Contact },
];

pub mod copy {
    pub const HERO_BADGE: &str = "Where ideas meet imagination";
    pub const HERO_LEAD: &str = "Hi, I\u{2019}m";
    pub const HERO_TAIL: &str = "\u{2014} a Visual Storyteller turning ideas into design magic.";
    pub const HERO_SUBTITLE: &str = "Designs that make brands unforgettable. Every pixel tells a story.";
    pub const HERO_CTA: &str = "Explore My Work";
    pub const SCROLL_CUE: &str = "SCROLL";

    pub const ABOUT_HEADING: &str =
        "Design isn\u{2019}t what it looks like \u{2014} it\u{2019}s what it makes you feel.";
    pub const ABOUT_BODY: &str = "I craft visual stories for brands and products. My work blends minimal aesthetics \
                                  with emotional resonance, transforming complex ideas into memorable experiences.";

    pub const WORK_EYEBROW: &str = "Selected Works that Speak Louder than Words";
    pub const WORK_HEADING: &str = "Portfolio Showcase";

    pub const SKILLS_HEADING: &str = "Where creativity meets precision";

    pub const TESTIMONIALS_HEADING: &str = "Trusted by brands, loved by audiences";

    pub const CONTACT_HEADING: &str = "Let\u{2019}s create something extraordinary together.";
    pub const CONTACT_BODY: &str =
        "Where ideas meet imagination. Tell me about your project \u{2014} I\u{2019}ll bring it to life.";
    pub const HIRE_ME: &str = "Hire Me";
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Branding \u{2014} Coral Studio",
        category: "Branding",
        image_url: "https://images.unsplash.com/photo-1529336953121-a0ce123b805f?q=80&w=1400&auto=format&fit=crop",
    },
    Project {
        title: "UI/UX \u{2014} Flow Banking",
        category: "UI/UX",
        image_url: "https://images.unsplash.com/photo-1552581234-26160f608093?q=80&w=1400&auto=format&fit=crop",
    },
    Project {
        title: "Motion \u{2014} Neon Opener",
        category: "Motion Graphics",
        image_url: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?q=80&w=1400&auto=format&fit=crop",
    },
    Project {
        title: "Social \u{2014} Summer Campaign",
        category: "Social Media",
        image_url: "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?q=80&w=1400&auto=format&fit=crop",
    },
    Project {
        title: "Branding \u{2014} Northwood",
        category: "Branding",
        image_url: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=1400&auto=format&fit=crop",
    },
    Project {
        title: "UI/UX \u{2014} Studio CMS",
        category: "UI/UX",
        image_url: "https://images.unsplash.com/photo-1587620962725-abab7fe55159?q=80&w=1400&auto=format&fit=crop",
    },
];

pub const TOOLS: [Tool; 6] = [
    Tool { name: "Adobe Photoshop", icon: "\u{1F17F}\u{FE0F}" },
    Tool { name: "Adobe Illustrator", icon: "\u{1F170}\u{FE0F}" },
    Tool { name: "Adobe After Effects", icon: "\u{2728}" },
    Tool { name: "Figma", icon: "\u{1F39B}\u{FE0F}" },
    Tool { name: "Blender", icon: "\u{1F9CA}" },
    Tool { name: "Cinema 4D", icon: "\u{1F3A5}" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Deeraj elevated our brand with a striking visual system. Results exceeded expectations.",
        author: "Maya Patel, Brand Director \u{2014} Coral Studio",
    },
    Testimonial {
        quote: "A perfect blend of aesthetics and strategy. Our launch campaign performed 2x better.",
        author: "Alex Nguyen, Marketing Lead \u{2014} Flow Bank",
    },
    Testimonial {
        quote: "Every pixel tells a story \u{2014} and our customers felt it.",
        author: "Sofia Rossi, Product Manager \u{2014} Northwood",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "dribbble", href: "#" },
    SocialLink { name: "behance", href: "#" },
    SocialLink { name: "instagram", href: "#" },
    SocialLink { name: "linkedin", href: "#" },
];

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField { name: "name", label: "Name", placeholder: "Your name", kind: FieldKind::Text },
    ContactField { name: "email", label: "Email", placeholder: "you@domain.com", kind: FieldKind::Email },
    ContactField {
        name: "message",
        label: "Project details",
        placeholder: "Tell me about your vision\u{2026}",
        kind: FieldKind::TextArea { rows: 4 },
    },
];

/// Footer line for `year`.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {OWNER_NAME} \u{2014} {OWNER_ROLE}")
}

/// Current calendar year, from the browser clock when hydrated.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
