//! Static page content.
//!
//! DESIGN
//! ======
//! Every record here is immutable data with no lifecycle. Components map
//! these records to markup; the only stateful piece attached to any of them
//! is the reveal latch each `SkillBar` owns for its `SkillEntry`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Brand shown in the navbar and footer as `first` + highlighted `second`.
pub const BRAND: (&str, &str) = ("IFEKA", "MARY");

pub const HERO_GREETING: &str = "Hello, I am";
pub const HERO_NAME: &str = "Ifeka Mary";
pub const HERO_TAGLINE: &str = "TV Producer | Content Creator | Creative Manager";
pub const HERO_CTA: &str = "View My Work";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am a multi-skilled TV producer, manager, content creator, and editor with a strong passion for storytelling and creative communication. My work blends production leadership with hands-on content development, allowing me to manage projects from concept to final delivery while maintaining a clear creative vision.",
    "Driven by growth and innovation, my goal is to expand my production capacity, build a strong collaborative team, and create impactful content that resonates with diverse audiences. I bring a balance of creativity, organization, and adaptability to every project, ensuring both artistic quality and professional execution.",
];

/// Highlighted lead phrase inside the first about paragraph.
pub const ABOUT_EMPHASIS: &str = "TV producer, manager, content creator, and editor";

/// A single skill rendered as a labelled progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    level: u8,
}

impl SkillEntry {
    pub const MAX_LEVEL: u8 = 100;

    /// Build an entry, clamping `level` into `0..=100`.
    #[must_use]
    pub const fn new(name: &'static str, level: u8) -> Self {
        let level = if level > Self::MAX_LEVEL { Self::MAX_LEVEL } else { level };
        Self { name, level }
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Text label shown next to the skill name, e.g. `"80%"`.
    #[must_use]
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }
}

pub const SKILLS: [SkillEntry; 6] = [
    SkillEntry::new("TV Production", 95),
    SkillEntry::new("Content Creation", 90),
    SkillEntry::new("Video Editing", 85),
    SkillEntry::new("Project Management", 92),
    SkillEntry::new("Creative Direction", 88),
    SkillEntry::new("Script Writing", 80),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section id without the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Portfolio", anchor: "portfolio" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Contact", anchor: "contact" },
];

/// What a project card shows above its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectMedia {
    /// Thumbnail plus a logo overlay. Both are plain asset paths; a missing
    /// file degrades to the browser's broken-image state.
    Images { thumb: &'static str, thumb_alt: &'static str, logo: &'static str, logo_alt: &'static str },
    /// Video glyph on a tinted background.
    VideoGlyph,
}

/// Overlay call to action on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLinkLabel {
    Icon,
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
    pub media: ProjectMedia,
    pub link_label: ProjectLinkLabel,
    /// Extra class on the card root, if any.
    pub accent_class: Option<&'static str>,
}

pub const PROJECTS: [ProjectCard; 2] = [
    ProjectCard {
        title: "Sudrex Campaign \u{2013} Role as Halima",
        blurb: "Strategic advertising and character performance for a major pharmaceutical brand.",
        url: "https://www.facebook.com/SudrexNigeria/videos/954638474983445/?app=fbl",
        media: ProjectMedia::Images {
            thumb: "/sudrex-ad.jpg",
            thumb_alt: "Sudrex Campaign",
            logo: "/sudrex-logo.png",
            logo_alt: "Sudrex Logo",
        },
        link_label: ProjectLinkLabel::Icon,
        accent_class: Some("sudrex-card"),
    },
    ProjectCard {
        title: "TikTok Content Creation",
        blurb: "Engaging digital storytelling and audience interaction on social platforms.",
        url: "https://tiktok.com/@shes_cguel1",
        media: ProjectMedia::VideoGlyph,
        link_label: ProjectLinkLabel::Text("Visit @shes_cguel1"),
        accent_class: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails { email: "joelynabah2019@gmail.com", phone: "09165727483" };

/// Input control used for a contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Multi-line text area with the given row count.
    Multiline(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField { name: "name", kind: FieldKind::Text, placeholder: "Name", required: true },
    ContactField { name: "email", kind: FieldKind::Email, placeholder: "Email", required: true },
    ContactField { name: "message", kind: FieldKind::Multiline(5), placeholder: "Message", required: true },
];

pub const CONTACT_SUBMIT_LABEL: &str = "Send Message";

/// Footer social glyphs. Not linked anywhere yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    Twitter,
}

pub const SOCIAL_ICONS: [SocialIcon; 2] = [SocialIcon::Instagram, SocialIcon::Twitter];

/// Copyright line for the given year.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} All Rights Reserved.")
}
