//! Hand-authored page text, in both languages.
//!
//! Everything the window shows outside the lightbox comes from here. Each
//! entry becomes one content node when the page is built.

use crate::app::domain::{LanguageCode, LocalizedText};

#[derive(Debug, Clone, Copy)]
pub struct Bilingual {
    pub tr: &'static str,
    pub en: &'static str,
}

impl Bilingual {
    pub const fn new(tr: &'static str, en: &'static str) -> Self {
        Self { tr, en }
    }

    pub fn localized(&self) -> LocalizedText {
        LocalizedText::new(self.tr, self.en)
    }

    pub fn get(&self, language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::Tr => self.tr,
            LanguageCode::En => self.en,
        }
    }
}

pub const PAGE_TITLE: Bilingual =
    Bilingual::new("Ömer Faruk Kuşçu — Portföy", "Ömer Faruk Kuşçu — Portfolio");

/// A section heading keyed by the section it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeading {
    pub key: &'static str,
    pub text: Bilingual,
}

/// Section headings in page order. Keyed headings are matched by `key`;
/// unkeyed ones fall back to position in this table.
pub const SECTION_HEADINGS: &[SectionHeading] = &[
    SectionHeading { key: "about", text: Bilingual::new("Hakkımda", "About Me") },
    SectionHeading { key: "projects", text: Bilingual::new("Projeler", "Projects") },
    SectionHeading { key: "skills", text: Bilingual::new("Yetenekler", "Skills") },
    SectionHeading { key: "awards", text: Bilingual::new("Ödüller & Başarılar", "Awards & Achievements") },
    SectionHeading { key: "contact", text: Bilingual::new("İletişime Geçin", "Get In Touch") },
];

pub const NAV_LINKS: &[(&str, Bilingual)] = &[
    ("about", Bilingual::new("Hakkımda", "About")),
    ("projects", Bilingual::new("Projeler", "Projects")),
    ("skills", Bilingual::new("Yetenekler", "Skills")),
    ("awards", Bilingual::new("Ödüller", "Awards")),
    ("contact", Bilingual::new("İletişim", "Contact")),
];

pub const HERO_NAME: &str = "Ömer Faruk Kuşçu";

pub const HERO_TAGLINE: Bilingual = Bilingual::new(
    "Dünya Şampiyonu Matematikçi & Robotik Geliştirici",
    "World Champion Mathematician & Robotics Innovator",
);

pub const HERO_INTRO: Bilingual = Bilingual::new(
    "Robotik, gömülü sistemler ve görüntü işleme üzerine çalışıyorum. Fikirleri sahada çalışan makinelere dönüştürmeyi seviyorum.",
    "I work on robotics, embedded systems and computer vision. I like turning ideas into machines that work in the field.",
);

pub const ABOUT_PARAGRAPHS: &[Bilingual] = &[
    Bilingual::new(
        "FRC ve FTC takımlarında kaptanlık ve mentorluk yaptım; mekanik tasarımdan kontrol yazılımına kadar her aşamada yer aldım.",
        "I have captained and mentored FRC and FTC teams, working on every stage from mechanical design to control software.",
    ),
    Bilingual::new(
        "Matematik olimpiyatlarında uluslararası dereceler aldım ve bu disiplini mühendislik problemlerine taşıyorum.",
        "I have earned international medals in mathematics olympiads and bring that discipline to engineering problems.",
    ),
];

pub const PROJECT_VIEW_LABEL: Bilingual = Bilingual::new("Detayları Gör", "View Details");

pub const SKILL_GROUPS: &[(Bilingual, &str)] = &[
    (Bilingual::new("Yazılım", "Software"), "C++ · Python · Java · ROS"),
    (Bilingual::new("Donanım", "Hardware"), "Arduino · KiCad · Analog · PCB"),
    (Bilingual::new("Tasarım & Üretim", "Design & Manufacturing"), "SolidWorks · CNC · 3D Printing"),
    (Bilingual::new("Yapay Zeka", "AI"), "Computer Vision · ML"),
];

pub const AWARDS: &[Bilingual] = &[
    Bilingual::new(
        "Dünya Matematik Şampiyonası — Birincilik",
        "World Mathematics Championship — First Place",
    ),
    Bilingual::new(
        "FTC Avrupa Premier Etkinliği 2025 — Davet",
        "FTC European Premier Event 2025 — Invitation",
    ),
    Bilingual::new(
        "Shell Eco Marathon Fransa — Finalist",
        "Shell Eco Marathon France — Finalist",
    ),
    Bilingual::new(
        "Teknofest — Madencilik Güvenliği İlk 3",
        "Teknofest — Mining Safety Top 3",
    ),
];

/// Contact cards: bilingual label and the link they open.
///
/// These are placeholders that name no account: a reserved example.com
/// address and the bare site roots.
// TODO: replace with the owner's real address and profile handles.
pub const CONTACT_LINKS: &[(Bilingual, &str)] = &[
    (Bilingual::new("E-posta", "Email"), "mailto:contact@example.com"),
    (Bilingual::new("GitHub", "GitHub"), "https://github.com"),
    (Bilingual::new("LinkedIn", "LinkedIn"), "https://www.linkedin.com"),
];

pub const FOOTER_NOTE: Bilingual = Bilingual::new("Tüm hakları saklıdır.", "All rights reserved.");
