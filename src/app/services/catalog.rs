use std::collections::{HashMap, HashSet};

use crate::app::domain::{LocalizedText, ProjectId, ProjectRecord};
use crate::app::infrastructure::error::{AppError, Result};

struct ProjectEntry {
    id: &'static str,
    images: &'static [&'static str],
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
    tags: &'static [&'static str],
}

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "frc-robots",
        images: &["assets/img/frc-robot-2024.jpg", "assets/img/frc-robot-2022.jpg"],
        title: ("FRC Takımı #8795 — Robotlar", "FRC Team #8795 — Robots"),
        description: (
            "İki yıl boyunca FRC Team Chaotics 8795 takım kaptanı olarak görev yaptım. 2024 robotu Swerve Drive sistemi, elevator ve 180° dönen intake mekanizmasına sahip. 2022 robotu Tank Drive ile kol sistemi kullanıyor. Tüm parçalar 3-axis CNC makinemizde üretiliyor.",
            "Served as team captain of FRC Team Chaotics 8795 for two years. 2024 robot features Swerve Drive system with elevator and 180° rotating intake mechanism. 2022 robot uses Tank Drive with arm system. All parts manufactured in-house using our 3-axis CNC machine.",
        ),
        tags: &["ROS/Control", "C++", "CNC", "SolidWorks"],
    },
    ProjectEntry {
        id: "ftc-mentor",
        images: &["assets/img/ftc-robot.jpg"],
        title: ("FTC 25564 — Mentor", "FTC 25564 — Mentor"),
        description: (
            "Yeni kurulan takıma mentor olarak teknik gelişim liderliği yaptım. Takımı Türkiye'nin en iyi 3 takımından biri haline getirdim ve 2025 FTC Avrupa Premier Etkinliği'ne davet aldık. Yazılım, mekanik tasarım ve strateji alanlarında liderlik ettim.",
            "Served as mentor for the rookie team, leading technical development. Guided the team to become one of Turkey's top 3 teams and earned invitation to FTC European Premier Event 2025. Led development in software, mechanical design, and strategy.",
        ),
        tags: &["Java/C++", "Strategy", "Mentorship"],
    },
    ProjectEntry {
        id: "shell-eco",
        images: &["assets/img/shell-eco-vehicle.jpg"],
        title: ("Shell Eco Marathon Aracı", "Shell Eco Marathon Vehicle"),
        description: (
            "Takımımız enerji verimli bir araç tasarlayıp Shell Eco Marathon Fransa finallerine katılmaya hak kazandı. SolidWorks ile şasi tasarımı yaptım ve Python tabanlı şerit takip sistemi geliştirdim. Arduino Mega ana kontrol birimi olarak kullanıldı.",
            "Our team designed an energy-efficient vehicle that qualified for Shell Eco Marathon finals in France. I designed the chassis in SolidWorks and developed a Python-based lane following system. Arduino Mega was used as the main control unit.",
        ),
        tags: &["Python", "Image Processing", "SolidWorks", "Arduino"],
    },
    ProjectEntry {
        id: "pcb-agc",
        images: &["assets/img/pcb-amplifier.jpg"],
        title: ("Geniş Bant Amplifikatör (AGC)", "Wideband Amplifier (AGC)"),
        description: (
            "Otomatik kazanç kontrolü ile geniş bant amplifikatör PCB'si tasarladım ve ürettim. KiCad ile tasarım aşamasından lehimleme ve test aşamalarına kadar tüm süreci yönettim.",
            "Designed and built a PCB for a wideband amplifier with automatic gain control. Managed the entire process from initial KiCad design to soldering and testing the final product.",
        ),
        tags: &["KiCad", "Analog", "PCB"],
    },
    ProjectEntry {
        id: "gas-monitoring",
        images: &["assets/img/gas-monitoring-system.jpg"],
        title: ("Madencilik için Gaz İzleme", "Gas Monitoring for Mining"),
        description: (
            "Teknofest'te ilk 3'e giren madenci güvenliği için gaz izleme sistemi geliştirdik. Kalibre edilmiş gaz sensörleri ve gerçek zamanlı veri eşikleri kullanarak erken uyarı sistemi oluşturduk.",
            "Developed a gas monitoring and early-warning system for mining safety that placed top 3 at Teknofest. Used calibrated gas sensors and real-time data thresholds to create an effective warning system.",
        ),
        tags: &["Embedded", "Safety", "IoT"],
    },
    ProjectEntry {
        id: "aim-assist",
        images: &["assets/img/aim-assist-project.jpg"],
        title: ("Nişan Yardım Sistemi (Görüntü İşleme)", "Aim Assist (Vision)"),
        description: (
            "Deneyap mezuniyet projem için hedefleri tespit edip kilitlenen bir nişan yardım sistemi geliştirdim. Özel eğitimli görüntü işleme modeli kullanarak hedef tespiti yapabilir.",
            "For my Deneyap graduation project, I developed an aim-assist system that can identify and lock onto specific targets using a custom-trained image processing model.",
        ),
        tags: &["Python", "CV", "ML"],
    },
];

/// Read-only table of portfolio projects, in authored order.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    records: Vec<ProjectRecord>,
    index: HashMap<ProjectId, usize>,
}

impl ContentCatalog {
    /// The projects shipped with the portfolio.
    pub fn builtin() -> Self {
        let records = PROJECTS
            .iter()
            .map(|entry| ProjectRecord {
                id: ProjectId::new(entry.id),
                images: entry.images.iter().map(|s| s.to_string()).collect(),
                title: LocalizedText::new(entry.title.0, entry.title.1),
                description: LocalizedText::new(entry.description.0, entry.description.1),
                tags: entry.tags.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self::index(records)
    }

    /// Build a catalog from arbitrary records. Every record needs at least
    /// one image and a unique id.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.images.is_empty() {
                return Err(AppError::Catalog(format!("project '{}' has no images", record.id)));
            }
            if !seen.insert(record.id.clone()) {
                return Err(AppError::Catalog(format!("duplicate project id '{}'", record.id)));
            }
        }
        Ok(Self::index(records))
    }

    fn index(records: Vec<ProjectRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();
        Self { records, index }
    }

    pub fn lookup(&self, id: &str) -> Option<&ProjectRecord> {
        self.index
            .get(&ProjectId::new(id))
            .map(|&i| &self.records[i])
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::LanguageCode;

    fn record(id: &str, images: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(id),
            images: images.iter().map(|s| s.to_string()).collect(),
            title: LocalizedText::new("Başlık", "Title"),
            description: LocalizedText::new("Açıklama", "Description"),
            tags: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_builtin_order_and_size() {
        let catalog = ContentCatalog::builtin();
        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["frc-robots", "ftc-mentor", "shell-eco", "pcb-agc", "gas-monitoring", "aim-assist"]
        );
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_builtin_records_are_complete() {
        for project in ContentCatalog::builtin().projects() {
            assert!(!project.images.is_empty(), "{} has no images", project.id);
            assert!(project.title.is_complete(), "{} title", project.id);
            assert!(project.description.is_complete(), "{} description", project.id);
            assert!(!project.tags.is_empty(), "{} tags", project.id);
        }
    }

    #[test]
    fn test_pcb_description_uses_possessive_suffix() {
        let pcb = ContentCatalog::builtin().lookup("pcb-agc").unwrap().description.tr.clone();
        assert!(pcb.contains("amplifikatör PCB'si tasarladım"), "{pcb}");
    }

    #[test]
    fn test_lookup() {
        let catalog = ContentCatalog::builtin();
        let frc = catalog.lookup("frc-robots").unwrap();
        assert_eq!(frc.first_image(), Some("assets/img/frc-robot-2024.jpg"));
        assert_eq!(frc.title.get(LanguageCode::En), Some("FRC Team #8795 — Robots"));
        assert_eq!(frc.tags, vec!["ROS/Control", "C++", "CNC", "SolidWorks"]);
        assert!(catalog.lookup("nonexistent-id").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_from_records_rejects_empty_images() {
        let err = ContentCatalog::from_records(vec![record("empty", &[])]).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = ContentCatalog::from_records(vec![
            record("a", &["a.jpg"]),
            record("a", &["b.jpg"]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_from_records() {
        let catalog = ContentCatalog::from_records(vec![record("a", &["a.jpg"])]).unwrap();
        assert!(catalog.lookup("a").is_some());
        assert!(!catalog.is_empty());
    }
}
