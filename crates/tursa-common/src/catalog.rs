//! The project catalog shown on the home page.
//!
//! Records are compile-time constants. The first record of a catalog is the
//! featured project and is never repeated in the secondary grid.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CatalogError, Result};

/// One portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Stable short key, unique within a catalog (e.g. `"petpal"`)
    pub id: &'static str,
    pub name: &'static str,
    /// Short category label (e.g. `"Mobile • Healthcare"`)
    pub tag: &'static str,
    /// Cover image, relative to the asset root. `None` renders a text placeholder.
    pub cover: Option<&'static str>,
    /// One-line summary shown on the collapsed tile
    pub blurb: &'static str,
    /// Long-form description shown only when the project is open
    pub details: &'static str,
    pub highlights: &'static [&'static str],
}

impl ProjectRecord {
    /// Text shown in place of a missing cover image.
    pub fn placeholder_label(&self) -> &'static str {
        self.name
    }
}

/// Ordered, validated list of projects.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Validate and wrap a list of projects.
    ///
    /// Fails if the list is empty, if an id is blank, or if two records share an id.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        if projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(projects.len());
        for p in &projects {
            if p.id.trim().is_empty() {
                return Err(CatalogError::BlankId(p.name.to_string()));
            }
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id.to_string()));
            }
        }

        Ok(Self { projects })
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_PROJECTS.to_vec())
    }

    /// First record; always present because `new` rejects empty catalogs.
    pub fn featured(&self) -> &ProjectRecord {
        &self.projects[0]
    }

    /// Every record after the featured one, in catalog order.
    pub fn secondary(&self) -> &[ProjectRecord] {
        &self.projects[1..]
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

// ── Built-in projects ────────────────────────────────────────────────────────

pub const BUILTIN_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "gridkeys",
        name: "GridKeys",
        tag: "Hardware • Web Configurator",
        cover: Some("img/gridkeys.svg"),
        blurb: "Modular, customizable keyboard platform with a drag-and-drop layout builder and QMK/VIA firmware integration.",
        details: "We’re building a grid-based, hot-swappable keyboard system. Users design their layout online, pick plates/switches, and we manufacture in small batches. Tech: React/Node configurator, Spring Boot backend, Firebase + S3, QMK firmware tooling.",
        highlights: &[
            "Drag-and-drop layout builder with live plate preview",
            "QMK/VIA firmware generated per order",
            "Small-batch manufacturing pipeline",
        ],
    },
    ProjectRecord {
        id: "petpal",
        name: "PetPal",
        tag: "Mobile • Healthcare",
        cover: None,
        blurb: "Integrated pet wellness & tracking platform.",
        details: "React Native app for pet owners; Spring Boot microservices for vets and shelters; ESP32 GPS collar prototype; Firebase + Firestore; appointment & symptom tracking; ML roadmap for anomaly detection.",
        highlights: &[
            "Owner, vet and shelter apps on one backend",
            "ESP32 GPS collar prototype",
            "Appointment & symptom tracking",
        ],
    },
    ProjectRecord {
        id: "medi-bridge",
        name: "MediBridge",
        tag: "Web • Social Impact",
        cover: None,
        blurb: "Donor–hospital matching platform.",
        details: "Next.js + Supabase stack; matching engine for urgent requests; messaging and verification workflow; analytics dashboard for NGO partners.",
        highlights: &[
            "Matching engine for urgent requests",
            "Messaging and verification workflow",
            "Analytics dashboard for NGO partners",
        ],
    },
    ProjectRecord {
        id: "smart-cart",
        name: "Smart Cart",
        tag: "IoT • Retail",
        cover: None,
        blurb: "RFID-based smart shopping cart.",
        details: "Raspberry Pi + multiple antennas for RSSI trilateration; Spring Boot + Firebase backend; React dashboard; QR-based checkout and discounts; data warehouse for item analytics.",
        highlights: &[
            "RSSI trilateration across multiple antennas",
            "QR-based checkout and discounts",
            "Item analytics warehouse",
        ],
    },
    ProjectRecord {
        id: "tuition-app",
        name: "Tuition Manager",
        tag: "Android • EdTech",
        cover: None,
        blurb: "Student app for assignments, results, attendance.",
        details: "Firebase auth & Firestore; role-based dashboards; QR attendance; file uploads via Gofile API; teacher/admin workflows and approvals.",
        highlights: &[
            "Role-based dashboards for students, teachers and admins",
            "QR attendance",
            "Approval workflows",
        ],
    },
];
