//! Static rule table for QuickScan advice
//!
//! Rules are independent guards evaluated in table order. Every rule that
//! matches contributes its items; [`FALLBACK`] applies only when none did.

use crate::schema::{AdviceItem, Level};

/// Lowercased view of a QuickScan used by rule guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProfile {
    pub sector: String,
    pub employees: i64,
    pub challenges: Vec<String>,
}

impl ScanProfile {
    pub fn new(sector: &str, employees: i64, challenges: &[String]) -> Self {
        Self {
            sector: sector.to_lowercase(),
            employees,
            challenges: challenges.iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    pub fn has_challenge(&self, challenge: &str) -> bool {
        self.challenges.iter().any(|c| c == challenge)
    }

    pub fn sector_in(&self, sectors: &[&str]) -> bool {
        sectors.contains(&self.sector.as_str())
    }
}

/// Fixed text of one advice item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub impact: Level,
    pub effort: Level,
    pub description: &'static str,
}

impl AdviceTemplate {
    pub fn to_item(&self) -> AdviceItem {
        AdviceItem {
            category: self.category.to_string(),
            title: self.title.to_string(),
            impact: self.impact,
            effort: self.effort,
            description: self.description.to_string(),
        }
    }
}

/// A guard and the items it emits when it holds
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&ScanProfile) -> bool,
    pub items: &'static [AdviceTemplate],
}

pub const MARKETING_SECTORS: &[&str] = &["agency", "detailhandel", "retail", "horeca"];
pub const SERVICE_SECTORS: &[&str] = &["dienstverlening", "saas", "webshop", "e-commerce"];
pub const ADMIN_SECTORS: &[&str] = &["bouw", "zorg", "productie"];
pub const ANALYSIS_SECTORS: &[&str] = &["saas", "consultancy", "it"];

/// Company size from which invoice processing is always worth it
pub const ADMIN_EMPLOYEE_THRESHOLD: i64 = 5;

fn needs_marketing(p: &ScanProfile) -> bool {
    p.has_challenge("marketing") || p.sector_in(MARKETING_SECTORS)
}

fn needs_customer_service(p: &ScanProfile) -> bool {
    p.has_challenge("klantenservice") || p.sector_in(SERVICE_SECTORS)
}

fn needs_administration(p: &ScanProfile) -> bool {
    p.employees >= ADMIN_EMPLOYEE_THRESHOLD
        || p.has_challenge("administratie")
        || p.sector_in(ADMIN_SECTORS)
}

fn needs_analysis(p: &ScanProfile) -> bool {
    p.has_challenge("analyse") || p.sector_in(ANALYSIS_SECTORS)
}

pub static RULES: [Rule; 4] = [
    Rule {
        name: "marketing",
        applies: needs_marketing,
        items: &[
            AdviceTemplate {
                category: "marketing",
                title: "Automatische social posts",
                impact: Level::Hoog,
                effort: Level::Laag,
                description: "Genereer en plan wekelijks social posts vanuit blog/nieuws met AI en een planner.",
            },
            AdviceTemplate {
                category: "marketing",
                title: "Nieuwsbrief generator",
                impact: Level::Middel,
                effort: Level::Laag,
                description: "Zet blog/updates om naar maandelijkse nieuwsbrief, inclusief onderwerpregels en A/B varianten.",
            },
        ],
    },
    Rule {
        name: "klantenservice",
        applies: needs_customer_service,
        items: &[
            AdviceTemplate {
                category: "klantenservice",
                title: "Website chatbot / FAQ bot",
                impact: Level::Hoog,
                effort: Level::Middel,
                description: "24/7 chatbot gevoed met je kennisbank en beleidsdocumenten voor snellere antwoorden.",
            },
            AdviceTemplate {
                category: "klantenservice",
                title: "Inbox triage met AI",
                impact: Level::Middel,
                effort: Level::Laag,
                description: "Automatisch categoriseren en samenvatten van binnenkomende mails, met voorgestelde antwoorden.",
            },
        ],
    },
    Rule {
        name: "administratie",
        applies: needs_administration,
        items: &[AdviceTemplate {
            category: "financien",
            title: "Factuurverwerking (OCR + boeking)",
            impact: Level::Hoog,
            effort: Level::Middel,
            description: "Herken facturen automatisch, extraheer bedragen en match met bestellingen/uren.",
        }],
    },
    Rule {
        name: "analyse",
        applies: needs_analysis,
        items: &[AdviceTemplate {
            category: "analyse",
            title: "Rapportage samenvattingen",
            impact: Level::Middel,
            effort: Level::Laag,
            description: "Maak maandrapporten met belangrijkste KPI's, trends en aanbevelingen.",
        }],
    },
];

pub static FALLBACK: AdviceTemplate = AdviceTemplate {
    category: "operations",
    title: "Proces intake workshop",
    impact: Level::Middel,
    effort: Level::Laag,
    description: "Korte sessie waarin we snel kansen voor automatisering in kaart brengen.",
};
