//! Pitch templater: Pitch → outreach e-mail
//!
//! Deterministic interpolation into a fixed five-paragraph body. Free-text
//! fields are inserted verbatim; the output is plain text, not HTML.

use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::schema::{Pitch, PitchMessage, Tone};

/// Subject line of every pitch
pub const SUBJECT: &str = "Slimmer werken met AI – voorstel";

/// Pain-point phrase used when none are given
pub const FALLBACK_PAINS: &str = "terugkerende handmatige taken";

const BODY_TEMPLATE_NAME: &str = "pitch_body";

const BODY_TEMPLATE: &str = concat!(
    "{{ salutation }}\n\n",
    "Ik help mkb-teams{{ company_line }}{{ sector_line }} slimmer werken met praktische AI-automatiseringen. ",
    "Op basis van wat ik zie, kunnen we direct waarde leveren door {{ pains }} te automatiseren.\n\n",
    "Een korte QuickScan laat zien welke workflows de meeste impact hebben (zoals social posts, nieuwsbrief, chatbot of factuurverwerking). ",
    "Binnen 2 weken staat de eerste workflow live.\n\n",
    "Zullen we een kennismaking inplannen?\n\n",
    "Groet,\nFlomote",
);

/// Renders pitches from a compiled body template
pub struct PitchTemplater {
    tera: Tera,
}

impl PitchTemplater {
    /// Compile the body template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]); // Plain-text output, keep input verbatim
        tera.add_raw_template(BODY_TEMPLATE_NAME, BODY_TEMPLATE)
            .map_err(|e| Error::Config(format!("Invalid pitch template: {e}")))?;

        Ok(Self { tera })
    }

    /// Render subject and body for a pitch
    pub fn render(&self, pitch: &Pitch) -> Result<PitchMessage> {
        let mut context = Context::new();
        context.insert("salutation", &salutation(pitch));
        context.insert(
            "company_line",
            &optional_clause(pitch.company.as_deref(), |c| format!(" bij {c}")),
        );
        context.insert(
            "sector_line",
            &optional_clause(pitch.sector.as_deref(), |s| format!(" in de {s} sector")),
        );
        context.insert("pains", &pains(pitch.pain_points.as_deref()));

        let body = self.tera.render(BODY_TEMPLATE_NAME, &context)?;

        Ok(PitchMessage {
            subject: SUBJECT.to_string(),
            body,
        })
    }
}

fn salutation(pitch: &Pitch) -> String {
    match pitch.tone {
        Tone::Formeel => format!("Geachte {},", pitch.name),
        Tone::Vriendelijk | Tone::ToThePoint => format!("Hoi {},", pitch.name),
    }
}

/// Empty strings count as absent
fn optional_clause(value: Option<&str>, clause: impl Fn(&str) -> String) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(clause)
        .unwrap_or_default()
}

fn pains(pain_points: Option<&[String]>) -> String {
    match pain_points {
        Some(points) if !points.is_empty() => points.join(", "),
        _ => FALLBACK_PAINS.to_string(),
    }
}
