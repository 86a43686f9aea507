//! Fixed-layout student report document.

use chrono::Utc;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;

use crate::model::StudentRecord;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_X_MM: f32 = 16.0;
const LABEL_X_MM: f32 = 22.0;
const VALUE_X_MM: f32 = 82.0;
const TOP_Y_MM: f32 = 272.0;
const FOOTER_Y_MM: f32 = 26.0;

const DATE_FORMAT: &str = "%B %-d, %Y";

/// Errors that can occur while producing the document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf generation failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// A rendered report, ready to be written to a response.
pub struct RenderedDocument {
    bytes: Vec<u8>,
    filename: String,
}

impl RenderedDocument {
    /// The document bytes, starting with the `%PDF` magic sequence.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Download filename, `student_<id>_report.pdf`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Render a student record into the fixed report layout.
pub fn render_student_report(record: &StudentRecord) -> Result<RenderedDocument, RenderError> {
    let (doc, page, layer) =
        PdfDocument::new("Student Report", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut page = ReportPage {
        layer: doc.get_page(page).get_layer(layer),
        regular,
        bold,
        y: TOP_Y_MM,
    };

    page.title("Student Report");

    page.heading("Student Information");
    page.field("Student ID", &record.id.to_string());
    page.field("Name", &record.name);
    page.field("Email", &record.email);
    page.field("Phone", &record.phone);
    page.field("Gender", &record.gender);
    page.field("Date of Birth", &record.dob.format(DATE_FORMAT).to_string());
    page.field(
        "System Access",
        if record.system_access { "Yes" } else { "No" },
    );

    page.heading("Academic Information");
    page.field("Class", &record.class);
    page.field("Section", &record.section);
    page.field("Roll Number", &record.roll.to_string());
    page.field(
        "Admission Date",
        &record.admission_date.format(DATE_FORMAT).to_string(),
    );

    page.heading("Family Information");
    page.field("Father's Name", &record.father_name);
    page.field("Father's Phone", &record.father_phone);
    page.field("Mother's Name", &record.mother_name);
    page.field("Mother's Phone", &record.mother_phone);
    page.field("Guardian's Name", &record.guardian_name);
    page.field("Guardian's Phone", &record.guardian_phone);
    page.field("Relation to Guardian", &record.relation_of_guardian);

    page.heading("Address Information");
    page.field("Current Address", &record.current_address);
    page.field("Permanent Address", &record.permanent_address);

    page.footer(&record.reporter_name);

    let bytes = doc.save_to_bytes()?;
    Ok(RenderedDocument {
        bytes,
        filename: format!("student_{}_report.pdf", record.id),
    })
}

/// Cursor-based writer over the single report page.
struct ReportPage {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl ReportPage {
    fn title(&mut self, text: &str) {
        self.layer
            .use_text(text, 20.0, Mm(MARGIN_X_MM), Mm(self.y), &self.bold);
        self.y -= 6.0;
        self.layer.use_text(
            "_".repeat(64),
            10.0,
            Mm(MARGIN_X_MM),
            Mm(self.y),
            &self.regular,
        );
        self.y -= 10.0;
    }

    fn heading(&mut self, text: &str) {
        self.y -= 4.0;
        self.layer
            .use_text(text, 13.0, Mm(MARGIN_X_MM), Mm(self.y), &self.bold);
        self.y -= 8.0;
    }

    fn field(&mut self, label: &str, value: &str) {
        self.layer.use_text(
            format!("{label}:"),
            10.0,
            Mm(LABEL_X_MM),
            Mm(self.y),
            &self.bold,
        );
        self.layer
            .use_text(value, 10.0, Mm(VALUE_X_MM), Mm(self.y), &self.regular);
        self.y -= 7.0;
    }

    fn footer(&mut self, reporter_name: &str) {
        let mut y = FOOTER_Y_MM;
        self.layer.use_text(
            "_".repeat(64),
            10.0,
            Mm(MARGIN_X_MM),
            Mm(y),
            &self.regular,
        );
        y -= 6.0;
        let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        self.layer.use_text(
            format!("Generated on {generated}"),
            8.0,
            Mm(MARGIN_X_MM),
            Mm(y),
            &self.regular,
        );
        y -= 5.0;
        if !reporter_name.is_empty() {
            self.layer.use_text(
                format!("Prepared by {reporter_name}"),
                8.0,
                Mm(MARGIN_X_MM),
                Mm(y),
                &self.regular,
            );
            y -= 5.0;
        }
        self.layer.use_text(
            format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            8.0,
            Mm(MARGIN_X_MM),
            Mm(y),
            &self.regular,
        );
    }
}
