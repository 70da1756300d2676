// PDF module
// Renders the export table model with printpdf

pub mod service;

pub use service::{PdfExportOptions, RosterPdfService};
