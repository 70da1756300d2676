use super::RosterApp;
use crate::services::export::{suggested_file_name, RosterTable};
use crate::services::pdf::{PdfExportOptions, RosterPdfService};

/// Export boundary: file-dialog prompt, in-progress guard, and user
/// feedback. A failure leaves roster state untouched and re-arms the
/// guard so the user can retry.
impl RosterApp {
    pub(super) fn export_roster_to_pdf(&mut self) {
        if self.exporting {
            return;
        }

        let month = self.current_month;
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Roster to PDF")
            .set_file_name(suggested_file_name(month))
            .add_filter("PDF files", &["pdf"])
            .save_file()
        else {
            return;
        };

        self.exporting = true;
        let table = RosterTable::build(&self.roster, month);
        match RosterPdfService::export(&table, &path, &PdfExportOptions::default()) {
            Ok(()) => {
                log::info!("Exported roster for {} to {:?}", month.label(), path);
                self.toast_manager
                    .success(format!("Exported roster for {}", month.label()));
            }
            Err(e) => {
                log::error!("Failed to export PDF: {:#}", e);
                self.toast_manager.error("Failed to export PDF");
            }
        }
        self.exporting = false;
    }
}
