//! The export run
//!
//! Owns the database handle, the web session and the filesystem sink for
//! the whole run; both connections are acquired at startup and released
//! when the exporter is dropped, on every exit path.

use crate::catalog::{self, AUDIT_TRAIL_ARCHIVE_ID};
use crate::config::Config;
use crate::executor::{Cell, Database, RowMap};
use crate::observability::Logger;
use crate::planner::{self, fixed};
use crate::web::{PageDownload, PageRequest, WebSession};

use super::errors::{ExportError, ExportResult};
use super::layout::document_location;
use super::sidecar;
use super::sink::ExportSink;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSummary {
    /// Archives fully processed
    pub archives: usize,
    /// Logical documents seen
    pub documents: usize,
    /// Page images written
    pub pages: usize,
    /// Pages, sidecars or archives skipped after an error
    pub skipped: usize,
}

/// Sequential archive → document → page export
pub struct Exporter {
    db: Database,
    web: WebSession,
    sink: ExportSink,
    config: Config,
}

impl Exporter {
    pub fn new(db: Database, web: WebSession, config: Config) -> Self {
        let sink = ExportSink::new(config.export_folder.clone());
        Self {
            db,
            web,
            sink,
            config,
        }
    }

    /// Export every archive, or just the one in `archive_filter`
    pub async fn run(&mut self, archive_filter: Option<i32>) -> ExportResult<ExportSummary> {
        let archives = self
            .db
            .query(&fixed::archives_query(archive_filter))
            .await?
            .to_mappings();
        Logger::info("ARCHIVES_FOUND", &[("count", &archives.len().to_string())]);

        let mut summary = ExportSummary::default();
        for archive in &archives {
            let Some(archive_id) = archive.get("ARCHIEFID").and_then(Cell::as_int) else {
                Logger::warn("ARCHIVE_ROW_SKIPPED", &[("reason", "no ARCHIEFID")]);
                summary.skipped += 1;
                continue;
            };
            let archive_id = archive_id as i32;
            let archive_name = archive
                .get("NAAM")
                .map(|cell| cell.to_string())
                .unwrap_or_default();

            // A failing archive (bad descriptors, unreachable table) is
            // logged and skipped; the remaining archives still export.
            match self
                .export_archive(archive_id, &archive_name, &mut summary)
                .await
            {
                Ok(()) => summary.archives += 1,
                Err(e) => {
                    Logger::error(
                        "ARCHIVE_FAILED",
                        &[
                            ("archive", &archive_id.to_string()),
                            ("error", &e.to_string()),
                        ],
                    );
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    async fn export_archive(
        &mut self,
        archive_id: i32,
        archive_name: &str,
        summary: &mut ExportSummary,
    ) -> ExportResult<()> {
        Logger::info(
            "ARCHIVE_STARTED",
            &[("archive", &archive_id.to_string()), ("name", archive_name)],
        );

        let descriptors = catalog::list_index_fields(&mut self.db, archive_id).await?;
        let plan = planner::document_query(archive_id, &descriptors)?;
        let rows = self.db.query(&plan.to_sql()).await?.to_mappings();

        Logger::info(
            "DOCUMENTS_LISTED",
            &[
                ("archive", &archive_id.to_string()),
                ("rows", &rows.len().to_string()),
            ],
        );

        // The listing carries one row per page, newest document first;
        // document-level sidecars are written when the id changes.
        let mut previous_document_id = None;
        for row in &rows {
            let Some(document_id) = row.get("DOCUMENTID").and_then(Cell::as_int) else {
                Logger::warn(
                    "DOCUMENT_ROW_SKIPPED",
                    &[("archive", &archive_id.to_string()), ("reason", "no DOCUMENTID")],
                );
                summary.skipped += 1;
                continue;
            };

            let first_page = previous_document_id != Some(document_id);
            previous_document_id = Some(document_id);

            if first_page {
                summary.documents += 1;

                if let Err(e) = self
                    .write_metadata(archive_id, archive_name, row, document_id)
                    .await
                {
                    Logger::error(
                        "METADATA_FAILED",
                        &[
                            ("archive", &archive_id.to_string()),
                            ("document", &document_id.to_string()),
                            ("error", &e.to_string()),
                        ],
                    );
                    summary.skipped += 1;
                }

                if archive_id == AUDIT_TRAIL_ARCHIVE_ID {
                    if let Err(e) = self.write_audit_log(archive_id, archive_name, row).await {
                        Logger::error(
                            "AUDIT_LOG_FAILED",
                            &[
                                ("archive", &archive_id.to_string()),
                                ("document", &document_id.to_string()),
                                ("error", &e.to_string()),
                            ],
                        );
                        summary.skipped += 1;
                    }
                }
            }

            match self
                .export_page(archive_id, archive_name, row, document_id)
                .await
            {
                Ok(()) => summary.pages += 1,
                Err(e) => {
                    Logger::warn(
                        "PAGE_SKIPPED",
                        &[
                            ("archive", &archive_id.to_string()),
                            ("document", &document_id.to_string()),
                            ("error", &e.to_string()),
                        ],
                    );
                    summary.skipped += 1;
                }
            }
        }

        Ok(())
    }

    async fn export_page(
        &mut self,
        archive_id: i32,
        archive_name: &str,
        row: &RowMap,
        document_id: i64,
    ) -> ExportResult<()> {
        let location = document_location(archive_id, archive_name, row)?;

        let file_type = row
            .get("FILE_TYPE")
            .and_then(Cell::as_text)
            .ok_or_else(|| ExportError::missing_column(archive_id, "FILE_TYPE"))?;
        let page_nr = row
            .get("PAGE_NR")
            .and_then(Cell::as_int)
            .ok_or_else(|| ExportError::missing_column(archive_id, "PAGE_NR"))?;
        let file_nr = row
            .get("FILE_NR")
            .and_then(Cell::as_int)
            .ok_or_else(|| ExportError::missing_column(archive_id, "FILE_NR"))?;

        let stem = format!("{}-{:02}", location.file_stem, page_nr);
        let download = PageDownload::build(
            self.config.base_url_trimmed(),
            &self.config.session_id,
            &PageRequest {
                archive_id,
                document_id,
                page_nr,
                file_nr,
                file_type,
                file_stem: &stem,
            },
        );

        let bytes = self.web.fetch(&download.url).await?;
        let file_name = format!("{}.{}", stem, download.extension);
        let path = self.sink.write(&location.folder, &file_name, &bytes)?;

        Logger::info("PAGE_SAVED", &[("path", &path.display().to_string())]);
        Ok(())
    }

    async fn write_metadata(
        &mut self,
        archive_id: i32,
        archive_name: &str,
        row: &RowMap,
        document_id: i64,
    ) -> ExportResult<()> {
        let notes = self
            .db
            .query(&fixed::notes_query(archive_id, document_id))
            .await?
            .to_mappings();

        let location = document_location(archive_id, archive_name, row)?;
        let json = sidecar::metadata_json(row, &notes)?;
        let file_name = format!("{}.json", location.file_stem);
        let path = self.sink.write(&location.folder, &file_name, &json)?;

        Logger::info("METADATA_SAVED", &[("path", &path.display().to_string())]);
        Ok(())
    }

    async fn write_audit_log(
        &mut self,
        archive_id: i32,
        archive_name: &str,
        row: &RowMap,
    ) -> ExportResult<()> {
        let guid = match row.get("DOCUMENTGUID") {
            Some(cell) if !cell.is_null() => cell.to_string(),
            _ => return Err(ExportError::missing_column(archive_id, "DOCUMENTGUID")),
        };

        let entries = self
            .db
            .query(&fixed::audit_trail_query(&guid))
            .await?
            .to_mappings();

        let location = document_location(archive_id, archive_name, row)?;
        let json = sidecar::audit_json(&entries)?;
        let file_name = format!("{}-audit.json", location.file_stem);
        let path = self.sink.write(&location.folder, &file_name, &json)?;

        Logger::info("AUDIT_LOG_SAVED", &[("path", &path.display().to_string())]);
        Ok(())
    }
}

/// Connect, authenticate and run one export
///
/// Authentication failure is fatal: without a session no download can
/// succeed, so the run terminates before touching any archive.
pub async fn run_export(
    config: Config,
    archive_filter: Option<i32>,
) -> ExportResult<ExportSummary> {
    let db = Database::connect(&config).await?;
    let web = WebSession::login(&config).await?;

    let mut exporter = Exporter::new(db, web, config);
    exporter.run(archive_filter).await
}
