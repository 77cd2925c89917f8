//! Page download URL construction
//!
//! Two handler endpoints exist: TIF pages go through the server-side
//! renderer and come back as PNG; every other file type is fetched as
//! the stored page bytes with the lowercased file type as extension.

/// Largest edge, in pixels, the TIF renderer is asked for
const TIF_RENDER_MAX_SIZE: u32 = 1600;

/// Identity of one page file to download
#[derive(Debug, Clone)]
pub struct PageRequest<'a> {
    pub archive_id: i32,
    pub document_id: i64,
    pub page_nr: i64,
    pub file_nr: i64,
    /// Stored file type, as reported by the type lookup (e.g. `TIF`, `PDF`)
    pub file_type: &'a str,
    /// File stem passed to the attachment handler
    pub file_stem: &'a str,
}

/// A resolved download: the handler URL plus the extension to save under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDownload {
    pub url: String,
    pub extension: String,
}

impl PageDownload {
    /// Build the download for one page
    pub fn build(base_url: &str, session_id: &str, request: &PageRequest<'_>) -> Self {
        if request.file_type == "TIF" {
            let url = format!(
                "{base}/services/httphandler.ashx/TiffpageAsPNG?\
                 &archiefid={archive}&documentid={document}&paginanummer={page}\
                 &filenummer={file}&date=&contenttype=TIF&maxsize={maxsize}",
                base = base_url,
                archive = request.archive_id,
                document = request.document_id,
                page = request.page_nr,
                file = request.file_nr,
                maxsize = TIF_RENDER_MAX_SIZE,
            );
            return Self {
                url,
                extension: "png".to_string(),
            };
        }

        let url = format!(
            "{base}/services/httphandler.ashx/page?sessie={session}\
             &archiefId={archive}&documentid={document}&paginanummer={page}\
             &contenttype=image_tiff&filenummer={file}&attachment=1&filename={name}",
            base = base_url,
            session = session_id,
            archive = request.archive_id,
            document = request.document_id,
            page = request.page_nr,
            file = request.file_nr,
            name = request.file_stem,
        );

        Self {
            url,
            extension: request.file_type.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(file_type: &'static str) -> PageRequest<'static> {
        PageRequest {
            archive_id: 12,
            document_id: 4711,
            page_nr: 3,
            file_nr: 1,
            file_type,
            file_stem: "INV-001-03",
        }
    }

    #[test]
    fn test_tif_goes_through_png_renderer() {
        let download = PageDownload::build("https://dms.example.com/Xtendis.web", "", &request("TIF"));

        assert!(download.url.contains("TiffpageAsPNG"));
        assert!(download.url.contains("archiefid=12"));
        assert!(download.url.contains("documentid=4711"));
        assert!(download.url.contains("paginanummer=3"));
        assert!(download.url.contains("maxsize=1600"));
        assert_eq!(download.extension, "png");
    }

    #[test]
    fn test_other_types_use_page_handler() {
        let download =
            PageDownload::build("https://dms.example.com/Xtendis.web", "S123", &request("PDF"));

        assert!(download.url.contains("/page?sessie=S123"));
        assert!(download.url.contains("archiefId=12"));
        assert!(download.url.contains("filename=INV-001-03"));
        assert!(download.url.contains("attachment=1"));
        assert_eq!(download.extension, "pdf");
    }

    #[test]
    fn test_extension_is_lowercased() {
        let download = PageDownload::build("https://dms.example.com", "", &request("JPG"));
        assert_eq!(download.extension, "jpg");
    }
}
