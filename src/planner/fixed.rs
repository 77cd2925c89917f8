//! Fixed listing queries
//!
//! The archive listing, per-document notes and the audit trail do not
//! depend on index-field descriptors; their shape is constant and only
//! parameterized by archive/document identifiers.

/// Escape a value for use inside a T-SQL single-quoted literal
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Archive listing, optionally filtered to a single archive
pub fn archives_query(archive_filter: Option<i32>) -> String {
    let mut sql = String::from("SELECT ARCHIEFID, NAAM FROM X10DBASE.dbo.ARCHIEF");
    if let Some(archive_id) = archive_filter {
        sql.push_str(&format!(" WHERE ARCHIEFID = {}", archive_id));
    }
    sql.push_str(" ORDER BY 1");
    sql
}

/// Notes attached to one document, newest mutation first
pub fn notes_query(archive_id: i32, document_id: i64) -> String {
    format!(
        "SELECT n.[GEBRUIKERID], n.[AANMAAKDATUM], n.[MUTATIEDATUM], n.[TEKST], \
         g.[NAAMVOLUIT] + ' (' + g.NAAM + ')' AS GEBRUIKER \
         FROM X10DBASE.dbo.NOTITIE_{archive} n \
         INNER JOIN X10DBASE.dbo.GEBRUIKER g ON n.GEBRUIKERID = g.GEBRUIKERID \
         WHERE [DOCUMENTID] = {document} \
         ORDER BY MUTATIEDATUM DESC",
        archive = archive_id,
        document = document_id,
    )
}

/// Audit-trail rows for one document, oldest first
///
/// Audit records live in archive 5; the correlation GUID ties them to the
/// originating document. The generic `INDEXWAARDE_*` columns are renamed
/// to their audit meanings, and `noteId:` markers in the message column
/// are resolved against the note table of the archive the record points
/// at (7 or 12 are the only archives that write them).
pub fn audit_trail_query(document_guid: &str) -> String {
    format!(
        "SELECT d.[DOCUMENTID], \
         d.[GEBRUIKERID], \
         g.[NAAMVOLUIT] + ' (' + g.NAAM + ')' AS GEBRUIKER, \
         d.[AANMAAKDATUM], \
         d.[MUTATIEDATUM], \
         d.[INDEXEERDATUM], \
         d.[OBJECTID], \
         d.[BRON], \
         d.[INDEXWAARDE_10] AS Entiteit, \
         d.[INDEXWAARDE_11] AS EntiteitId, \
         d.[INDEXWAARDE_12] AS UitvoerendeId, \
         d.[INDEXWAARDE_13] AS Handeling, \
         d.[INDEXWAARDE_14] AS Resultaat, \
         d.[INDEXWAARDE_15] AS Actor, \
         d.[INDEXWAARDE_16] AS Melding, \
         d.[INDEXWAARDE_17] AS ArchiefId, \
         d.[INDEXWAARDE_75] AS ChangeInfoXml, \
         d.[INDEXWAARDE_76] AS ChangeInfoList, \
         CASE \
         WHEN (INDEXWAARDE_16 LIKE 'noteId:%') THEN CASE \
         WHEN [INDEXWAARDE_17] = 7 THEN ( \
         SELECT TEKST FROM NOTITIE_7 \
         WHERE NOTITIEID = CONVERT(int, REPLACE(INDEXWAARDE_16, 'noteId:', '')) \
         ) \
         WHEN [INDEXWAARDE_17] = 12 THEN ( \
         SELECT TEKST FROM NOTITIE_12 \
         WHERE NOTITIEID = CONVERT(int, REPLACE(INDEXWAARDE_16, 'noteId:', '')) \
         ) \
         ELSE '---' \
         END \
         ELSE '' \
         END AS NOTE \
         FROM [X10DBASE].[dbo].[DOCUMENT_5] d \
         INNER JOIN [X10DBASE].[dbo].[GEBRUIKER] g ON d.[GEBRUIKERID] = g.[GEBRUIKERID] \
         WHERE d.CORRELATIEGUID = '{guid}' \
         ORDER BY d.AANMAAKDATUM",
        guid = escape_literal(document_guid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archives_query_unfiltered() {
        let sql = archives_query(None);
        assert_eq!(
            sql,
            "SELECT ARCHIEFID, NAAM FROM X10DBASE.dbo.ARCHIEF ORDER BY 1"
        );
    }

    #[test]
    fn test_archives_query_filtered() {
        let sql = archives_query(Some(12));
        assert!(sql.contains("WHERE ARCHIEFID = 12"));
        assert!(sql.ends_with("ORDER BY 1"));
    }

    #[test]
    fn test_notes_query_targets_archive_table() {
        let sql = notes_query(7, 4711);
        assert!(sql.contains("NOTITIE_7 n"));
        assert!(sql.contains("[DOCUMENTID] = 4711"));
        assert!(sql.contains("ORDER BY MUTATIEDATUM DESC"));
    }

    #[test]
    fn test_audit_query_filters_on_correlation_guid() {
        let sql = audit_trail_query("0aa34c4b-9d1f-4a8e-9f31-000000000000");
        assert!(sql.contains("CORRELATIEGUID = '0aa34c4b-9d1f-4a8e-9f31-000000000000'"));
        assert!(sql.contains("[INDEXWAARDE_10] AS Entiteit"));
        assert!(sql.contains("[DOCUMENT_5] d"));
        assert!(sql.ends_with("ORDER BY d.AANMAAKDATUM"));
    }

    #[test]
    fn test_audit_query_escapes_quotes() {
        let sql = audit_trail_query("it's");
        assert!(sql.contains("CORRELATIEGUID = 'it''s'"));
    }
}
