//! End-to-end composition: names to results, results back into the document.

use crate::assign::UniqueAssigner;
use crate::email::compose_email;
use crate::error::{VnUserError, VnUserResult};
use crate::extract::extract_names;
use crate::model::{ProcessingConfig, ProcessingOptions, UsernameResult};
use crate::splice::splice_columns;
use crate::summary::ProcessingSummary;
use crate::username::convert_name_to_username;
use vnuser_sheet::{Book, CellValue, DocumentFormat, Sheet};

/// Convert names into unique usernames (and emails when requested), in order.
///
/// Each call uses its own [`UniqueAssigner`], so repeated calls with the same
/// input give the same output.
#[must_use]
pub fn compute_usernames<S: AsRef<str>>(names: &[S], options: &ProcessingOptions) -> Vec<UsernameResult> {
    let domain = options.email_domain();
    let mut assigner = UniqueAssigner::new();

    let results: Vec<UsernameResult> = names
        .iter()
        .map(|name| {
            let original_name = name.as_ref().to_string();
            let base_username = convert_name_to_username(&original_name);
            let final_username = assigner.assign(&base_username);
            let email = compose_email(&final_username, domain);
            UsernameResult {
                original_name,
                base_username,
                final_username,
                email,
            }
        })
        .collect();

    tracing::debug!(
        names = results.len(),
        conflicts = results.iter().filter(|r| r.is_conflict()).count(),
        "computed usernames"
    );

    results
}

/// Usernames only, no emails.
#[must_use]
pub fn generate_unique_usernames<S: AsRef<str>>(names: &[S]) -> Vec<UsernameResult> {
    compute_usernames(names, &ProcessingOptions::default())
}

/// Usernames plus emails for `options.domain` when `options.include_emails` is set.
#[must_use]
pub fn process_names_to_emails<S: AsRef<str>>(names: &[S], options: &ProcessingOptions) -> Vec<UsernameResult> {
    compute_usernames(names, options)
}

/// Splice `results` into a copy of `grid` according to `config`.
#[must_use]
pub fn build_output_grid(
    grid: &[Vec<CellValue>],
    config: &ProcessingConfig,
    results: &[UsernameResult],
) -> Vec<Vec<CellValue>> {
    let data_rows = grid.len().saturating_sub(config.first_data_row());
    if results.len() != data_rows {
        tracing::warn!(
            results = results.len(),
            data_rows,
            "result count differs from data rows; unmatched rows are left as is"
        );
    }
    splice_columns(grid, config, results)
}

/// Check that `config` names an existing sheet and an existing column of it.
pub fn validate_config<'a>(book: &'a Book, config: &ProcessingConfig) -> VnUserResult<&'a Sheet> {
    let sheet = book.get_sheet(&config.sheet_name).map_err(|_| {
        VnUserError::config(format!(
            "worksheet \"{}\" not found (available: {})",
            config.sheet_name,
            book.sheet_names().join(", ")
        ))
    })?;

    let column_count = sheet.col_count();
    if config.column_index >= column_count {
        return Err(VnUserError::config(format!(
            "column index {} is out of range (sheet \"{}\" has {} columns)",
            config.column_index, config.sheet_name, column_count
        )));
    }

    Ok(sheet)
}

/// Output of a full document run.
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    /// One result per data row, in row order.
    pub results: Vec<UsernameResult>,
    pub summary: ProcessingSummary,
    /// Single-sheet book holding the spliced grid.
    pub book: Book,
    /// `book` serialized in the input's output format (legacy XLS becomes XLSX).
    pub bytes: Vec<u8>,
}

/// Run the pipeline over an already parsed book.
pub fn process_book(book: &Book, config: &ProcessingConfig) -> VnUserResult<(Vec<UsernameResult>, Book)> {
    let sheet = validate_config(book, config)?;
    tracing::info!(
        sheet = %config.sheet_name,
        column = config.column_index,
        has_header = config.has_header,
        "processing worksheet"
    );

    let records = extract_names(sheet.data(), config.column_index, config.has_header);
    let names: Vec<&str> = records.iter().map(|r| r.original_name.as_str()).collect();
    let results = compute_usernames(&names, &config.options());

    let mut output = Sheet::with_name(&config.sheet_name);
    *output.data_mut() = build_output_grid(sheet.data(), config, &results);

    let output = Book::single(&config.sheet_name, output).with_utf8_bom(book.has_utf8_bom());
    Ok((results, output))
}

/// Parse `bytes`, run the pipeline, and serialize the single-sheet result.
pub fn process_document(
    bytes: &[u8],
    format: DocumentFormat,
    config: &ProcessingConfig,
) -> VnUserResult<ProcessedDocument> {
    let input = format
        .parse(bytes)
        .map_err(|e| VnUserError::input_format(format!("cannot read {format} document: {e}")))?;

    process_parsed_document(&input, format, config)
}

/// Run the pipeline over a book that was already parsed from `format`.
pub fn process_parsed_document(
    input: &Book,
    format: DocumentFormat,
    config: &ProcessingConfig,
) -> VnUserResult<ProcessedDocument> {
    let (results, book) = process_book(input, config)?;
    let bytes = format.serialize(&book)?;
    let summary = ProcessingSummary::from_results(&results);
    tracing::info!(%summary, "document processed");

    Ok(ProcessedDocument {
        results,
        summary,
        book,
        bytes,
    })
}

/// Demo names for trying the converter without a document.
#[must_use]
pub fn sample_vietnamese_names() -> Vec<&'static str> {
    vec![
        "Pham Thanh Tung",
        "Tran Thanh Thao",
        "Le Minh Thanh",
        "Nguyen Van An",
        "Hoang Thi Mai",
        "Tran Phuong Thao",
        "Ta Phuong Thao",
        "Vu Minh Duc",
        "Dang Thi Lan",
        "Bui Van Long",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_preserves_order_and_blanks() {
        let names = ["Phạm Thanh Tùng", "", "  ", "Nguyễn Văn An"];
        let results = generate_unique_usernames(&names);

        assert_eq!(results.len(), names.len());
        for (result, name) in results.iter().zip(names) {
            assert_eq!(result.original_name, name);
        }
        assert_eq!(results[0].final_username, "tungpt");
        assert_eq!(results[1].final_username, "");
        assert_eq!(results[2].base_username, "");
        assert_eq!(results[3].final_username, "annv");
    }

    #[test]
    fn test_conflicts_resolved_in_input_order() {
        let results = generate_unique_usernames(&["Tran Phuong Thao", "Ta Phuong Thao", "Tô Phương Thảo"]);
        let finals: Vec<&str> = results.iter().map(|r| r.final_username.as_str()).collect();
        assert_eq!(finals, vec!["thaotp", "thaotp1", "thaotp2"]);
        assert!(results.iter().all(|r| r.base_username == "thaotp"));
    }

    #[test]
    fn test_emails_only_for_usernames() {
        let options = ProcessingOptions::with_emails("acme.com");
        let results = process_names_to_emails(&["Pham Thanh Tung", ""], &options);
        assert_eq!(results[0].email.as_deref(), Some("tungpt@acme.com"));
        assert_eq!(results[1].email, None);
    }

    #[test]
    fn test_emails_need_include_flag() {
        let options = ProcessingOptions {
            domain: Some("acme.com".to_string()),
            include_emails: false,
        };
        let results = process_names_to_emails(&["Pham Thanh Tung"], &options);
        assert_eq!(results[0].email, None);
    }

    #[test]
    fn test_validate_config() {
        let book = Book::single("Staff", Sheet::from_data(vec![vec!["Name", "Dept"]]));

        assert!(validate_config(&book, &ProcessingConfig::new("Staff", 1)).is_ok());

        let err = validate_config(&book, &ProcessingConfig::new("Other", 0)).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("Other"));

        let err = validate_config(&book, &ProcessingConfig::new("Staff", 2)).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_validate_empty_sheet() {
        let book = Book::single("Staff", Sheet::new());
        assert!(validate_config(&book, &ProcessingConfig::new("Staff", 0))
            .unwrap_err()
            .is_config());
    }

    #[test]
    fn test_samples_have_expected_conflict() {
        let results = generate_unique_usernames(&sample_vietnamese_names());
        assert_eq!(results.len(), 10);
        assert_eq!(results[5].final_username, "thaotp");
        assert_eq!(results[6].final_username, "thaotp1");
    }
}
