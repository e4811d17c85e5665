//! Проверка выбранного файла до обращения к сети.

/// Максимальный размер файла: 10 MiB.
///
/// `f64`, потому что `web_sys::File::size()` отдаёт размер как double.
pub const MAX_FILE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// Причина отказа в загрузке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRejection {
    InvalidFileType,
    FileTooLarge,
}

impl FileRejection {
    /// Текст, показываемый пользователю.
    pub fn message(&self) -> &'static str {
        match self {
            FileRejection::InvalidFileType => "Поддерживаются только файлы формата DOCX",
            FileRejection::FileTooLarge => "Размер файла не должен превышать 10MB",
        }
    }
}

/// Проверить имя и размер файла. При отказе никакой запрос не отправляется.
pub fn validate_file(name: &str, size: f64) -> Result<(), FileRejection> {
    if !name.to_lowercase().ends_with(".docx") {
        return Err(FileRejection::InvalidFileType);
    }
    if size > MAX_FILE_SIZE {
        return Err(FileRejection::FileTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_docx() {
        assert!(validate_file("report.docx", 2.0 * 1024.0 * 1024.0).is_ok());
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(validate_file("REPORT.DOCX", 1024.0).is_ok());
        assert!(validate_file("Отчёт.Docx", 1024.0).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert_eq!(
            validate_file("report.pdf", 1024.0),
            Err(FileRejection::InvalidFileType)
        );
        assert_eq!(
            validate_file("report.doc", 1024.0),
            Err(FileRejection::InvalidFileType)
        );
        assert_eq!(
            validate_file("report", 1024.0),
            Err(FileRejection::InvalidFileType)
        );
    }

    #[test]
    fn test_rejects_oversized_file() {
        assert_eq!(
            validate_file("report.docx", MAX_FILE_SIZE + 1.0),
            Err(FileRejection::FileTooLarge)
        );
    }

    #[test]
    fn test_accepts_file_at_exact_limit() {
        assert!(validate_file("report.docx", MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_type_is_checked_before_size() {
        // Оба условия нарушены: пользователю сообщаем про формат.
        assert_eq!(
            validate_file("report.pdf", MAX_FILE_SIZE * 2.0),
            Err(FileRejection::InvalidFileType)
        );
    }
}
