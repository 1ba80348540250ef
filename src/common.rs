use quick_error::quick_error;

quick_error! {
    /// Every failure the loader can run into. Library errors are wrapped
    /// as-is and reported as the error source.
    #[derive(Debug)]
    pub enum GradebookError {
        Io(err: std::io::Error) {
            from()
            display("I/O error: {}", err)
            source(err)
        }
        Csv(err: csv::Error) {
            from()
            display("CSV error: {}", err)
            source(err)
        }
        Sqlite(err: rusqlite::Error) {
            from()
            display("database error: {}", err)
            source(err)
        }
        Json(err: serde_json::Error) {
            from()
            display("JSON error: {}", err)
            source(err)
        }
        Other(msg: String) {
            display("{}", msg)
        }
    }
}

pub type GradebookResult<T> = Result<T, GradebookError>;

// -----------------------------------------------------------------------------
// Error macros

/// Return early with a `GradebookError::Other` built from a format string.
#[macro_export]
macro_rules! return_error {
    ($($arg:tt)+) => {
        return Err($crate::common::GradebookError::Other(format!($($arg)+)))
    };
}
