//! Append-only SQL output sink.

/// Write-only sink for rendered SQL.
///
/// Text is only ever appended; nothing already emitted is revisited.
pub trait SqlAppender {
    /// Append a fragment of literal SQL text.
    fn append_sql(&mut self, sql: &str);

    /// Append a single character.
    fn append_char(&mut self, c: char);
}

impl SqlAppender for String {
    #[inline]
    fn append_sql(&mut self, sql: &str) {
        self.push_str(sql);
    }

    #[inline]
    fn append_char(&mut self, c: char) {
        self.push(c);
    }
}
