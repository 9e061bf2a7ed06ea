use crate::Ident;

/// Generic identifier quoting rules, parameterized by a dialect's keyword
/// table and quote character.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierPreparer {
    reserved_words: &'static [&'static str],
    quote: char,
}

impl IdentifierPreparer {
    /// `reserved_words` must be lowercase and strictly sorted.
    #[must_use]
    pub const fn new(reserved_words: &'static [&'static str], quote: char) -> Self {
        Self {
            reserved_words,
            quote,
        }
    }

    #[must_use]
    pub const fn reserved_words(&self) -> &'static [&'static str] {
        self.reserved_words
    }

    #[must_use]
    pub const fn quote_char(&self) -> char {
        self.quote
    }

    #[must_use]
    pub fn is_reserved(&self, value: &str) -> bool {
        let lowered = value.to_ascii_lowercase();
        self.reserved_words
            .binary_search(&lowered.as_str())
            .is_ok()
    }

    /// An identifier can stay bare only if it is not a keyword, is a plain
    /// `[A-Za-z_][A-Za-z0-9_]*` word, and survives case folding unchanged.
    #[must_use]
    pub fn needs_quoting(&self, value: &str) -> bool {
        self.is_reserved(value) || !is_bare_identifier(value) || value.to_lowercase() != value
    }

    /// Quotes `value` only when [`Self::needs_quoting`] says so.
    #[must_use]
    pub fn quote(&self, value: &str) -> String {
        if self.needs_quoting(value) {
            self.quote_identifier(value)
        } else {
            value.to_string()
        }
    }

    /// Unconditionally quotes `value`, doubling any embedded quote character.
    #[must_use]
    pub fn quote_identifier(&self, value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push(self.quote);
        for ch in value.chars() {
            if ch == self.quote {
                escaped.push(self.quote);
            }
            escaped.push(ch);
        }
        escaped.push(self.quote);
        escaped
    }

    #[must_use]
    pub fn quote_ident(&self, ident: &Ident) -> String {
        if ident.quoted {
            self.quote_identifier(&ident.value)
        } else {
            self.quote(&ident.value)
        }
    }

    /// Fully quoted table reference, schema-qualified when a schema is given.
    #[must_use]
    pub fn format_table(&self, name: &str, schema: Option<&str>) -> String {
        let table = self.quote_identifier(name);
        match schema {
            Some(schema) => format!("{}.{table}", self.quote_identifier(schema)),
            None => table,
        }
    }
}

fn is_bare_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
