/// An identifier as written by the caller. `quoted` forces quoting regardless
/// of whether the dialect would otherwise require it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }

    pub fn unquoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::unquoted(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::unquoted(value)
    }
}
