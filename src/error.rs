use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("invalid icon family: {family}")]
    #[diagnostic(
        code(icons::invalid_family),
        help("known families: box, bootstrap, custom, fa, ionic, line, lucide, material-design, hero")
    )]
    InvalidFamily { family: String },

    #[error("icon not found: {name}")]
    #[diagnostic(code(icons::not_found))]
    NotFound { name: String },

    #[error("svg already exists: {name}")]
    #[diagnostic(
        code(icons::already_exists),
        help("custom icons are additive; use a bulk import to replace an existing icon")
    )]
    AlreadyExists { name: String },

    #[error("malformed template: expected 2 `%s` slots, found {slots}")]
    #[diagnostic(
        code(icons::malformed_template),
        help("templates take the class token then the attribute string; write a literal percent as `%%`")
    )]
    MalformedTemplate { slots: usize },

    #[error("invalid attribute name: {key:?}")]
    #[diagnostic(
        code(icons::invalid_attribute),
        help("attribute names may not contain whitespace, quotes, `<>/=` or control characters")
    )]
    InvalidAttribute { key: String },

    #[error("failed to generate svg for icon '{name}' in family '{family}' with attributes [{attrs}]")]
    #[diagnostic(code(icons::generation_failed))]
    GenerationFailed {
        name: String,
        family: String,
        attrs: String,
        #[source]
        source: Box<IconError>,
    },

    #[error("{} error(s) occurred", .errors.len())]
    #[diagnostic(code(icons::multiple))]
    Multiple {
        #[related]
        errors: Vec<IconError>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(icons::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icons::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(icons::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl IconError {
    pub(crate) fn invalid_family(family: impl Into<String>) -> Self {
        IconError::InvalidFamily {
            family: family.into(),
        }
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        IconError::NotFound { name: name.into() }
    }

    /// Collapse a batch of errors into one aggregate, or `None` if the batch is empty.
    pub fn aggregate(errors: Vec<IconError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(IconError::Multiple { errors })
        }
    }

    /// The innermost error for wrapped generation failures.
    pub fn root_cause(&self) -> &IconError {
        match self {
            IconError::GenerationFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
