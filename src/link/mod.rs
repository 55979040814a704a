pub mod encode;
pub mod gmail;
pub mod mailto;

pub use gmail::{GMAIL_COMPOSE_BASE, build_gmail_compose};
pub use mailto::build_mailto;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compose::FieldValues;

/// Which link flavor to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Mailto,
    Gmail,
}

/// A generated link. Plain immutable strings at the boundary; produced,
/// consumed and discarded within one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Mailto(String),
    GmailCompose(String),
}

impl LinkTarget {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mailto(link) | Self::GmailCompose(link) => link,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Mailto(link) | Self::GmailCompose(link) => link,
        }
    }

    pub fn kind(&self) -> LinkKind {
        match self {
            Self::Mailto(_) => LinkKind::Mailto,
            Self::GmailCompose(_) => LinkKind::Gmail,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the requested link flavor from one set of field values.
pub fn build(kind: LinkKind, values: &FieldValues) -> LinkTarget {
    match kind {
        LinkKind::Mailto => build_mailto(values),
        LinkKind::Gmail => build_gmail_compose(values),
    }
}
