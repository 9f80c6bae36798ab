//! Markup authored in the CMS

use serde::Serialize;

/// HTML that is emitted into pages without escaping or sanitization.
///
/// The CMS is the sole author of rich-text fields and pre-renders them to
/// HTML; that markup is trusted as-is. This type is the only value the
/// templates print with `| safe`, so every raw injection point can be found
/// by following its uses. Tightening the boundary (sanitizing) belongs in
/// [`TrustedHtml::from_cms`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap a rich-text field received from the CMS
    pub fn from_cms(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
