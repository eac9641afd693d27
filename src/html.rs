//! Escaped HTML fragments for list cells
//!
//! Cells rendered by computed columns are small HTML fragments (links,
//! colored marks). Interpolated text always passes through [`escape`]; the
//! hosting page embeds the fragments as-is.

use serde_json::Value;

/// An HTML fragment whose interpolations have been escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
	/// Wrap pre-escaped markup
	pub fn from_markup(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	/// Escape plain text into a fragment
	pub fn text(text: impl AsRef<str>) -> Self {
		Self(escape(text.as_ref()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl From<Html> for Value {
	fn from(html: Html) -> Self {
		Value::String(html.0)
	}
}

impl std::fmt::Display for Html {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Escape `&`, `<`, `>`, `"`, and `'` for safe embedding
pub fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Build an anchor fragment
///
/// # Examples
///
/// ```
/// use admission_admin::html::format_link;
///
/// let link = format_link("/admin/applications/3/", "Ayesha Rahman");
/// assert_eq!(
/// 	link.as_str(),
/// 	"<a href=\"/admin/applications/3/\">Ayesha Rahman</a>"
/// );
/// ```
pub fn format_link(url: &str, label: &str) -> Html {
	Html::from_markup(format!(
		"<a href=\"{}\">{}</a>",
		escape(url),
		escape(label)
	))
}

/// Build a colored span, used for positive/negative indicator cells
pub fn colored(color: &str, text: &str) -> Html {
	Html::from_markup(format!(
		"<span style=\"color: {};\">{}</span>",
		escape(color),
		escape(text)
	))
}
