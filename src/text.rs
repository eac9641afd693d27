//! Text helpers for display labels

/// Turn a field name into a human-readable label
///
/// Underscores become spaces and the first character is uppercased, so
/// `per_credit_fee` renders as `Per credit fee`.
///
/// # Examples
///
/// ```
/// use admission_admin::text::humanize_field_name;
///
/// assert_eq!(humanize_field_name("per_credit_fee"), "Per credit fee");
/// assert_eq!(humanize_field_name("id"), "Id");
/// ```
pub fn humanize_field_name(field: &str) -> String {
	let spaced = field.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => spaced,
	}
}
