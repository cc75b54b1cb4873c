//! URI query string utilities.
use iref::{
	UriBuf,
	uri::{Query, QueryBuf},
};
use serde::Serialize;

/// Extends the query parameters of a URI by serializing `value` as
/// `application/x-www-form-urlencoded` and appending the result.
///
/// Existing query parameters on the URI are preserved.
///
/// # Panics
///
/// Panics if `value` cannot be serialized as form-urlencoded data.
pub fn extend_uri_query<T: Serialize>(uri: &mut UriBuf, value: &T) {
	let query = serialize_concat_query(
		uri.query().map(ToOwned::to_owned).unwrap_or_default(),
		value,
	);

	uri.set_query(Some(&*query));
}

/// Serializes `value` as form-urlencoded data and concatenates it with the
/// existing query string.
///
/// # Panics
///
/// Panics if `value` cannot be serialized as form-urlencoded data.
pub fn serialize_concat_query<T: Serialize>(query: QueryBuf, value: &T) -> QueryBuf {
	// UNWRAP SAFETY: callers only pass flat structs of strings, and
	//                `serde_html_form` percent-encodes its output.
	let other = QueryBuf::new(serde_html_form::to_string(value).unwrap().into_bytes()).unwrap();
	concat_query(query, &other)
}

/// Concatenates two query strings with `&` as separator.
///
/// If either query is empty, the other is returned as-is without a
/// separator.
pub fn concat_query(query: QueryBuf, other: &Query) -> QueryBuf {
	let mut query = query.into_string();

	if !query.is_empty() && !other.is_empty() {
		query.push('&')
	}

	query.push_str(other.as_str());

	// UNWRAP SAFETY: joining two valid queries with `&` is a valid query.
	QueryBuf::new(query.into_bytes()).unwrap()
}
