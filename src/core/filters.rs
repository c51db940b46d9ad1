use crate::models::PlaceRecord;

/// Lowercase a raw query so it can be compared against normalized names
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Check whether a record is a candidate for an already normalized query
///
/// Plain substring containment, so the empty query matches every record.
#[inline]
pub fn contains_query(record: &PlaceRecord, normalized_query: &str) -> bool {
    record.normalized_name.contains(normalized_query)
}

/// Check whether a row's region code equals the target, ignoring case and
/// surrounding whitespace
#[inline]
pub fn in_region(region_field: &str, region_code: &str) -> bool {
    region_field.trim().eq_ignore_ascii_case(region_code.trim())
}
