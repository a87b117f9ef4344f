use super::ReferenceName;

/// True when `first`, or a non-empty `last`, is a whole whitespace-delimited token of any
/// comma-separated owner in `owner_name_field`. Comparison is case-insensitive.
pub fn name_matches(first: &str, last: &str, owner_name_field: &str) -> bool {
    if first.is_empty() && last.is_empty() {
        return false;
    }
    owner_name_field.split(',').any(|owner| {
        let owner = owner.trim().to_lowercase();
        owner
            .split_whitespace()
            .any(|part| (!first.is_empty() && part == first) || (!last.is_empty() && part == last))
    })
}

/// First reference name (in load order) matching the field, if any.
pub fn first_match<'a>(
    names: &'a [ReferenceName],
    owner_name_field: &str,
) -> Option<&'a ReferenceName> {
    names.iter().find(|n| n.matches(owner_name_field))
}
