use rolebook_domain::Privilege;
use tracing::warn;

/// Keeps the names that match a known privilege once upper-cased.
///
/// Unknown names are dropped with a warning. Input order and duplicates are
/// preserved for the names that remain.
pub fn filter_privileges<I, S>(names: I) -> Vec<Privilege>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let privilege = Privilege::parse_normalized(name);
            if privilege.is_none() {
                warn!(privilege = name, "dropping unknown privilege");
            }
            privilege
        })
        .collect()
}
