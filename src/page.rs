use crate::constants::{CONTAINER_ID, ECG_PATH_ID};

/// Elements the viewer cannot start without, in lookup order.
pub const REQUIRED_ELEMENT_IDS: [&str; 2] = [CONTAINER_ID, ECG_PATH_ID];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing required elements: #{}", .0.join(", #"))]
pub struct MissingElements(pub Vec<String>);

/// Look up every id before anything is mutated; fails listing all absent ids.
pub fn resolve_all<T, const N: usize>(
    ids: [&str; N],
    mut lookup: impl FnMut(&str) -> Option<T>,
) -> Result<[T; N], MissingElements> {
    let found = ids.map(&mut lookup);
    let missing: Vec<String> = ids
        .iter()
        .zip(&found)
        .filter(|(_, el)| el.is_none())
        .map(|(id, _)| id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(MissingElements(missing));
    }
    let present: Vec<T> = found.into_iter().flatten().collect();
    present
        .try_into()
        .map_err(|_| MissingElements(ids.iter().map(|id| id.to_string()).collect()))
}
