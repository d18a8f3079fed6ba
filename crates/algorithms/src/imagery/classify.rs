//! Index value classification
//!
//! Maps an index value to the category label of its color scale, the way
//! legends and field cards describe a reading ("Healthy", "Mild Stress").

use tracing::debug;
use verdant_core::{get_index_definition, IndexDefinition, IndexKind};

/// Category label for `value` on the scale of `index_id`.
///
/// The label of the highest stop whose value is `<= value` wins; values
/// below the first stop take the first label. NaN takes the first label.
/// Returns `None` for unknown ids.
pub fn classify(index_id: &str, value: f64) -> Option<&'static str> {
    match get_index_definition(index_id) {
        Some(def) => classify_on(def, value),
        None => {
            debug!(index_id, "unknown spectral index, no category");
            None
        }
    }
}

/// [`classify`] for a known index kind.
pub fn classify_kind(kind: IndexKind, value: f64) -> &'static str {
    classify_on(kind.definition(), value).unwrap_or_default()
}

fn classify_on(def: &'static IndexDefinition, value: f64) -> Option<&'static str> {
    let stops = def.sorted_stops();
    let first = stops.first()?;
    Some(
        stops
            .iter()
            .take_while(|s| s.value <= value)
            .last()
            .unwrap_or(first)
            .label,
    )
}
