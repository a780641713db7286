//! Binary stream extraction.

use qcc_core::TagAssignment;

/// YES/NO events sorted by timestamp. Other values are dropped.
///
/// The sort is stable, so simultaneous events keep their input order.
pub fn binary_stream<'a, I>(events: I) -> Vec<&'a TagAssignment>
where
    I: IntoIterator<Item = &'a TagAssignment>,
{
    let mut stream: Vec<&TagAssignment> = events
        .into_iter()
        .filter(|e| e.value().is_binary())
        .collect();
    stream.sort_by_key(|e| e.timestamp());
    stream
}

/// `Y`/`N` string for an already filtered stream.
pub fn sequence_string(stream: &[&TagAssignment]) -> String {
    stream.iter().filter_map(|e| e.value().symbol()).collect()
}
