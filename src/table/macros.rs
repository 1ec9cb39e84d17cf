//! Macros for writing transition tables as listings.

/// Write transition definitions as a listing.
///
/// Each row reads `from, read, pop => to, push`. Use `""` for an ε read and
/// for an empty push. Expands to a `Vec<TransitionSpec>`, ready for
/// [`TransitionTableBuilder::specs`](crate::table::TransitionTableBuilder::specs).
///
/// # Example
///
/// ```
/// use pdasim::table::TransitionTableBuilder;
/// use pdasim::transitions;
///
/// let specs = transitions! {
///     0, "y", 'Z' => 1, "YZ";
///     1, "",  'Z' => 2, "";
/// };
///
/// let table = TransitionTableBuilder::new().specs(specs).build().unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:literal, $read:literal, $pop:literal => $to:literal, $push:literal
        );* $(;)?
    ) => {
        vec![
            $(
                $crate::table::TransitionSpec::new($from, $read, $pop, $to, $push)
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::table::TransitionSpec;

    #[test]
    fn macro_preserves_listing_order() {
        let specs = transitions! {
            0, "x", 'Z' => 0, "Z";
            11, "", 'Z' => 12, ""
        };

        assert_eq!(
            specs,
            vec![
                TransitionSpec::new(0, "x", 'Z', 0, "Z"),
                TransitionSpec::new(11, "", 'Z', 12, ""),
            ]
        );
    }
}
