//! Severity aggregation for message notes.
//!
//! A message is styled after the most severe note it carries. Severity is a
//! fixed ranking over the known variants; unrecognized variants rank 0 and
//! can never become dominant.

use crate::models::{Note, Variant};

/// Fixed severity rank for a variant. Higher is more severe.
pub fn severity_rank(variant: &Variant) -> u8 {
    match variant {
        Variant::Info => 1,
        Variant::Warning => 2,
        Variant::Success => 3,
        Variant::Danger => 4,
        Variant::Other(_) => 0,
    }
}

/// The dominant variant among a list of notes, or `None` when the list is
/// empty or contains only unranked variants.
///
/// Scans in order and replaces only on a strictly greater rank, so the
/// first-seen note at the maximum rank decides.
pub fn dominant_variant(notes: &[Note]) -> Option<&Variant> {
    let mut dominant = None;
    let mut max_rank = 0;

    for note in notes {
        let rank = severity_rank(&note.variant);
        if rank > max_rank {
            max_rank = rank;
            dominant = Some(&note.variant);
        }
    }

    dominant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(variant: Variant) -> Note {
        Note::new(variant, "text")
    }

    #[test]
    fn test_rank_table() {
        assert_eq!(severity_rank(&Variant::Info), 1);
        assert_eq!(severity_rank(&Variant::Warning), 2);
        assert_eq!(severity_rank(&Variant::Success), 3);
        assert_eq!(severity_rank(&Variant::Danger), 4);
        assert_eq!(severity_rank(&Variant::Other("notice".into())), 0);
    }

    #[test]
    fn test_empty_list_has_no_dominant() {
        assert_eq!(dominant_variant(&[]), None);
    }

    #[test]
    fn test_warning_dominates_info() {
        let notes = [note(Variant::Info), note(Variant::Warning), note(Variant::Info)];
        assert_eq!(dominant_variant(&notes), Some(&Variant::Warning));
    }

    #[test]
    fn test_danger_dominates_everything() {
        let notes = [note(Variant::Warning), note(Variant::Danger), note(Variant::Success)];
        assert_eq!(dominant_variant(&notes), Some(&Variant::Danger));
    }

    #[test]
    fn test_equal_rank_keeps_first_seen() {
        let notes = [note(Variant::Success), note(Variant::Success)];
        assert_eq!(dominant_variant(&notes), Some(&Variant::Success));
    }

    #[test]
    fn test_unrecognized_never_dominates() {
        let notes = [note(Variant::Other("notice".into())), note(Variant::Other("hint".into()))];
        assert_eq!(dominant_variant(&notes), None);

        let notes = [note(Variant::Other("notice".into())), note(Variant::Info)];
        assert_eq!(dominant_variant(&notes), Some(&Variant::Info));
    }
}
