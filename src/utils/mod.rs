///! Some utility functions

use std::collections::HashMap;

use crate::convert::to_local;
use crate::moderation::ModerationEntry;
use crate::occurrence::Occurrence;
use crate::reconcile::EditScript;
use crate::series::Series;
use crate::timezone::TimezoneRule;

/// A debug utility that pretty-prints a list of occurrences, grouped by series
pub fn print_occurrence_list(series: &[&Series], occurrences: &[&Occurrence], rule: &TimezoneRule) {
    let mut by_series: HashMap<_, Vec<&Occurrence>> = HashMap::new();
    for occ in occurrences {
        by_series.entry(occ.series_id()).or_default().push(occ);
    }

    for s in series {
        println!("SERIES {} ({})", s.title(), s.id().map(|id| id.to_string()).unwrap_or_default());
        for occ in by_series.remove(&s.id()).unwrap_or_default() {
            print_occurrence(occ, rule);
        }
    }

    let mut leftovers: Vec<_> = by_series.into_iter().collect();
    leftovers.sort_by_key(|(id, _)| *id);
    for (series_id, occs) in leftovers {
        match series_id {
            None => println!("STANDALONE"),
            Some(id) => println!("MISSING {}", id),
        }
        for occ in occs {
            print_occurrence(occ, rule);
        }
    }
}

pub fn print_occurrence(occurrence: &Occurrence, rule: &TimezoneRule) {
    let approval = if occurrence.is_approved() { "✓" } else { " " };
    let publication = if occurrence.published() { "=" } else { "." };
    let (_, local_start) = to_local(occurrence.start_utc(), rule);
    let id = occurrence.id().map(|id| id.to_string()).unwrap_or_else(|| String::from("(unsaved)"));
    println!("    {}{} {} {}\t{}\t{}", approval, publication, occurrence.local_date(), local_start, occurrence.title(), id);
}

/// A debug utility that pretty-prints what an edit is about to do
pub fn print_edit_script(script: &EditScript) {
    for line in script.to_string().lines() {
        println!("    {}", line);
    }
    if script.unchanged.is_empty() == false {
        println!("    ({} unchanged)", script.unchanged.len());
    }
}

/// A debug utility that pretty-prints the moderation queue
pub fn print_moderation_queue(queue: &[ModerationEntry], rule: &TimezoneRule) {
    for entry in queue {
        print_occurrence(&entry.occurrence, rule);
        if entry.likely_duplicates.is_empty() == false {
            let ids: Vec<String> = entry.likely_duplicates.iter().map(|id| id.to_string()).collect();
            println!("        likely duplicates: {}", ids.join(", "));
        }
    }
}
