//! Completion index - training name to the people who completed it
//!
//! The index borrows the roster it was built from. Graduates are stored
//! as [`PersonId`]s (roster positions), so a person is counted once per
//! training however many times they repeated it, and two people sharing a
//! name stay distinct.

use std::collections::{BTreeSet, HashMap};

use crate::models::Person;

/// Position of a person in the roster the index was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(usize);

/// One training and the set of people who completed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingIndexEntry {
    training_name: String,
    graduates: BTreeSet<PersonId>,
}

impl TrainingIndexEntry {
    fn new(training_name: &str) -> Self {
        Self {
            training_name: training_name.to_string(),
            graduates: BTreeSet::new(),
        }
    }

    /// Training name, exactly as first seen in the data
    #[must_use]
    pub fn training_name(&self) -> &str {
        &self.training_name
    }

    /// Graduates in roster order
    pub fn graduates(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.graduates.iter().copied()
    }

    /// Number of distinct people who completed the training
    #[must_use]
    pub fn graduate_count(&self) -> usize {
        self.graduates.len()
    }
}

/// Mapping from training name to its graduates
///
/// Entries keep the order in which each training name was first seen.
#[derive(Debug, Clone)]
pub struct CompletionIndex<'a> {
    people: &'a [Person],
    entries: Vec<TrainingIndexEntry>,
    positions: HashMap<String, usize>,
}

/// Build the completion index for a roster
///
/// Training names are keyed exactly as they appear, so names that differ
/// only in case get separate entries. Never fails; an empty roster gives
/// an empty index.
#[must_use]
pub fn build_index(people: &[Person]) -> CompletionIndex<'_> {
    let mut entries: Vec<TrainingIndexEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (pos, person) in people.iter().enumerate() {
        let id = PersonId(pos);
        for completion in &person.completions {
            let name = completion.training_name.as_str();
            let slot = match positions.get(name) {
                Some(&slot) => slot,
                None => {
                    entries.push(TrainingIndexEntry::new(name));
                    positions.insert(name.to_string(), entries.len() - 1);
                    entries.len() - 1
                },
            };
            entries[slot].graduates.insert(id);
        }
    }

    log::debug!("Indexed {} training(s) across {} people", entries.len(), people.len());

    CompletionIndex {
        people,
        entries,
        positions,
    }
}

impl<'a> CompletionIndex<'a> {
    /// Look up a training by exact name
    #[must_use]
    pub fn get(&self, training_name: &str) -> Option<&TrainingIndexEntry> {
        self.positions.get(training_name).map(|&slot| &self.entries[slot])
    }

    /// All entries, in first-seen order
    #[must_use]
    pub fn entries(&self) -> &[TrainingIndexEntry] {
        &self.entries
    }

    /// Number of distinct training names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no trainings were indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The roster this index was built from
    #[must_use]
    pub const fn people(&self) -> &'a [Person] {
        self.people
    }

    /// Resolve a graduate id back to the person
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&'a Person> {
        self.people.get(id.0)
    }

    /// Graduates of an entry, resolved to people, in roster order
    pub fn graduates_of<'s>(
        &'s self,
        entry: &'s TrainingIndexEntry,
    ) -> impl Iterator<Item = &'a Person> + 's {
        entry.graduates().filter_map(move |id| self.person(id))
    }
}
