//! Venn-style intersections of identifier groups
//!
//! Used to find shared targets, e.g. compound targets ∩ disease targets, the
//! list that seeds the interaction fetch. Groups behave as sets: duplicates
//! are ignored and members keep first-seen order of the first group.

use biorange_common::{BiorangeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labelled list of identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub members: Vec<String>,
}

impl Group {
    pub fn new(label: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }
}

/// One named intersection, e.g. `TCMSP&ChEMBL`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    pub name: String,
    pub members: Vec<String>,
}

fn shared(groups: &[&Group]) -> Intersection {
    let name = groups
        .iter()
        .map(|g| g.label.as_str())
        .collect::<Vec<_>>()
        .join("&");

    let (first, rest) = match groups.split_first() {
        Some(split) => split,
        None => {
            return Intersection {
                name,
                members: Vec::new(),
            }
        },
    };
    let others: Vec<HashSet<&str>> = rest
        .iter()
        .map(|g| g.members.iter().map(String::as_str).collect())
        .collect();

    let mut seen = HashSet::new();
    let members = first
        .members
        .iter()
        .filter(|m| others.iter().all(|set| set.contains(m.as_str())))
        .filter(|m| seen.insert(m.as_str()))
        .cloned()
        .collect();

    Intersection { name, members }
}

/// Pairwise and full intersections of two or three groups
///
/// Two groups give `A&B`. Three give `A&B`, `A&C`, `B&C`, `A&B&C`.
pub fn intersections(groups: &[Group]) -> Result<Vec<Intersection>> {
    match groups {
        [a, b] => Ok(vec![shared(&[a, b])]),
        [a, b, c] => Ok(vec![
            shared(&[a, b]),
            shared(&[a, c]),
            shared(&[b, c]),
            shared(&[a, b, c]),
        ]),
        _ => Err(BiorangeError::invalid_input(format!(
            "Only 2 or 3 groups are supported, got {}",
            groups.len()
        ))),
    }
}

/// Lay intersections out as CSV rows: one column each, padded with ""
pub fn to_columns(intersections: &[Intersection]) -> (Vec<String>, Vec<Vec<String>>) {
    let header = intersections.iter().map(|i| i.name.clone()).collect();
    let height = intersections
        .iter()
        .map(|i| i.members.len())
        .max()
        .unwrap_or(0);

    let rows = (0..height)
        .map(|row| {
            intersections
                .iter()
                .map(|i| i.members.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    (header, rows)
}
