use crate::error::{CustomError, Result};
use crate::reader::PersonRecord;
use std::collections::HashMap;

/// Number of copies of the gene of interest an individual carries.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneCount {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn copies(self) -> usize {
        self as usize
    }

    pub fn from_copies(copies: usize) -> Self {
        match copies {
            0 => GeneCount::Zero,
            1 => GeneCount::One,
            2 => GeneCount::Two,
            _ => unreachable!("gene count {copies} out of range"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    /// (mother, father) indices into the pedigree; `None` for founders.
    pub parents: Option<(usize, usize)>,
    pub observed_trait: Option<bool>,
}

/// A validated family tree: unique names, resolved parent links, no cycles.
#[derive(Debug, Clone)]
pub struct Pedigree {
    people: Vec<Person>,
}

impl Pedigree {
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(CustomError::EmptyPedigree);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), idx).is_some() {
                return Err(CustomError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }

        let mut people = Vec::with_capacity(records.len());
        for record in &records {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => {
                    let resolve = |parent: &String| {
                        index
                            .get(parent.as_str())
                            .copied()
                            .ok_or_else(|| CustomError::UnknownParent {
                                name: record.name.clone(),
                                parent: parent.clone(),
                            })
                    };
                    Some((resolve(mother)?, resolve(father)?))
                }
                _ => {
                    return Err(CustomError::SingleParent {
                        name: record.name.clone(),
                    });
                }
            };
            people.push(Person {
                name: record.name.clone(),
                parents,
                observed_trait: record.observed_trait,
            });
        }

        check_acyclic(&people)?;
        Ok(Self { people })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.people.iter().map(|p| p.name.clone()).collect()
    }

    pub fn founder_names(&self) -> Vec<&str> {
        self.people
            .iter()
            .filter(|p| p.parents.is_none())
            .map(|p| p.name.as_str())
            .collect()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

fn check_acyclic(people: &[Person]) -> Result<()> {
    let mut marks = vec![Mark::Unvisited; people.len()];
    for idx in 0..people.len() {
        visit(idx, people, &mut marks)?;
    }
    Ok(())
}

fn visit(idx: usize, people: &[Person], marks: &mut [Mark]) -> Result<()> {
    match marks[idx] {
        Mark::Done => return Ok(()),
        Mark::InProgress => {
            return Err(CustomError::ParentCycle {
                name: people[idx].name.clone(),
            });
        }
        Mark::Unvisited => {}
    }
    marks[idx] = Mark::InProgress;
    if let Some((mother, father)) = people[idx].parents {
        visit(mother, people, marks)?;
        visit(father, people, marks)?;
    }
    marks[idx] = Mark::Done;
    Ok(())
}
