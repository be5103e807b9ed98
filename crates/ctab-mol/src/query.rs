//! Query predicate trees
//!
//! Query atoms and query bonds carry a predicate tree instead of matching on
//! exact scalar equality. Leaves pair an observable (the "data function") with
//! a target value; inner nodes combine children with and/or/not.
//!
//! A leaf whose value can only be known once the whole connection table has
//! been read stores [`DEFERRED`] and is resolved by
//! [`Molecule::complete_queries`](crate::Molecule::complete_queries) after
//! parsing.

use crate::bond::BondOrder;
use crate::index::{AtomIndex, BondIndex};
use crate::molecule::Molecule;

/// Sentinel stored in a query leaf whose value is filled in after the whole
/// graph is known. Outside every legal observable range and compared by
/// identity during completion.
pub const DEFERRED: i32 = -0x0DEA_DBEE;

/// Observable selected by an atom-query leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomField {
    AtomicNumber,
    FormalCharge,
    /// Isotopic mass, rounded to the nearest integer.
    Mass,
    /// Number of explicit neighbors.
    ExplicitDegree,
    /// Number of incident bonds that sit in a ring.
    RingBondCount,
    /// Number of explicit hydrogen neighbors.
    HCount,
}

impl AtomField {
    /// Evaluate this observable on a concrete atom of `mol`.
    pub fn observe(&self, mol: &Molecule, idx: AtomIndex) -> i32 {
        let Some(atom) = mol.atom(idx) else { return 0 };
        match self {
            AtomField::AtomicNumber => atom.atomic_num as i32,
            AtomField::FormalCharge => atom.formal_charge as i32,
            AtomField::Mass => atom.mass.round() as i32,
            AtomField::ExplicitDegree => mol.degree(idx) as i32,
            AtomField::RingBondCount => mol.ring_bond_count(idx) as i32,
            AtomField::HCount => mol
                .neighbors(idx)
                .filter(|&n| mol.atom(n).map_or(false, |a| a.atomic_num == 1))
                .count() as i32,
        }
    }
}

/// Predicate tree attached to a query atom.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomQuery {
    /// Matches any atom.
    Null,
    /// Atom participates in at least one multiple bond.
    Unsaturated,
    Equals { field: AtomField, value: i32 },
    AtMost { field: AtomField, value: i32 },
    And(Vec<AtomQuery>),
    Or(Vec<AtomQuery>),
    Not(Box<AtomQuery>),
}

impl AtomQuery {
    /// Equality leaf constructor.
    pub fn equals(field: AtomField, value: i32) -> Self {
        AtomQuery::Equals { field, value }
    }

    /// And-combine with `other`, flattening an existing `And` in place.
    pub fn and_with(self, other: AtomQuery) -> Self {
        match self {
            AtomQuery::And(mut children) => {
                children.push(other);
                AtomQuery::And(children)
            }
            first => AtomQuery::And(vec![first, other]),
        }
    }

    /// Or-combine with `other`, flattening an existing `Or` in place.
    pub fn or_with(self, other: AtomQuery) -> Self {
        match self {
            AtomQuery::Or(mut children) => {
                children.push(other);
                AtomQuery::Or(children)
            }
            first => AtomQuery::Or(vec![first, other]),
        }
    }

    /// Wrap in a negation.
    pub fn negated(self) -> Self {
        AtomQuery::Not(Box::new(self))
    }

    /// Whether any leaf still holds the [`DEFERRED`] sentinel.
    pub fn has_deferred(&self) -> bool {
        match self {
            AtomQuery::Null | AtomQuery::Unsaturated => false,
            AtomQuery::Equals { value, .. } | AtomQuery::AtMost { value, .. } => {
                *value == DEFERRED
            }
            AtomQuery::And(children) | AtomQuery::Or(children) => {
                children.iter().any(AtomQuery::has_deferred)
            }
            AtomQuery::Not(child) => child.has_deferred(),
        }
    }

    /// Evaluate against the atom at `idx` in `mol`.
    pub fn matches(&self, mol: &Molecule, idx: AtomIndex) -> bool {
        match self {
            AtomQuery::Null => true,
            AtomQuery::Unsaturated => mol
                .bonds_of(idx)
                .iter()
                .any(|&b| mol.bond(b).map_or(false, |bond| bond.order.is_multiple())),
            AtomQuery::Equals { field, value } => field.observe(mol, idx) == *value,
            AtomQuery::AtMost { field, value } => field.observe(mol, idx) <= *value,
            AtomQuery::And(children) => children.iter().all(|c| c.matches(mol, idx)),
            AtomQuery::Or(children) => children.iter().any(|c| c.matches(mol, idx)),
            AtomQuery::Not(child) => !child.matches(mol, idx),
        }
    }
}

/// Depth-first completion walk: every leaf holding [`DEFERRED`] gets the value
/// its data function observes on the owning atom.
pub fn complete_atom_query(query: &mut AtomQuery, mol: &Molecule, idx: AtomIndex) {
    match query {
        AtomQuery::Null | AtomQuery::Unsaturated => {}
        AtomQuery::Equals { field, value } | AtomQuery::AtMost { field, value } => {
            if *value == DEFERRED {
                *value = field.observe(mol, idx);
            }
        }
        AtomQuery::And(children) | AtomQuery::Or(children) => {
            for child in children {
                complete_atom_query(child, mol, idx);
            }
        }
        AtomQuery::Not(child) => complete_atom_query(child, mol, idx),
    }
}

/// Predicate tree attached to a query bond.
#[derive(Debug, Clone, PartialEq)]
pub enum BondQuery {
    /// Matches any bond.
    Null,
    OrderEquals(BondOrder),
    /// Bond sits in a ring.
    InRing,
    And(Vec<BondQuery>),
    Or(Vec<BondQuery>),
    Not(Box<BondQuery>),
}

impl BondQuery {
    /// And-combine with `other`, flattening an existing `And` in place.
    pub fn and_with(self, other: BondQuery) -> Self {
        match self {
            BondQuery::And(mut children) => {
                children.push(other);
                BondQuery::And(children)
            }
            first => BondQuery::And(vec![first, other]),
        }
    }

    /// Wrap in a negation.
    pub fn negated(self) -> Self {
        BondQuery::Not(Box::new(self))
    }

    /// Evaluate against the bond at `idx` in `mol`.
    pub fn matches(&self, mol: &Molecule, idx: BondIndex) -> bool {
        match self {
            BondQuery::Null => true,
            BondQuery::OrderEquals(order) => {
                mol.bond(idx).map_or(false, |b| b.order == *order)
            }
            BondQuery::InRing => mol.ring_bond_mask()[idx.as_usize()],
            BondQuery::And(children) => children.iter().all(|c| c.matches(mol, idx)),
            BondQuery::Or(children) => children.iter().any(|c| c.matches(mol, idx)),
            BondQuery::Not(child) => !child.matches(mol, idx),
        }
    }
}
