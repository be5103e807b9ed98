//! Atom data structure

use crate::element;
use crate::props::{keys, PropertyBag};
use crate::query::{AtomField, AtomQuery};
use std::fmt;

/// Tetrahedral chirality tag assigned by stereo perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chirality {
    #[default]
    None,
    Clockwise,
    CounterClockwise,
}

/// An atom in a molecule under construction.
///
/// `atomic_num` 0 marks the unspecified/R-group/wildcard pseudo-atom. An atom
/// carrying a query tree is a *query atom*: its scalar fields remain readable
/// but matching semantics are governed by the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    pub atomic_num: u8,
    pub formal_charge: i8,
    /// Isotopic mass in Daltons; the standard atomic weight unless the file
    /// overrode it.
    pub mass: f64,
    pub radical_electrons: u8,
    /// Suppress implicit-hydrogen completion downstream.
    pub no_implicit_h: bool,
    pub is_aromatic: bool,
    /// Sum of incident bond orders, filled in after parsing.
    pub explicit_valence: Option<u8>,
    pub chirality: Chirality,
    pub props: PropertyBag,
    query: Option<Box<AtomQuery>>,
}

impl Atom {
    /// New atom of the given element at its standard atomic weight.
    pub fn new(atomic_num: u8) -> Self {
        Atom {
            atomic_num,
            mass: element::standard_weight(atomic_num),
            ..Default::default()
        }
    }

    /// Element symbol for this atom's atomic number.
    pub fn symbol(&self) -> &'static str {
        element::symbol(self.atomic_num)
    }

    pub fn is_query(&self) -> bool {
        self.query.is_some()
    }

    pub fn query(&self) -> Option<&AtomQuery> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: AtomQuery) {
        self.query = Some(Box::new(query));
    }

    /// Remove and return the query tree, leaving a plain atom behind.
    pub fn take_query(&mut self) -> Option<AtomQuery> {
        self.query.take().map(|q| *q)
    }

    /// And-combine `query` with the existing tree, or install it as the whole
    /// tree when the atom has none.
    pub fn expand_query(&mut self, query: AtomQuery) {
        self.query = Some(Box::new(match self.query.take() {
            Some(existing) => existing.and_with(query),
            None => query,
        }));
    }

    /// Or-combine `query` with the existing tree, or install it when the atom
    /// has none.
    pub fn expand_query_or(&mut self, query: AtomQuery) {
        self.query = Some(Box::new(match self.query.take() {
            Some(existing) => existing.or_with(query),
            None => query,
        }));
    }

    /// Turn a plain atom into a query atom in place, seeding the tree from its
    /// scalar state: the atomic number, the formal charge when nonzero, and
    /// the rounded mass when the atom was tagged with a mass query.
    ///
    /// No-op when the atom already carries a query. Scalar fields and the atom
    /// slot are preserved either way.
    pub fn promote_to_query(&mut self) {
        if self.query.is_some() {
            return;
        }
        let mut query = AtomQuery::equals(AtomField::AtomicNumber, self.atomic_num as i32);
        if self.formal_charge != 0 {
            query = query.and_with(AtomQuery::equals(
                AtomField::FormalCharge,
                self.formal_charge as i32,
            ));
        }
        if self.props.get_flag(keys::HAS_MASS_QUERY) {
            query = query.and_with(AtomQuery::equals(
                AtomField::Mass,
                self.mass.round() as i32,
            ));
        }
        self.query = Some(Box::new(query));
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({}", self.symbol())?;
        if self.formal_charge != 0 {
            write!(f, " {:+}", self.formal_charge)?;
        }
        if self.is_query() {
            write!(f, " query")?;
        }
        write!(f, ")")
    }
}
