//! Bond data structure

use crate::index::AtomIndex;
use crate::props::PropertyBag;
use crate::query::BondQuery;
use std::fmt;

/// Bond order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    /// Unknown or query-governed order.
    #[default]
    Unspecified = 0,
    Single = 1,
    Double = 2,
    Triple = 3,
    /// Aromatic/delocalized bond (1.5 order).
    Aromatic = 4,
}

impl BondOrder {
    /// Contribution to the explicit valence of each end atom.
    #[inline]
    pub fn as_float(&self) -> f64 {
        match self {
            BondOrder::Unspecified => 0.0,
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }

    /// Double, triple or aromatic.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        matches!(
            self,
            BondOrder::Double | BondOrder::Triple | BondOrder::Aromatic
        )
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Unspecified => write!(f, "?"),
            BondOrder::Single => write!(f, "-"),
            BondOrder::Double => write!(f, "="),
            BondOrder::Triple => write!(f, "#"),
            BondOrder::Aromatic => write!(f, ":"),
        }
    }
}

/// Drawing direction of a bond, anchored at its begin atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondDir {
    #[default]
    None,
    /// Solid wedge pointing up from the begin atom.
    BeginWedge,
    /// Hashed wedge pointing down from the begin atom.
    BeginDash,
    /// Crossed ("either") double bond.
    EitherDouble,
    /// Wavy single bond, direction unknown.
    Unknown,
}

/// Double-bond stereochemistry tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondStereo {
    #[default]
    None,
    /// Explicitly either configuration.
    Any,
    Cis,
    Trans,
}

/// A bond between two atoms, by index into the owning molecule.
///
/// `begin`/`end` keep their wire order: the begin atom anchors wedge
/// direction, so endpoints are never swapped into sorted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bond {
    pub begin: AtomIndex,
    pub end: AtomIndex,
    pub order: BondOrder,
    pub dir: BondDir,
    pub stereo: BondStereo,
    pub is_aromatic: bool,
    pub props: PropertyBag,
    query: Option<Box<BondQuery>>,
}

impl Bond {
    pub fn new(begin: AtomIndex, end: AtomIndex, order: BondOrder) -> Self {
        Bond {
            begin,
            end,
            order,
            is_aromatic: order == BondOrder::Aromatic,
            ..Default::default()
        }
    }

    /// The other end of the bond, or `None` when `atom` is not an endpoint.
    #[inline]
    pub fn other(&self, atom: AtomIndex) -> Option<AtomIndex> {
        if self.begin == atom {
            Some(self.end)
        } else if self.end == atom {
            Some(self.begin)
        } else {
            None
        }
    }

    #[inline]
    pub fn involves(&self, atom: AtomIndex) -> bool {
        self.begin == atom || self.end == atom
    }

    pub fn is_query(&self) -> bool {
        self.query.is_some()
    }

    pub fn query(&self) -> Option<&BondQuery> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: BondQuery) {
        self.query = Some(Box::new(query));
    }

    /// And-combine `query` with the existing tree, or install it as the whole
    /// tree when the bond has none.
    pub fn expand_query(&mut self, query: BondQuery) {
        self.query = Some(Box::new(match self.query.take() {
            Some(existing) => existing.and_with(query),
            None => query,
        }));
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.begin, self.order, self.end)
    }
}
