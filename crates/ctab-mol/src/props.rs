//! Named properties
//!
//! Atoms, bonds and molecules carry an open-ended bag of named values written
//! by the file decoders (map numbers, parity flags, aliases, header lines).

use ahash::AHashMap;

/// Well-known property keys written by the molfile decoders.
pub mod keys {
    /// Molecule name from the molfile header.
    pub const NAME: &str = "_Name";
    /// Second (program/info) header line.
    pub const MOL_FILE_INFO: &str = "_MolFileInfo";
    /// Third (comments) header line.
    pub const MOL_FILE_COMMENTS: &str = "_MolFileComments";
    /// Atom stereo parity from the atom block or V3000 `CFG`.
    pub const MOL_PARITY: &str = "molParity";
    /// Stereo-care flag from the V2000 atom block.
    pub const MOL_STEREO_CARE: &str = "molStereoCare";
    /// Total-valence override from the V2000 atom block.
    pub const MOL_TOT_VALENCE: &str = "molTotValence";
    /// Reaction atom-atom map number.
    pub const MOL_ATOM_MAP_NUMBER: &str = "molAtomMapNumber";
    /// Reaction inversion/retention flag.
    pub const MOL_INVERSION_FLAG: &str = "molInversionFlag";
    /// Reaction exact-change flag.
    pub const MOL_EXACT_CHANGE_FLAG: &str = "molExactChangeFlag";
    /// Reacting-center status on a bond.
    pub const MOL_REACT_STATUS: &str = "molReactStatus";
    /// Atom alias text (`A` record continuation line).
    pub const MOL_FILE_ALIAS: &str = "molFileAlias";
    /// Atom value text (`V` record).
    pub const MOL_FILE_VALUE: &str = "molFileValue";
    /// R-group label from `M  RGP`.
    pub const MOL_FILE_R_LABEL: &str = "_MolFileRLabel";
    /// Atom carries a mass difference that should become a mass query on
    /// promotion.
    pub const HAS_MASS_QUERY: &str = "_hasMassQuery";
    /// Header declared the structure 2D.
    pub const CONF_2D: &str = "_2DConf";
    /// Header declared the structure 3D.
    pub const CONF_3D: &str = "_3DConf";
}

/// A single property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Int(i32),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

/// Bag of named property values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    map: AHashMap<String, PropValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn set(&mut self, key: &str, value: impl Into<PropValue>) {
        self.map.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.map.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.map.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Integer value for `key`, if present and an integer.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.map.get(key) {
            Some(PropValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.map.get(key) {
            Some(PropValue::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// True when `key` is present with a `Bool(true)` value.
    pub fn get_flag(&self, key: &str) -> bool {
        matches!(self.map.get(key), Some(PropValue::Bool(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}
