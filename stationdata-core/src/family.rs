use std::collections::BTreeMap;

use crate::{Catalog, Entry};

/// The five enum-like catalog families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnumFamily {
    /// Free-standing enums, named `Group.Member` (or bare for the unnamed group).
    Enums,
    LogicTypes,
    SlotLogicTypes,
    ReagentModes,
    BatchModes,
}

/// All families in write order.
const ALL_FAMILIES: &[EnumFamily] = &[
    EnumFamily::LogicTypes,
    EnumFamily::SlotLogicTypes,
    EnumFamily::BatchModes,
    EnumFamily::ReagentModes,
    EnumFamily::Enums,
];

impl EnumFamily {
    pub fn all() -> &'static [EnumFamily] {
        ALL_FAMILIES
    }

    /// Catalog file written for this family.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Enums => "enums.txt",
            Self::LogicTypes => "logictypes.txt",
            Self::SlotLogicTypes => "slotlogictypes.txt",
            Self::ReagentModes => "reagentmodes.txt",
            Self::BatchModes => "batchmodes.txt",
        }
    }

    /// Name of the script enum listing this family is read from, if any.
    pub fn script_enum_name(self) -> Option<&'static str> {
        match self {
            Self::Enums => None,
            Self::LogicTypes => Some("LogicType"),
            Self::SlotLogicTypes => Some("LogicSlotType"),
            Self::ReagentModes => Some("LogicReagentMode"),
            Self::BatchModes => Some("LogicBatchMethod"),
        }
    }

    /// Group under which members of this family also appear in the generic
    /// enum catalog (`LogicType.Power` for logic type `Power`).
    pub fn enum_group(self) -> Option<&'static str> {
        match self {
            Self::LogicTypes => Some("LogicType"),
            Self::SlotLogicTypes => Some("LogicSlotType"),
            _ => None,
        }
    }
}

/// Per-family catalogs. A family is present only if some source provided it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumCatalogs {
    families: BTreeMap<EnumFamily, Catalog>,
}

impl EnumCatalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, family: EnumFamily) -> Option<&Catalog> {
        self.families.get(&family)
    }

    pub fn get_mut(&mut self, family: EnumFamily) -> Option<&mut Catalog> {
        self.families.get_mut(&family)
    }

    /// The catalog for `family`, creating it empty if absent.
    pub fn catalog_mut(&mut self, family: EnumFamily) -> &mut Catalog {
        self.families.entry(family).or_default()
    }

    /// Insert or overwrite one member.
    pub fn insert(&mut self, family: EnumFamily, name: impl Into<String>, entry: Entry) {
        self.catalog_mut(family).insert(name.into(), entry);
    }

    pub fn contains(&self, family: EnumFamily) -> bool {
        self.families.contains_key(&family)
    }

    /// Present families in write order.
    pub fn iter(&self) -> impl Iterator<Item = (EnumFamily, &Catalog)> {
        EnumFamily::all()
            .iter()
            .filter_map(|&family| self.families.get(&family).map(|c| (family, c)))
    }
}
