//! Reference Resolver
//!
//! Turns the raw references of one unit into edges between units. Relative
//! imports are anchored at the importing unit's package; references into
//! packages that do not belong to the project are dropped.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{Edge, EdgeTarget, Unit};
use crate::domain::ports::RawReference;
use crate::domain::value_objects::{SourceLocation, UnitId};

/// How one raw reference resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A project unit, optionally a symbol inside it
    Unit {
        target: UnitId,
        symbol: Option<String>,
        reference: String,
    },
    /// Belongs to the project but names no unit, or is computed at runtime
    Unresolved { reference: String },
    /// External module or bare namespace package
    Ignored,
}

/// Lookup of unit ids, their ancestor packages and top-level names
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    units: BTreeMap<UnitId, usize>,
    namespaces: BTreeSet<UnitId>,
    top_levels: BTreeSet<String>,
}

impl ModuleIndex {
    pub fn new(units: &[Unit]) -> Self {
        let mut index = Self::default();
        for (position, unit) in units.iter().enumerate() {
            index.units.insert(unit.id.clone(), position);
            index.top_levels.insert(unit.id.top_level().to_string());
            let mut parent = unit.id.parent();
            while let Some(id) = parent {
                parent = id.parent();
                index.namespaces.insert(id);
            }
        }
        index
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.units.contains_key(id)
    }

    /// Position of the unit in the slice the index was built from
    pub fn position(&self, id: &UnitId) -> Option<usize> {
        self.units.get(id).copied()
    }

    fn is_namespace(&self, id: &UnitId) -> bool {
        self.namespaces.contains(id)
    }

    fn is_internal(&self, top_level: &str) -> bool {
        self.top_levels.contains(top_level)
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    index: ModuleIndex,
}

impl ReferenceResolver {
    pub fn new(units: &[Unit]) -> Self {
        Self {
            index: ModuleIndex::new(units),
        }
    }

    pub fn index(&self) -> &ModuleIndex {
        &self.index
    }

    pub fn resolve(&self, unit: &Unit, reference: &RawReference) -> Resolution {
        match reference {
            RawReference::Dynamic { expression, .. } => Resolution::Unresolved {
                reference: expression.clone(),
            },
            RawReference::Static {
                module,
                level,
                symbol,
                member,
                ..
            } => self.resolve_static(unit, module, *level, symbol.as_deref(), member.as_deref()),
        }
    }

    /// Resolve every reference of `unit`, dropping external modules and
    /// references back into the unit itself.
    pub fn edges(&self, unit: &Unit, references: &[RawReference]) -> Vec<Edge> {
        let mut edges: Vec<Edge> = references
            .iter()
            .filter_map(|raw| {
                let (line, column) = raw.position();
                let location = SourceLocation::new(unit.path.clone(), line, column);
                let (target, symbol, reference) = match self.resolve(unit, raw) {
                    Resolution::Ignored => return None,
                    Resolution::Unresolved { reference } => (EdgeTarget::Unknown, None, reference),
                    Resolution::Unit {
                        target,
                        symbol,
                        reference,
                    } => (EdgeTarget::Unit(target), symbol, reference),
                };
                Some(Edge::new(unit.id.clone(), target, symbol, reference, location))
            })
            .filter(|edge| !edge.is_self_reference())
            .collect();
        edges.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        edges
    }

    fn resolve_static(
        &self,
        unit: &Unit,
        module: &str,
        level: usize,
        symbol: Option<&str>,
        member: Option<&str>,
    ) -> Resolution {
        let written = written_reference(module, level, symbol);

        let base = if level == 0 {
            if !self.index.is_internal(module.split('.').next().unwrap_or(module)) {
                return Resolution::Ignored;
            }
            UnitId::new(module)
        } else {
            match anchor(unit, level) {
                Some(package) if module.is_empty() => package,
                Some(package) => package.child(module),
                None => return Resolution::Unresolved { reference: written },
            }
        };

        // Attribute path after the base module: the imported name, then
        // whatever the use site accessed through it
        let mut path: Vec<&str> = symbol.into_iter().collect();
        if let Some(member) = member {
            path.extend(member.split('.'));
        }

        // Longest prefix naming a unit wins; `*` is never a module name
        for depth in (0..=path.len()).rev() {
            if path[..depth].contains(&"*") {
                continue;
            }
            let candidate = path[..depth]
                .iter()
                .fold(base.clone(), |id, part| id.child(part));
            if self.index.contains(&candidate) {
                return self.target(candidate, path.get(depth).copied());
            }
        }

        // A bare namespace package only matters through its members
        if self.index.is_namespace(&base) {
            return Resolution::Ignored;
        }
        Resolution::Unresolved { reference: written }
    }

    fn target(&self, target: UnitId, symbol: Option<&str>) -> Resolution {
        let reference = match symbol {
            Some(name) => format!("{}.{}", target, name),
            None => target.to_string(),
        };
        Resolution::Unit {
            target,
            symbol: symbol.map(str::to_string),
            reference,
        }
    }
}

/// Package a relative import of `level` dots starts from
fn anchor(unit: &Unit, level: usize) -> Option<UnitId> {
    let mut package = match unit.package() {
        Some(package) => package,
        None if level == 1 => return Some(UnitId::new("")),
        None => return None,
    };
    for _ in 1..level {
        package = package.parent()?;
    }
    Some(package)
}

fn written_reference(module: &str, level: usize, symbol: Option<&str>) -> String {
    let mut written = ".".repeat(level);
    written.push_str(module);
    if let Some(name) = symbol {
        if !module.is_empty() {
            written.push('.');
        }
        written.push_str(name);
    }
    written
}
