//! Python Reference Extractor
//!
//! Implements the `ReferenceExtractor` port on a tree-sitter syntax tree.
//!
//! Two passes over the tree:
//!
//! 1. Collect import bindings (`import a.b`, `from .m import n as k`, ...)
//!    wherever they occur, including inside functions.
//! 2. Walk every expression and record each use of a binding, matching
//!    dotted attribute chains against the longest bound prefix.
//!
//! Bindings never used produce a single reference at the import itself.
//! Names are matched by spelling only; shadowing by locals is not tracked.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tree_sitter::{Node, Parser};

use crate::domain::ports::{Extraction, RawReference, ReferenceExtractor};
use crate::error::ParseError;

/// Calls that load a module named by their first argument
const DYNAMIC_IMPORTS: &[&str] = &["import_module", "__import__", "importlib.import_module"];

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for PythonExtractor {
    fn extract(&self, file: &Path, source: &str) -> Result<Extraction, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::new(file, None, format!("cannot load Python grammar: {}", e)))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(file, None, "parser returned no syntax tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error(root).map(|node| node.start_position().row + 1);
            return Err(ParseError::new(file, line, "invalid Python syntax"));
        }

        let mut scan = Scan::new(source);
        scan.collect_imports(root);
        scan.collect_uses(root);
        Ok(Extraction {
            exports: exports(root, source),
            references: scan.finish(),
        })
    }
}

/// A name bound by an import
#[derive(Debug)]
struct Binding {
    module: String,
    level: usize,
    symbol: Option<String>,
    line: usize,
    column: usize,
    byte: usize,
    used: bool,
}

struct Scan<'s> {
    source: &'s str,
    bindings: Vec<Binding>,
    /// Binding indices per bound name, in source order
    by_name: BTreeMap<String, Vec<usize>>,
    /// Dotted `import a.b` bindings per top-level package name
    by_package: BTreeMap<String, Vec<usize>>,
    references: Vec<RawReference>,
}

impl<'s> Scan<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            bindings: Vec::new(),
            by_name: BTreeMap::new(),
            by_package: BTreeMap::new(),
            references: Vec::new(),
        }
    }

    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn collect_imports(&mut self, node: Node) {
        match node.kind() {
            "import_statement" => {
                let mut cursor = node.walk();
                for name in node.children_by_field_name("name", &mut cursor) {
                    match name.kind() {
                        "aliased_import" => {
                            let (Some(module), Some(alias)) = (
                                name.child_by_field_name("name"),
                                name.child_by_field_name("alias"),
                            ) else {
                                continue;
                            };
                            self.bind(self.text(alias), self.text(module), 0, None, name);
                        }
                        _ => {
                            let module = self.text(name);
                            if let Some((package, _)) = module.split_once('.') {
                                self.by_package
                                    .entry(package.to_string())
                                    .or_default()
                                    .push(self.bindings.len());
                            }
                            self.bind(module, module, 0, None, name);
                        }
                    }
                }
            }
            "import_from_statement" => self.collect_from_import(node),
            "future_import_statement" => {}
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    self.collect_imports(child);
                }
            }
        }
    }

    fn collect_from_import(&mut self, node: Node) {
        let Some(module_name) = node.child_by_field_name("module_name") else {
            return;
        };
        let (module, level) = if module_name.kind() == "relative_import" {
            let mut cursor = module_name.walk();
            let mut level = 0;
            let mut module = "";
            for part in module_name.children(&mut cursor) {
                match part.kind() {
                    "import_prefix" => level = self.text(part).matches('.').count(),
                    "dotted_name" => module = self.text(part),
                    _ => {}
                }
            }
            (module, level)
        } else {
            (self.text(module_name), 0)
        };
        if level == 0 && module == "__future__" {
            return;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "wildcard_import" {
                let (line, column) = position(node);
                self.references.push(RawReference::Static {
                    module: module.to_string(),
                    level,
                    symbol: Some("*".to_string()),
                    member: None,
                    line,
                    column,
                });
            }
        }

        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            let (symbol, bound) = match name.kind() {
                "aliased_import" => match (
                    name.child_by_field_name("name"),
                    name.child_by_field_name("alias"),
                ) {
                    (Some(symbol), Some(alias)) => (self.text(symbol), self.text(alias)),
                    _ => continue,
                },
                _ => (self.text(name), self.text(name)),
            };
            self.bind(bound, module, level, Some(symbol), name);
        }
    }

    fn bind(&mut self, name: &str, module: &str, level: usize, symbol: Option<&str>, node: Node) {
        let (line, column) = position(node);
        self.by_name
            .entry(name.to_string())
            .or_default()
            .push(self.bindings.len());
        self.bindings.push(Binding {
            module: module.to_string(),
            level,
            symbol: symbol.map(str::to_string),
            line,
            column,
            byte: node.start_byte(),
            used: false,
        });
    }

    fn collect_uses(&mut self, node: Node) {
        match node.kind() {
            "import_statement"
            | "import_from_statement"
            | "future_import_statement"
            | "global_statement"
            | "nonlocal_statement" => return,
            "identifier" => {
                let name = self.text(node);
                self.use_chain(node, &[name]);
                return;
            }
            "attribute" => {
                if let Some(chain) = self.chain(node) {
                    self.use_chain(node, &chain);
                } else if let Some(object) = node.child_by_field_name("object") {
                    // `f().attr`: only the object side holds references
                    self.collect_uses(object);
                }
                return;
            }
            "call" => self.dynamic_import(node),
            _ => {}
        }

        let skipped = binding_targets(node);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !skipped.contains(&child.id()) {
                self.collect_uses(child);
            }
        }
    }

    /// `a.b.c` as `["a", "b", "c"]`, or `None` if the object side is not a
    /// plain name chain
    fn chain(&self, node: Node) -> Option<Vec<&'s str>> {
        match node.kind() {
            "identifier" => Some(vec![self.text(node)]),
            "attribute" => {
                let mut chain = self.chain(node.child_by_field_name("object")?)?;
                chain.push(self.text(node.child_by_field_name("attribute")?));
                Some(chain)
            }
            _ => None,
        }
    }

    fn use_chain(&mut self, node: Node, chain: &[&str]) {
        let (line, column) = position(node);
        for depth in (1..=chain.len()).rev() {
            let name = chain[..depth].join(".");
            let Some(index) = latest_before(&self.by_name, &self.bindings, &name, node.start_byte())
            else {
                continue;
            };
            let binding = &mut self.bindings[index];
            binding.used = true;
            let member = (depth < chain.len()).then(|| chain[depth..].join("."));
            self.references.push(RawReference::Static {
                module: binding.module.clone(),
                level: binding.level,
                symbol: binding.symbol.clone(),
                member,
                line,
                column,
            });
            return;
        }

        // `import a.b` also binds `a`, so `a.c.d` reaches any loaded submodule
        let Some(&package) = chain.first() else {
            return;
        };
        if latest_before(&self.by_package, &self.bindings, package, node.start_byte()).is_some() {
            self.references.push(RawReference::Static {
                module: package.to_string(),
                level: 0,
                symbol: None,
                member: (chain.len() > 1).then(|| chain[1..].join(".")),
                line,
                column,
            });
        }
    }

    fn dynamic_import(&mut self, call: Node) {
        let Some(function) = call.child_by_field_name("function") else {
            return;
        };
        let callee = match self.chain(function) {
            Some(chain) => chain.join("."),
            None => return,
        };
        if !DYNAMIC_IMPORTS.contains(&callee.as_str()) {
            return;
        }
        let Some(arguments) = call.child_by_field_name("arguments") else {
            return;
        };
        let mut cursor = arguments.walk();
        let Some(first) = arguments
            .named_children(&mut cursor)
            .find(|arg| arg.kind() != "comment")
        else {
            return;
        };

        let (line, column) = position(call);
        let reference = match self.string_literal(first) {
            Some(literal) => {
                let module = literal.trim_start_matches('.');
                RawReference::Static {
                    module: module.to_string(),
                    level: literal.len() - module.len(),
                    symbol: None,
                    member: None,
                    line,
                    column,
                }
            }
            None => RawReference::Dynamic {
                expression: self.text(call).split_whitespace().collect::<Vec<_>>().join(" "),
                line,
                column,
            },
        };
        self.references.push(reference);
    }

    /// Contents of a plain (non-interpolated, non-empty) string literal
    fn string_literal(&self, node: Node) -> Option<String> {
        if node.kind() != "string" {
            return None;
        }
        let mut content = String::new();
        let mut cursor = node.walk();
        for part in node.children(&mut cursor) {
            match part.kind() {
                "string_content" => content.push_str(self.text(part)),
                "interpolation" => return None,
                _ => {}
            }
        }
        (!content.is_empty()).then_some(content)
    }

    fn finish(mut self) -> Vec<RawReference> {
        for binding in self.bindings.iter().filter(|b| !b.used) {
            self.references.push(RawReference::Static {
                module: binding.module.clone(),
                level: binding.level,
                symbol: binding.symbol.clone(),
                member: None,
                line: binding.line,
                column: binding.column,
            });
        }
        self.references
            .sort_by(|a, b| a.position().cmp(&b.position()).then_with(|| a.cmp(b)));
        self.references
    }
}

/// Children of `node` that bind names rather than read them
/// Latest binding under `name` made before `byte`, else the first one
fn latest_before(
    index: &BTreeMap<String, Vec<usize>>,
    bindings: &[Binding],
    name: &str,
    byte: usize,
) -> Option<usize> {
    let candidates = index.get(name)?;
    candidates
        .iter()
        .rev()
        .find(|&&position| bindings[position].byte <= byte)
        .or_else(|| candidates.first())
        .copied()
}

fn binding_targets(node: Node) -> Vec<usize> {
    let mut targets = Vec::new();
    match node.kind() {
        "function_definition" | "class_definition" | "keyword_argument" | "default_parameter"
        | "typed_default_parameter" | "named_expression" => {
            targets.extend(node.child_by_field_name("name").map(|n| n.id()));
        }
        "parameters" | "lambda_parameters" | "typed_parameter" => {
            let mut cursor = node.walk();
            targets.extend(
                node.children(&mut cursor)
                    .filter(|child| {
                        matches!(
                            child.kind(),
                            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern"
                        )
                    })
                    .map(|child| child.id()),
            );
        }
        "assignment" | "for_statement" | "for_in_clause" => {
            if let Some(left) = node.child_by_field_name("left") {
                if matches!(
                    left.kind(),
                    "identifier" | "pattern_list" | "tuple_pattern" | "list_pattern"
                ) {
                    targets.push(left.id());
                }
            }
        }
        "as_pattern" => {
            targets.extend(node.child_by_field_name("alias").map(|n| n.id()));
        }
        _ => {}
    }
    targets
}

/// Names defined at module level
fn exports(root: Node, source: &str) -> BTreeSet<String> {
    let text = |node: Node| node.utf8_text(source.as_bytes()).unwrap_or("").to_string();
    let mut names = BTreeSet::new();
    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        let definition = match statement.kind() {
            "decorated_definition" => statement.child_by_field_name("definition"),
            "function_definition" | "class_definition" => Some(statement),
            "expression_statement" => {
                let mut inner = statement.walk();
                let assignment = statement
                    .named_children(&mut inner)
                    .find(|child| child.kind() == "assignment");
                if let Some(assignment) = assignment {
                    if let Some(left) = assignment
                        .child_by_field_name("left")
                        .filter(|left| left.kind() == "identifier")
                    {
                        names.insert(text(left));
                    }
                }
                None
            }
            _ => None,
        };
        if let Some(name) = definition.and_then(|d| d.child_by_field_name("name")) {
            names.insert(text(name));
        }
    }
    names
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

/// 1-based (line, column)
fn position(node: Node) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Extraction {
        PythonExtractor::new()
            .extract(Path::new("apps/user/api.py"), source)
            .unwrap()
    }

    fn statics(source: &str) -> Vec<(String, usize, Option<String>, Option<String>, usize)> {
        extract(source)
            .references
            .into_iter()
            .filter_map(|r| match r {
                RawReference::Static {
                    module,
                    level,
                    symbol,
                    member,
                    line,
                    ..
                } => Some((module, level, symbol, member, line)),
                RawReference::Dynamic { .. } => None,
            })
            .collect()
    }

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn each_use_of_an_imported_name_is_a_reference() {
        let refs = statics(
            "from .services import create_user\n\
             \n\
             def register(request, payload):\n    \
                 create_user(payload)\n    \
                 return create_user(payload)\n",
        );
        assert_eq!(
            refs,
            vec![
                ("services".into(), 1, s("create_user"), None, 4),
                ("services".into(), 1, s("create_user"), None, 5),
            ]
        );
    }

    #[test]
    fn unused_import_is_referenced_at_the_import() {
        let refs = statics("import os\nfrom apps.log.services import log_admin_action\n");
        assert_eq!(
            refs,
            vec![
                ("os".into(), 0, None, None, 1),
                ("apps.log.services".into(), 0, s("log_admin_action"), None, 2),
            ]
        );
    }

    #[test]
    fn aliased_module_import_records_the_accessed_member() {
        let refs = statics(
            "import apps.log.selectors as log_selectors\n\
             \n\
             log_selectors.list_logs(page=1)\n",
        );
        assert_eq!(
            refs,
            vec![("apps.log.selectors".into(), 0, None, s("list_logs"), 3)]
        );
    }

    #[test]
    fn dotted_import_matches_longest_bound_prefix() {
        let refs = statics("import apps.log.services\n\napps.log.services.log_admin_action()\n");
        assert_eq!(
            refs,
            vec![("apps.log.services".into(), 0, None, s("log_admin_action"), 3)]
        );
    }

    #[test]
    fn dotted_import_binds_its_top_level_package() {
        let refs = statics("import apps.log.services\n\napps.log.selectors.list_logs()\n");
        assert_eq!(
            refs,
            vec![
                ("apps.log.services".into(), 0, None, None, 1),
                ("apps".into(), 0, None, s("log.selectors.list_logs"), 3),
            ]
        );
    }

    #[test]
    fn parenthesised_multi_line_import_binds_every_name() {
        let refs = statics(
            "from apps.log.services import (\n    log_admin_action,\n    log_user_action,\n)\n",
        );
        assert_eq!(
            refs,
            vec![
                ("apps.log.services".into(), 0, s("log_admin_action"), None, 2),
                ("apps.log.services".into(), 0, s("log_user_action"), None, 3),
            ]
        );
    }

    #[test]
    fn parent_relative_and_package_relative_imports() {
        let refs = statics("from .. import settings\nfrom ..log import selectors as log_sel\n");
        assert_eq!(
            refs,
            vec![
                ("".into(), 2, s("settings"), None, 1),
                ("log".into(), 2, s("selectors"), None, 2),
            ]
        );
    }

    #[test]
    fn wildcard_and_future_imports() {
        let refs = statics("from __future__ import annotations\nfrom .schemas import *\n");
        assert_eq!(refs, vec![("schemas".into(), 1, s("*"), None, 2)]);
    }

    #[test]
    fn imports_inside_functions_are_collected() {
        let refs = statics(
            "def handler():\n    from apps.log.services import log_action\n    log_action()\n",
        );
        assert_eq!(
            refs,
            vec![("apps.log.services".into(), 0, s("log_action"), None, 3)]
        );
    }

    #[test]
    fn binding_positions_are_not_references() {
        let refs = statics(
            "from apps.user import services\n\
             \n\
             def build(services=None):\n    \
                 pass\n\
             \n\
             configure(services=1)\n",
        );
        // Only the unused-import reference remains
        assert_eq!(refs, vec![("apps.user".into(), 0, s("services"), None, 1)]);
    }

    #[test]
    fn decorators_annotations_and_bases_are_references() {
        let refs = statics(
            "from apps.core import auth, Base, Schema\n\
             \n\
             @auth.required\n\
             class Admin(Base):\n    \
                 def get(self) -> Schema:\n        \
                     pass\n",
        );
        let lines: Vec<_> = refs.iter().map(|r| (r.2.clone(), r.4)).collect();
        assert_eq!(lines, vec![(s("auth"), 3), (s("Base"), 4), (s("Schema"), 5)]);
        assert_eq!(refs[0].3, s("required"));
    }

    #[test]
    fn literal_import_module_is_static_and_computed_one_is_dynamic() {
        let extraction = extract(
            "import importlib\n\
             \n\
             a = importlib.import_module(\"apps.log.services\")\n\
             b = importlib.import_module(f\"apps.{name}.services\")\n",
        );
        let refs = extraction.references;
        assert!(refs.contains(&RawReference::Static {
            module: "apps.log.services".into(),
            level: 0,
            symbol: None,
            member: None,
            line: 3,
            column: 5,
        }));
        assert!(refs.contains(&RawReference::Dynamic {
            expression: "importlib.import_module(f\"apps.{name}.services\")".into(),
            line: 4,
            column: 5,
        }));
    }

    #[test]
    fn top_level_definitions_are_exports() {
        let extraction = extract(
            "import os\n\
             \n\
             LIMIT = 10\n\
             \n\
             def list_logs():\n    \
                 inner = 1\n\
             \n\
             @cache\n\
             def cached():\n    \
                 pass\n\
             \n\
             class LogSchema:\n    \
                 pass\n",
        );
        let exports: Vec<_> = extraction.exports.into_iter().collect();
        assert_eq!(exports, vec!["LIMIT", "LogSchema", "cached", "list_logs"]);
    }

    #[test]
    fn syntax_error_is_a_parse_error_with_line() {
        let err = PythonExtractor::new()
            .extract(Path::new("apps/user/api.py"), "import os\n\ndef broken(:\n")
            .unwrap_err();
        assert_eq!(err.file, Path::new("apps/user/api.py"));
        assert!(err.line.is_some());
    }
}
