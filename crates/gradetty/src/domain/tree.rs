//! Reconstructs a repository layout tree from the flat path list returned by
//! the analysis backend.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Nodes at depth `0` and `1` (top level and its immediate children) start
/// expanded; everything deeper starts collapsed.
const DEFAULT_EXPANDED_DEPTH: usize = 2;

/// One node in a reconstructed repository layout.
///
/// Files and folders are separate variants so a file can never carry
/// children by construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeNode {
    File {
        /// Last path segment.
        name: String,
        /// Slash-joined path from the top level down to this node.
        path: String,
    },
    Folder {
        /// Child nodes in insertion order. Display order is computed at
        /// render time by [`sorted_siblings`].
        children: Vec<TreeNode>,
        /// Last path segment.
        name: String,
        /// Slash-joined path from the top level down to this node.
        path: String,
    },
}

impl TreeNode {
    /// Returns the node's display name (its last path segment).
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Folder { name, .. } => name,
        }
    }

    /// Returns the full slash-joined path of the node.
    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } | TreeNode::Folder { path, .. } => path,
        }
    }

    /// Returns whether the node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Returns the node's children, or an empty slice for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Folder { children, .. } => children,
        }
    }
}

/// Builds a forest of [`TreeNode`] from flat slash-delimited path strings.
///
/// Empty paths and empty segments (leading, trailing, or duplicate
/// separators) are skipped silently; the builder is total over any input.
/// A trailing slash marks an explicit folder entry. When one path records a
/// name as a file and a later path implies children beneath it, the file is
/// promoted to a folder in place (folder wins).
pub fn build_tree(paths: &[String]) -> Vec<TreeNode> {
    let mut forest = Vec::new();

    for path in paths {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            continue;
        }

        let terminal_is_file = !path.ends_with('/');
        insert_path(&mut forest, &segments, terminal_is_file);
    }

    forest
}

/// Inserts one segmented path into a sibling list, descending level by level.
fn insert_path(forest: &mut Vec<TreeNode>, segments: &[&str], terminal_is_file: bool) {
    let mut current_level = forest;
    let mut prefix = String::new();

    for (segment_index, segment) in segments.iter().enumerate() {
        let is_terminal = segment_index == segments.len() - 1;
        let node_path = if prefix.is_empty() {
            (*segment).to_string()
        } else {
            format!("{prefix}/{segment}")
        };

        let node_index = match current_level
            .iter()
            .position(|node| node.name() == *segment)
        {
            Some(existing_index) => {
                let path_implies_folder = !is_terminal || !terminal_is_file;
                if path_implies_folder {
                    promote_to_folder(&mut current_level[existing_index]);
                }

                existing_index
            }
            None => {
                let node = if is_terminal && terminal_is_file {
                    TreeNode::File {
                        name: (*segment).to_string(),
                        path: node_path.clone(),
                    }
                } else {
                    TreeNode::Folder {
                        children: Vec::new(),
                        name: (*segment).to_string(),
                        path: node_path.clone(),
                    }
                };
                current_level.push(node);

                current_level.len() - 1
            }
        };

        if is_terminal {
            return;
        }

        let TreeNode::Folder { children, .. } = &mut current_level[node_index] else {
            return;
        };
        current_level = children;
        prefix = node_path;
    }
}

/// Rewrites a file node as an empty folder, keeping name and path.
fn promote_to_folder(node: &mut TreeNode) {
    if let TreeNode::File { name, path } = node {
        *node = TreeNode::Folder {
            children: Vec::new(),
            name: std::mem::take(name),
            path: std::mem::take(path),
        };
    }
}

/// Returns siblings in display order: folders before files, then by name.
///
/// The ordering is recomputed on every call rather than stored in the tree,
/// since the tree itself is rebuilt whenever its input list changes.
pub fn sorted_siblings(siblings: &[TreeNode]) -> Vec<&TreeNode> {
    let mut ordered: Vec<&TreeNode> = siblings.iter().collect();
    ordered.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    });

    ordered
}

/// Compares names case-insensitively first, falling back to an exact
/// comparison so equal-ignoring-case names still order deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        return a.cmp(b);
    }

    folded
}

/// Folder open/closed flags keyed by node path.
///
/// The flags live with the viewing page rather than inside tree nodes, so
/// expansion survives tree rebuilds and can be inspected without walking the
/// render tree. Paths without an explicit entry fall back to the depth rule.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExpansionState {
    overrides: HashMap<String, bool>,
}

impl ExpansionState {
    /// Creates an expansion state with no explicit overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the folder at `path` and `depth` is currently open.
    pub fn is_expanded(&self, path: &str, depth: usize) -> bool {
        self.overrides
            .get(path)
            .copied()
            .unwrap_or(depth < DEFAULT_EXPANDED_DEPTH)
    }

    /// Flips the open state of exactly one folder. Descendant entries are
    /// left untouched so they reappear unchanged when the folder reopens.
    pub fn toggle(&mut self, path: &str, depth: usize) {
        let expanded = self.is_expanded(path, depth);
        self.overrides.insert(path.to_string(), !expanded);
    }
}

/// One visible line of the rendered tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeRow {
    /// Nesting depth, `0` for top-level nodes.
    pub depth: usize,
    /// Whether a folder row is currently open. Always `false` for files.
    pub expanded: bool,
    /// Whether the row is a folder.
    pub is_folder: bool,
    /// Display name of the node.
    pub name: String,
    /// Full slash-joined node path.
    pub path: String,
}

/// Flattens the forest into the rows currently visible under `expansion`.
///
/// Rows come out in display order with collapsed subtrees skipped, so the
/// result drives both rendering and cursor navigation.
pub fn visible_rows(forest: &[TreeNode], expansion: &ExpansionState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_visible_rows(forest, expansion, 0, &mut rows);

    rows
}

fn push_visible_rows(
    siblings: &[TreeNode],
    expansion: &ExpansionState,
    depth: usize,
    rows: &mut Vec<TreeRow>,
) {
    for node in sorted_siblings(siblings) {
        let expanded = node.is_folder() && expansion.is_expanded(node.path(), depth);
        rows.push(TreeRow {
            depth,
            expanded,
            is_folder: node.is_folder(),
            name: node.name().to_string(),
            path: node.path().to_string(),
        });

        if expanded {
            push_visible_rows(node.children(), expansion, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| (*entry).to_string()).collect()
    }

    fn find<'a>(siblings: &'a [TreeNode], name: &str) -> &'a TreeNode {
        siblings
            .iter()
            .find(|node| node.name() == name)
            .expect("expected node to exist")
    }

    #[test]
    fn test_build_tree_empty_input_returns_empty_forest() {
        // Arrange
        let input: Vec<String> = Vec::new();

        // Act
        let forest = build_tree(&input);

        // Assert
        assert!(forest.is_empty());
    }

    #[test]
    fn test_build_tree_shares_common_prefix_nodes() {
        // Arrange
        let input = paths(&["a/b/c", "a/b/d"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        assert_eq!(forest.len(), 1);
        let a = find(&forest, "a");
        assert_eq!(a.children().len(), 1);
        let b = find(a.children(), "b");
        assert_eq!(b.children().len(), 2);
        assert!(b.children().iter().any(|node| node.name() == "c"));
        assert!(b.children().iter().any(|node| node.name() == "d"));
    }

    #[test]
    fn test_build_tree_node_paths_join_ancestor_names() {
        // Arrange
        let input = paths(&["src/domain/tree.rs", "README.md"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        let src = find(&forest, "src");
        let domain = find(src.children(), "domain");
        let tree = find(domain.children(), "tree.rs");
        assert_eq!(src.path(), "src");
        assert_eq!(domain.path(), "src/domain");
        assert_eq!(tree.path(), "src/domain/tree.rs");
        assert_eq!(find(&forest, "README.md").path(), "README.md");
    }

    #[test]
    fn test_build_tree_trailing_slash_creates_empty_folder() {
        // Arrange
        let input = paths(&["x/"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_folder());
        assert_eq!(forest[0].name(), "x");
        assert!(forest[0].children().is_empty());
    }

    #[test]
    fn test_build_tree_skips_empty_paths_and_segments() {
        // Arrange
        let input = paths(&["", "//", "/a//b"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        assert_eq!(forest.len(), 1);
        let a = find(&forest, "a");
        assert!(a.is_folder());
        assert_eq!(a.children().len(), 1);
        assert_eq!(a.children()[0].name(), "b");
        assert_eq!(a.children()[0].path(), "a/b");
    }

    #[test]
    fn test_build_tree_terminal_segment_without_slash_is_file() {
        // Arrange
        let input = paths(&["docs/guide.md"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        let docs = find(&forest, "docs");
        assert!(docs.is_folder());
        assert!(!docs.children()[0].is_folder());
    }

    #[test]
    fn test_build_tree_is_structurally_idempotent() {
        // Arrange
        let input = paths(&["src/main.rs", "src/lib.rs", "tests/", "Cargo.toml"]);

        // Act
        let first = build_tree(&input);
        let second = build_tree(&input);

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_tree_promotes_file_to_folder_on_deeper_path() {
        // Arrange
        let input = paths(&["a/b", "a/b/c"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        let a = find(&forest, "a");
        let b = find(a.children(), "b");
        assert!(b.is_folder());
        assert_eq!(b.path(), "a/b");
        assert_eq!(b.children().len(), 1);
        assert_eq!(b.children()[0].name(), "c");
    }

    #[test]
    fn test_build_tree_keeps_folder_when_file_path_repeats_name() {
        // Arrange
        let input = paths(&["a/b/c", "a/b"]);

        // Act
        let forest = build_tree(&input);

        // Assert
        let a = find(&forest, "a");
        let b = find(a.children(), "b");
        assert!(b.is_folder());
        assert_eq!(b.children().len(), 1);
        assert_eq!(b.children()[0].name(), "c");
    }

    #[test]
    fn test_sorted_siblings_orders_folders_before_files_then_by_name() {
        // Arrange
        let input = paths(&["b.txt", "a.txt", "Z/"]);
        let forest = build_tree(&input);

        // Act
        let ordered = sorted_siblings(&forest);

        // Assert
        let names: Vec<&str> = ordered.iter().map(|node| node.name()).collect();
        assert_eq!(names, vec!["Z", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_sorted_siblings_compares_names_case_insensitively_first() {
        // Arrange
        let input = paths(&["Beta", "alpha", "Alpha"]);
        let forest = build_tree(&input);

        // Act
        let ordered = sorted_siblings(&forest);

        // Assert
        let names: Vec<&str> = ordered.iter().map(|node| node.name()).collect();
        assert_eq!(names, vec!["Alpha", "alpha", "Beta"]);
    }

    #[test]
    fn test_expansion_state_defaults_open_for_top_two_levels() {
        // Arrange
        let expansion = ExpansionState::new();

        // Act & Assert
        assert!(expansion.is_expanded("src", 0));
        assert!(expansion.is_expanded("src/domain", 1));
        assert!(!expansion.is_expanded("src/domain/tree", 2));
    }

    #[test]
    fn test_expansion_state_toggle_flips_only_target_folder() {
        // Arrange
        let mut expansion = ExpansionState::new();

        // Act
        expansion.toggle("src", 0);

        // Assert
        assert!(!expansion.is_expanded("src", 0));
        assert!(expansion.is_expanded("tests", 0));
    }

    #[test]
    fn test_expansion_state_toggle_preserves_descendant_overrides() {
        // Arrange
        let mut expansion = ExpansionState::new();
        expansion.toggle("src/deep/nested", 2);

        // Act
        expansion.toggle("src", 0);
        expansion.toggle("src", 0);

        // Assert
        assert!(expansion.is_expanded("src", 0));
        assert!(expansion.is_expanded("src/deep/nested", 2));
    }

    #[test]
    fn test_visible_rows_skips_collapsed_subtrees() {
        // Arrange
        let input = paths(&["src/a.rs", "src/b.rs", "README.md"]);
        let forest = build_tree(&input);
        let mut expansion = ExpansionState::new();
        expansion.toggle("src", 0);

        // Act
        let rows = visible_rows(&forest, &expansion);

        // Assert
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["src", "README.md"]);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_visible_rows_reports_depth_in_display_order() {
        // Arrange
        let input = paths(&["src/lib.rs", "src/util/text.rs", "Cargo.toml"]);
        let forest = build_tree(&input);
        let expansion = ExpansionState::new();

        // Act
        let rows = visible_rows(&forest, &expansion);

        // Assert
        let entries: Vec<(&str, usize)> = rows
            .iter()
            .map(|row| (row.name.as_str(), row.depth))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("src", 0),
                ("util", 1),
                ("text.rs", 2),
                ("lib.rs", 1),
                ("Cargo.toml", 0),
            ]
        );
    }
}
