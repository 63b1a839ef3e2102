use treeish::text::{display_width, pad_to_width, truncate_to_width};
use treeish::traversal::refresh_sibling_flags;
use treeish::{Error, Hierarchy, Node, NodeId, NodeState, Rgb, Style, Styles, Symbols, Tree, render_line};

struct Entry {
    name: &'static str,
    mode: &'static str,
}

impl Node for Entry {
    fn name(&self, state: NodeState) -> String {
        if !state.is_collapsible() {
            return self.name.to_string();
        }
        let marker = if state.is_collapsed() { ">" } else { "v" };
        format!("{marker} {}", self.name)
    }

    fn prefix(&self) -> String {
        format!("{} ", self.mode)
    }
}

fn entry(name: &'static str) -> Entry {
    Entry {
        name,
        mode: "-rw-",
    }
}

/// dir -> [file, a-very-long-file-name]
fn fixture() -> (Tree<Entry>, NodeId, NodeId, NodeId) {
    let mut tree = Tree::new();
    let dir = tree.add_root(entry("dir"), NodeState::NONE);
    let file = tree.add_child(dir, entry("file"), NodeState::NONE).unwrap();
    let long = tree
        .add_child(dir, entry("a-very-long-file-name"), NodeState::NONE)
        .unwrap();
    let roots = tree.roots().to_vec();
    refresh_sibling_flags(&mut tree, &roots);
    (tree, dir, file, long)
}

#[test]
fn test_unsized_line_keeps_full_name() {
    let (tree, dir, file, long) = fixture();
    let render = |id| {
        render_line(&tree, id, 0, &Symbols::normal(), &Styles::default())
            .unwrap()
            .plain()
    };

    assert_eq!(render(dir), "-rw- └─v dir");
    assert_eq!(render(file), "-rw-   ├─file");
    assert_eq!(render(long), "-rw-   └─a-very-long-file-name");
}

#[test]
fn test_name_is_truncated_with_reserved_column() {
    let (tree, _, _, long) = fixture();
    // Prefix (5) + glyphs (4) leaves 11 columns, one of which is reserved.
    let line = render_line(&tree, long, 20, &Symbols::normal(), &Styles::default()).unwrap();

    assert_eq!(line.plain(), "-rw-   └─a-very-lo…");
    assert_eq!(line.width(), 19);
}

#[test]
fn test_short_name_is_padded_to_field() {
    let (tree, _, file, _) = fixture();
    let line = render_line(&tree, file, 20, &Symbols::normal(), &Styles::default()).unwrap();

    assert_eq!(line.plain(), "-rw-   ├─file      ");
    assert_eq!(line.width(), 19);
}

#[test]
fn test_narrow_viewport() {
    let (tree, _, file, _) = fixture();
    let line = render_line(&tree, file, 5, &Symbols::normal(), &Styles::default()).unwrap();
    assert_eq!(line.plain(), "-rw-   ├─");
}

#[test]
fn test_name_reflects_state() {
    let (mut tree, dir, _, _) = fixture();
    tree.insert_state(dir, NodeState::COLLAPSED);
    let line = render_line(&tree, dir, 0, &Symbols::normal(), &Styles::default()).unwrap();
    assert_eq!(line.plain(), "-rw- └─> dir");
}

#[test]
fn test_span_styles() {
    let (mut tree, dir, file, _) = fixture();
    let styles = Styles {
        prefix: Style::new().dim(),
        symbol: Style::new().foreground(Rgb::new(1, 2, 3)),
        line: Style::new(),
        selected: Style::new().bold(),
    };
    tree.insert_state(dir, NodeState::SELECTED);

    let selected = render_line(&tree, dir, 0, &Symbols::normal(), &styles).unwrap();
    assert_eq!(selected.spans.len(), 3);
    assert_eq!(selected.spans[0].style, styles.prefix);
    assert_eq!(selected.spans[1].style, styles.symbol);
    assert_eq!(selected.spans[2].style, styles.selected);

    let plain = render_line(&tree, file, 0, &Symbols::normal(), &styles).unwrap();
    assert_eq!(plain.spans[2].style, styles.line);
}

#[test]
fn test_no_prefix_span_when_empty() {
    let mut tree = Tree::new();
    let root = tree.add_root("root", NodeState::NONE);
    let line = render_line(&tree, root, 0, &Symbols::normal(), &Styles::default()).unwrap();
    assert_eq!(line.spans.len(), 2);
    assert_eq!(line.to_string(), "├─root");
}

#[test]
fn test_unknown_node() {
    let (tree, _, _, _) = fixture();
    let mut other = Tree::new();
    for name in ["a", "b", "c"] {
        other.add_root(name, NodeState::NONE);
    }
    let stranger = other.add_root("d", NodeState::NONE);

    assert_eq!(
        render_line(&tree, stranger, 0, &Symbols::normal(), &Styles::default()),
        Err(Error::UnknownNode(stranger))
    );
}

#[test]
fn test_display_width() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("├─"), 2);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
    // "日本" is 4 columns, leaving one for the ellipsis.
    assert_eq!(truncate_to_width("日本語", 5), "日本…");
}

#[test]
fn test_pad() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("abcd", 2), "abcd");
    assert_eq!(pad_to_width("日", 3), "日 ");
}
