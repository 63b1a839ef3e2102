use treeish::symbols::{has_padding_at_pos, multi_line_symbols, single_line_symbols, symbol_for_pos};
use treeish::traversal::refresh_sibling_flags;
use treeish::{Error, Hierarchy, NodeId, NodeState, SymbolSet, Symbols, Tree};

/// root -> [a, b], a -> [a1, a2], with sibling flags refreshed.
fn fixture() -> (Tree<&'static str>, [NodeId; 5]) {
    let mut tree = Tree::new();
    let root = tree.add_root("root", NodeState::NONE);
    let a = tree.add_child(root, "a", NodeState::NONE).unwrap();
    let a1 = tree.add_child(a, "a1", NodeState::NONE).unwrap();
    let a2 = tree.add_child(a, "a2", NodeState::NONE).unwrap();
    let b = tree.add_child(root, "b", NodeState::NONE).unwrap();
    let roots = tree.roots().to_vec();
    refresh_sibling_flags(&mut tree, &roots);
    (tree, [root, a, a1, a2, b])
}

#[test]
fn test_single_line_symbols() {
    let (tree, [root, a, a1, a2, b]) = fixture();
    let symbols = Symbols::normal();

    assert_eq!(single_line_symbols(&tree, root, &symbols), "└─");
    assert_eq!(single_line_symbols(&tree, a, &symbols), "  ├─");
    assert_eq!(single_line_symbols(&tree, a1, &symbols), "  │ ├─");
    assert_eq!(single_line_symbols(&tree, a2, &symbols), "  │ └─");
    assert_eq!(single_line_symbols(&tree, b, &symbols), "  └─");
}

#[test]
fn test_multiple_roots() {
    let mut tree = Tree::new();
    let first = tree.add_root("first", NodeState::NONE);
    let child = tree.add_child(first, "child", NodeState::NONE).unwrap();
    let second = tree.add_root("second", NodeState::NONE);
    let roots = tree.roots().to_vec();
    refresh_sibling_flags(&mut tree, &roots);

    let symbols = Symbols::normal();
    assert_eq!(single_line_symbols(&tree, first, &symbols), "├─");
    assert_eq!(single_line_symbols(&tree, child, &symbols), "│ └─");
    assert_eq!(single_line_symbols(&tree, second, &symbols), "└─");
}

#[test]
fn test_padding_rules() {
    let (tree, [_, _, a1, _, b]) = fixture();

    // Past the node's own column.
    assert!(has_padding_at_pos(&tree, b, 2, 1));
    // The node's own column.
    assert!(!has_padding_at_pos(&tree, a1, 2, 2));
    // Column of `a`, which has `b` below it.
    assert!(!has_padding_at_pos(&tree, a1, 1, 2));
    // Column of `root`, the last root.
    assert!(has_padding_at_pos(&tree, a1, 0, 2));
    // Walking more hops than there are ancestors.
    assert!(has_padding_at_pos(&tree, b, 0, 5));
}

#[test]
fn test_symbol_for_pos() {
    let (tree, [_, _, a1, a2, _]) = fixture();
    let symbols = Symbols::ascii();

    assert_eq!(symbol_for_pos(&tree, a1, &symbols, 0, 2), "  ");
    assert_eq!(symbol_for_pos(&tree, a1, &symbols, 1, 2), "| ");
    assert_eq!(symbol_for_pos(&tree, a1, &symbols, 2, 2), "|-");
    assert_eq!(symbol_for_pos(&tree, a2, &symbols, 2, 2), "`-");
}

#[test]
fn test_symbols_follow_hidden_sibling() {
    let (mut tree, [root, _, a1, _, b]) = fixture();
    tree.insert_state(b, NodeState::HIDDEN);
    refresh_sibling_flags(&mut tree, &[root]);

    // `a` is now the last child, so its column no longer continues.
    assert_eq!(single_line_symbols(&tree, a1, &Symbols::normal()), "    ├─");
}

#[test]
fn test_rendering_is_stable() {
    let (tree, ids) = fixture();
    let symbols = Symbols::rounded();
    for id in ids {
        assert_eq!(
            single_line_symbols(&tree, id, &symbols),
            single_line_symbols(&tree, id, &symbols)
        );
    }
}

#[test]
fn test_multi_line_symbols() {
    let (tree, [_, _, a1, a2, _]) = fixture();
    let symbols = Symbols::normal();

    assert_eq!(
        multi_line_symbols(&tree, a1, &symbols, 3),
        vec!["  │ ├─", "  │ │ ", "  │ │ "]
    );
    assert_eq!(
        multi_line_symbols(&tree, a2, &symbols, 3),
        vec!["  │ ├─", "  │ │ ", "  │ └─"]
    );
    assert_eq!(
        multi_line_symbols(&tree, a2, &symbols, 1),
        vec![single_line_symbols(&tree, a2, &symbols)]
    );
}

#[test]
fn test_symbol_set_names() {
    assert_eq!("thick".parse::<SymbolSet>(), Ok(SymbolSet::Thick));
    assert_eq!("EDGE".parse::<SymbolSet>(), Ok(SymbolSet::NormalEdge));
    assert_eq!("".parse::<SymbolSet>(), Ok(SymbolSet::Normal));
    assert_eq!(
        "bogus".parse::<SymbolSet>(),
        Err(Error::UnknownSymbolSet("bogus".to_string()))
    );

    for set in SymbolSet::ALL {
        assert_eq!(set.to_string().parse::<SymbolSet>(), Ok(set));
    }
}

#[test]
fn test_presets_have_aligned_columns() {
    use treeish::text::display_width;

    for set in SymbolSet::ALL {
        let s = set.symbols();
        let width = display_width(&s.padding);
        assert_eq!(display_width(&s.connector), width, "{set}");
        assert_eq!(display_width(&s.starter), width, "{set}");
        assert_eq!(display_width(&s.terminator), width, "{set}");
    }
}
