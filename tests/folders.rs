//! Folder membership resolution over parsed documents.

use pretty_assertions::assert_eq;

use desmos_state::{parse_state, resolve_folders};

const TWO_FOLDERS: &str = r##"{
    "version": 8,
    "graph": { "viewport": { "xmin": -10.0, "ymin": -10.0, "xmax": 10.0, "ymax": 10.0 } },
    "expressions": { "list": [
        { "id": "f1", "type": "folder", "title": "curves" },
        { "id": "1", "type": "expression", "folderId": "f1", "color": "#000", "latex": "y=x" },
        { "id": "2", "type": "expression", "color": "#c74440", "latex": "y=2x" },
        { "id": "f2", "type": "folder", "title": "data", "collapsed": true },
        { "id": "3", "type": "table", "folderId": "f2", "columns": [] },
        { "id": "4", "type": "text", "folderId": "f1", "text": "late joiner" },
        { "id": "5", "type": "image", "folderId": "gone", "image_url": "u", "name": "n" }
    ] }
}"##;

#[test]
fn test_membership_groups_by_back_reference() {
    let state = parse_state(TWO_FOLDERS).unwrap();
    let membership = resolve_folders(&state.expressions.list);

    assert_eq!(membership.groups.len(), 2);
    assert_eq!(membership.groups[0].folder.title.as_deref(), Some("curves"));
    let curves: Vec<&str> = membership.groups[0].children.iter().map(|i| i.id()).collect();
    // children keep list order even when they appear after another folder
    assert_eq!(curves, ["1", "4"]);

    let data: Vec<&str> = membership.groups[1].children.iter().map(|i| i.id()).collect();
    assert_eq!(data, ["3"]);
}

#[test]
fn test_unfiled_covers_absent_and_dangling() {
    let state = parse_state(TWO_FOLDERS).unwrap();
    let membership = resolve_folders(&state.expressions.list);

    // "2" has no folderId; "5" points at an id that does not exist —
    // a dangling reference is not a structural violation, just unfiled
    let unfiled: Vec<&str> = membership.unfiled.iter().map(|i| i.id()).collect();
    assert_eq!(unfiled, ["2", "5"]);
}

#[test]
fn test_folders_are_never_children() {
    let state = parse_state(TWO_FOLDERS).unwrap();
    let membership = resolve_folders(&state.expressions.list);

    let filed: usize = membership.groups.iter().map(|g| g.children.len()).sum();
    assert_eq!(filed + membership.unfiled.len() + membership.groups.len(), 7);
    for group in &membership.groups {
        assert!(group.children.iter().all(|c| !c.is_folder()));
    }
}
