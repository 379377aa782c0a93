//! Folder membership resolution.
//!
//! Folders do not own their children: membership is established by the child
//! pointing at the parent through `folderId`. Resolution builds the id index
//! externally and groups the list, treating an absent or dangling `folderId`
//! as "not in any folder".

use std::collections::HashMap;

use crate::model::{FolderState, ItemState};

/// One folder and the non-folder items filed under it, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderGroup<'a> {
    pub folder: &'a FolderState,
    pub children: Vec<&'a ItemState>,
}

/// The result of resolving `folderId` back-references over a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderMembership<'a> {
    /// Folders in list order, each with its children in list order.
    pub groups: Vec<FolderGroup<'a>>,
    /// Items with no `folderId`, or whose `folderId` does not resolve to a
    /// folder-typed item.
    pub unfiled: Vec<&'a ItemState>,
}

/// Group non-folder items by the folder they point at.
///
/// A `folderId` naming a missing id, or naming an item that is not a folder,
/// is dangling — not an error, the item is simply unfiled.
pub fn resolve_folders(list: &[ItemState]) -> FolderMembership<'_> {
    let mut groups: Vec<FolderGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for item in list {
        if let ItemState::Folder(folder) = item {
            index.insert(folder.id.as_str(), groups.len());
            groups.push(FolderGroup { folder, children: Vec::new() });
        }
    }

    let mut unfiled = Vec::new();
    for item in list {
        if item.is_folder() {
            continue;
        }
        match item.folder_id().and_then(|id| index.get(id)) {
            Some(&slot) => groups[slot].children.push(item),
            None => unfiled.push(item),
        }
    }

    FolderMembership { groups, unfiled }
}
