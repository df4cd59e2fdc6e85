//! Catalog tree snapshot and selection items.
//!
//! The tree is rebuilt from disk on every refresh; nothing here is
//! authoritative once the repository changes.

use crate::storage::{FunctionRepository, RepositoryError};

/// A node the user can select or right-click in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeItem {
    /// Top-level microcontroller folder.
    Mcu(String),
    /// Category file under an MCU.
    Category { mcu: String, name: String },
    /// Function entry inside a category.
    Function {
        mcu: String,
        category: String,
        name: String,
    },
}

impl TreeItem {
    /// Text shown for the node.
    pub fn label(&self) -> &str {
        match self {
            TreeItem::Mcu(name) => name,
            TreeItem::Category { name, .. } => name,
            TreeItem::Function { name, .. } => name,
        }
    }

    /// MCU the node belongs to.
    pub fn mcu(&self) -> &str {
        match self {
            TreeItem::Mcu(name) => name,
            TreeItem::Category { mcu, .. } => mcu,
            TreeItem::Function { mcu, .. } => mcu,
        }
    }

    /// Function signature, if this is a function node.
    pub fn signature(&self) -> Option<&str> {
        match self {
            TreeItem::Function { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// One category with its function names in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub name: String,
    pub functions: Vec<String>,
}

/// One MCU with its categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McuNode {
    pub name: String,
    pub categories: Vec<CategoryNode>,
}

/// Full tree snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTree {
    pub mcus: Vec<McuNode>,
    /// Corrupt category files found during the reload.
    pub warnings: Vec<String>,
}

impl CatalogTree {
    /// Rebuild the whole tree from the repository.
    ///
    /// Corrupt categories are shown empty and reported in `warnings`.
    pub fn load(repo: &FunctionRepository) -> Self {
        let mut warnings = Vec::new();
        let mcus = repo
            .list_mcus()
            .into_iter()
            .map(|mcu| {
                let categories = repo
                    .list_categories(&mcu)
                    .into_iter()
                    .map(|name| {
                        let functions = match repo.load_functions_checked(&mcu, &name) {
                            Ok(functions) => functions.into_keys().collect(),
                            Err(e) => {
                                warnings.push(e.to_string());
                                Vec::new()
                            }
                        };
                        CategoryNode { name, functions }
                    })
                    .collect();
                McuNode {
                    name: mcu,
                    categories,
                }
            })
            .collect();

        Self { mcus, warnings }
    }

    /// MCU names in display order.
    pub fn mcu_names(&self) -> Vec<String> {
        self.mcus.iter().map(|m| m.name.clone()).collect()
    }

    /// Total number of function entries.
    pub fn function_count(&self) -> usize {
        self.mcus
            .iter()
            .flat_map(|m| &m.categories)
            .map(|c| c.functions.len())
            .sum()
    }
}

/// Detail text for a selected item.
///
/// Only function nodes have a detail; everything else shows an empty pane.
pub fn load_detail(
    repo: &FunctionRepository,
    item: &TreeItem,
) -> Result<Option<String>, RepositoryError> {
    match item {
        TreeItem::Function {
            mcu,
            category,
            name,
        } => {
            let functions = repo.load_functions_checked(mcu, category)?;
            Ok(Some(functions.get(name).cloned().unwrap_or_default()))
        }
        TreeItem::Mcu(_) | TreeItem::Category { .. } => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_item() -> TreeItem {
        TreeItem::Function {
            mcu: "stm32".to_string(),
            category: "GPIO".to_string(),
            name: "HAL_GPIO_TogglePin()".to_string(),
        }
    }

    #[test]
    fn label_is_the_leaf_name() {
        assert_eq!(TreeItem::Mcu("stm32".to_string()).label(), "stm32");
        assert_eq!(
            TreeItem::Category {
                mcu: "stm32".to_string(),
                name: "GPIO".to_string()
            }
            .label(),
            "GPIO"
        );
        assert_eq!(function_item().label(), "HAL_GPIO_TogglePin()");
    }

    #[test]
    fn every_item_knows_its_mcu() {
        assert_eq!(function_item().mcu(), "stm32");
        assert_eq!(TreeItem::Mcu("py32".to_string()).mcu(), "py32");
    }

    #[test]
    fn only_functions_have_a_signature() {
        assert_eq!(function_item().signature(), Some("HAL_GPIO_TogglePin()"));
        assert_eq!(TreeItem::Mcu("stm32".to_string()).signature(), None);
    }

    #[test]
    fn function_count_sums_all_categories() {
        let tree = CatalogTree {
            mcus: vec![
                McuNode {
                    name: "stm32".to_string(),
                    categories: vec![
                        CategoryNode {
                            name: "GPIO".to_string(),
                            functions: vec!["a".to_string(), "b".to_string()],
                        },
                        CategoryNode {
                            name: "UART".to_string(),
                            functions: vec!["c".to_string()],
                        },
                    ],
                },
                McuNode {
                    name: "py32".to_string(),
                    categories: Vec::new(),
                },
            ],
            warnings: Vec::new(),
        };
        assert_eq!(tree.function_count(), 3);
        assert_eq!(tree.mcu_names(), vec!["stm32", "py32"]);
    }
}
