//! Catalog tree panel.
//!
//! MCUs and categories are collapsible headers; functions are selectable
//! rows with a right-click menu.

use eframe::egui;

use crate::model::{CatalogTree, TreeItem};

/// What the user asked for in the tree this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeAction {
    Select(TreeItem),
    CopySignature(String),
}

pub fn show_tree(
    ui: &mut egui::Ui,
    tree: &CatalogTree,
    selected: Option<&TreeItem>,
) -> Option<TreeAction> {
    let mut action = None;

    if tree.mcus.is_empty() {
        ui.weak("No MCUs yet.");
        return None;
    }

    for mcu in &tree.mcus {
        let mcu_item = TreeItem::Mcu(mcu.name.clone());
        let header = egui::CollapsingHeader::new(mcu.name.as_str())
            .id_salt(("mcu", &mcu.name))
            .show(ui, |ui| {
                for category in &mcu.categories {
                    let category_item = TreeItem::Category {
                        mcu: mcu.name.clone(),
                        name: category.name.clone(),
                    };
                    let header = egui::CollapsingHeader::new(category.name.as_str())
                        .id_salt(("category", &mcu.name, &category.name))
                        .show(ui, |ui| {
                            for function in &category.functions {
                                let item = TreeItem::Function {
                                    mcu: mcu.name.clone(),
                                    category: category.name.clone(),
                                    name: function.clone(),
                                };
                                let is_selected = selected == Some(&item);
                                let response = ui.selectable_label(
                                    is_selected,
                                    egui::RichText::new(function).monospace(),
                                );
                                if response.clicked() {
                                    action = Some(TreeAction::Select(item));
                                }
                                response.context_menu(|ui| {
                                    if ui.button("Copy function name").clicked() {
                                        action = Some(TreeAction::CopySignature(function.clone()));
                                    }
                                });
                            }
                        });
                    if header.header_response.clicked() {
                        action = Some(TreeAction::Select(category_item));
                    }
                }
            });
        if header.header_response.clicked() {
            action = Some(TreeAction::Select(mcu_item));
        }
    }

    action
}
