//! Create-MCU, create-category and add-function dialogs.
//!
//! Each dialog keeps its own form state; `submit` performs the repository
//! call and returns the message to show, so the logic can be tested
//! without a window.

use eframe::egui;

use crate::storage::{FunctionMap, FunctionRepository, RepositoryError};
use crate::validate_name;

/// What the user did with a dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Open,
    Confirmed,
    Cancelled,
}

/// Shared modal frame with OK/Cancel buttons.
fn modal(
    ctx: &egui::Context,
    title: &str,
    can_confirm: bool,
    body: impl FnOnce(&mut egui::Ui),
) -> DialogResult {
    let mut result = DialogResult::Open;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            body(ui);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(can_confirm, egui::Button::new("OK")).clicked() {
                    result = DialogResult::Confirmed;
                }
                if ui.button("Cancel").clicked() {
                    result = DialogResult::Cancelled;
                }
            });
        });
    result
}

fn combo(ui: &mut egui::Ui, label: &str, selected: &mut String, options: &[String]) -> bool {
    let before = selected.clone();
    egui::ComboBox::from_label(label)
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(selected, option.clone(), option.as_str());
            }
        });
    *selected != before
}

// ===================== New MCU =====================

#[derive(Debug, Default)]
pub struct NewMcuDialog {
    pub name: String,
}

impl NewMcuDialog {
    pub fn show(&mut self, ctx: &egui::Context) -> DialogResult {
        let valid = validate_name(&self.name).is_ok();
        modal(ctx, "New MCU", valid, |ui| {
            ui.label("MCU name:");
            ui.text_edit_singleline(&mut self.name);
        })
    }

    /// Create the MCU folder. Returns the confirmation text.
    pub fn submit(&self, repo: &FunctionRepository) -> Result<String, RepositoryError> {
        let name = self.name.trim();
        if repo.create_mcu(name)? {
            Ok(format!("Created MCU folder: {name}"))
        } else {
            Ok(format!("MCU {name} already exists"))
        }
    }
}

// ===================== New Category =====================

#[derive(Debug)]
pub struct NewCategoryDialog {
    mcus: Vec<String>,
    pub mcu: String,
    pub name: String,
}

impl NewCategoryDialog {
    /// Needs at least one MCU to attach the category to.
    pub fn new(mcus: Vec<String>, preselect: Option<&str>) -> Option<Self> {
        let mcu = preselect
            .filter(|p| mcus.iter().any(|m| m == p))
            .map(str::to_string)
            .or_else(|| mcus.first().cloned())?;
        Some(Self {
            mcus,
            mcu,
            name: String::new(),
        })
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResult {
        let valid = validate_name(&self.name).is_ok();
        modal(ctx, "New category", valid, |ui| {
            combo(ui, "MCU", &mut self.mcu, &self.mcus);
            ui.label("Category name:");
            ui.text_edit_singleline(&mut self.name);
        })
    }

    /// Create an empty category file, overwriting an existing one.
    pub fn submit(&self, repo: &FunctionRepository) -> Result<String, RepositoryError> {
        let name = self.name.trim();
        repo.create_category(&self.mcu, name, &FunctionMap::new())?;
        Ok(format!("Created category file: {}/{name}.json", self.mcu))
    }
}

// ===================== Add Function =====================

#[derive(Debug)]
pub struct AddFunctionDialog {
    mcus: Vec<String>,
    categories: Vec<String>,
    pub mcu: String,
    pub category: String,
    pub name: String,
    pub detail: String,
}

impl AddFunctionDialog {
    /// Needs at least one MCU; categories are listed for the chosen MCU.
    pub fn new(
        repo: &FunctionRepository,
        mcus: Vec<String>,
        preselect: Option<(&str, Option<&str>)>,
    ) -> Option<Self> {
        let (pre_mcu, pre_category) = preselect.unzip();
        let mcu = pre_mcu
            .filter(|p| mcus.iter().any(|m| m == p))
            .map(str::to_string)
            .or_else(|| mcus.first().cloned())?;

        let mut dialog = Self {
            mcus,
            categories: Vec::new(),
            mcu,
            category: String::new(),
            name: String::new(),
            detail: String::new(),
        };
        dialog.reload_categories(repo);
        if let Some(category) = pre_category.flatten() {
            if dialog.categories.iter().any(|c| c == category) {
                dialog.category = category.to_string();
            }
        }
        Some(dialog)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn reload_categories(&mut self, repo: &FunctionRepository) {
        self.categories = repo.list_categories(&self.mcu);
        self.category = self.categories.first().cloned().unwrap_or_default();
    }

    pub fn show(&mut self, ctx: &egui::Context, repo: &FunctionRepository) -> DialogResult {
        let valid = !self.category.is_empty() && !self.name.trim().is_empty();
        let mut mcu_changed = false;
        let result = modal(ctx, "Add function", valid, |ui| {
            mcu_changed = combo(ui, "MCU", &mut self.mcu, &self.mcus);
            if self.categories.is_empty() {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "This MCU has no categories yet. Create one first.",
                );
            } else {
                combo(ui, "Category", &mut self.category, &self.categories);
            }
            ui.label("Function name:");
            ui.text_edit_singleline(&mut self.name);
            ui.label("Details:");
            ui.add(
                egui::TextEdit::multiline(&mut self.detail)
                    .code_editor()
                    .desired_rows(8)
                    .desired_width(420.0),
            );
        });
        if mcu_changed {
            self.reload_categories(repo);
        }
        result
    }

    /// Insert or replace the entry.
    pub fn submit(&self, repo: &FunctionRepository) -> Result<String, RepositoryError> {
        repo.add_function(&self.mcu, &self.category, &self.name, &self.detail)?;
        Ok(format!("Added function to: {}/{}.json", self.mcu, self.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_sample() -> (tempfile::TempDir, FunctionRepository) {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = FunctionRepository::open(dir.path().join("hal_functions")).unwrap();
        repo.seed_defaults().unwrap();
        (dir, repo)
    }

    #[test]
    fn new_mcu_reports_existing_folder() {
        let (_dir, repo) = repo_with_sample();
        let dialog = NewMcuDialog {
            name: " stm32 ".to_string(),
        };
        assert_eq!(dialog.submit(&repo).unwrap(), "MCU stm32 already exists");
    }

    #[test]
    fn new_mcu_creates_folder() {
        let (_dir, repo) = repo_with_sample();
        let dialog = NewMcuDialog {
            name: "esp32".to_string(),
        };
        assert_eq!(dialog.submit(&repo).unwrap(), "Created MCU folder: esp32");
        assert!(repo.list_mcus().contains(&"esp32".to_string()));
    }

    #[test]
    fn new_category_needs_an_mcu() {
        assert!(NewCategoryDialog::new(Vec::new(), None).is_none());
    }

    #[test]
    fn new_category_honours_valid_preselection_only() {
        let mcus = vec!["stm32".to_string(), "py32".to_string()];
        let dialog = NewCategoryDialog::new(mcus.clone(), Some("py32")).unwrap();
        assert_eq!(dialog.mcu, "py32");
        let dialog = NewCategoryDialog::new(mcus, Some("avr")).unwrap();
        assert_eq!(dialog.mcu, "stm32");
    }

    #[test]
    fn new_category_creates_empty_file() {
        let (_dir, repo) = repo_with_sample();
        let mut dialog = NewCategoryDialog::new(repo.list_mcus(), Some("py32")).unwrap();
        dialog.name = "ADC".to_string();

        dialog.submit(&repo).unwrap();

        assert_eq!(repo.list_categories("py32"), vec!["ADC"]);
        assert!(repo.load_functions("py32", "ADC").is_empty());
    }

    #[test]
    fn add_function_lists_categories_of_chosen_mcu() {
        let (_dir, repo) = repo_with_sample();
        let dialog = AddFunctionDialog::new(&repo, repo.list_mcus(), Some(("stm32", None))).unwrap();
        assert_eq!(dialog.categories(), ["GPIO".to_string()]);
        assert_eq!(dialog.category, "GPIO");

        let dialog = AddFunctionDialog::new(&repo, repo.list_mcus(), Some(("py32", None))).unwrap();
        assert!(dialog.categories().is_empty());
        assert!(dialog.category.is_empty());
    }

    #[test]
    fn add_function_writes_entry() {
        let (_dir, repo) = repo_with_sample();
        let mut dialog =
            AddFunctionDialog::new(&repo, repo.list_mcus(), Some(("stm32", Some("GPIO")))).unwrap();
        dialog.name = "HAL_GPIO_TogglePin(GPIO_TypeDef* GPIOx, uint16_t GPIO_Pin)".to_string();
        dialog.detail = "toggle".to_string();

        dialog.submit(&repo).unwrap();

        let functions = repo.load_functions("stm32", "GPIO");
        assert_eq!(functions.len(), 3);
        assert_eq!(
            functions["HAL_GPIO_TogglePin(GPIO_TypeDef* GPIOx, uint16_t GPIO_Pin)"],
            "toggle"
        );
    }

    #[test]
    fn add_function_rejects_blank_name() {
        let (_dir, repo) = repo_with_sample();
        let mut dialog =
            AddFunctionDialog::new(&repo, repo.list_mcus(), Some(("stm32", Some("GPIO")))).unwrap();
        dialog.name = "   ".to_string();

        assert!(dialog.submit(&repo).unwrap_err().is_validation());
    }
}
