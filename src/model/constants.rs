//! Configuration constants and default values.
//!
//! This module contains all application constants including file locations,
//! config defaults, floating widget geometry and the first-run sample data.

// === Locations ===

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "HAL_BROWSER_HOME";

/// Config file name, relative to the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Repository root directory name, relative to the data directory.
pub const FUNCTIONS_DIR_NAME: &str = "hal_functions";

/// Floating widget image, relative to the data directory.
pub const ICON_FILE_NAME: &str = "icon.png";

/// Extension of category files (without the dot).
pub const CATEGORY_EXTENSION: &str = "json";

// === Config Defaults ===

/// Floating widget enabled on first run.
pub const DEFAULT_ENABLE_FLOATING: bool = true;

/// Wire value of `HotkeyMode::ExternalClickHides`.
pub const HOTKEY_MODE_EXTERNAL_CLICK: u8 = 0;

/// Wire value of `HotkeyMode::HotkeyTogglesHides`.
pub const HOTKEY_MODE_HOTKEY_TOGGLE: u8 = 1;

// === Main Window ===

/// Main window title.
pub const APP_TITLE: &str = "HAL Function Browser";

/// Initial main window size (width, height).
pub const MAIN_WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];

/// Minimum main window size (width, height).
pub const MAIN_WINDOW_MIN_SIZE: [f32; 2] = [800.0, 600.0];

/// Default width of the tree panel.
pub const TREE_PANEL_WIDTH: f32 = 400.0;

// === Floating Widget ===

/// Side length of the square floating widget, in pixels.
pub const FLOATING_SIZE: u32 = 100;

/// Distance from the bottom-right monitor corner to the widget origin.
pub const FLOATING_MARGIN: f32 = 120.0;

/// Fallback circle colour (R, G, B) when no icon image is available.
pub const FLOATING_FALLBACK_COLOR: (u8, u8, u8) = (66, 133, 244);

/// Polling interval while the main window is hidden, in milliseconds.
///
/// The floating widget is an immediate viewport drawn from the root
/// window's `update`, so the hidden root keeps repainting at this rate.
pub const HIDDEN_POLL_MS: u64 = 200;

// === Sample Data ===

/// MCU seeded with an example category on first run.
pub const SAMPLE_MCU: &str = "stm32";

/// Category seeded under `SAMPLE_MCU`.
pub const SAMPLE_CATEGORY: &str = "GPIO";

/// Empty MCU seeded on first run.
pub const SAMPLE_EMPTY_MCU: &str = "py32";

/// Example entries written to `SAMPLE_MCU/SAMPLE_CATEGORY`.
pub const SAMPLE_FUNCTIONS: [(&str, &str); 2] = [
    (
        "HAL_GPIO_Init(GPIO_TypeDef  *GPIOx, GPIO_InitTypeDef *GPIO_Init)",
        "/**\n  * @brief: GPIO initialisation\n  * @usage: HAL_GPIO_Init(GPIOA, GPIO_PIN_9)\n  */",
    ),
    (
        "HAL_GPIO_WritePin(GPIO_TypeDef* GPIOx, uint16_t GPIO_Pin, GPIO_PinState PinState)",
        "/**\n  * @brief: write a GPIO pin state\n  * @usage: HAL_GPIO_WritePin(GPIOF, GPIO_PIN_9, GPIO_PIN_RESET)\n  * @note: third argument is GPIO_PIN_RESET or GPIO_PIN_SET\n  */",
    ),
];
