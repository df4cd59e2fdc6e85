use std::fs;

use hal_browser::model::constants::{SAMPLE_CATEGORY, SAMPLE_EMPTY_MCU, SAMPLE_MCU};
use hal_browser::storage::RepositoryError;
use hal_browser::{FunctionMap, FunctionRepository};
use tempfile::TempDir;

fn repo() -> (TempDir, FunctionRepository) {
    let dir = TempDir::new().unwrap();
    let repo = FunctionRepository::open(dir.path().join("hal_functions")).unwrap();
    (dir, repo)
}

fn map(entries: &[(&str, &str)]) -> FunctionMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn open_creates_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("hal_functions");
    let repo = FunctionRepository::open(&root).unwrap();
    assert!(root.is_dir());
    assert!(repo.list_mcus().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, repo) = repo();
    let functions = map(&[
        ("HAL_GPIO_WritePin(GPIOx, Pin, State)", "Sets a pin.\nUse GPIO_PIN_SET."),
        ("HAL_Delay(uint32_t ms)", "Blocking delay"),
    ]);

    repo.save_functions("stm32", "GPIO", &functions).unwrap();

    assert_eq!(repo.load_functions("stm32", "GPIO"), functions);
}

#[test]
fn insertion_order_and_non_ascii_survive() {
    let (_dir, repo) = repo();
    let functions = map(&[("z_first()", "第一"), ("a_second()", "zweite ü")]);

    repo.save_functions("py32", "时钟", &functions).unwrap();

    let loaded = repo.load_functions("py32", "时钟");
    let keys: Vec<_> = loaded.keys().cloned().collect();
    assert_eq!(keys, ["z_first()", "a_second()"]);
    assert_eq!(loaded["z_first()"], "第一");

    let raw = fs::read_to_string(repo.root().join("py32").join("时钟.json")).unwrap();
    assert!(raw.contains("第一"));
    assert!(raw.contains("\n    \""));
}

#[test]
fn add_function_is_idempotent() {
    let (_dir, repo) = repo();
    repo.create_category("stm32", "UART", &FunctionMap::new()).unwrap();

    repo.add_function("stm32", "UART", "HAL_UART_Transmit()", "send").unwrap();
    let once = repo.load_functions("stm32", "UART");
    repo.add_function("stm32", "UART", "HAL_UART_Transmit()", "send").unwrap();
    let twice = repo.load_functions("stm32", "UART");

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn add_function_replaces_detail() {
    let (_dir, repo) = repo();
    repo.add_function("stm32", "UART", "f()", "old").unwrap();
    repo.add_function("stm32", "UART", "  f()  ", "new").unwrap();

    assert_eq!(repo.load_functions("stm32", "UART"), map(&[("f()", "new")]));
}

#[test]
fn add_function_rejects_blank_signature() {
    let (_dir, repo) = repo();
    let err = repo.add_function("stm32", "UART", "   ", "x").unwrap_err();
    assert!(err.is_validation());
    assert!(repo.list_categories("stm32").is_empty());
}

#[test]
fn add_function_refuses_corrupt_category() {
    let (_dir, repo) = repo();
    let path = repo.root().join("stm32").join("GPIO.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let err = repo.add_function("stm32", "GPIO", "f()", "x").unwrap_err();

    assert!(matches!(err, RepositoryError::CategoryCorrupt { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn create_mcu_rejects_blank_and_leaves_listing_unchanged() {
    let (_dir, repo) = repo();
    repo.create_mcu("stm32").unwrap();
    let before = repo.list_mcus();

    for name in ["", "   ", "\t"] {
        assert!(repo.create_mcu(name).unwrap_err().is_validation());
    }

    assert_eq!(repo.list_mcus(), before);
}

#[test]
fn create_mcu_reports_existing() {
    let (_dir, repo) = repo();
    assert!(repo.create_mcu(" stm32 ").unwrap());
    assert!(!repo.create_mcu("stm32").unwrap());
    assert_eq!(repo.list_mcus(), ["stm32"]);
}

#[test]
fn create_category_rejects_path_names() {
    let (_dir, repo) = repo();
    assert!(repo
        .create_category("stm32", "../escape", &FunctionMap::new())
        .unwrap_err()
        .is_validation());
    assert!(repo
        .create_category("..", "GPIO", &FunctionMap::new())
        .unwrap_err()
        .is_validation());
    assert!(repo.list_mcus().is_empty());
}

#[test]
fn create_category_overwrites_existing() {
    let (_dir, repo) = repo();
    repo.add_function("stm32", "GPIO", "f()", "x").unwrap();

    repo.create_category("stm32", "GPIO", &FunctionMap::new()).unwrap();

    assert!(repo.load_functions("stm32", "GPIO").is_empty());
}

#[test]
fn invalid_category_json_loads_as_empty() {
    let (_dir, repo) = repo();
    let dir = repo.root().join("stm32");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("GPIO.json"), "[1, 2, 3]").unwrap();
    fs::write(dir.join("ADC.json"), "{\"k\": 5}").unwrap();

    assert!(repo.load_functions("stm32", "GPIO").is_empty());
    assert!(repo.load_functions("stm32", "ADC").is_empty());
    assert!(matches!(
        repo.load_functions_checked("stm32", "GPIO"),
        Err(RepositoryError::CategoryCorrupt { .. })
    ));
}

#[test]
fn missing_category_loads_as_empty() {
    let (_dir, repo) = repo();
    assert!(repo.load_functions("stm32", "NOPE").is_empty());
    assert!(repo.load_functions_checked("stm32", "NOPE").unwrap().is_empty());
}

#[test]
fn list_categories_of_missing_mcu_is_empty() {
    let (_dir, repo) = repo();
    assert!(repo.list_categories("does_not_exist").is_empty());
}

#[test]
fn list_categories_only_returns_json_files() {
    let (_dir, repo) = repo();
    repo.create_category("stm32", "GPIO", &FunctionMap::new()).unwrap();
    let dir = repo.root().join("stm32");
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::create_dir_all(dir.join("sub.json")).unwrap();

    assert_eq!(repo.list_categories("stm32"), ["GPIO"]);
}

#[test]
fn list_mcus_skips_plain_files() {
    let (_dir, repo) = repo();
    repo.create_mcu("stm32").unwrap();
    fs::write(repo.root().join("README"), "x").unwrap();

    assert_eq!(repo.list_mcus(), ["stm32"]);
}

#[test]
fn seed_defaults_creates_sample_tree() {
    let (_dir, repo) = repo();
    repo.seed_defaults().unwrap();

    let mut mcus = repo.list_mcus();
    mcus.sort();
    let mut expected = vec![SAMPLE_EMPTY_MCU.to_string(), SAMPLE_MCU.to_string()];
    expected.sort();
    assert_eq!(mcus, expected);
    assert_eq!(repo.list_categories(SAMPLE_MCU), [SAMPLE_CATEGORY]);
    assert_eq!(repo.load_functions(SAMPLE_MCU, SAMPLE_CATEGORY).len(), 2);
    assert!(repo.list_categories(SAMPLE_EMPTY_MCU).is_empty());
}

#[test]
fn seed_defaults_keeps_existing_sample() {
    let (_dir, repo) = repo();
    repo.create_category(SAMPLE_MCU, SAMPLE_CATEGORY, &map(&[("mine()", "kept")]))
        .unwrap();

    repo.seed_defaults().unwrap();

    assert_eq!(
        repo.load_functions(SAMPLE_MCU, SAMPLE_CATEGORY),
        map(&[("mine()", "kept")])
    );
}
