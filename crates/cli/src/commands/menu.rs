//! `menu` command - print the menu with resolved images.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use emerald_table_session::config::AppConfig;
use emerald_table_session::error::AppError;
use emerald_table_session::images::ImageCatalog;
use emerald_table_session::menu::MenuCatalog;

/// Print every menu item with its price and resolved image.
///
/// The menu comes from, in order of precedence: the `--menu-file` argument,
/// the `EMERALD_MENU_FILE` configuration, or the built-in sample.
pub fn print(menu_file: Option<PathBuf>) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let menu = match menu_file.or_else(|| config.menu_file.clone()) {
        Some(path) => MenuCatalog::from_json_file(&path)?,
        None => MenuCatalog::sample(),
    };
    let images = ImageCatalog::default();

    println!("{} - {} items", config.restaurant_name, menu.len());
    println!();

    for item in menu.items() {
        let marker = if item.featured { " [featured]" } else { "" };
        println!(
            "  {:<14} {:>8}  {}{marker}",
            item.id,
            item.price.display(config.currency),
            item.name
        );
        println!("  {:<14} {:>8}  image: {}", "", "", images.for_item(item));
    }

    Ok(())
}
