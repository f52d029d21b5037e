//! `config` subcommands handler

use anyhow::Result;

use smartchunk_demo::tui::Theme;
use smartchunk_demo::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::from_name(&config.theme);
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR (defaults to 'vi'); creates the file with defaults first if
/// it does not exist yet.
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = Theme::from_name(&Config::load()?.theme);

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
