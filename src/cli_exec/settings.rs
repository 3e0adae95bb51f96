use pickdong::config::{normalize_base_url, read_config, write_config};

use super::*;

pub(super) fn handle_config_command(config: &ClientConfig, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                print_json(
                    &serde_json::json!({
                        "api_base_url": config.api_base_url,
                        "data_dir": config.data_dir,
                    }),
                    "config",
                )?;
            } else {
                println!("api_base_url: {}", config.api_base_url);
                println!("data_dir: {}", config.data_dir.display());
            }
        }
        ConfigCommands::SetUrl { url } => {
            let url = normalize_base_url(&url);
            reqwest::Url::parse(&url).with_context(|| format!("invalid url: {}", url))?;
            let mut file = read_config(&config.data_dir)?;
            file.api_base_url = Some(url.clone());
            write_config(&config.data_dir, &file)?;
            println!("api_base_url set to {}", url);
        }
    }
    Ok(())
}
