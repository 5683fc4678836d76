use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "My Portfolio".to_string());

    let config_path = path.join("folio.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;

    std::fs::write(&config_path, starter_config(&site_name))?;

    tracing::info!("Created new site at {:?}", path);
    tracing::info!("Run 'folio migrate' to set up the database");
    tracing::info!("Run 'folio serve' to start the server");

    Ok(())
}

fn starter_config(site_name: &str) -> String {
    let title = toml::Value::String(site_name.to_string());
    format!(
        r#"[site]
title = {title}

[server]
host = "127.0.0.1"
port = 3000
request_timeout_secs = 30
cors_origins = []

[database]
path = "./data/folio.db"
pool_size = 10

[api]
default_page_size = 10
max_page_size = 100
"#
    )
}
