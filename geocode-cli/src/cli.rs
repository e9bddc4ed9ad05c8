use anyhow::Context;
use clap::Parser;
use geocode_core::{Config, Resolution, Resolver, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "geocode",
    version,
    about = "Get geolocation coordinates for US cities or zip codes."
)]
pub struct Cli {
    /// Locations to resolve, e.g. 'Madison, WI' '12345'.
    #[arg(required = true, num_args = 1..)]
    pub locations: Vec<String>,

    /// Print one JSON object per result instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Override the geocoding API base URL.
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?.apply_env(|key| std::env::var(key).ok());
        if let Some(url) = self.base_url {
            config.base_url = url;
        }

        let provider = provider_from_config(&config)?;
        let resolver = Resolver::from_boxed(provider);

        let results = geocode_core::process(&resolver, self.locations.as_slice()).await;

        for res in &results {
            println!("{}", render(res, self.json)?);
        }

        Ok(())
    }
}

fn render(res: &Resolution, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string(res).context("Failed to serialize result as JSON")
    } else {
        Ok(res.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use geocode_core::LookupError;

    #[test]
    fn requires_at_least_one_location() {
        let err = Cli::try_parse_from(["geocode"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn collects_positional_locations_in_order() {
        let cli = Cli::try_parse_from(["geocode", "Madison, WI", "12345", "--json"]).unwrap();
        assert_eq!(cli.locations, vec!["Madison, WI", "12345"]);
        assert!(cli.json);
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn base_url_override() {
        let cli =
            Cli::try_parse_from(["geocode", "--base-url", "http://localhost:9000", "53703"])
                .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn render_plain_and_json() {
        let res = Resolution::failed("Invalid@123", LookupError::InvalidFormat);

        assert_eq!(
            render(&res, false).unwrap(),
            "location: Invalid@123, error: Invalid location format or Invalid Characters."
        );

        let line = render(&res, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"]["kind"], "invalid_format");
    }
}
