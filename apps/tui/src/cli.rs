use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "echocart", version, about = "EcoCart sustainability dashboard")]
pub struct CliArgs {
    /// Print the catalog report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the product data file
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override the assistant host URL
    #[arg(long = "assistant-host", value_name = "URL")]
    pub assistant_host: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("PRODUCTS_CSV", data);
        }
        if let Some(host) = &self.assistant_host {
            std::env::set_var("ASSISTANT_HOST", host);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
