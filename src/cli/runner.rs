//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::LinkedInClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::resources::{
    PostsByOwner, SearchAdAccounts, SearchAdCampaignGroups, SearchAdCampaigns, SearchAdCreatives,
};
use serde::Serialize;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Configuration from `-C` (defaults otherwise) with env overrides applied
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                ClientConfig::load(path)?
            }
            None => ClientConfig::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = LinkedInClient::new(self.load_config()?)?;
        let output = self.execute(&client).await?;
        println!("{output}");
        Ok(())
    }

    /// Run the command against `client` and render its result
    pub async fn execute(&self, client: &LinkedInClient) -> Result<String> {
        match &self.cli.command {
            Commands::Accounts {
                status,
                name,
                id,
                test,
                page_token,
            } => {
                let search = SearchAdAccounts {
                    status: status.clone(),
                    name: name.clone(),
                    id: id.clone(),
                    test: *test,
                    page_token: page_token.clone(),
                    ..Default::default()
                };
                self.render(&client.search_ad_accounts(&search).await?)
            }
            Commands::CampaignGroups {
                account,
                status,
                id,
            } => {
                let search = SearchAdCampaignGroups {
                    status: status.clone(),
                    id: id.clone(),
                    ..Default::default()
                };
                self.render(&client.search_ad_campaign_groups(*account, &search).await?)
            }
            Commands::Campaigns {
                account,
                campaign_group,
                status,
                campaign_type,
            } => {
                let search = SearchAdCampaigns {
                    campaign_group: campaign_group.clone(),
                    status: status.clone(),
                    campaign_type: campaign_type.clone(),
                    ..Default::default()
                };
                self.render(&client.search_ad_campaigns(*account, &search).await?)
            }
            Commands::Creatives {
                account,
                campaign,
                intended_status,
                sort_order,
            } => {
                let search = SearchAdCreatives {
                    campaigns: campaign.clone(),
                    intended_statuses: intended_status.clone(),
                    sort_order: sort_order.clone(),
                    ..Default::default()
                };
                self.render(&client.search_ad_creatives(*account, &search).await?)
            }
            Commands::Posts {
                organization,
                created_after,
                created_before,
                published_after,
                published_before,
            } => {
                let owner = PostsByOwner {
                    created_start: *created_after,
                    created_end: *created_before,
                    published_start: *published_after,
                    published_end: *published_before,
                    ..PostsByOwner::new(*organization)
                };
                self.render(&client.posts_by_owner(&owner).await?)
            }
            Commands::Post { urns } => self.render(&client.posts(urns.iter().cloned()).await?),
            Commands::PageStats { organization } => {
                self.render(&client.lifetime_page_stats(*organization).await?)
            }
            Commands::FollowerStats {
                organization,
                start,
                end,
            } => match (start, end) {
                (Some(start), Some(end)) => self.render(
                    &client
                        .follower_stats_timebound(*organization, *start, *end)
                        .await?,
                ),
                _ => self.render(&client.lifetime_follower_stats(*organization).await?),
            },
            Commands::ShareStats {
                organization,
                share,
            } => self.render(&client.share_stats_lifetime(*organization, share).await?),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}
