use std::io::Write;

use anyhow::Result;
use clap::Parser;
use dygang_links::{get_download_links, PageFetcher, SitePolicy, BROWSER_USER_AGENT};
use serde::Serialize;

/// Print the thunder:// and magnet: links on a dygang.net page.
#[derive(Debug, Parser)]
#[command(name = "dygang-links")]
#[command(about = "Extract download links from a dygang.net page", long_about = None)]
#[command(override_usage = "dygang-links <网站地址>")]
#[command(after_help = "例如: dygang-links https://www.dygang.net/yx/20251206/58574.htm")]
pub struct Cli {
    /// Page URL (must contain dygang.net).
    #[arg(value_name = "网站地址")]
    pub url: String,

    /// Print a JSON object instead of plain lines.
    #[arg(long)]
    pub json: bool,

    /// User-Agent header sent with the request.
    #[arg(long, env = "DYGANG_LINKS_USER_AGENT", default_value = BROWSER_USER_AGENT)]
    pub user_agent: String,
}

/// JSON shape for `--json`.
#[derive(Debug, Serialize)]
pub struct LinkReport<'a> {
    pub url: &'a str,
    pub links: Vec<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = std::io::stdout();
        cli.run(&SitePolicy::dygang(), &mut stdout.lock())
    }

    pub fn run(&self, policy: &SitePolicy, out: &mut impl Write) -> Result<()> {
        // Checked before any network access.
        if !policy.is_supported(&self.url) {
            tracing::debug!(url = %self.url, "unsupported site");
            writeln!(
                out,
                "不支持的网站。目前仅支持 {}",
                policy.host_fragment()
            )?;
            return Ok(());
        }

        let fetcher = PageFetcher::with_user_agent(&self.user_agent);

        if self.json {
            let report = LinkReport {
                url: &self.url,
                links: get_download_links(&fetcher, &self.url),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "正在抓取 {} 的下载链接...", self.url)?;
        let links = get_download_links(&fetcher, &self.url);
        tracing::debug!(url = %self.url, count = links.len(), "extraction finished");

        if links.is_empty() {
            writeln!(out, "未找到下载链接")?;
        } else {
            writeln!(out, "找到的下载链接:")?;
            for link in &links {
                writeln!(out, "{}", link)?;
            }
        }

        Ok(())
    }
}
