use std::{env, time::Duration};

use anyhow::Result;
use tracing::debug;

use super::ScanSummary;
use crate::cli::{args::ScanCommand, exit_status::ExitStatus, report};
use crate::config::{ConfigLoadResult, load_config};
use crate::core::{HttpFetcher, fetch::page_url};
use crate::session::run_session;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ConfigLoadResult { config, from_file } = load_config(&env::current_dir()?)?;
    debug!(from_file, "configuration loaded");

    let mut options = config.scan_options()?;
    if !cmd.kinds.is_empty() {
        options.kinds = cmd.kinds.clone();
    }
    if cmd.no_external {
        options.fetch_external = false;
    }
    let settle_delay = Duration::from_millis(cmd.settle_delay.unwrap_or(config.settle_delay_ms));

    let url = page_url(&cmd.page)?;
    let fetcher = HttpFetcher::new(&config.user_agent)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session = runtime.block_on(run_session(&url, fetcher, options, settle_delay))?;

    let summary = ScanSummary {
        page: cmd.page,
        badge: session.badge,
        view: session.view,
    };
    report::print_scan(&summary, cmd.format)?;

    Ok(ExitStatus::found(!summary.view.is_empty()))
}
