pub mod corpus;
pub mod sink;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sift_rank::{Providers, RankService};

#[derive(Debug, Parser)]
#[command(
	version = sift_cli::VERSION,
	rename_all = "kebab",
	styles = sift_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Directory of plain-text documents; pages are separated by form
	/// feed characters, as emitted by pdftotext.
	#[arg(long, short = 'd', value_name = "DIR", default_value = "documents")]
	pub documents: PathBuf,
	#[arg(long, value_name = "DIR", default_value = "output")]
	pub output: PathBuf,
	/// Who the shortlist is for, e.g. "Investment Analyst".
	#[arg(long, short = 'p')]
	pub persona: String,
	/// What they are trying to get done.
	#[arg(long, short = 'j')]
	pub job: String,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = sift_config::load(&args.config)?;

	init_tracing(&cfg);

	let documents = corpus::scan_documents(&args.documents);

	if documents.is_empty() {
		tracing::warn!(path = %args.documents.display(), "No documents found; nothing to rank.");

		return Ok(());
	}

	let service = RankService::new(cfg, Providers::default());
	let Some(output) = service.rank(&args.persona, &args.job, &documents).await? else {
		return Ok(());
	};

	sink::write_output(&args.output, &output);

	Ok(())
}

fn init_tracing(cfg: &sift_config::Config) {
	let filter =
		EnvFilter::try_new(&cfg.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
