use anyhow::anyhow;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use observable_user::{Event, Host, UserRecord};
use tracing_subscriber::EnvFilter;

/// Mount the user views and click "Change name" a few times,
/// printing the screen after each event.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
	#[arg(long, default_value = "Ben")]
	first_name: String,

	#[arg(long, default_value = "Parnell")]
	last_name: String,

	#[arg(long, default_value = "ben.parnell@clock.co.uk")]
	email: String,

	/// Number of button clicks to simulate.
	#[arg(long, default_value_t = 1)]
	clicks: usize,

	/// `RUST_LOG` takes precedence over `-v`/`-q`.
	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

impl Opts {
	fn record(&self) -> UserRecord {
		UserRecord::new(&self.first_name, &self.last_name, &self.email)
	}
}

fn main() -> anyhow::Result<()> {
	let opts = Opts::parse();

	configure_tracing(&opts.verbose)?;

	let mut host = Host::mount(opts.record());
	println!("{}\n", host.screen());

	for _ in 0..opts.clicks {
		host.dispatch(Event::ChangeName);
		println!("{}\n", host.screen());
	}

	Ok(())
}

fn configure_tracing(verbose: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
	let filter = EnvFilter::builder()
		.with_default_directive(verbose.tracing_level_filter().into())
		.from_env()?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|error| anyhow!(error))
}
