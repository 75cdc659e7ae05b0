use std::path::PathBuf;

use anvil_config::Config;
use anvil_node::AnvilInstance;
use anyhow::Context as _;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber, util::SubscriberInitExt as _};

#[derive(Parser)]
#[clap(name = "anvil-harness", version, author)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch a node and keep it running until interrupted
    Start(NodeArgs),
    /// Print the command line a node would be launched with
    Args(NodeArgs),
}

#[derive(ClapArgs)]
struct NodeArgs {
    /// TOML file to load the node configuration from
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Path of the node binary
    #[clap(long)]
    program: Option<PathBuf>,
    /// Port the node listens on
    #[clap(long, short)]
    port: Option<u16>,
    /// Remote endpoint to fork from
    #[clap(long, short)]
    fork_url: Option<String>,
    /// Block to fork from. Negative values count back from the latest block.
    #[clap(long, allow_hyphen_values = true)]
    fork_block_number: Option<i64>,
    /// Forward the node's output to this process
    #[clap(long)]
    show_logs: bool,
}

impl NodeArgs {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = if let Some(path) = &self.config {
            Config::load(path).with_context(|| format!("Failed to load {}", path.display()))?
        } else {
            Config::default()
        };

        if let Some(program) = self.program {
            config = config.with_program(program);
        }
        if let Some(port) = self.port {
            config = config.port(port);
        }
        if let Some(fork_url) = self.fork_url {
            config = config.fork_url(fork_url);
        }
        if let Some(fork_block_number) = self.fork_block_number {
            config = config.fork_block_number(fork_block_number);
        }
        if self.show_logs {
            config = config.show_logs(true);
        }

        Ok(config)
    }
}

async fn start(config: Config) -> anyhow::Result<()> {
    let mut instance = AnvilInstance::spawn(config)
        .await
        .context("Failed to start node")?;

    run_until(&mut instance, tokio::signal::ctrl_c()).await
}

/// Serves until `shutdown` resolves, then stops the node. The node is stopped
/// on every path, including when serving fails.
async fn run_until<ShutdownT>(instance: &mut AnvilInstance, shutdown: ShutdownT) -> anyhow::Result<()>
where
    ShutdownT: Future<Output = std::io::Result<()>>,
{
    let served = serve(instance, shutdown).await;

    match instance.stop().await {
        Ok(()) => {
            instance.wait().await?;
            served
        }
        Err(stop_error) => match served {
            Err(error) => {
                log::warn!("Failed to stop node: {stop_error}");
                Err(error)
            }
            Ok(()) => Err(anyhow::Error::new(stop_error).context("Failed to stop node")),
        },
    }
}

async fn serve<ShutdownT>(instance: &AnvilInstance, shutdown: ShutdownT) -> anyhow::Result<()>
where
    ShutdownT: Future<Output = std::io::Result<()>>,
{
    let block_number = instance
        .block_number()
        .await
        .context("Failed to query block number")?;
    println!("HTTP endpoint:      {}", instance.http_url());
    println!("WebSocket endpoint: {}", instance.ws_url());
    println!("Block number:       {block_number}");

    shutdown.await.context("Failed to wait for Ctrl-C")?;
    log::info!("Interrupted, stopping node");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::parse();
    match args.command {
        Command::Start(node_args) => start(node_args.into_config()?).await,
        Command::Args(node_args) => {
            let config = node_args.into_config()?;
            println!("{} {}", config.program().display(), config.args().join(" "));
            Ok(())
        }
    }
}
