//! Deploy the oracle chat contract
//!
//! Sends the contract's creation bytecode with the oracle address as its
//! constructor argument and prints the deployed address.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{hex, Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolValue;
use alloy::transports::http::reqwest::Url;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy the oracle chat contract", long_about = None)]
struct Cli {
    /// Oracle the chat contract sends prompts to
    #[arg(long, default_value = "0x68EC9556830AD097D661Df2557FBCeC166a0A075")]
    oracle: Address,

    /// File holding the contract's hex-encoded creation bytecode
    #[arg(long)]
    bytecode: PathBuf,

    #[arg(long, env = "RPC_URL")]
    rpc_url: Url,

    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: PrivateKeySigner,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deploy=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut code = hex::decode(std::fs::read_to_string(&cli.bytecode)?.trim())?;
    code.extend_from_slice(&cli.oracle.abi_encode());

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(cli.private_key))
        .connect_http(cli.rpc_url);

    tracing::info!(oracle = %cli.oracle, bytes = code.len(), "Deploying chat contract");
    let tx = TransactionRequest::default().with_deploy_code(Bytes::from(code));
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;

    let address = receipt
        .contract_address
        .ok_or("deployment receipt has no contract address")?;
    tracing::info!(%address, tx_hash = %receipt.transaction_hash, "Chat contract deployed");
    println!("Chat contract deployed to {address}");

    Ok(())
}
