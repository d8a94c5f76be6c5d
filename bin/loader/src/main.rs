//! Loader Binary
//!
//! Loads one CSV file into one table and reports how long the insert took.
//!
//! Usage: loader <host> <dbname> <user> <password> <file> <table> <insert_type> [<batch_size>]

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = bki_loader::Args::from_args();
    bki_core::log()?;
    bki_loader::load(args).await?;
    Ok(())
}
