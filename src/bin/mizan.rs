// ─────────────────────────────────────────────────────────────────────────────
//  Mizan: Wallet Activity Scale
//  Part of the Al-Hafiz Project, the Guardian Layer of BismillahDAO.
//
//  Mizan (ميزان): "The Scale", weighs a wallet's recent transfers, maps who it
//  deals with, and flags activity that deserves a closer look.
//
//  Designed to inform, not to accuse: flags are findings, never verdicts.
//
//  In the name of Allah, the Most Gracious, the Most Merciful.
// ─────────────────────────────────────────────────────────────────────────────

use clap::Parser;
use mizan::Mizan;
use mizan::cli::Cli;
use mizan::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    Mizan::run(cli).await?;
    Ok(())
}
