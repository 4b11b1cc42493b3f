//! List command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{parse_manifest_file, ManifestArgs};

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

pub fn run(args: ListArgs) -> Result<()> {
    let config = args.manifest.load_config(None)?;
    let records =
        parse_manifest_file(&args.manifest.manifest_file(), &config, args.manifest.policy())?;

    for record in &records {
        println!("{}", record.subsystem);
        println!("  Maintainer: {}", record.engineer_list());
        println!("  Files: {}", record.file_list());
    }
    println!("Subsystems: {}", records.len());

    Ok(())
}
