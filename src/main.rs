//! maintainer-map command-line entry point

use anyhow::Result;

fn main() -> Result<()> {
    maintainer_map::cli::run()
}
