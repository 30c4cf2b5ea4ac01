use alive_registrar::{Handle, PLACEHOLDER};
use clap::Parser;
use eyre::Result;

/// CLI arguments for `alive preview`.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// The raw name to sanitize.
    name: String,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        let handle = Handle::sanitize(&self.name);
        match handle.qualified() {
            Some(name) => println!("{name}"),
            None => println!("{PLACEHOLDER}"),
        }
        Ok(())
    }
}
