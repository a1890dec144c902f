//! Interactive four-option menu.
//!
//! A bounded loop rather than recursive re-invocation: invalid input
//! re-presents the menu, a recognized option runs once and the process
//! exits. Option 2 returns to the menu when extraction fails. The config is
//! loaded only for options that use it, so exiting does nothing but print.

use super::{commands, load_config, prompt};
use anyhow::Result;

pub fn run() -> Result<()> {
    loop {
        println!("Choose an option:");
        println!("1) Download a file and process it");
        println!("2) Skip downloading and process an existing file");
        println!("3) Skip unzipping and search a specific directory");
        println!("4) Exit");

        let choice = prompt::prompt("Enter your choice: ")?;
        match choice.as_str() {
            "1" => return commands::run_fetch(&load_config()?, None, None, None, None),
            "2" => {
                if commands::run_unpack(&load_config()?, None, None, None)? {
                    return Ok(());
                }
                // Extraction failed; offer the menu again.
            }
            "3" => return commands::run_search(None, None),
            "4" => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
