//! User-facing reporting for pipeline outcomes.

use osift_core::pipeline::PipelineOutcome;
use osift_core::search::{result_file_name, KeywordOutcome};
use osift_core::unpack::UnpackOutcome;
use std::path::Path;

/// Prints a pipeline outcome. Returns true when the pipeline ran to
/// completion (search executed), false when it halted earlier. Neither case
/// changes the process exit code.
pub fn print_outcome(target_dir: &Path, outcome: &PipelineOutcome) -> bool {
    match outcome {
        PipelineOutcome::Completed(rep) => {
            match rep.unpacked {
                Some(UnpackOutcome::Extracted { entries }) => {
                    println!("Extraction successful! ({entries} entries)");
                }
                Some(UnpackOutcome::NotArchive) => {
                    println!("The file is not a ZIP archive. Skipping extraction.");
                }
                None => {}
            }
            for (keyword, result) in &rep.results {
                match result {
                    KeywordOutcome::Found { matches } => println!(
                        "Keyword '{}' found ({} lines)! Results saved in {}",
                        keyword,
                        matches,
                        target_dir.join(result_file_name(keyword)).display()
                    ),
                    KeywordOutcome::NotFound => {
                        println!("Keyword '{keyword}' not found in the directory.")
                    }
                }
            }
            true
        }
        PipelineOutcome::UnpackFailed { staged, error } => {
            println!("Extraction failed for {}: {}", staged.display(), error);
            false
        }
        PipelineOutcome::SearchFailed(e) => {
            println!("Search failed: {e}");
            false
        }
    }
}
