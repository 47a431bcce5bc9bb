//! Tags command handler.

use anyhow::Result;
use std::path::Path;

use super::open_notebook;
use crate::cli::TagsArgs;
use crate::cli::output::{OutputFormat, TagListing, print_json};
use crate::query;

pub fn handle_tags(args: &TagsArgs, data_dir: &Path) -> Result<()> {
    let notebook = open_notebook(data_dir);
    let counts = query::tag_counts(notebook.store().notes());

    match args.format {
        OutputFormat::Human => {
            if counts.is_empty() {
                println!("No tags found.");
            } else {
                for (tag, count) in &counts {
                    if args.counts {
                        println!("{} ({})", tag, count);
                    } else {
                        println!("{}", tag);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = counts
                .iter()
                .map(|(tag, count)| TagListing {
                    name: tag.to_string(),
                    count: args.counts.then_some(*count),
                })
                .collect();
            print_json(listings)?;
        }
    }

    Ok(())
}
