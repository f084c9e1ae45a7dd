use std::path::PathBuf;
use std::time::Instant;

use structopt::StructOpt;
use tracing::info;

use dictindex::wordlist::trie::Trie;
use dictindex::wordlist::wordlist::{FileFormat, Wordlist};

/// Index a dictionary file and report exact-match occurrence counts.
#[derive(StructOpt)]
struct Cli {
    /// The path to the dictionary file to read
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Words to look up; with none given, the whole index is listed
    words: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Cli::from_args();

    let trie = Trie::new();
    let start = Instant::now();
    let wordlist = Wordlist::from_file(&trie, &args.path, FileFormat::builder().build())?;
    info!(
        "indexed {} words across {} nodes in {:.3}s",
        wordlist.len(),
        wordlist.node_count(),
        start.elapsed().as_secs_f64()
    );

    if args.words.is_empty() {
        for (word, count) in wordlist.words() {
            println!("\t{} : {}", word, count);
        }
    } else {
        for word in &args.words {
            println!("\t{} : {}", word, wordlist.occurrences(word)?);
        }
    }
    Ok(())
}
