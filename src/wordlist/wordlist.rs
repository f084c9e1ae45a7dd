use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::error::DictError;
use crate::wordlist::trie::Trie;

/// How dictionary rows map to words. The default format treats every
/// whitespace-separated token as one word counted once; a delimited format
/// picks the word, and optionally a count, out of columns.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default, setter(strip_option))]
    freq_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'l>(&self, line: &'l str) -> Option<Vec<(&'l str, usize)>> {
        match self.delimiter {
            None => Some(line.split_whitespace().map(|word| (word, 1)).collect()),
            Some(delimiter) => {
                let columns = line.split(delimiter).collect::<Vec<_>>();
                let word = *columns.get(self.word_column.unwrap_or(0))?;
                let freq = match self.freq_column {
                    Some(idx) => columns.get(idx)?.trim().parse().ok()?,
                    None => 1,
                };
                Some(vec![(word, freq)])
            }
        }
    }
}

/// The word-source collaborator: streams a dictionary into a trie, then
/// answers queries against it.
pub struct Wordlist<'a> {
    trie: &'a Trie<'a>,
    words_read: usize,
}

impl<'a> Wordlist<'a> {
    pub fn from_file(
        trie: &'a Trie<'a>,
        filename: &Path,
        format: FileFormat,
    ) -> Result<Wordlist<'a>, DictError> {
        info!("reading words from {:?}", filename);
        let file = File::open(filename)?;
        Self::from_reader(trie, BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(
        trie: &'a Trie<'a>,
        reader: R,
        format: FileFormat,
    ) -> Result<Wordlist<'a>, DictError> {
        let start = Instant::now();
        let mut words_read = 0;
        let mut failures = 0;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match format.parse_line(&line) {
                None => {
                    warn!("line {}: unparsable row {:?}", lineno + 1, line);
                    failures += 1;
                }
                Some(entries) => {
                    for (raw, freq) in entries {
                        let word = normalize(raw);
                        if word.is_empty() {
                            warn!("line {}: no usable word in {:?}", lineno + 1, raw);
                            failures += 1;
                            continue;
                        }
                        trie.insert_with_count(&word, freq)?;
                        words_read += 1;
                    }
                }
            }
        }

        info!(
            "read {} words in {:.3}s ({} failures)",
            words_read,
            start.elapsed().as_secs_f64(),
            failures
        );
        Ok(Wordlist { trie, words_read })
    }

    /// Words read from the source, repeats included.
    pub fn len(&self) -> usize {
        self.words_read
    }

    pub fn is_empty(&self) -> bool {
        self.words_read == 0
    }

    delegate! {
        to self.trie {
            pub fn occurrences(&self, word: &str) -> Result<usize, DictError>;
            pub fn contains(&self, word: &str) -> Result<bool, DictError>;
            pub fn words(&self) -> Vec<(String, usize)>;
            pub fn node_count(&self) -> usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::wordlist::trie::Trie;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn loads_whitespace_delimited_words() {
        let trie = Trie::new();
        let input = Cursor::new("ucf\nnote note\ncorg\n");
        let wordlist = Wordlist::from_reader(&trie, input, FileFormat::builder().build()).unwrap();

        assert_eq!(wordlist.len(), 4);
        assert_eq!(wordlist.occurrences("note").unwrap(), 2);
        assert_eq!(wordlist.occurrences("ucf").unwrap(), 1);
        assert_eq!(wordlist.occurrences("notaword").unwrap(), 0);
    }

    #[test]
    fn normalizes_before_inserting() {
        let trie = Trie::new();
        let input = Cursor::new("Note\nNOTE\nno-te\n");
        let wordlist = Wordlist::from_reader(&trie, input, FileFormat::builder().build()).unwrap();

        assert_eq!(wordlist.len(), 3);
        assert_eq!(wordlist.occurrences("note").unwrap(), 3);
    }

    #[test]
    fn reads_frequency_columns() {
        let trie = Trie::new();
        let input = Cursor::new("note,2\ncorg,1\nucf,7\n");
        let format = FileFormat::builder()
            .delimiter(',')
            .word_column(0)
            .freq_column(1)
            .build();
        let wordlist = Wordlist::from_reader(&trie, input, format).unwrap();

        assert_eq!(wordlist.occurrences("note").unwrap(), 2);
        assert_eq!(wordlist.occurrences("ucf").unwrap(), 7);
    }

    #[test]
    fn skips_and_counts_bad_rows() {
        let trie = Trie::new();
        let input = Cursor::new("note,2\nmissing\n###,1\ncorg,not-a-number\n");
        let format = FileFormat::builder().delimiter(',').freq_column(1).build();
        let wordlist = Wordlist::from_reader(&trie, input, format).unwrap();

        assert_eq!(wordlist.len(), 1);
        assert_eq!(wordlist.occurrences("note").unwrap(), 2);
        assert_eq!(wordlist.occurrences("corg").unwrap(), 0);
    }
}
