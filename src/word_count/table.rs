use crate::splay_tree::SplayTree;
use crate::word_count::record::WordRecord;
use std::cmp;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::result;

// one bucket per letter of the alphabet, no case
const ALPHABET_SIZE: usize = 26;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Strips every non-alphabetic character from a raw token.
///
/// # Examples
///
/// ```
/// use hashed_splays::word_count::normalize;
///
/// assert_eq!(normalize("dog."), "dog");
/// assert_eq!(normalize("1234"), "");
/// ```
pub fn normalize(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// A fixed table of splay trees that indexes words by their first letter.
///
/// Each incoming word is normalized, routed to the tree owned by its first letter, and either
/// inserted with a frequency of one or merged into the existing record by incrementing its
/// frequency. The trees are fully independent; the table performs no tree-internal logic itself.
///
/// # Examples
///
/// ```
/// use hashed_splays::word_count::HashedSplays;
///
/// let mut table = HashedSplays::with_alphabet();
/// table.process_text("the quick brown fox and the lazy dog");
///
/// assert_eq!(table.len(), 7);
///
/// let the = table.find_all("the");
/// assert_eq!(the.len(), 1);
/// assert_eq!(the[0].frequency(), 2);
/// ```
pub struct HashedSplays {
    table: Vec<SplayTree<WordRecord>>,
}

impl HashedSplays {
    /// Constructs a table with `buckets` trees. A request for zero buckets is clamped to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashed_splays::word_count::HashedSplays;
    ///
    /// let table = HashedSplays::new(4);
    /// assert_eq!(table.buckets(), 4);
    /// ```
    pub fn new(buckets: usize) -> Self {
        let table = (0..cmp::max(1, buckets)).map(|_| SplayTree::new()).collect();
        HashedSplays { table }
    }

    /// Constructs the conventional table with one tree per letter of the alphabet.
    pub fn with_alphabet() -> Self {
        HashedSplays::new(ALPHABET_SIZE)
    }

    // The caller guarantees an alphabetic letter; the modulo keeps smaller tables in bounds.
    fn bucket(&self, letter: char) -> usize {
        let offset = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
        offset % self.table.len()
    }

    /// Feeds a single token into the table. The token is normalized first; tokens with no
    /// alphabetic characters are discarded. A word already present in its tree has its frequency
    /// incremented instead of being inserted again.
    pub fn insert_word(&mut self, token: &str) {
        let word = normalize(token);
        let first = match word.chars().next() {
            Some(first) => first,
            None => return,
        };
        let bucket = self.bucket(first);
        self.table[bucket].insert_or_update(WordRecord::new(word), |existing, _| {
            existing.increment()
        });
    }

    /// Feeds every whitespace-separated token of `text` into the table.
    pub fn process_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            self.insert_word(token);
        }
    }

    /// Feeds every line of `reader` into the table.
    pub fn process_reader<R>(&mut self, reader: R) -> Result<()>
    where
        R: BufRead,
    {
        for line in reader.lines() {
            self.process_text(&line?);
        }
        Ok(())
    }

    /// Feeds the contents of the file at `path` into the table.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hashed_splays::word_count::HashedSplays;
    ///
    /// let mut table = HashedSplays::with_alphabet();
    /// table.process_file("corpus.txt").unwrap();
    /// ```
    pub fn process_file<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.process_reader(BufReader::new(file))
    }

    /// Returns every record whose word contains `part` (ignoring case), in ascending word order.
    /// Only the tree owned by `part`'s first letter is scanned; `part` is normalized first, and
    /// a query with no alphabetic characters matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashed_splays::word_count::HashedSplays;
    ///
    /// let mut table = HashedSplays::with_alphabet();
    /// table.process_text("apple banana grape");
    ///
    /// let matches = table.find_all("a");
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].word(), "apple");
    /// ```
    pub fn find_all(&self, part: &str) -> Vec<&WordRecord> {
        let query = WordRecord::new(normalize(part));
        let first = match query.word().chars().next() {
            Some(first) => first,
            None => return Vec::new(),
        };
        self.table[self.bucket(first)]
            .find_all(query, |query, candidate| query.related_to(candidate))
            .collect()
    }

    /// Returns the tree at `index`, or `None` if `index` is out of bounds.
    pub fn tree(&self, index: usize) -> Option<&SplayTree<WordRecord>> {
        self.table.get(index)
    }

    /// Returns the tree owned by `letter`, or `None` if `letter` is not alphabetic.
    pub fn tree_for(&self, letter: char) -> Option<&SplayTree<WordRecord>> {
        if letter.is_ascii_alphabetic() {
            self.table.get(self.bucket(letter))
        } else {
            None
        }
    }

    /// Returns a diagnostic report for every bucket in table order.
    pub fn reports(&self) -> Vec<BucketReport> {
        self.table
            .iter()
            .enumerate()
            .map(|(bucket, tree)| BucketReport {
                bucket,
                root: tree.root().map(|record| record.word().to_owned()),
                len: tree.len(),
                splay_count: tree.splay_count(),
            })
            .collect()
    }

    /// Returns the number of buckets in the table.
    pub fn buckets(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of distinct words across every bucket.
    pub fn len(&self) -> usize {
        self.table.iter().map(|tree| tree.len()).sum()
    }

    /// Returns `true` if no bucket holds any words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HashedSplays {
    fn default() -> Self {
        Self::with_alphabet()
    }
}

/// Per-bucket diagnostics: the word at the tree's root, the number of distinct words, and the
/// cumulative splay count.
#[derive(Clone, Debug)]
pub struct BucketReport {
    pub bucket: usize,
    pub root: Option<String>,
    pub len: usize,
    pub splay_count: usize,
}

impl fmt::Display for BucketReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root {
            Some(ref root) => write!(
                f,
                "bucket {}: root {}, {} words, {} splays",
                self.bucket, root, self.len, self.splay_count,
            ),
            None => write!(f, "bucket {}: empty", self.bucket),
        }
    }
}
